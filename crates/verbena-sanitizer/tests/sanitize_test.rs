//! End-to-end tests for the sanitize pass over realistic workflow shapes.

use std::error::Error;
use std::sync::Mutex;

use verbena_node_registry::{InMemoryNodeRegistry, NodeTypeDescriptor};
use verbena_sanitizer::{Reporter, classify, sanitize};
use verbena_workflow::{ConnectionGraph, Node};

struct CollectingReporter {
  entries: Mutex<Vec<(String, String)>>,
}

impl CollectingReporter {
  fn new() -> Self {
    Self {
      entries: Mutex::new(Vec::new()),
    }
  }

  fn entries(&self) -> Vec<(String, String)> {
    self.entries.lock().expect("poisoned").clone()
  }
}

impl Reporter for CollectingReporter {
  fn report(&self, context: &str, error: &dyn Error) {
    self
      .entries
      .lock()
      .expect("poisoned")
      .push((context.to_string(), error.to_string()));
  }
}

fn registry() -> InMemoryNodeRegistry {
  let mut registry = InMemoryNodeRegistry::new();
  for (name, inputs) in [
    ("verbena.trigger", vec![]),
    ("verbena.http", vec!["main".to_string()]),
    ("verbena.branch", vec!["main".to_string()]),
    ("verbena.set", vec!["main".to_string()]),
  ] {
    registry.register(NodeTypeDescriptor {
      name: name.to_string(),
      version: 1.0,
      inputs,
      outputs: vec!["main".to_string()],
    });
  }
  registry
}

fn nodes() -> Vec<Node> {
  vec![
    Node::new("Trigger", "verbena.trigger", 1.0),
    Node::new("Fetch", "verbena.http", 1.0),
    Node::new("Branch", "verbena.branch", 1.0),
    Node::new("Set", "verbena.set", 1.0),
  ]
}

fn graph(raw: &str) -> ConnectionGraph {
  serde_json::from_str(raw).expect("graph parse failed")
}

#[test]
fn drops_edges_into_zero_input_nodes() {
  // Branch fans out to the trigger (invalid) and to Set (valid) from the
  // same slot.
  let connections = graph(
    r#"{"Trigger":{"main":[[{"node":"Fetch","type":"main","index":0}]]},"Branch":{"main":[[{"node":"Trigger","type":"main","index":0},{"node":"Set","type":"main","index":0}]]}}"#,
  );
  let reporter = CollectingReporter::new();

  let result = sanitize(&nodes(), connections, &registry(), &reporter).expect("sanitize failed");

  let expected = graph(
    r#"{"Trigger":{"main":[[{"node":"Fetch","type":"main","index":0}]]},"Branch":{"main":[[{"node":"Set","type":"main","index":0}]]}}"#,
  );
  assert_eq!(result, expected);
  assert!(reporter.entries().is_empty());
}

#[test]
fn sanitize_is_idempotent() {
  let connections = graph(
    r#"{"Trigger":{"main":[[{"node":"Fetch","type":"main","index":0}]]},"Fetch":{"main":[[{"node":"Trigger","type":"main","index":0}],[{"node":"Branch","type":"main","index":0}]]}}"#,
  );
  let registry = registry();
  let reporter = CollectingReporter::new();

  let once =
    sanitize(&nodes(), connections, &registry, &reporter).expect("first sanitize failed");
  let twice =
    sanitize(&nodes(), once.clone(), &registry, &reporter).expect("second sanitize failed");

  assert_eq!(once, twice);
}

#[test]
fn no_surviving_edge_targets_an_unreceivable_node() {
  let connections = graph(
    r#"{"Branch":{"main":[[{"node":"Trigger","type":"main","index":0},{"node":"Fetch","type":"main","index":0}],[{"node":"Set","type":"main","index":0}]],"error":[[{"node":"Trigger","type":"main","index":0}]]}}"#,
  );
  let registry = registry();
  let reporter = CollectingReporter::new();
  let unreceivable = classify(&nodes(), &registry, &reporter);

  let result = sanitize(&nodes(), connections, &registry, &reporter).expect("sanitize failed");

  for edge in result.edges() {
    let target = edge.target().expect("missing target");
    assert!(!unreceivable.contains(target), "dangling edge into {target}");
  }
}

#[test]
fn never_adds_edges() {
  let connections = graph(
    r#"{"Trigger":{"main":[[{"node":"Fetch","type":"main","index":0},{"node":"Set","type":"main","index":0}]]}}"#,
  );
  let before: Vec<String> = connections
    .edges()
    .map(|edge| serde_json::to_string(edge).expect("serialize failed"))
    .collect();
  let reporter = CollectingReporter::new();

  let result = sanitize(&nodes(), connections.clone(), &registry(), &reporter)
    .expect("sanitize failed");

  for edge in result.edges() {
    let encoded = serde_json::to_string(edge).expect("serialize failed");
    assert!(before.contains(&encoded), "edge {encoded} was not in the input");
  }
}

#[test]
fn resolver_failure_is_isolated_and_reported_once() {
  let mut nodes = nodes();
  nodes.push(Node::new("Legacy", "verbena.retired", 1.0));
  // Legacy both receives and sends; only the edge into it may go away.
  let connections = graph(
    r#"{"Trigger":{"main":[[{"node":"Legacy","type":"main","index":0},{"node":"Fetch","type":"main","index":0}]]},"Legacy":{"main":[[{"node":"Set","type":"main","index":0}]]}}"#,
  );
  let reporter = CollectingReporter::new();

  let result = sanitize(&nodes, connections, &registry(), &reporter).expect("sanitize failed");

  let expected = graph(
    r#"{"Trigger":{"main":[[{"node":"Fetch","type":"main","index":0}]]},"Legacy":{"main":[[{"node":"Set","type":"main","index":0}]]}}"#,
  );
  assert_eq!(result, expected);

  let entries = reporter.entries();
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].0, "Legacy");
  assert!(entries[0].1.contains("verbena.retired"));
}

#[test]
fn untouched_subgraph_survives_byte_for_byte() {
  // "Set" carries passthrough fields in a deliberate non-alphabetical order.
  let raw = r#"{"Set":{"main":[[{"custom":{"a":1},"node":"Fetch","index":0,"type":"main"}]]},"Branch":{"main":[[{"node":"Trigger","type":"main","index":0}]]}}"#;
  let reporter = CollectingReporter::new();

  let result =
    sanitize(&nodes(), graph(raw), &registry(), &reporter).expect("sanitize failed");

  let expected = r#"{"Set":{"main":[[{"custom":{"a":1},"node":"Fetch","index":0,"type":"main"}]]}}"#;
  assert_eq!(
    serde_json::to_string(&result).expect("serialize failed"),
    expected
  );
}
