use std::collections::HashSet;

use indexmap::IndexMap;

use verbena_workflow::{ConnectionGraph, GraphError, PortMap};

/// Drop every edge whose target is in `unreceivable`, then prune the empty
/// structures removal leaves behind.
///
/// Filtering and pruning are one pass: emptiness is resolved bottom-up
/// (slot, then port, then source), and removals only flow upward, so no
/// fixed-point iteration is needed. The pass builds a fresh graph instead of
/// mutating in place; untouched sources, ports, and slots are moved through
/// unchanged, surviving edges keep their relative order and their fields.
///
/// Empty slots are removed outright, not replaced with placeholders, so the
/// remaining slots in a port shift down. Containers that were already empty
/// on input are pruned as well, which keeps the pass idempotent.
pub fn drop_unreceivable_edges(
  graph: ConnectionGraph,
  unreceivable: &HashSet<String>,
) -> Result<ConnectionGraph, GraphError> {
  let mut kept_sources: IndexMap<String, PortMap> = IndexMap::with_capacity(graph.len());

  for (source, ports) in graph.into_sources() {
    let mut kept_ports: PortMap = IndexMap::with_capacity(ports.len());

    for (port, slots) in ports {
      let mut kept_slots = Vec::with_capacity(slots.len());

      for slot in slots {
        let mut kept_edges = Vec::with_capacity(slot.len());
        for edge in slot {
          if !unreceivable.contains(edge.target()?) {
            kept_edges.push(edge);
          }
        }
        if !kept_edges.is_empty() {
          kept_slots.push(kept_edges);
        }
      }

      if !kept_slots.is_empty() {
        kept_ports.insert(port, kept_slots);
      }
    }

    if !kept_ports.is_empty() {
      kept_sources.insert(source, kept_ports);
    }
  }

  Ok(ConnectionGraph::from(kept_sources))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn graph(raw: &str) -> ConnectionGraph {
    serde_json::from_str(raw).expect("graph parse failed")
  }

  fn names(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn removes_only_edges_into_unreceivable_nodes() {
    let input = graph(r#"{"A":{"main":[[{"node":"B","type":"main","index":0},{"node":"C","type":"main","index":0}]]}}"#);

    let result = drop_unreceivable_edges(input, &names(&["B"])).expect("pass failed");

    let expected = graph(r#"{"A":{"main":[[{"node":"C","type":"main","index":0}]]}}"#);
    assert_eq!(result, expected);
  }

  #[test]
  fn prunes_port_and_source_when_last_edge_goes() {
    let input = graph(r#"{"A":{"main":[[{"node":"B","type":"main","index":0}]]}}"#);

    let result = drop_unreceivable_edges(input, &names(&["B"])).expect("pass failed");

    assert!(result.is_empty());
  }

  #[test]
  fn keeps_other_ports_of_a_pruned_port_source() {
    let input = graph(
      r#"{"A":{"main":[[{"node":"B","type":"main","index":0}]],"error":[[{"node":"C","type":"main","index":0}]]}}"#,
    );

    let result = drop_unreceivable_edges(input, &names(&["B"])).expect("pass failed");

    let ports = result.get("A").expect("source A missing");
    assert!(ports.get("main").is_none());
    assert_eq!(ports.get("error").expect("port error missing").len(), 1);
  }

  #[test]
  fn emptied_slots_shift_later_slots_down() {
    let input = graph(
      r#"{"A":{"main":[[{"node":"B","type":"main","index":0}],[{"node":"C","type":"main","index":1}]]}}"#,
    );

    let result = drop_unreceivable_edges(input, &names(&["B"])).expect("pass failed");

    let slots = &result.get("A").expect("source A missing")["main"];
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0][0].target().expect("missing target"), "C");
  }

  #[test]
  fn untouched_graph_comes_back_identical() {
    let raw = r#"{"A":{"main":[[{"custom":1,"node":"C","type":"main","index":0}]]},"C":{"main":[[{"node":"D","type":"main","index":0}]]}}"#;
    let input = graph(raw);

    let result = drop_unreceivable_edges(input, &names(&["X"])).expect("pass failed");

    assert_eq!(serde_json::to_string(&result).expect("serialize failed"), raw);
  }

  #[test]
  fn already_empty_containers_are_pruned() {
    let input = graph(r#"{"A":{"main":[[]],"error":[]},"B":{}}"#);

    let result = drop_unreceivable_edges(input, &HashSet::new()).expect("pass failed");

    assert!(result.is_empty());
  }

  #[test]
  fn malformed_edge_fails_the_pass() {
    let input = graph(r#"{"A":{"main":[[{"type":"main","index":0}]]}}"#);

    let result = drop_unreceivable_edges(input, &HashSet::new());
    assert!(matches!(result, Err(GraphError::EdgeWithoutTarget { .. })));
  }

  #[test]
  fn does_not_consume_the_unreceivable_set() {
    let input = graph(r#"{"A":{"main":[[{"node":"B","type":"main","index":0}]]}}"#);
    let unreceivable = names(&["B"]);

    drop_unreceivable_edges(input, &unreceivable).expect("pass failed");

    assert_eq!(unreceivable.len(), 1);
  }
}
