use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GraphError;

/// A single directed link from an output-port position to a target node.
///
/// Stored as an opaque ordered JSON object: only the `node` field (target
/// node name) is interpreted here. `index` and any other fields round-trip
/// verbatim, in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Edge(Map<String, Value>);

impl Edge {
  /// Create an edge pointing at `node`'s input at `index`.
  pub fn to_node(node: impl Into<String>, index: u64) -> Self {
    let mut fields = Map::new();
    fields.insert("node".to_string(), Value::String(node.into()));
    fields.insert("type".to_string(), Value::String("main".to_string()));
    fields.insert("index".to_string(), Value::from(index));
    Self(fields)
  }

  /// The name of the node this edge targets.
  ///
  /// An edge without a string `node` field is malformed; the caller should
  /// fail the workflow rather than guess.
  pub fn target(&self) -> Result<&str, GraphError> {
    match self.0.get("node") {
      Some(Value::String(name)) => Ok(name),
      _ => Err(GraphError::EdgeWithoutTarget {
        edge: Value::Object(self.0.clone()).to_string(),
      }),
    }
  }

  /// The target node's input index, when present and integral.
  pub fn input_index(&self) -> Option<u64> {
    self.0.get("index").and_then(Value::as_u64)
  }

  /// All fields of the edge, in stored order.
  pub fn fields(&self) -> &Map<String, Value> {
    &self.0
  }
}

/// A positional bucket within an output port's connection list.
pub type Slot = Vec<Edge>;

/// Output-port name -> ordered slots. One slot per output position; a slot
/// fans out to zero or more targets.
pub type PortMap = IndexMap<String, Vec<Slot>>;

/// A workflow's node-to-node wiring: source node name -> output port ->
/// slots -> edges. Key order is preserved across (de)serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionGraph {
  sources: IndexMap<String, PortMap>,
}

impl ConnectionGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of source-node entries.
  pub fn len(&self) -> usize {
    self.sources.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sources.is_empty()
  }

  /// Get the port map for a source node.
  pub fn get(&self, source: &str) -> Option<&PortMap> {
    self.sources.get(source)
  }

  /// Iterate source entries in stored order.
  pub fn sources(&self) -> impl Iterator<Item = (&String, &PortMap)> {
    self.sources.iter()
  }

  /// Iterate every edge in the graph, in stored order.
  pub fn edges(&self) -> impl Iterator<Item = &Edge> {
    self
      .sources
      .values()
      .flat_map(|ports| ports.values())
      .flatten()
      .flatten()
  }

  pub fn into_sources(self) -> IndexMap<String, PortMap> {
    self.sources
  }
}

impl From<IndexMap<String, PortMap>> for ConnectionGraph {
  fn from(sources: IndexMap<String, PortMap>) -> Self {
    Self { sources }
  }
}
