use crate::error::GraphError;
use crate::graph::ConnectionGraph;
use crate::node::Node;

/// A decoded workflow row.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowRecord {
  pub id: String,
  pub name: String,
  pub nodes: Vec<Node>,
  pub connections: ConnectionGraph,
}

impl WorkflowRecord {
  /// Decode a stored row from its raw JSON documents.
  ///
  /// Storage keeps `nodes` and `connections` as text, so decoding happens
  /// per workflow and a malformed row surfaces as a typed error for that
  /// row alone.
  pub fn from_parts(
    id: &str,
    name: &str,
    nodes_json: &str,
    connections_json: &str,
  ) -> Result<Self, GraphError> {
    let nodes: Vec<Node> = serde_json::from_str(nodes_json).map_err(|source| {
      GraphError::MalformedDocument {
        document: "nodes",
        source,
      }
    })?;
    let connections: ConnectionGraph =
      serde_json::from_str(connections_json).map_err(|source| GraphError::MalformedDocument {
        document: "connections",
        source,
      })?;

    Ok(Self {
      id: id.to_string(),
      name: name.to_string(),
      nodes,
      connections,
    })
  }
}
