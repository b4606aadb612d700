use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow node as stored.
///
/// Only `name`, `type`, and `typeVersion` are interpreted; every other field
/// (parameters, position, credentials, ...) is carried through untouched in
/// `rest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  /// Unique within a workflow; connection edges reference this name.
  pub name: String,
  #[serde(rename = "type")]
  pub type_name: String,
  /// Node type versions are JSON numbers and may be fractional (e.g. 1.1).
  #[serde(rename = "typeVersion", default = "default_type_version")]
  pub type_version: f64,
  #[serde(flatten)]
  pub rest: Map<String, Value>,
}

fn default_type_version() -> f64 {
  1.0
}

impl Node {
  /// Create a node with no passthrough fields.
  pub fn new(name: impl Into<String>, type_name: impl Into<String>, type_version: f64) -> Self {
    Self {
      name: name.into(),
      type_name: type_name.into(),
      type_version,
      rest: Map::new(),
    }
  }
}
