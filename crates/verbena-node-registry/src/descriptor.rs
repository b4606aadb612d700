use serde::{Deserialize, Serialize};

/// Published capability metadata for one version of a node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
  /// Fully qualified type name, e.g. `verbena.http`.
  pub name: String,
  #[serde(default = "default_version")]
  pub version: f64,
  /// Declared input ports. A type with no inputs cannot be the target of
  /// any connection.
  #[serde(default)]
  pub inputs: Vec<String>,
  #[serde(default)]
  pub outputs: Vec<String>,
}

fn default_version() -> f64 {
  1.0
}

impl NodeTypeDescriptor {
  pub fn accepts_input(&self) -> bool {
    !self.inputs.is_empty()
  }
}
