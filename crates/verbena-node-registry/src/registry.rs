use std::collections::HashMap;

use crate::descriptor::NodeTypeDescriptor;
use crate::error::ResolveError;

/// Lookup of node type metadata by name and version.
///
/// Resolution is synchronous: implementations hold their descriptors in
/// memory and any I/O happens when the registry is built.
pub trait NodeTypeRegistry: Send + Sync {
  /// Resolve the descriptor for `name` at `version`.
  ///
  /// Version selection follows the published-version convention: the highest
  /// published version not exceeding the requested one wins, so a node saved
  /// at typeVersion 1.1 resolves against a registry that published 1.0.
  fn get_by_name_and_version(
    &self,
    name: &str,
    version: f64,
  ) -> Result<&NodeTypeDescriptor, ResolveError>;
}

/// Registry over an in-memory descriptor set.
#[derive(Debug, Default)]
pub struct InMemoryNodeRegistry {
  // Versions kept sorted ascending per type name.
  types: HashMap<String, Vec<NodeTypeDescriptor>>,
}

impl InMemoryNodeRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Publish a descriptor. Multiple versions of the same type name may be
  /// registered.
  pub fn register(&mut self, descriptor: NodeTypeDescriptor) {
    let versions = self.types.entry(descriptor.name.clone()).or_default();
    versions.push(descriptor);
    versions.sort_by(|a, b| a.version.total_cmp(&b.version));
  }

  /// Number of distinct type names registered.
  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}

impl NodeTypeRegistry for InMemoryNodeRegistry {
  fn get_by_name_and_version(
    &self,
    name: &str,
    version: f64,
  ) -> Result<&NodeTypeDescriptor, ResolveError> {
    let versions = self.types.get(name).ok_or_else(|| ResolveError::UnknownType {
      name: name.to_string(),
    })?;

    versions
      .iter()
      .rev()
      .find(|descriptor| descriptor.version <= version)
      .ok_or_else(|| ResolveError::NoCompatibleVersion {
        name: name.to_string(),
        version,
      })
  }
}
