use std::path::{Path, PathBuf};

use tokio::fs;

use crate::descriptor::NodeTypeDescriptor;
use crate::error::RegistryError;
use crate::registry::InMemoryNodeRegistry;

/// Filesystem-backed descriptor source.
///
/// Descriptors are stored as one JSON manifest per file:
/// ```text
/// {root}/
/// ├── verbena.http--1.0.json
/// ├── verbena.http--2.0.json
/// └── verbena.start--1.0.json
/// ```
/// File names are not interpreted; the manifest body carries name and
/// version. Non-`.json` entries are ignored.
pub struct FsNodeRegistry {
  root: PathBuf,
}

impl FsNodeRegistry {
  /// Create a registry source rooted at the given directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Read every descriptor manifest under the root into an in-memory
  /// registry. Resolution afterwards needs no I/O.
  pub async fn load(&self) -> Result<InMemoryNodeRegistry, RegistryError> {
    let mut registry = InMemoryNodeRegistry::new();

    let mut entries = fs::read_dir(&self.root).await?;
    while let Some(entry) = entries.next_entry().await? {
      let path = entry.path();
      if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        continue;
      }

      let content = fs::read_to_string(&path).await?;
      let descriptor: NodeTypeDescriptor =
        serde_json::from_str(&content).map_err(|source| RegistryError::Manifest {
          path: path.clone(),
          source,
        })?;
      registry.register(descriptor);
    }

    Ok(registry)
  }
}
