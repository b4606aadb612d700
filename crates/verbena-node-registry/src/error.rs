use std::path::PathBuf;

use thiserror::Error;

/// Per-node resolution failures. Recoverable: callers typically log these
/// and fall back to a conservative default rather than abort.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// No descriptor published under this type name.
  #[error("unknown node type: {name}")]
  UnknownType { name: String },

  /// The type name exists but no published version is compatible with the
  /// requested one.
  #[error("no compatible version of node type {name} for requested version {version}")]
  NoCompatibleVersion { name: String, version: f64 },
}

/// Errors while loading descriptor manifests from the filesystem.
#[derive(Debug, Error)]
pub enum RegistryError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid descriptor manifest at {path}: {source}")]
  Manifest {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}
