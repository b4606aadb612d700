//! Verbena Store
//!
//! Storage trait and sqlite implementation for workflow rows. Rows carry
//! `nodes` and `connections` as raw JSON text: decoding happens per workflow
//! in the caller, so one malformed row cannot fail a whole batch read.

mod sqlite;
mod types;

pub use sqlite::SqliteStore;
pub use types::WorkflowRow;

use async_trait::async_trait;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The requested workflow was not found.
  #[error("workflow not found: {0}")]
  NotFound(String),

  /// A database error occurred.
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
}

/// Storage for workflow rows.
#[async_trait]
pub trait WorkflowStore: Send + Sync {
  /// List every stored workflow row.
  async fn list_workflows(&self) -> Result<Vec<WorkflowRow>, Error>;

  /// Get one workflow row by id.
  async fn get_workflow(&self, id: &str) -> Result<WorkflowRow, Error>;

  /// Replace the stored connections document for a workflow.
  async fn update_connections(&self, id: &str, connections: &str) -> Result<(), Error>;
}
