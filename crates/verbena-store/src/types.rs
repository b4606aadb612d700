use sqlx::FromRow;

/// A workflow row as stored, documents still encoded as JSON text.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WorkflowRow {
  pub id: String,
  pub name: String,
  /// JSON array of node objects.
  pub nodes: String,
  /// JSON connection graph document.
  pub connections: String,
}
