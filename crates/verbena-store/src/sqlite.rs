use sqlx::SqlitePool;

use crate::{Error, WorkflowRow, WorkflowStore};

/// SQLite-based workflow store.
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Create a store over an existing connection pool.
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Connect to a sqlite database by URL (e.g. `sqlite:workflows.db` or
  /// `sqlite::memory:`).
  pub async fn connect(url: &str) -> Result<Self, Error> {
    let pool = SqlitePool::connect(url).await?;
    Ok(Self { pool })
  }

  /// Create the workflow table if it does not exist.
  pub async fn migrate(&self) -> Result<(), Error> {
    sqlx::query(
      r#"
            CREATE TABLE IF NOT EXISTS workflow_entity (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                nodes TEXT NOT NULL,
                connections TEXT NOT NULL
            )
            "#,
    )
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  /// Insert a workflow row.
  pub async fn insert_workflow(&self, row: &WorkflowRow) -> Result<(), Error> {
    sqlx::query(
      r#"
            INSERT INTO workflow_entity (id, name, nodes, connections)
            VALUES (?, ?, ?, ?)
            "#,
    )
    .bind(&row.id)
    .bind(&row.name)
    .bind(&row.nodes)
    .bind(&row.connections)
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}

#[async_trait::async_trait]
impl WorkflowStore for SqliteStore {
  async fn list_workflows(&self) -> Result<Vec<WorkflowRow>, Error> {
    let rows = sqlx::query_as(
      r#"
            SELECT id, name, nodes, connections
            FROM workflow_entity
            ORDER BY id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows)
  }

  async fn get_workflow(&self, id: &str) -> Result<WorkflowRow, Error> {
    sqlx::query_as(
      r#"
            SELECT id, name, nodes, connections
            FROM workflow_entity
            WHERE id = ?
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| Error::NotFound(id.to_string()))
  }

  async fn update_connections(&self, id: &str, connections: &str) -> Result<(), Error> {
    let result = sqlx::query(
      r#"
            UPDATE workflow_entity
            SET connections = ?
            WHERE id = ?
            "#,
    )
    .bind(connections)
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(id.to_string()));
    }

    Ok(())
  }
}
