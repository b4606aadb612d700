use tracing::{error, info, warn};

use verbena_node_registry::NodeTypeRegistry;
use verbena_sanitizer::{Reporter, sanitize};
use verbena_store::WorkflowStore;
use verbena_workflow::{GraphError, WorkflowRecord};

use crate::error::PurgeError;
use crate::summary::{PurgeSummary, SkippedWorkflow};

/// Policy knobs for one purge run.
#[derive(Debug, Default, Clone)]
pub struct PurgeOptions {
  /// Skip workflows whose stored documents are malformed instead of
  /// aborting the run. Default: abort.
  pub skip_malformed: bool,
}

/// Sanitize the connection graph of every stored workflow.
///
/// Workflows are processed one at a time; per-node resolution failures go to
/// `reporter` and never stop the run. A row is written back only when its
/// sanitized graph differs from the stored one, so clean databases are
/// read-only runs.
pub async fn purge_invalid_connections(
  store: &dyn WorkflowStore,
  registry: &dyn NodeTypeRegistry,
  reporter: &dyn Reporter,
  options: &PurgeOptions,
) -> Result<PurgeSummary, PurgeError> {
  let rows = store.list_workflows().await?;
  info!(workflow_count = rows.len(), "purge_started");

  let mut summary = PurgeSummary::default();

  for row in rows {
    summary.scanned += 1;

    let record = match WorkflowRecord::from_parts(&row.id, &row.name, &row.nodes, &row.connections)
    {
      Ok(record) => record,
      Err(source) => {
        note_malformed(&mut summary, options, &row.id, source)?;
        continue;
      }
    };

    let before = record.connections.clone();
    let sanitized = match sanitize(&record.nodes, record.connections, registry, reporter) {
      Ok(sanitized) => sanitized,
      Err(source) => {
        note_malformed(&mut summary, options, &row.id, source)?;
        continue;
      }
    };

    if sanitized == before {
      summary.unchanged += 1;
      continue;
    }

    let connections =
      serde_json::to_string(&sanitized).map_err(|source| PurgeError::Malformed {
        workflow_id: row.id.clone(),
        source: GraphError::MalformedDocument {
          document: "connections",
          source,
        },
      })?;
    store.update_connections(&row.id, &connections).await?;
    info!(workflow_id = %row.id, "workflow_connections_updated");
    summary.updated += 1;
  }

  info!(
    scanned = summary.scanned,
    updated = summary.updated,
    unchanged = summary.unchanged,
    skipped = summary.skipped.len(),
    "purge_completed"
  );

  Ok(summary)
}

fn note_malformed(
  summary: &mut PurgeSummary,
  options: &PurgeOptions,
  workflow_id: &str,
  source: GraphError,
) -> Result<(), PurgeError> {
  if options.skip_malformed {
    warn!(workflow_id = %workflow_id, error = %source, "workflow_skipped");
    summary.skipped.push(SkippedWorkflow {
      workflow_id: workflow_id.to_string(),
      reason: source.to_string(),
    });
    Ok(())
  } else {
    error!(workflow_id = %workflow_id, error = %source, "purge_aborted");
    Err(PurgeError::Malformed {
      workflow_id: workflow_id.to_string(),
      source,
    })
  }
}
