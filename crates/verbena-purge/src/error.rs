use thiserror::Error;

use verbena_workflow::GraphError;

#[derive(Debug, Error)]
pub enum PurgeError {
  /// Storage failure; always aborts the run.
  #[error("storage error: {0}")]
  Store(#[from] verbena_store::Error),

  /// A workflow's stored documents could not be processed and the run is
  /// configured to abort on malformed rows.
  #[error("workflow {workflow_id}: {source}")]
  Malformed {
    workflow_id: String,
    #[source]
    source: GraphError,
  },
}
