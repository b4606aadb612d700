/// Outcome of one purge run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PurgeSummary {
  /// Rows read from storage.
  pub scanned: usize,
  /// Rows whose connection graph changed and was written back.
  pub updated: usize,
  /// Rows whose graph was already clean.
  pub unchanged: usize,
  /// Rows skipped as malformed (only when the run allows skipping).
  pub skipped: Vec<SkippedWorkflow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedWorkflow {
  pub workflow_id: String,
  pub reason: String,
}
