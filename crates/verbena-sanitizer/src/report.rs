use std::error::Error;

use tracing::warn;

/// Fire-and-forget sink for non-fatal diagnostics raised during a sanitize
/// pass. Implementations must not panic or block.
pub trait Reporter {
  /// Record one diagnostic. `context` names the affected item (typically a
  /// node name).
  fn report(&self, context: &str, error: &dyn Error);
}

/// Reporter that forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
  fn report(&self, context: &str, error: &dyn Error) {
    warn!(context = %context, error = %error, "sanitize_diagnostic");
  }
}
