//! Verbena Purge
//!
//! Batch driver for the connection sanitize pass. Walks every stored
//! workflow, drops edges into nodes that cannot receive input, and writes
//! back the rows whose graph changed.
//!
//! The run is an explicit sequential loop: the returned [`PurgeSummary`] is
//! produced only after every row has been handled, so the caller knows the
//! batch is complete and exactly which workflows were skipped.

mod driver;
mod error;
mod summary;

pub use driver::{PurgeOptions, purge_invalid_connections};
pub use error::PurgeError;
pub use summary::{PurgeSummary, SkippedWorkflow};
