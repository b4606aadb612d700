//! Verbena Sanitizer
//!
//! The connection sanitize pass. Given a workflow's node list and connection
//! graph, it:
//!
//! 1. classifies nodes by input capability, producing the set of node names
//!    that must not be a connection target ([`classify`])
//! 2. drops every edge into such a node and prunes the empty slots, ports,
//!    and source entries removal leaves behind
//!    ([`drop_unreceivable_edges`])
//!
//! [`sanitize`] composes the two. The pass is a pure data transformation:
//! it never creates edges, never reorders what survives, and leaves
//! untouched parts of the graph byte-for-byte equivalent, so re-running it
//! against the same registry is a no-op.

mod classify;
mod filter;
mod report;

pub use classify::classify;
pub use filter::drop_unreceivable_edges;
pub use report::{Reporter, TracingReporter};

use verbena_node_registry::NodeTypeRegistry;
use verbena_workflow::{ConnectionGraph, GraphError, Node};

/// Run the full sanitize pass over one workflow's graph.
///
/// Per-node resolution failures are reported through `reporter` and the node
/// is conservatively excluded as a target; they never abort the pass. A
/// malformed edge does abort this workflow's pass with a typed error, since
/// continuing could persist a corrupted graph.
pub fn sanitize(
  nodes: &[Node],
  connections: ConnectionGraph,
  registry: &dyn NodeTypeRegistry,
  reporter: &dyn Reporter,
) -> Result<ConnectionGraph, GraphError> {
  let unreceivable = classify(nodes, registry, reporter);
  drop_unreceivable_edges(connections, &unreceivable)
}
