//! Verbena Workflow
//!
//! This crate provides the data model for stored workflows:
//! - [`Node`]: a workflow node identified by name and typed by
//!   `(type, typeVersion)`
//! - [`ConnectionGraph`]: the node-to-node wiring, keyed by source node, then
//!   output port, then an ordered list of slots holding edges
//! - [`WorkflowRecord`]: a decoded workflow row (id, name, nodes, connections)
//!
//! Everything round-trips through serde without losing fields or reordering
//! keys: the graph maps are `IndexMap`s and edges are opaque ordered JSON
//! objects, so a read-modify-write cycle leaves untouched data byte-for-byte
//! equivalent.

mod error;
mod graph;
mod node;
mod workflow;

pub use error::GraphError;
pub use graph::{ConnectionGraph, Edge, PortMap, Slot};
pub use node::Node;
pub use workflow::WorkflowRecord;
