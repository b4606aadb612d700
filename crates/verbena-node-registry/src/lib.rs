//! Verbena Node Registry
//!
//! Node type metadata resolution. A [`NodeTypeDescriptor`] declares what a
//! node type can do — for connection sanitization, what matters is whether
//! it declares any inputs. The [`NodeTypeRegistry`] trait answers
//! "descriptor for this type name at this version" synchronously over
//! preloaded data; [`FsNodeRegistry`] loads descriptors from a directory of
//! JSON manifests up front.

mod descriptor;
mod error;
mod fs_registry;
mod registry;

pub use descriptor::NodeTypeDescriptor;
pub use error::{RegistryError, ResolveError};
pub use fs_registry::FsNodeRegistry;
pub use registry::{InMemoryNodeRegistry, NodeTypeRegistry};
