pub mod artifacts;
pub mod cluster;
pub mod error;
pub mod ignition;
pub mod layout;

pub use artifacts::{SourceRef, SourceRoot};
pub use cluster::{ClusterContext, Node, NodeRole, NodeSlot};
pub use error::AppError;
pub use ignition::{DirectoryEntry, FileEntry, NodeDocument, ServiceUnit};
pub use layout::BuildLayout;
