//! Concrete adapters for the ports.

mod filesystem;

pub use filesystem::{FilesystemArtifactSource, IgnitionDirectory};
