//! hardway-ign: assemble per-node ignition configs for a six-node Kubernetes cluster.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemArtifactSource, IgnitionDirectory};

pub use domain::{AppError, ClusterContext, NodeDocument};
pub use services::{GenerationReport, WrittenDocument};

/// Generate ignition configs for every node, reading cluster inputs from the process
/// environment and build inputs from the build root.
///
/// Environment validation happens before any file is touched.
pub fn generate() -> Result<GenerationReport, AppError> {
    let ctx = ClusterContext::from_process_env()?;
    let root = app::config::build_root()?;
    generate_in(&root, &ctx)
}

/// Generate ignition configs for `ctx` using the layout rooted at `root`.
pub fn generate_in(root: &Path, ctx: &ClusterContext) -> Result<GenerationReport, AppError> {
    let layout = app::config::load_layout(root)?;
    let sink = IgnitionDirectory::new(layout.output_dir.clone());
    let source = FilesystemArtifactSource::new(layout);
    services::generate_all(ctx, &source, &sink)
}
