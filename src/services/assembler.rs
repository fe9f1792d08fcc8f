//! Per-node ignition document assembly.
//!
//! Files are appended in a fixed order so identical inputs always produce identical
//! documents:
//! 1. hostname and authorized keys
//! 2. common templates
//! 3. the node's kubelet kubeconfig, when generated
//! 4. control-plane only: cluster PKI, etcd identities, component kubeconfigs, manifests

use std::collections::HashSet;

use tracing::debug;

use crate::domain::ignition::catalog::{
    self, AUTHORIZED_KEYS_PATH, COMMON_FILES, CONTROL_PLANE_KUBECONFIGS, CONTROL_PLANE_PKI,
    DIRECTORIES, HOSTNAME_PATH, KUBELET_UNIT, MANIFEST_PATTERN, NodeFile, SHARED_ETCD_PKI,
    StaticFile,
};
use crate::domain::ignition::{MODE_PRIVATE, MODE_PUBLIC};
use crate::domain::{
    AppError, ClusterContext, DirectoryEntry, FileEntry, Node, NodeDocument, NodeRole,
    ServiceUnit, SourceRef,
};
use crate::ports::ArtifactSource;

/// Assemble the ignition document for one node.
pub fn assemble<S: ArtifactSource>(
    node: &Node,
    ctx: &ClusterContext,
    source: &S,
) -> Result<NodeDocument, AppError> {
    let mut files = FileSet::new(node.name(), source);

    files.push(FileEntry::inline(HOSTNAME_PATH, &format!("{}\n", ctx.fqdn(node)), MODE_PUBLIC))?;
    files.push(FileEntry::inline(
        AUTHORIZED_KEYS_PATH,
        &format!("{}\n", ctx.ssh_public_key()),
        MODE_PRIVATE,
    ))?;

    files.copy_all(&COMMON_FILES)?;

    let kubelet = catalog::kubelet_kubeconfig(node.name());
    if !files.copy_optional(&kubelet)? {
        debug!(node = node.name(), source = %kubelet.source, "kubelet kubeconfig not generated, skipping");
    }

    match node.role() {
        NodeRole::ControlPlane => add_control_plane_files(&mut files, node)?,
        NodeRole::Worker => {}
    }

    let directories = DIRECTORIES.iter().map(|path| DirectoryEntry::new(*path)).collect();
    let units = vec![ServiceUnit::enabled(KUBELET_UNIT)];

    Ok(NodeDocument::new(directories, files.into_entries(), units))
}

fn add_control_plane_files<S: ArtifactSource>(
    files: &mut FileSet<'_, S>,
    node: &Node,
) -> Result<(), AppError> {
    files.copy_all(&CONTROL_PLANE_PKI)?;

    for etcd in catalog::etcd_node_files(node.name()) {
        files.copy(&etcd)?;
    }
    files.copy_all(&SHARED_ETCD_PKI)?;

    files.copy_all(&CONTROL_PLANE_KUBECONFIGS)?;

    let manifest_dir = SourceRef::manifest_dir(node.name());
    match files.source.list_matching(&manifest_dir, MANIFEST_PATTERN)? {
        Some(names) => {
            debug!(node = node.name(), count = names.len(), "adding static-pod manifests");
            for name in names {
                files.copy(&NodeFile {
                    destination: catalog::manifest_destination(&name),
                    source: manifest_dir.child(&name),
                    mode: MODE_PUBLIC,
                })?;
            }
        }
        None => {
            debug!(node = node.name(), source = %manifest_dir, "no manifest directory, skipping");
        }
    }
    Ok(())
}

/// Ordered file entries with unique destinations.
struct FileSet<'a, S> {
    node: &'a str,
    source: &'a S,
    entries: Vec<FileEntry>,
    destinations: HashSet<String>,
}

impl<'a, S: ArtifactSource> FileSet<'a, S> {
    fn new(node: &'a str, source: &'a S) -> Self {
        Self { node, source, entries: Vec::new(), destinations: HashSet::new() }
    }

    fn push(&mut self, entry: FileEntry) -> Result<(), AppError> {
        if !self.destinations.insert(entry.path.clone()) {
            return Err(AppError::DuplicateDestination {
                node: self.node.to_string(),
                path: entry.path,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    fn copy(&mut self, file: &NodeFile) -> Result<(), AppError> {
        let data = self.source.read(&file.source)?;
        self.push(FileEntry::from_bytes(file.destination.as_str(), &data, file.mode))
    }

    fn copy_all(&mut self, files: &[StaticFile]) -> Result<(), AppError> {
        for file in files {
            let data = self.source.read(&file.source_ref())?;
            self.push(FileEntry::from_bytes(file.destination, &data, file.mode))?;
        }
        Ok(())
    }

    /// Returns whether the optional source was present.
    fn copy_optional(&mut self, file: &NodeFile) -> Result<bool, AppError> {
        match self.source.read_optional(&file.source)? {
            Some(data) => {
                self.push(FileEntry::from_bytes(file.destination.as_str(), &data, file.mode))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn into_entries(self) -> Vec<FileEntry> {
        self.entries
    }
}
