//! In-memory `ArtifactSource` for unit tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use glob::{MatchOptions, Pattern};

use crate::domain::ignition::catalog::{
    self, COMMON_FILES, CONTROL_PLANE_KUBECONFIGS, CONTROL_PLANE_PKI, SHARED_ETCD_PKI,
};
use crate::domain::{AppError, ClusterContext, SourceRef};
use crate::ports::ArtifactSource;

/// Artifact store keyed by [`SourceRef`]. Directories are tracked explicitly so that
/// absent and empty manifest directories can be told apart.
#[derive(Clone, Debug, Default)]
pub struct MemoryArtifactSource {
    files: Arc<Mutex<HashMap<SourceRef, Vec<u8>>>>,
    dirs: Arc<Mutex<HashSet<SourceRef>>>,
}

impl MemoryArtifactSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every artifact a full run over `ctx` reads, with content naming its source.
    ///
    /// Control-plane nodes get `etcd.yaml` and `kube-apiserver.yaml` manifests.
    pub fn seeded(ctx: &ClusterContext) -> Self {
        let source = Self::new();
        let shared = COMMON_FILES
            .iter()
            .chain(CONTROL_PLANE_PKI.iter())
            .chain(SHARED_ETCD_PKI.iter())
            .chain(CONTROL_PLANE_KUBECONFIGS.iter());
        for file in shared {
            source.add_labelled(file.source_ref());
        }

        for node in ctx.nodes() {
            source.add_labelled(catalog::kubelet_kubeconfig(node.name()).source);
            if node.role().is_control_plane() {
                for etcd in catalog::etcd_node_files(node.name()) {
                    source.add_labelled(etcd.source);
                }
                let dir = SourceRef::manifest_dir(node.name());
                source.add_dir(&dir);
                source.add_labelled(dir.child("etcd.yaml"));
                source.add_labelled(dir.child("kube-apiserver.yaml"));
            }
        }
        source
    }

    fn add_labelled(&self, source: SourceRef) {
        let label = format!("content of {}\n", source).into_bytes();
        self.add(source, label);
    }

    /// Seed or replace an artifact.
    pub fn add(&self, source: SourceRef, data: Vec<u8>) {
        self.files.lock().unwrap().insert(source, data);
    }

    pub fn remove(&self, source: &SourceRef) {
        self.files.lock().unwrap().remove(source);
    }

    pub fn add_dir(&self, dir: &SourceRef) {
        self.dirs.lock().unwrap().insert(dir.clone());
    }

    /// Remove a directory and every artifact directly inside it.
    pub fn remove_dir(&self, dir: &SourceRef) {
        self.dirs.lock().unwrap().remove(dir);
        self.files.lock().unwrap().retain(|key, _| !is_child(dir, key));
    }
}

fn is_child(dir: &SourceRef, candidate: &SourceRef) -> bool {
    candidate.root() == dir.root() && candidate.relative().parent() == Some(dir.relative())
}

impl ArtifactSource for MemoryArtifactSource {
    fn read(&self, source: &SourceRef) -> Result<Vec<u8>, AppError> {
        self.files.lock().unwrap().get(source).cloned().ok_or_else(|| {
            AppError::source_read(
                source.to_string(),
                io::Error::new(io::ErrorKind::NotFound, "Mock artifact not found"),
            )
        })
    }

    fn read_optional(&self, source: &SourceRef) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.files.lock().unwrap().get(source).cloned())
    }

    fn list_matching(
        &self,
        dir: &SourceRef,
        pattern: &str,
    ) -> Result<Option<Vec<String>>, AppError> {
        if !self.dirs.lock().unwrap().contains(dir) {
            return Ok(None);
        }
        let pattern = Pattern::new(pattern)?;
        let options = MatchOptions::new();

        let mut names: Vec<String> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|key| is_child(dir, key))
            .filter_map(|key| key.relative().file_name()?.to_str().map(str::to_string))
            .filter(|name| pattern.matches_with(name, options))
            .collect();
        names.sort();
        Ok(Some(names))
    }
}
