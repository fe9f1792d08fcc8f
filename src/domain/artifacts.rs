//! References to generated and static source artifacts.

use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level location an artifact is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceRoot {
    /// Static templates shared by every node.
    Config,
    /// Generated certificates and keys.
    Pki,
    /// Generated kubeconfig credential bundles.
    Kubeconfig,
    /// Generated static-pod manifests, one subdirectory per node.
    Manifests,
}

impl fmt::Display for SourceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRoot::Config => write!(f, "config"),
            SourceRoot::Pki => write!(f, "pki"),
            SourceRoot::Kubeconfig => write!(f, "kubeconfig"),
            SourceRoot::Manifests => write!(f, "manifests"),
        }
    }
}

/// A source path relative to one of the [`SourceRoot`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRef {
    root: SourceRoot,
    relative: PathBuf,
}

impl SourceRef {
    pub fn new(root: SourceRoot, relative: impl Into<PathBuf>) -> Self {
        Self { root, relative: relative.into() }
    }

    pub fn config(relative: impl Into<PathBuf>) -> Self {
        Self::new(SourceRoot::Config, relative)
    }

    pub fn pki(relative: impl Into<PathBuf>) -> Self {
        Self::new(SourceRoot::Pki, relative)
    }

    pub fn kubeconfig(relative: impl Into<PathBuf>) -> Self {
        Self::new(SourceRoot::Kubeconfig, relative)
    }

    /// The manifest subdirectory for a node.
    pub fn manifest_dir(node: &str) -> Self {
        Self::new(SourceRoot::Manifests, node)
    }

    /// A file inside this reference, treated as a directory.
    pub fn child(&self, name: &str) -> Self {
        Self::new(self.root, self.relative.join(name))
    }

    pub fn root(&self) -> SourceRoot {
        self.root
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.root, self.relative.display())
    }
}
