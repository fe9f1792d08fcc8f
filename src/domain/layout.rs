//! On-disk layout of build inputs and outputs.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, SourceRoot};

/// Optional layout override file, looked up in the build root.
pub const LAYOUT_FILE: &str = "hardway.toml";

/// Environment variable overriding the build root (defaults to the current directory).
pub const ROOT_ENV_VAR: &str = "HARDWAY_ROOT";

/// Extension of written ignition documents.
pub const OUTPUT_EXTENSION: &str = "ign";

/// Resolved directories for every source root and the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    pub config_dir: PathBuf,
    pub pki_dir: PathBuf,
    pub kubeconfig_dir: PathBuf,
    pub manifests_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl BuildLayout {
    /// Default layout under a build root.
    pub fn under(root: &Path) -> Self {
        Self::from_paths(root, PathsDto::default())
    }

    fn from_paths(root: &Path, paths: PathsDto) -> Self {
        let generated = root.join("generated");
        let resolve = |value: Option<PathBuf>, default: PathBuf| match value {
            Some(path) => root.join(path),
            None => default,
        };
        Self {
            config_dir: resolve(paths.config, root.join("config")),
            pki_dir: resolve(paths.pki, generated.join("pki")),
            kubeconfig_dir: resolve(paths.kubeconfig, generated.join("kubeconfig")),
            manifests_dir: resolve(paths.manifests, generated.join("manifests")),
            output_dir: resolve(paths.output, generated.join("ignition")),
        }
    }

    /// Directory backing a source root.
    pub fn dir_for(&self, root: SourceRoot) -> &Path {
        match root {
            SourceRoot::Config => &self.config_dir,
            SourceRoot::Pki => &self.pki_dir,
            SourceRoot::Kubeconfig => &self.kubeconfig_dir,
            SourceRoot::Manifests => &self.manifests_dir,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutDto {
    #[serde(default)]
    paths: PathsDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsDto {
    config: Option<PathBuf>,
    pki: Option<PathBuf>,
    kubeconfig: Option<PathBuf>,
    manifests: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// Parse `hardway.toml` content into a layout rooted at `root`.
///
/// Relative paths resolve against the root; absolute paths are kept as-is.
pub fn parse_layout_content(root: &Path, content: &str) -> Result<BuildLayout, AppError> {
    let dto: LayoutDto = toml::from_str(content)?;
    Ok(BuildLayout::from_paths(root, dto.paths))
}
