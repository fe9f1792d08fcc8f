//! Build root and layout resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::layout::{LAYOUT_FILE, ROOT_ENV_VAR, parse_layout_content};
use crate::domain::{AppError, BuildLayout};

/// Build root: `HARDWAY_ROOT` when set and non-empty, otherwise the current directory.
pub fn build_root() -> Result<PathBuf, AppError> {
    match std::env::var_os(ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => Ok(std::env::current_dir()?),
    }
}

/// Load the layout for `root`, applying `hardway.toml` overrides when the file exists.
pub fn load_layout(root: &Path) -> Result<BuildLayout, AppError> {
    let path = root.join(LAYOUT_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "applying layout overrides");
            parse_layout_content(root, &content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BuildLayout::under(root)),
        Err(e) => Err(AppError::config_error(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
