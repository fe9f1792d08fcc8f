//! `DocumentSink` writing `<node>.ign` files into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::layout::OUTPUT_EXTENSION;
use crate::ports::DocumentSink;

/// Output directory holding one ignition file per node.
#[derive(Debug, Clone)]
pub struct IgnitionDirectory {
    dir: PathBuf,
}

impl IgnitionDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, node: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", node, OUTPUT_EXTENSION))
    }
}

impl DocumentSink for IgnitionDirectory {
    fn prepare(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(AppError::from)
    }

    fn write(&self, node: &str, rendered: &str) -> Result<PathBuf, AppError> {
        let path = self.file_for(node);
        fs::write(&path, rendered)?;
        Ok(path)
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}
