//! Filesystem adapters for reading build inputs and writing documents.

mod ignition_dir;

pub use ignition_dir::IgnitionDirectory;

use std::fs;
use std::io;
use std::path::PathBuf;

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::domain::{AppError, BuildLayout, SourceRef};
use crate::ports::ArtifactSource;

/// Reads artifacts from the directories of a [`BuildLayout`].
#[derive(Debug, Clone)]
pub struct FilesystemArtifactSource {
    layout: BuildLayout,
}

impl FilesystemArtifactSource {
    pub fn new(layout: BuildLayout) -> Self {
        Self { layout }
    }

    /// Absolute path of an artifact.
    pub fn resolve(&self, source: &SourceRef) -> PathBuf {
        self.layout.dir_for(source.root()).join(source.relative())
    }
}

impl ArtifactSource for FilesystemArtifactSource {
    fn read(&self, source: &SourceRef) -> Result<Vec<u8>, AppError> {
        let path = self.resolve(source);
        let metadata = fs::metadata(&path).map_err(|e| AppError::source_read(&path, e))?;
        if metadata.is_dir() {
            return Err(AppError::source_read(
                &path,
                io::Error::new(io::ErrorKind::IsADirectory, "expected a file, found a directory"),
            ));
        }
        fs::read(&path).map_err(|e| AppError::source_read(&path, e))
    }

    fn read_optional(&self, source: &SourceRef) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.resolve(source);
        match fs::metadata(&path) {
            Ok(_) => self.read(source).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::source_read(&path, e)),
        }
    }

    fn list_matching(
        &self,
        dir: &SourceRef,
        pattern: &str,
    ) -> Result<Option<Vec<String>>, AppError> {
        let path = self.resolve(dir);
        if !path.is_dir() {
            return Ok(None);
        }

        let pattern = Pattern::new(pattern)?;
        let options = MatchOptions::new();

        let entries = fs::read_dir(&path).map_err(|e| AppError::source_read(&path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::source_read(&path, e))?;
            if !entry.path().is_file() {
                continue;
            }
            // Non-UTF-8 names cannot be expressed as ignition destination paths.
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(path = %entry.path().display(), "skipping manifest with non-UTF-8 name");
                continue;
            };
            if pattern.matches_with(&name, options) {
                names.push(name);
            }
        }
        names.sort();
        Ok(Some(names))
    }
}
