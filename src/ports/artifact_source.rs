//! Read access to build inputs.

use crate::domain::{AppError, SourceRef};

/// Port for reading source artifacts into memory.
///
/// Required reads fail with `AppError::SourceRead`; optional lookups report absence as
/// `None` and only fail when the artifact exists but cannot be read.
pub trait ArtifactSource {
    /// Read a required artifact fully.
    fn read(&self, source: &SourceRef) -> Result<Vec<u8>, AppError>;

    /// Read an artifact that may legitimately be absent.
    fn read_optional(&self, source: &SourceRef) -> Result<Option<Vec<u8>>, AppError>;

    /// File names directly inside `dir` matching a glob `pattern`, sorted by name.
    ///
    /// Returns `None` when `dir` does not exist. Subdirectories are never listed.
    fn list_matching(
        &self,
        dir: &SourceRef,
        pattern: &str,
    ) -> Result<Option<Vec<String>>, AppError>;
}
