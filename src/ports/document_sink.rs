//! Destination for rendered ignition documents.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for persisting rendered documents, one per node.
pub trait DocumentSink {
    /// Ensure the destination exists. Succeeds if it is already present.
    fn prepare(&self) -> Result<(), AppError>;

    /// Write a rendered document for `node`, replacing any previous one.
    ///
    /// Returns the path the document was written to.
    fn write(&self, node: &str, rendered: &str) -> Result<PathBuf, AppError>;

    /// Where documents are written.
    fn location(&self) -> &Path;
}
