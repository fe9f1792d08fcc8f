//! In-memory `DocumentSink` for unit tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DocumentSink;

#[derive(Clone, Debug)]
pub struct MemorySink {
    location: PathBuf,
    prepared: Arc<Mutex<bool>>,
    documents: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySink {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            prepared: Arc::new(Mutex::new(false)),
            documents: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub fn prepared(&self) -> bool {
        *self.prepared.lock().unwrap()
    }

    /// Node names with a written document, sorted.
    pub fn written(&self) -> Vec<String> {
        self.documents.lock().unwrap().keys().cloned().collect()
    }

    pub fn document(&self, node: &str) -> Option<String> {
        self.documents.lock().unwrap().get(node).cloned()
    }
}

impl DocumentSink for MemorySink {
    fn prepare(&self) -> Result<(), AppError> {
        *self.prepared.lock().unwrap() = true;
        Ok(())
    }

    fn write(&self, node: &str, rendered: &str) -> Result<PathBuf, AppError> {
        self.documents.lock().unwrap().insert(node.to_string(), rendered.to_string());
        Ok(self.location.join(format!("{}.ign", node)))
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
