//! Ignition document model.

use serde::{Deserialize, Serialize};

use super::encoding;

/// Ignition config version emitted in every document.
pub const IGNITION_VERSION: &str = "3.2.0";

/// World-readable file mode.
pub const MODE_PUBLIC: u32 = 0o644;

/// Owner-only file mode for keys and credentials.
pub const MODE_PRIVATE: u32 = 0o600;

/// Complete first-boot document for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub ignition: FormatTag,
    pub storage: Storage,
    pub systemd: Systemd,
}

impl NodeDocument {
    pub fn new(
        directories: Vec<DirectoryEntry>,
        files: Vec<FileEntry>,
        units: Vec<ServiceUnit>,
    ) -> Self {
        Self {
            ignition: FormatTag { version: IGNITION_VERSION.to_string() },
            storage: Storage { directories, files },
            systemd: Systemd { units },
        }
    }

    /// Look up a file entry by destination path.
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.storage.files.iter().find(|entry| entry.path == path)
    }

    /// Pretty-printed JSON form written to disk.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTag {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub directories: Vec<DirectoryEntry>,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Systemd {
    pub units: Vec<ServiceUnit>,
}

/// Directory the first-boot agent creates with its default mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub path: String,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// File written on the target with embedded contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub mode: u32,
    pub contents: FileContents,
}

impl FileEntry {
    /// Package already-materialized bytes for a destination path.
    pub fn from_bytes(path: impl Into<String>, data: &[u8], mode: u32) -> Self {
        Self { path: path.into(), mode, contents: FileContents { source: encoding::encode(data) } }
    }

    /// Package synthesized text content.
    pub fn inline(path: impl Into<String>, text: &str, mode: u32) -> Self {
        Self::from_bytes(path, text.as_bytes(), mode)
    }

    /// Decoded contents.
    pub fn decoded(&self) -> Result<Vec<u8>, crate::domain::AppError> {
        encoding::decode(&self.contents.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContents {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUnit {
    pub name: String,
    pub enabled: bool,
}

impl ServiceUnit {
    pub fn enabled(name: impl Into<String>) -> Self {
        Self { name: name.into(), enabled: true }
    }
}
