//! Ignition document model, transport encoding, and file catalog.

pub mod catalog;
mod document;
pub mod encoding;

pub use document::{
    DirectoryEntry, FileContents, FileEntry, FormatTag, IGNITION_VERSION, MODE_PRIVATE,
    MODE_PUBLIC, NodeDocument, ServiceUnit, Storage, Systemd,
};
