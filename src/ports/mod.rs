mod artifact_source;
mod document_sink;

pub use artifact_source::ArtifactSource;
pub use document_sink::DocumentSink;
