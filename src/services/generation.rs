//! Cluster-wide generation: assemble every node, then write every document.

use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::domain::{AppError, ClusterContext, Node, NodeDocument};
use crate::ports::{ArtifactSource, DocumentSink};

use super::assemble;

/// A document persisted for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub node: String,
    pub path: PathBuf,
    /// Hex SHA-256 of the written bytes.
    pub sha256: String,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub documents: Vec<WrittenDocument>,
}

/// Serialize and persist one node's document.
pub fn write_document<K: DocumentSink>(
    sink: &K,
    node: &Node,
    document: &NodeDocument,
) -> Result<WrittenDocument, AppError> {
    sink.prepare()?;
    let rendered = document.to_json()?;
    let path = sink.write(node.name(), &rendered)?;
    let sha256 = hash_content(&rendered);

    info!(
        node = node.name(),
        role = %node.role(),
        files = document.storage.files.len(),
        path = %path.display(),
        sha256 = %sha256,
        "wrote ignition config"
    );

    Ok(WrittenDocument { node: node.name().to_string(), path, sha256 })
}

/// Assemble documents for every node in the context and write them.
///
/// All documents are assembled before the first write, so a missing required source
/// leaves the sink untouched.
pub fn generate_all<S: ArtifactSource, K: DocumentSink>(
    ctx: &ClusterContext,
    source: &S,
    sink: &K,
) -> Result<GenerationReport, AppError> {
    let assembled = ctx
        .nodes()
        .iter()
        .map(|node| assemble(node, ctx, source).map(|document| (node, document)))
        .collect::<Result<Vec<_>, _>>()?;

    let documents = assembled
        .iter()
        .map(|(node, document)| write_document(sink, node, document))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerationReport { output_dir: sink.location().to_path_buf(), documents })
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
