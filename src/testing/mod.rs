mod memory_artifact_source;
mod memory_sink;

pub use memory_artifact_source::MemoryArtifactSource;
pub use memory_sink::MemorySink;

use crate::domain::{ClusterContext, Node, NodeSlot};

/// Six-node context under `example.test` with nodes named after their slots.
pub fn sample_context() -> ClusterContext {
    let nodes = [
        ("bootstrap", NodeSlot::Bootstrap),
        ("master0", NodeSlot::Master0),
        ("master1", NodeSlot::Master1),
        ("master2", NodeSlot::Master2),
        ("worker0", NodeSlot::Worker0),
        ("worker1", NodeSlot::Worker1),
    ]
    .into_iter()
    .map(|(name, slot)| Node::new(name, slot))
    .collect();

    ClusterContext::new("example.test", "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5 admin@example.test", nodes)
        .unwrap()
}
