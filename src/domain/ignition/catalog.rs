//! Fixed destinations, sources, and modes of the files every node may receive.

use crate::domain::artifacts::{SourceRef, SourceRoot};

use super::document::{MODE_PRIVATE, MODE_PUBLIC};

pub const HOSTNAME_PATH: &str = "/etc/hostname";
pub const AUTHORIZED_KEYS_PATH: &str = "/home/core/.ssh/authorized_keys";
pub const KUBELET_KUBECONFIG_PATH: &str = "/etc/kubernetes/kubelet.kubeconfig";
pub const PKI_DIR: &str = "/etc/kubernetes/pki";
pub const ETCD_PKI_DIR: &str = "/etc/kubernetes/pki/etcd";
pub const MANIFEST_INSTALL_DIR: &str = "/etc/kubernetes/manifests";

/// File name pattern selecting static-pod manifests.
pub const MANIFEST_PATTERN: &str = "*.yaml";

/// Unit enabled on every node.
pub const KUBELET_UNIT: &str = "kubelet.service";

/// Directories created on every node, regardless of role.
pub const DIRECTORIES: [&str; 6] = [
    "/etc/systemd/system/kubelet.service.d",
    "/etc/kubernetes",
    PKI_DIR,
    ETCD_PKI_DIR,
    MANIFEST_INSTALL_DIR,
    "/home/core/.ssh",
];

/// A file copied from a fixed source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFile {
    pub destination: &'static str,
    pub root: SourceRoot,
    pub source: &'static str,
    pub mode: u32,
}

impl StaticFile {
    const fn new(destination: &'static str, root: SourceRoot, source: &'static str, mode: u32) -> Self {
        Self { destination, root, source, mode }
    }

    pub fn source_ref(&self) -> SourceRef {
        SourceRef::new(self.root, self.source)
    }
}

/// Templates identical across all nodes.
pub const COMMON_FILES: [StaticFile; 2] = [
    StaticFile::new(
        "/etc/kubernetes/kubelet-config.yaml",
        SourceRoot::Config,
        "kubelet-config.yaml",
        MODE_PUBLIC,
    ),
    StaticFile::new(
        "/etc/systemd/system/kubelet.service.d/20-hardway.conf",
        SourceRoot::Config,
        "systemd/kubelet-override.conf",
        MODE_PUBLIC,
    ),
];

/// Cluster CA and component certificates shared by all control-plane nodes.
pub const CONTROL_PLANE_PKI: [StaticFile; 11] = [
    StaticFile::new("/etc/kubernetes/pki/ca.crt", SourceRoot::Pki, "ca.crt", MODE_PUBLIC),
    StaticFile::new("/etc/kubernetes/pki/ca.key", SourceRoot::Pki, "ca.key", MODE_PRIVATE),
    StaticFile::new("/etc/kubernetes/pki/apiserver.crt", SourceRoot::Pki, "apiserver.crt", MODE_PUBLIC),
    StaticFile::new("/etc/kubernetes/pki/apiserver.key", SourceRoot::Pki, "apiserver.key", MODE_PRIVATE),
    StaticFile::new(
        "/etc/kubernetes/pki/apiserver-kubelet-client.crt",
        SourceRoot::Pki,
        "apiserver-kubelet-client.crt",
        MODE_PUBLIC,
    ),
    StaticFile::new(
        "/etc/kubernetes/pki/apiserver-kubelet-client.key",
        SourceRoot::Pki,
        "apiserver-kubelet-client.key",
        MODE_PRIVATE,
    ),
    StaticFile::new(
        "/etc/kubernetes/pki/front-proxy-ca.crt",
        SourceRoot::Pki,
        "front-proxy-ca.crt",
        MODE_PUBLIC,
    ),
    StaticFile::new(
        "/etc/kubernetes/pki/front-proxy-client.crt",
        SourceRoot::Pki,
        "front-proxy-client.crt",
        MODE_PUBLIC,
    ),
    StaticFile::new(
        "/etc/kubernetes/pki/front-proxy-client.key",
        SourceRoot::Pki,
        "front-proxy-client.key",
        MODE_PRIVATE,
    ),
    StaticFile::new("/etc/kubernetes/pki/sa.key", SourceRoot::Pki, "sa.key", MODE_PRIVATE),
    StaticFile::new("/etc/kubernetes/pki/sa.pub", SourceRoot::Pki, "sa.pub", MODE_PUBLIC),
];

/// etcd material shared by all control-plane nodes, installed after the node's own pairs.
pub const SHARED_ETCD_PKI: [StaticFile; 3] = [
    StaticFile::new("/etc/kubernetes/pki/etcd/ca.crt", SourceRoot::Pki, "etcd/ca.crt", MODE_PUBLIC),
    StaticFile::new(
        "/etc/kubernetes/pki/etcd/apiserver-etcd-client.crt",
        SourceRoot::Pki,
        "etcd/apiserver-etcd-client.crt",
        MODE_PUBLIC,
    ),
    StaticFile::new(
        "/etc/kubernetes/pki/etcd/apiserver-etcd-client.key",
        SourceRoot::Pki,
        "etcd/apiserver-etcd-client.key",
        MODE_PRIVATE,
    ),
];

/// Credential bundles for the control-plane components.
pub const CONTROL_PLANE_KUBECONFIGS: [StaticFile; 2] = [
    StaticFile::new(
        "/etc/kubernetes/kube-controller-manager.kubeconfig",
        SourceRoot::Kubeconfig,
        "kube-controller-manager.kubeconfig",
        MODE_PRIVATE,
    ),
    StaticFile::new(
        "/etc/kubernetes/kube-scheduler.kubeconfig",
        SourceRoot::Kubeconfig,
        "kube-scheduler.kubeconfig",
        MODE_PRIVATE,
    ),
];

/// etcd identities issued per node, as (suffix, mode) pairs.
const ETCD_NODE_IDENTITIES: [(&str, u32); 6] = [
    ("server.crt", MODE_PUBLIC),
    ("server.key", MODE_PRIVATE),
    ("peer.crt", MODE_PUBLIC),
    ("peer.key", MODE_PRIVATE),
    ("client.crt", MODE_PUBLIC),
    ("client.key", MODE_PRIVATE),
];

/// A file whose source and destination depend on the node name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFile {
    pub destination: String,
    pub source: SourceRef,
    pub mode: u32,
}

/// The node's own etcd server, peer, and client pairs.
pub fn etcd_node_files(node: &str) -> Vec<NodeFile> {
    ETCD_NODE_IDENTITIES
        .iter()
        .map(|(suffix, mode)| {
            let name = format!("{}-{}", node, suffix);
            NodeFile {
                destination: format!("{}/{}", ETCD_PKI_DIR, name),
                source: SourceRef::pki(format!("etcd/{}", name)),
                mode: *mode,
            }
        })
        .collect()
}

/// Optional kubelet credential bundle for a node.
pub fn kubelet_kubeconfig(node: &str) -> NodeFile {
    NodeFile {
        destination: KUBELET_KUBECONFIG_PATH.to_string(),
        source: SourceRef::kubeconfig(format!("kubelet-{}.kubeconfig", node)),
        mode: MODE_PRIVATE,
    }
}

/// Install path for a static-pod manifest.
pub fn manifest_destination(file_name: &str) -> String {
    format!("{}/{}", MANIFEST_INSTALL_DIR, file_name)
}
