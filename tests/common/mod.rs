//! Shared testing utilities for hardway-ign CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use hardway_ign::NodeDocument;
use hardway_ign::domain::ignition::encoding;

pub const DOMAIN: &str = "example.test";
pub const SSH_KEY: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIGk admin@example.test";

/// (variable, node name) for every node variable.
pub const NODES: [(&str, &str); 6] = [
    ("BOOTSTRAP", "bootstrap"),
    ("MASTER0", "master0"),
    ("MASTER1", "master1"),
    ("MASTER2", "master2"),
    ("WORKER0", "worker0"),
    ("WORKER1", "worker1"),
];

pub const CONTROL_PLANE: [&str; 4] = ["bootstrap", "master0", "master1", "master2"];
pub const WORKERS: [&str; 2] = ["worker0", "worker1"];

const PKI_FILES: [&str; 11] = [
    "ca.crt",
    "ca.key",
    "apiserver.crt",
    "apiserver.key",
    "apiserver-kubelet-client.crt",
    "apiserver-kubelet-client.key",
    "front-proxy-ca.crt",
    "front-proxy-client.crt",
    "front-proxy-client.key",
    "sa.key",
    "sa.pub",
];

const SHARED_ETCD_FILES: [&str; 3] = ["ca.crt", "apiserver-etcd-client.crt", "apiserver-etcd-client.key"];

const ETCD_SUFFIXES: [&str; 6] =
    ["server.crt", "server.key", "peer.crt", "peer.key", "client.crt", "client.key"];

/// Isolated build root with helpers for seeding inputs and running the binary.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Empty build root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Build root populated with every required input and per-node kubeconfigs.
    pub fn seeded() -> Self {
        let ctx = Self::new();
        ctx.seed_required_inputs();
        for (_, node) in NODES {
            ctx.write(&format!("generated/kubeconfig/kubelet-{}.kubeconfig", node), "kind: Config\n");
        }
        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("generated/ignition")
    }

    /// Write a file relative to the build root, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        self.root.child(relative).write_str(content).expect("Failed to write fixture");
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        self.root.child(relative).write_binary(content).expect("Failed to write fixture");
    }

    pub fn create_dir(&self, relative: &str) {
        self.root.child(relative).create_dir_all().expect("Failed to create fixture dir");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.root().join(relative)).expect("Failed to remove fixture");
    }

    /// Templates, shared PKI, control-plane etcd identities and component kubeconfigs.
    pub fn seed_required_inputs(&self) {
        self.write("config/kubelet-config.yaml", "kind: KubeletConfiguration\n");
        self.write("config/systemd/kubelet-override.conf", "[Service]\nEnvironment=HARDWAY=1\n");
        for name in PKI_FILES {
            self.write(&format!("generated/pki/{}", name), &format!("pem {}\n", name));
        }
        for name in SHARED_ETCD_FILES {
            self.write(&format!("generated/pki/etcd/{}", name), &format!("pem etcd {}\n", name));
        }
        for node in CONTROL_PLANE {
            for suffix in ETCD_SUFFIXES {
                let name = format!("{}-{}", node, suffix);
                self.write(&format!("generated/pki/etcd/{}", name), &format!("pem {}\n", name));
            }
        }
        self.write("generated/kubeconfig/kube-controller-manager.kubeconfig", "user: cm\n");
        self.write("generated/kubeconfig/kube-scheduler.kubeconfig", "user: sched\n");
    }

    /// Command for the compiled binary with the full cluster environment set.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.env("CLUSTER_DOMAIN", DOMAIN).env("SSH_PUB_KEY", SSH_KEY);
        for (var, node) in NODES {
            cmd.env(var, node);
        }
        cmd
    }

    /// Command for the compiled binary with no cluster variables set.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hardway-ign").expect("Failed to locate hardway-ign binary");
        cmd.current_dir(self.root()).env_remove("HARDWAY_ROOT").env("RUST_LOG", "warn");
        for var in ["CLUSTER_DOMAIN", "SSH_PUB_KEY"].into_iter().chain(NODES.iter().map(|(v, _)| *v)) {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn output_path(&self, node: &str) -> PathBuf {
        self.output_dir().join(format!("{}.ign", node))
    }

    pub fn read_raw(&self, node: &str) -> String {
        fs::read_to_string(self.output_path(node)).expect("Failed to read ignition output")
    }

    pub fn read_document(&self, node: &str) -> NodeDocument {
        serde_json::from_str(&self.read_raw(node)).expect("Output is not a valid ignition document")
    }

    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> =
            entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
        names.sort();
        names
    }
}

/// Paths of every file entry in a document.
pub fn file_paths(doc: &NodeDocument) -> Vec<String> {
    doc.storage.files.iter().map(|f| f.path.clone()).collect()
}

/// Decoded contents of the entry at `path`.
pub fn decoded(doc: &NodeDocument, path: &str) -> Vec<u8> {
    let entry = doc.file(path).unwrap_or_else(|| panic!("missing file entry {}", path));
    encoding::decode(&entry.contents.source).expect("Invalid data URI")
}
