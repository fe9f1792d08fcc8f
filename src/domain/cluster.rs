//! Cluster topology resolved from the calling environment.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::AppError;

/// Environment variable holding the cluster DNS domain.
pub const CLUSTER_DOMAIN_VAR: &str = "CLUSTER_DOMAIN";

/// Environment variable holding the administrator's SSH public key.
pub const SSH_PUB_KEY_VAR: &str = "SSH_PUB_KEY";

/// Role a node plays when its first-boot files are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    ControlPlane,
    Worker,
}

impl NodeRole {
    pub fn is_control_plane(self) -> bool {
        matches!(self, NodeRole::ControlPlane)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::ControlPlane => write!(f, "control-plane"),
            NodeRole::Worker => write!(f, "worker"),
        }
    }
}

/// Fixed position of a node in the six-node topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSlot {
    Bootstrap,
    Master0,
    Master1,
    Master2,
    Worker0,
    Worker1,
}

impl NodeSlot {
    /// All slots in declared order.
    pub const ALL: [NodeSlot; 6] = [
        NodeSlot::Bootstrap,
        NodeSlot::Master0,
        NodeSlot::Master1,
        NodeSlot::Master2,
        NodeSlot::Worker0,
        NodeSlot::Worker1,
    ];

    /// Environment variable naming the node in this slot.
    pub fn env_var(self) -> &'static str {
        match self {
            NodeSlot::Bootstrap => "BOOTSTRAP",
            NodeSlot::Master0 => "MASTER0",
            NodeSlot::Master1 => "MASTER1",
            NodeSlot::Master2 => "MASTER2",
            NodeSlot::Worker0 => "WORKER0",
            NodeSlot::Worker1 => "WORKER1",
        }
    }

    /// The bootstrap node provisions like a master even though it leaves the cluster later.
    pub fn role(self) -> NodeRole {
        match self {
            NodeSlot::Bootstrap | NodeSlot::Master0 | NodeSlot::Master1 | NodeSlot::Master2 => {
                NodeRole::ControlPlane
            }
            NodeSlot::Worker0 | NodeSlot::Worker1 => NodeRole::Worker,
        }
    }
}

/// A node identity paired with its topology slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    slot: NodeSlot,
}

impl Node {
    pub fn new(name: impl Into<String>, slot: NodeSlot) -> Self {
        Self { name: name.into(), slot }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> NodeSlot {
        self.slot
    }

    pub fn role(&self) -> NodeRole {
        self.slot.role()
    }
}

/// Required environment variables, in the order they are reported when missing.
pub fn required_env_vars() -> Vec<&'static str> {
    let mut keys = vec![CLUSTER_DOMAIN_VAR];
    keys.extend(NodeSlot::ALL.iter().map(|slot| slot.env_var()));
    keys.push(SSH_PUB_KEY_VAR);
    keys
}

/// Immutable cluster inputs shared by every node assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    domain: String,
    ssh_public_key: String,
    nodes: Vec<Node>,
}

impl ClusterContext {
    /// Build a context directly from resolved values. Node order is preserved.
    pub fn new(
        domain: impl Into<String>,
        ssh_public_key: impl Into<String>,
        nodes: Vec<Node>,
    ) -> Result<Self, AppError> {
        let mut seen = BTreeSet::new();
        for node in &nodes {
            if !seen.insert(node.name()) {
                return Err(AppError::config_error(format!(
                    "Node name '{}' is assigned to more than one node variable",
                    node.name()
                )));
            }
        }
        Ok(Self { domain: domain.into(), ssh_public_key: ssh_public_key.into(), nodes })
    }

    /// Resolve the context from a key/value lookup.
    ///
    /// Every required key must be present; values may be empty. All missing keys are
    /// reported together.
    pub fn resolve<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = required_env_vars()
            .into_iter()
            .filter(|key| lookup(*key).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingEnv { keys: missing });
        }

        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::MissingEnv { keys: vec![key.to_string()] })
        };

        let nodes = NodeSlot::ALL
            .iter()
            .map(|slot| required(slot.env_var()).map(|name| Node::new(name, *slot)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(required(CLUSTER_DOMAIN_VAR)?, required(SSH_PUB_KEY_VAR)?, nodes)
    }

    /// Resolve the context from the process environment.
    ///
    /// A variable that is set to a value that is not valid Unicode is a configuration
    /// error rather than a missing key.
    pub fn from_process_env() -> Result<Self, AppError> {
        let invalid: Vec<&str> = required_env_vars()
            .into_iter()
            .filter(|key| std::env::var_os(*key).is_some_and(|value| value.to_str().is_none()))
            .collect();
        if !invalid.is_empty() {
            return Err(AppError::config_error(format!(
                "Env var {} is not valid Unicode",
                invalid.join(", ")
            )));
        }

        Self::resolve(|key| std::env::var_os(key).and_then(|value| value.into_string().ok()))
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn ssh_public_key(&self) -> &str {
        &self.ssh_public_key
    }

    /// All nodes in declared order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes tagged control-plane, in declared order.
    pub fn control_plane(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.role().is_control_plane())
    }

    /// Fully qualified host name for a node.
    pub fn fqdn(&self, node: &Node) -> String {
        format!("{}.{}", node.name(), self.domain)
    }
}
