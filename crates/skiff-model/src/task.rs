//! Tracked tasks and launchable task specifications.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::offer::{AgentId, FrameworkId};
use crate::resource::Resource;

/// One running workload replica, tracked by the state machine.
///
/// Created when an offer is accepted and a launch is issued, immutable
/// thereafter. The tracked set holds at most one task per hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub hostname: String,
    pub id: String,
}

impl Task {
    pub fn new(hostname: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            id: id.into(),
        }
    }
}

/// A concrete task launch handed to the coordinator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Workload name, shared by all replicas.
    pub name: String,
    /// Unique task id: `<workload>_<hostname>_<timestamp>`.
    pub id: String,
    /// Agent the task is bound to (from the accepted offer).
    pub agent_id: AgentId,
    /// Accepted scalar resources plus two single-value port ranges.
    pub resources: Vec<Resource>,
    pub launch: LaunchSpec,
}

/// The chosen launch mechanism — exactly one per task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum LaunchSpec {
    Docker(DockerLaunch),
    Agent(AgentLaunch),
}

/// Container port → host port mapping for bridged networking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub container_port: u64,
    pub host_port: u64,
}

/// Launch the workload as a container image on the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockerLaunch {
    pub image: String,
    /// Client and transport mappings, in that order.
    pub port_mappings: Vec<PortMapping>,
    /// Workload command line (publish address, cluster discovery).
    pub args: Vec<String>,
    /// Container DNS server, present only when one was configured.
    pub dns: Option<IpAddr>,
}

/// Launch the workload via an agent-fetched executor binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLaunch {
    /// Freshly generated identity for the executor instance.
    pub executor_id: String,
    pub framework_id: FrameworkId,
    /// Binary bundles the agent fetches before launch.
    pub fetch_uris: Vec<String>,
    /// Command invoking the fetched executor.
    pub command: String,
    pub resources: Vec<Resource>,
}
