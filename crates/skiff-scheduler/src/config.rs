//! Scheduler configuration.
//!
//! Values only, no behavior: the workload identity, the fixed
//! container ports, the replica target, the launch mode, and the
//! addresses of the external collaborators. The daemon maps its
//! command-line flags onto this struct.

/// Framework name advertised to the coordinator at registration.
pub const FRAMEWORK_NAME: &str = "skiff";

/// Declarative resource request emitted after registration.
pub const REQUEST_CPUS: f64 = 1.0;
pub const REQUEST_MEM: f64 = 2048.0;
pub const REQUEST_DISK: f64 = 1024.0;
pub const REQUEST_PORT_BEGIN: u64 = 31000;
pub const REQUEST_PORT_END: u64 = 32000;

/// Bundle paths on the distribution node, agent-delivered mode.
pub const EXECUTOR_BUNDLE_PATH: &str = "/skiff/searchd-executor.tar.gz";
pub const WORKLOAD_BUNDLE_PATH: &str = "/skiff/searchd.tar.gz";

/// Command invoking the fetched executor bundle.
pub const EXECUTOR_COMMAND: &str = "./searchd-executor";

/// How workload replicas are started on worker hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Run the workload as a container image with bridged networking.
    Containerized,
    /// Have the agent fetch an executor binary and run it directly.
    AgentDelivered,
}

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workload name, used for task names and task ids.
    pub workload_name: String,
    /// Container image for [`LaunchMode::Containerized`].
    pub image: String,
    /// Fixed in-container client port.
    pub client_port: u64,
    /// Fixed in-container transport port.
    pub transport_port: u64,
    /// Number of distinct hosts that must run a replica before the
    /// readiness gate fires.
    pub target_replicas: usize,
    pub launch_mode: LaunchMode,
    /// DNS server injected into containers, when configured.
    pub dns_host: Option<String>,
    /// `host:port` of the node serving binary bundles.
    pub distribution_node: String,
    /// Coordinator master hostname.
    pub master_host: String,
    /// Coordinator control-plane port.
    pub control_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workload_name: "searchd".to_string(),
            image: "skiff/searchd".to_string(),
            client_port: 9200,
            transport_port: 9300,
            target_replicas: 3,
            launch_mode: LaunchMode::AgentDelivered,
            dns_host: None,
            distribution_node: "localhost:8020".to_string(),
            master_host: "localhost".to_string(),
            control_port: 5050,
        }
    }
}
