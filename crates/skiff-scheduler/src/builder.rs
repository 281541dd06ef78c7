//! Task builder — turns an accepted offer into a launchable spec.
//!
//! Slices the offered resource list (scalars pass through, two ports
//! are picked greedily), then assembles one of the two launch
//! strategies. Any failure here means the caller declines the offer;
//! nothing is retried.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use skiff_model::{
    AgentLaunch, DockerLaunch, FrameworkId, LaunchSpec, Offer, PortMapping,
    Resource, TaskSpec, partition_scalars, select_ports,
};

use crate::clock::{Clock, TASK_TIMESTAMP_FORMAT};
use crate::config::{
    Config, EXECUTOR_BUNDLE_PATH, EXECUTOR_COMMAND, LaunchMode,
    WORKLOAD_BUNDLE_PATH,
};
use crate::error::BuildError;
use crate::resolve::Resolve;

/// Builds task specs from accepted offers.
pub struct TaskBuilder {
    config: Arc<Config>,
    clock: Arc<dyn Clock>,
    resolver: Arc<dyn Resolve>,
}

impl TaskBuilder {
    pub fn new(
        config: Arc<Config>,
        clock: Arc<dyn Clock>,
        resolver: Arc<dyn Resolve>,
    ) -> Self {
        Self {
            config,
            clock,
            resolver,
        }
    }

    /// Build a launchable spec from an accepted offer.
    ///
    /// Fails with [`BuildError::InsufficientPorts`] unless the offer
    /// yields exactly two ports — a hard precondition, not a
    /// partial-success path. The containerized branch additionally
    /// fails if any of the master, DNS, or target hostnames cannot be
    /// resolved.
    pub fn build(
        &self,
        offer: &Offer,
        framework_id: &FrameworkId,
    ) -> Result<TaskSpec, BuildError> {
        let ports = select_ports(&offer.resources);
        let [client_port, transport_port] = ports[..] else {
            return Err(BuildError::InsufficientPorts);
        };
        debug!(client_port, transport_port, "selected workload ports");

        let mut resources = partition_scalars(&offer.resources);
        resources.push(Resource::single_port(client_port));
        resources.push(Resource::single_port(transport_port));

        let launch = match self.config.launch_mode {
            LaunchMode::Containerized => LaunchSpec::Docker(
                self.docker_launch(offer, client_port, transport_port)?,
            ),
            LaunchMode::AgentDelivered => {
                LaunchSpec::Agent(self.agent_launch(framework_id, &resources))
            }
        };

        Ok(TaskSpec {
            name: self.config.workload_name.clone(),
            id: self.task_id(&offer.hostname),
            agent_id: offer.agent_id.clone(),
            resources,
            launch,
        })
    }

    fn docker_launch(
        &self,
        offer: &Offer,
        client_port: u64,
        transport_port: u64,
    ) -> Result<DockerLaunch, BuildError> {
        let master = self.resolver.resolve(&self.config.master_host)?;
        let dns = match &self.config.dns_host {
            Some(host) => Some(self.resolver.resolve(host)?),
            None => None,
        };
        let publish = self.resolver.resolve(&offer.hostname)?;

        Ok(DockerLaunch {
            image: self.config.image.clone(),
            port_mappings: vec![
                PortMapping {
                    container_port: self.config.client_port,
                    host_port: client_port,
                },
                PortMapping {
                    container_port: self.config.transport_port,
                    host_port: transport_port,
                },
            ],
            args: vec![
                self.config.workload_name.clone(),
                "--publish-host".to_string(),
                publish.to_string(),
                "--cluster-master".to_string(),
                format!("http://{}:{}", master, self.config.control_port),
                "--discovery".to_string(),
                "coordinator".to_string(),
            ],
            dns,
        })
    }

    fn agent_launch(
        &self,
        framework_id: &FrameworkId,
        resources: &[Resource],
    ) -> AgentLaunch {
        let node = &self.config.distribution_node;
        AgentLaunch {
            executor_id: Uuid::new_v4().to_string(),
            framework_id: framework_id.clone(),
            fetch_uris: vec![
                format!("hdfs://{node}{EXECUTOR_BUNDLE_PATH}"),
                format!("hdfs://{node}{WORKLOAD_BUNDLE_PATH}"),
            ],
            command: EXECUTOR_COMMAND.to_string(),
            resources: resources.to_vec(),
        }
    }

    /// `<workload>_<hostname>_<timestamp>`, timestamp sortable.
    fn task_id(&self, hostname: &str) -> String {
        let stamp = self.clock.now().format(TASK_TIMESTAMP_FORMAT);
        format!("{}_{}_{}", self.config.workload_name, hostname, stamp)
    }
}
