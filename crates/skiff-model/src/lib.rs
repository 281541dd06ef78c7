//! skiff-model — domain types for the skiff scheduler.
//!
//! Pure data shared between the scheduler core and the coordinator
//! session: resource offers from worker hosts, the typed resources
//! they carry, tracked tasks, and the launchable task specifications
//! handed back to the coordinator. All types serialize to/from JSON
//! for the control channel.

pub mod offer;
pub mod resource;
pub mod task;

pub use offer::{AgentId, FrameworkId, Offer, OfferId};
pub use resource::{Resource, partition_scalars, select_ports};
pub use task::{AgentLaunch, DockerLaunch, LaunchSpec, PortMapping, Task, TaskSpec};
