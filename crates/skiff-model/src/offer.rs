//! Resource offers presented by the cluster coordinator.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Opaque identifier of an offer, assigned by the coordinator.
pub type OfferId = String;

/// Opaque identifier of a worker agent.
pub type AgentId = String;

/// Opaque framework identity assigned at registration.
pub type FrameworkId = String;

/// A time-bounded grant of resources on one worker host.
///
/// Read-only input to the scheduler: either accepted (turned into a
/// task launch) or declined, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub hostname: String,
    pub agent_id: AgentId,
    pub resources: Vec<Resource>,
}

impl Offer {
    pub fn new(
        id: impl Into<OfferId>,
        hostname: impl Into<String>,
        agent_id: impl Into<AgentId>,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            id: id.into(),
            hostname: hostname.into(),
            agent_id: agent_id.into(),
            resources,
        }
    }
}
