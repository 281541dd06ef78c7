//! Session events, as one tagged enum.
//!
//! The coordinator session delivers events one at a time and the state
//! machine consumes them through a single `handle(event)` entry point,
//! keeping the core free of any transport callback interface.

use serde::{Deserialize, Serialize};

use skiff_model::{AgentId, FrameworkId, Offer, OfferId};

/// Status report for a launched task, relayed by the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub state: String,
}

/// An inbound event from the coordinator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Registration completed; the framework identity is now known.
    Registered {
        framework_id: FrameworkId,
        master: String,
    },
    Reregistered {
        master: String,
    },
    ResourceOffers {
        offers: Vec<Offer>,
    },
    OfferRescinded {
        offer_id: OfferId,
    },
    StatusUpdate {
        status: TaskStatus,
    },
    FrameworkMessage {
        executor_id: String,
        agent_id: AgentId,
        data: Vec<u8>,
    },
    Disconnected,
    AgentLost {
        agent_id: AgentId,
    },
    ExecutorLost {
        executor_id: String,
        agent_id: AgentId,
        exit_status: i32,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use skiff_model::Resource;

    use super::*;

    #[test]
    fn events_round_trip_as_tagged_json() {
        let event = Event::ResourceOffers {
            offers: vec![Offer::new(
                "offer-1",
                "worker-1",
                "agent-1",
                vec![Resource::cpus(2.0)],
            )],
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"resource_offers\""));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn unit_variant_parses_from_tag_alone() {
        let event: Event =
            serde_json::from_str(r#"{"event":"disconnected"}"#).unwrap();
        assert_eq!(event, Event::Disconnected);
    }
}
