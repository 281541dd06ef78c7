//! Outbound seam to the coordinator session.

use skiff_model::{OfferId, Resource, TaskSpec};

/// Calls the scheduler issues against the coordinator.
///
/// Implementations may block; the state machine invokes them
/// synchronously on the event-processing path. There is no error
/// return — delivery failures are the session's concern.
pub trait Driver: Send + Sync {
    /// Declarative resource hint emitted after registration.
    fn request_resources(&self, resources: Vec<Resource>);

    fn decline_offer(&self, offer_id: &OfferId);

    fn launch_tasks(&self, offer_ids: &[OfferId], tasks: Vec<TaskSpec>);

    /// Tear down the session.
    fn stop(&self);
}
