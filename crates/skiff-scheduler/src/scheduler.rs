//! Scheduler state machine — drives the registered → offers →
//! (accept | decline) → tracked loop.
//!
//! Driven entirely by session-delivered events; no polling, no
//! background timers. Each event is processed to completion before the
//! next is admitted, so the tracked set and the readiness gate need no
//! internal locking here.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, warn};

use skiff_model::{FrameworkId, Offer, Resource, Task};

use crate::builder::TaskBuilder;
use crate::clock::Clock;
use crate::config::{
    Config, REQUEST_CPUS, REQUEST_DISK, REQUEST_MEM, REQUEST_PORT_BEGIN,
    REQUEST_PORT_END,
};
use crate::driver::Driver;
use crate::error::BuildError;
use crate::event::Event;
use crate::gate::ReadyGate;
use crate::policy;
use crate::resolve::Resolve;

/// Lifecycle of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No registration yet; offers arriving now are declined.
    Unregistered,
    /// Registered with the coordinator, no offers processed yet.
    Registered,
    /// Processing offers; `ready` flips when the replica target is met.
    Running { ready: bool },
}

/// Why an offer was declined. Logged, not sent over the wire — the
/// decline call itself carries no reason.
#[derive(Debug)]
enum DeclineReason {
    NotRegistered,
    DuplicateHost,
    TargetReached,
    Build(BuildError),
}

/// Owns the tracked-task set and the readiness gate.
pub struct SchedulerStateMachine {
    config: Arc<Config>,
    builder: TaskBuilder,
    driver: Arc<dyn Driver>,
    tasks: HashSet<Task>,
    framework_id: Option<FrameworkId>,
    phase: Phase,
    gate: ReadyGate,
}

impl SchedulerStateMachine {
    pub fn new(
        config: Config,
        driver: Arc<dyn Driver>,
        resolver: Arc<dyn Resolve>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            builder: TaskBuilder::new(config.clone(), clock, resolver),
            config,
            driver,
            tasks: HashSet::new(),
            framework_id: None,
            phase: Phase::Unregistered,
            gate: ReadyGate::new(),
        }
    }

    /// A handle on the readiness gate. The bootstrap path blocks on
    /// its `wait()` until the replica target is met.
    pub fn gate(&self) -> ReadyGate {
        self.gate.clone()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only snapshot of the tracked tasks.
    pub fn tasks(&self) -> &HashSet<Task> {
        &self.tasks
    }

    /// Process one session event to completion.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Registered {
                framework_id,
                master,
            } => self.on_registered(framework_id, master),
            Event::Reregistered { master } => {
                info!(%master, "framework re-registered");
            }
            Event::ResourceOffers { offers } => self.on_offers(offers),
            Event::OfferRescinded { offer_id } => {
                info!(%offer_id, "offer rescinded");
            }
            Event::StatusUpdate { status } => {
                info!(
                    task_id = %status.task_id,
                    state = %status.state,
                    "status update"
                );
            }
            Event::FrameworkMessage {
                executor_id,
                agent_id,
                data,
            } => {
                info!(
                    %executor_id,
                    %agent_id,
                    bytes = data.len(),
                    "framework message"
                );
            }
            Event::Disconnected => warn!("disconnected from coordinator"),
            Event::AgentLost { agent_id } => {
                info!(%agent_id, "agent lost");
            }
            Event::ExecutorLost {
                executor_id,
                agent_id,
                exit_status,
            } => {
                info!(
                    %executor_id,
                    %agent_id,
                    exit_status,
                    "executor lost"
                );
            }
            Event::Error { message } => error!(%message, "coordinator error"),
        }
    }

    fn on_registered(&mut self, framework_id: FrameworkId, master: String) {
        info!(%framework_id, %master, "framework registered");
        self.framework_id = Some(framework_id);
        self.phase = Phase::Registered;

        // Declarative hint, not a guarantee.
        self.driver.request_resources(vec![
            Resource::cpus(REQUEST_CPUS),
            Resource::mem(REQUEST_MEM),
            Resource::disk(REQUEST_DISK),
            Resource::port_range(REQUEST_PORT_BEGIN, REQUEST_PORT_END),
        ]);
    }

    fn on_offers(&mut self, offers: Vec<Offer>) {
        if self.phase == Phase::Registered {
            self.phase = Phase::Running { ready: false };
        }

        for offer in offers {
            self.evaluate(offer);
        }

        if policy::has_reached_target(&self.tasks, self.config.target_replicas)
            && self.gate.fire()
        {
            self.phase = Phase::Running { ready: true };
            info!(
                replicas = self.tasks.len(),
                workload = %self.config.workload_name,
                "replica target reached — cluster initialized"
            );
        }
    }

    /// Evaluate a single offer. Failures are contained to this offer:
    /// they never abort the batch and never retry.
    fn evaluate(&mut self, offer: Offer) {
        let Some(framework_id) = self.framework_id.clone() else {
            self.decline(&offer, DeclineReason::NotRegistered);
            return;
        };

        if !policy::is_acceptable(&offer, &self.tasks) {
            self.decline(&offer, DeclineReason::DuplicateHost);
            return;
        }

        if policy::has_reached_target(&self.tasks, self.config.target_replicas) {
            self.decline(&offer, DeclineReason::TargetReached);
            return;
        }

        match self.builder.build(&offer, &framework_id) {
            Ok(spec) => {
                info!(
                    host = %offer.hostname,
                    task_id = %spec.id,
                    "accepted offer — launching task"
                );
                let task = Task::new(offer.hostname.clone(), spec.id.clone());
                self.driver
                    .launch_tasks(std::slice::from_ref(&offer.id), vec![spec]);
                self.tasks.insert(task);
            }
            Err(err) => self.decline(&offer, DeclineReason::Build(err)),
        }
    }

    fn decline(&self, offer: &Offer, reason: DeclineReason) {
        match &reason {
            DeclineReason::NotRegistered => warn!(
                offer_id = %offer.id,
                "declined offer: received before registration"
            ),
            DeclineReason::DuplicateHost => info!(
                host = %offer.hostname,
                workload = %self.config.workload_name,
                "declined offer: host already runs a replica"
            ),
            DeclineReason::TargetReached => info!(
                host = %offer.hostname,
                target = self.config.target_replicas,
                "declined offer: replica target already met"
            ),
            DeclineReason::Build(BuildError::InsufficientPorts) => info!(
                host = %offer.hostname,
                "declined offer: fewer than two usable ports"
            ),
            DeclineReason::Build(BuildError::HostResolutionFailed { host }) => {
                error!(%host, "declined offer: host resolution failed")
            }
        }
        self.driver.decline_offer(&offer.id);
    }
}
