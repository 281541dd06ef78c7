//! skiff-scheduler — the offer-evaluation and task-placement engine.
//!
//! Given a stream of resource offers from a fleet of worker hosts, the
//! scheduler decides which offers to accept, carves accepted offers
//! into concrete task launches, and tracks which hosts already run a
//! workload replica. Once the replica target is reached it fires a
//! single-shot readiness gate.
//!
//! # Architecture
//!
//! ```text
//! SchedulerStateMachine::handle(Event)
//!   ├── policy        (accept/decline predicate, target check)
//!   ├── TaskBuilder   (resource slicing + launch spec assembly)
//!   │     ├── Resolve (hostname → address, containerized path only)
//!   │     └── Clock   (task-id timestamps)
//!   ├── Driver        (outbound: request/decline/launch/stop)
//!   └── ReadyGate     (fires once at the replica target)
//! ```
//!
//! The state machine is synchronous: the session layer delivers one
//! event at a time and each is processed to completion. All network
//! I/O lives behind the `Driver` and `Resolve` seams.

pub mod builder;
pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod event;
pub mod gate;
pub mod policy;
pub mod resolve;
pub mod scheduler;

pub use builder::TaskBuilder;
pub use clock::{Clock, SystemClock};
pub use config::{Config, LaunchMode};
pub use driver::Driver;
pub use error::BuildError;
pub use event::{Event, TaskStatus};
pub use gate::ReadyGate;
pub use resolve::{DnsResolver, Resolve, ResolveError};
pub use scheduler::{Phase, SchedulerStateMachine};
