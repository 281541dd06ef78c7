//! Injectable clock for task-id timestamps.

use chrono::{DateTime, Utc};

/// Lexicographically sortable timestamp format for task ids,
/// e.g. `20260825T103000.000Z`.
pub const TASK_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";

/// Time source for task-id generation.
///
/// Injected into the task builder so tests can pin the timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
