//! Task-build failures.
//!
//! Every failure here means "decline the offer, log, move on" — never
//! retried, never fatal to the process, never propagated past the
//! offer being evaluated.

use thiserror::Error;

use crate::resolve::ResolveError;

/// Why an accepted offer could not be turned into a task launch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The offer did not carry two usable ports for the workload's
    /// client and transport connections.
    #[error("offer did not contain two usable ports")]
    InsufficientPorts,

    /// Name lookup failed for the master, DNS, or target host.
    #[error("could not resolve host {host}")]
    HostResolutionFailed { host: String },
}

impl From<ResolveError> for BuildError {
    fn from(err: ResolveError) -> Self {
        BuildError::HostResolutionFailed { host: err.host }
    }
}
