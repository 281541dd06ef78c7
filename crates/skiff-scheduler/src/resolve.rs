//! Hostname resolution seam.
//!
//! The containerized launch path needs addresses for the master, the
//! optional DNS host, and the target host. Resolution is consumed as a
//! capability so tests can substitute a static table.

use std::net::{IpAddr, ToSocketAddrs};

use thiserror::Error;

/// Name lookup failed. All causes are treated uniformly as
/// unresolvable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not resolve host {host}")]
pub struct ResolveError {
    pub host: String,
}

/// Hostname → address lookup.
pub trait Resolve: Send + Sync {
    fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError>;
}

/// System resolver backed by the OS lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl Resolve for DnsResolver {
    fn resolve(&self, host: &str) -> Result<IpAddr, ResolveError> {
        (host, 0)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .map(|addr| addr.ip())
            .ok_or_else(|| ResolveError {
                host: host.to_string(),
            })
    }
}
