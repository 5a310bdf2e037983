//! Timeout configuration for outbound requests.

use std::time::Duration;

/// Timeout configuration for a fetch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection establishment timeout.
    pub connect: Duration,
    /// Total operation timeout.
    pub total: Duration,
}

impl TimeoutConfig {
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout; connecting gets a quarter of it.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: total / 4,
            total,
        }
    }

    /// Short timeouts for liveness probes.
    pub fn health_probe() -> Self {
        Self::from_total(Duration::from_secs(5))
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            total: Duration::from_secs(8),
        }
    }
}
