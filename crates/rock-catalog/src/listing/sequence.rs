//! Request sequence numbers for discarding stale responses.

use serde::Serialize;

/// Identifies one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket issuer. Only the most recently issued ticket is current.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    /// Supersede any outstanding ticket without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
