//! Request sequencing
//!
//! Every outgoing request of one kind gets the next id from its sequence. A response is
//! applied only when its id is still the latest issued, which makes the most recent
//! request authoritative no matter in which order responses resolve.

/// Monotonic request id generator for one request kind
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id, superseding every earlier one
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Supersede every outstanding id without issuing a request
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    pub fn is_latest(&self, request_id: u64) -> bool {
        self.latest == request_id
    }
}
