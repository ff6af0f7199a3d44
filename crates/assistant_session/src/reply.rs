//! Pending reply
//!
//! `submit_message` computes the reply immediately but delivery waits out a
//! simulated "thinking" delay. The pending reply carries the classification,
//! the delay, and a cancellation token; the token is the hook for a host
//! that decides a closed widget should suppress its queued reply.

use std::time::Duration;

use dialogue_engine::Classification;
use tokio_util::sync::CancellationToken;

/// A reply that has been computed but not yet delivered.
#[derive(Debug, Clone)]
pub struct PendingReply {
    classification: Classification,
    delay: Duration,
    cancel: CancellationToken,
}

impl PendingReply {
    pub(crate) fn new(classification: Classification, delay: Duration) -> Self {
        Self {
            classification,
            delay,
            cancel: CancellationToken::new(),
        }
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub(crate) fn into_classification(self) -> Classification {
        self.classification
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Token that suppresses delivery when cancelled before the delay ends.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
