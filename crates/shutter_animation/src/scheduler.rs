//! Delayed message scheduling
//!
//! A widget that needs "do X after a delay unless something happens first"
//! owns one [`ScheduledMessage`]. Posting replaces whatever was pending,
//! removing is always safe, and the message fires from [`ScheduledMessage::advance`]
//! on the same loop that delivers input, so firing and removal never race.

/// A single pending message with a countdown
#[derive(Clone, Debug)]
pub struct ScheduledMessage<M> {
    pending: Option<Pending<M>>,
}

#[derive(Clone, Debug)]
struct Pending<M> {
    message: M,
    remaining_ms: u64,
}

impl<M> ScheduledMessage<M> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Post a message that fires on the next advance
    pub fn post(&mut self, message: M) {
        self.post_delayed(message, 0);
    }

    /// Post a message that fires once `delay_ms` has elapsed.
    ///
    /// Replaces any message still pending.
    pub fn post_delayed(&mut self, message: M, delay_ms: u64) {
        if self.pending.is_some() {
            tracing::trace!("replacing pending message");
        }
        self.pending = Some(Pending {
            message,
            remaining_ms: delay_ms,
        });
    }

    /// Remove the pending message, if any
    pub fn remove(&mut self) -> Option<M> {
        self.pending.take().map(|p| p.message)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending message fires
    pub fn remaining_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.remaining_ms)
    }

    /// Advance the countdown, returning the message if it is now due
    pub fn advance(&mut self, dt_ms: u64) -> Option<M> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(dt_ms);
        if pending.remaining_ms == 0 {
            self.remove()
        } else {
            None
        }
    }
}

impl<M> Default for ScheduledMessage<M> {
    fn default() -> Self {
        Self::new()
    }
}
