//! Short-lived status line ("Saved locally", "Form cleared")

use std::time::{Duration, Instant};

/// Default time a status message stays visible
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_secs(2);

/// A message that disappears after a fixed duration.
///
/// Showing a new message replaces the old one and restarts the deadline, so
/// an earlier deadline can never clear a newer message.
#[derive(Debug, Clone)]
pub struct TransientStatus {
    message: Option<String>,
    expires_at: Option<Instant>,
    duration: Duration,
}

impl Default for TransientStatus {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION)
    }
}

impl TransientStatus {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: None,
            expires_at: None,
            duration,
        }
    }

    /// Show `message` from `now`, cancelling any pending clear
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.expires_at = Some(now + self.duration);
    }

    /// Drop the message once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|deadline| now >= deadline) {
            self.message = None;
            self.expires_at = None;
        }
    }

    /// The message visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&str> {
        match self.expires_at {
            Some(deadline) if now < deadline => self.message.as_deref(),
            _ => None,
        }
    }

    /// Time left before the message clears
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let start = Instant::now();
        let mut status = TransientStatus::default();
        status.show("Saved locally", start);

        assert_eq!(status.current(start), Some("Saved locally"));
        assert_eq!(
            status.current(start + Duration::from_millis(1999)),
            Some("Saved locally")
        );
        status.tick(start + Duration::from_secs(2));
        assert_eq!(status.current(start + Duration::from_secs(2)), None);
    }

    #[test]
    fn test_new_message_restarts_timer() {
        let start = Instant::now();
        let mut status = TransientStatus::default();
        status.show("Saved locally", start);
        status.show("Form cleared", start + Duration::from_millis(1500));

        // The first deadline has passed but the newer message is still shown
        let after_first = start + Duration::from_millis(2100);
        status.tick(after_first);
        assert_eq!(status.current(after_first), Some("Form cleared"));

        let after_second = start + Duration::from_millis(3600);
        status.tick(after_second);
        assert_eq!(status.current(after_second), None);
        assert_eq!(status.remaining(after_second), None);
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let mut status = TransientStatus::new(Duration::from_millis(500));
        assert_eq!(status.remaining(start), None);
        status.show("Saved locally", start);
        assert_eq!(
            status.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
    }
}
