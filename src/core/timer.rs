// Cooperative countdown timers
//
// Replaces "wait, then do something" callbacks with explicit state that the
// owner advances once per tick. A timer fires at most once per start.

use std::time::Duration;

/// A countdown advanced explicitly by its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CooperativeTimer {
    active: bool,
    remaining: Duration,
}

impl CooperativeTimer {
    /// An inactive timer
    pub const fn idle() -> Self {
        Self {
            active: false,
            remaining: Duration::ZERO,
        }
    }

    /// A timer that is already counting down from `duration`
    pub fn started(duration: Duration) -> Self {
        let mut timer = Self::idle();
        timer.start(duration);
        timer
    }

    /// Start (or restart) the countdown
    pub fn start(&mut self, duration: Duration) {
        self.active = true;
        self.remaining = duration;
    }

    /// Deactivate without firing
    pub fn cancel(&mut self) {
        self.active = false;
        self.remaining = Duration::ZERO;
    }

    /// Advance by `elapsed`. Returns true on the tick the countdown reaches zero.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.active {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.active = false;
            return true;
        }
        false
    }

    /// Whether the countdown is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time left before expiry (zero when inactive)
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = CooperativeTimer::idle();
        assert!(!timer.advance(Duration::from_secs(10)));
        assert!(!timer.is_active());
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut timer = CooperativeTimer::started(Duration::from_millis(150));

        assert!(!timer.advance(Duration::from_millis(50)));
        assert!(!timer.advance(Duration::from_millis(50)));
        assert!(timer.advance(Duration::from_millis(50)));
        assert!(!timer.is_active());

        // Already expired
        assert!(!timer.advance(Duration::from_millis(50)));
    }

    #[test]
    fn test_overshoot_clamps_at_zero() {
        let mut timer = CooperativeTimer::started(Duration::from_millis(100));
        assert!(timer.advance(Duration::from_millis(400)));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_restart_resets_remaining() {
        let mut timer = CooperativeTimer::started(Duration::from_millis(100));
        timer.advance(Duration::from_millis(80));
        timer.start(Duration::from_millis(100));
        assert_eq!(timer.remaining(), Duration::from_millis(100));
        assert!(!timer.advance(Duration::from_millis(80)));
    }

    #[test]
    fn test_cancel_does_not_fire() {
        let mut timer = CooperativeTimer::started(Duration::from_millis(100));
        timer.cancel();
        assert!(!timer.advance(Duration::from_millis(200)));
        assert!(!timer.is_active());
    }
}
