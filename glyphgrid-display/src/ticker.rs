//! Injected tick scheduling boundary
//!
//! The engine is invoked once per tick by an external periodic
//! scheduler and must complete well within the tick interval. This
//! trait decouples sessions from any concrete platform timer: hosts
//! provide an implementation over their scheduler, tests crank a
//! [`ManualTicker`] by hand. Cancelling the source stops rendering.

/// Default tick period in milliseconds
pub const DEFAULT_TICK_MS: u32 = 200;

/// Periodic tick provider with non-blocking poll and cancellation
pub trait TickSource {
    /// Consume one pending tick, if any elapsed since the last poll
    fn poll_tick(&mut self) -> bool;

    /// Stop the tick stream; later polls return false
    fn cancel(&mut self);

    /// Whether the source is still producing ticks
    fn is_active(&self) -> bool;
}

/// Hand-cranked tick source for tests and host tools
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    pending: u32,
    cancelled: bool,
}

impl ManualTicker {
    /// Ticker with no pending ticks
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick
    pub fn fire(&mut self) {
        if !self.cancelled {
            self.pending += 1;
        }
    }

    /// Queue several ticks at once
    pub fn fire_n(&mut self, count: u32) {
        if !self.cancelled {
            self.pending += count;
        }
    }
}

impl TickSource for ManualTicker {
    fn poll_tick(&mut self) -> bool {
        if self.cancelled || self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        !self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fired_ticks_are_consumed_once() {
        let mut ticker = ManualTicker::new();
        assert!(!ticker.poll_tick());
        ticker.fire_n(2);
        assert!(ticker.poll_tick());
        assert!(ticker.poll_tick());
        assert!(!ticker.poll_tick());
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut ticker = ManualTicker::new();
        ticker.fire();
        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.poll_tick());
        ticker.fire();
        assert!(!ticker.poll_tick());
    }
}
