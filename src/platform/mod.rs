//! Platform abstraction layer
//!
//! Native pacing for the fixed-tick loop. Input and drawing belong to the
//! host windowing layer and reach the simulation as
//! [`TickInput`](crate::sim::TickInput) snapshots and
//! [`RenderTarget`](crate::render::RenderTarget) calls.

use std::time::{Duration, Instant};

/// Fixed-rate tick pacer: one tick per frame, never catches up
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next: Option<Instant>,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval: Self::interval_for(tick_rate),
            next: None,
        }
    }

    /// Duration of one tick at `tick_rate` ticks per second (at least 1 Hz)
    pub fn interval_for(tick_rate: u32) -> Duration {
        Duration::from_secs(1) / tick_rate.max(1)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep until the next tick is due.
    ///
    /// A late frame starts the next interval from now instead of queueing
    /// extra ticks.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let due = match self.next {
            Some(due) if due > now => {
                std::thread::sleep(due - now);
                due
            }
            _ => now,
        };
        self.next = Some(due + self.interval);
    }
}
