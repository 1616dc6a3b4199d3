//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing for the fade engine without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! ticks.

use embassy_time::{Duration, Instant};

use crate::ParameterChannel;
use crate::config::FaderConfig;
use crate::engine::{FadeEngine, FadeState};

/// Default tick interval.
///
/// Correctness does not depend on it; shorter intervals only tighten
/// segment-boundary latency.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Engine state after the tick.
    pub state: FadeState,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Owner of the fade engine that paces its ticks.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(FadeEngine::new(channel));
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct TickScheduler<C: ParameterChannel> {
    engine: FadeEngine<C>,
    next_tick: Instant,
    interval: Duration,
}

impl<C: ParameterChannel> TickScheduler<C> {
    /// Create a new scheduler ticking every [`DEFAULT_TICK_INTERVAL`].
    pub fn new(engine: FadeEngine<C>) -> Self {
        Self::with_interval(engine, DEFAULT_TICK_INTERVAL)
    }

    /// Create a new scheduler using the configured tick interval.
    pub fn from_config(engine: FadeEngine<C>, config: &FaderConfig) -> Self {
        Self::with_interval(engine, config.tick_interval)
    }

    /// Create a new scheduler with a custom tick interval.
    pub fn with_interval(engine: FadeEngine<C>, interval: Duration) -> Self {
        Self {
            engine,
            next_tick: Instant::from_millis(0),
            interval,
        }
    }

    /// Tick the engine and return timing information.
    ///
    /// If more than two intervals behind, the schedule restarts from `now`
    /// instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.interval * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let state = self.engine.tick(now);

        self.next_tick += self.interval;

        let sleep_duration = self.next_tick.saturating_duration_since(now);

        TickResult {
            state,
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &FadeEngine<C> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut FadeEngine<C> {
        &mut self.engine
    }

    pub fn into_engine(self) -> FadeEngine<C> {
        self.engine
    }
}
