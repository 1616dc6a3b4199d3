//! Fade Transition Engine
//!
//! Turns a [`FadeRequest`] into a [`FadePlan`], sends the first segment right
//! away and then advances through the remaining segments from a periodic
//! [`FadeEngine::tick`]. The engine never interpolates light output itself:
//! actuators fade locally toward each segment target.
//!
//! The engine is time-based, not count-based. Ticking more often only
//! tightens segment-boundary latency.

use embassy_time::Instant;

use crate::ParameterChannel;
use crate::command::CommandSet;
use crate::error::FadeResult;
use crate::plan::{FadePlan, Segment};
use crate::progress::ProgressSnapshot;
use crate::state::{FadeRequest, LightingState};

/// Observable state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FadeState {
    /// No active fade
    #[default]
    Idle = 0,
    /// Fade in progress
    Fading = 1,
    /// Fade just finished, decays to `Idle` on the next tick
    Complete = 2,
}

/// Progress of a running fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFade {
    pub plan: FadePlan,
    /// Segment whose command set was sent last
    pub segment_index: u32,
    pub segment_started_at: Instant,
    pub fade_started_at: Instant,
}

impl ActiveFade {
    /// Segment currently being faded by the actuators
    pub fn segment(&self) -> Option<Segment> {
        self.plan.segment(self.segment_index)
    }
}

/// Engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Fading(ActiveFade),
    /// Carries the finished plan for progress reporting
    Complete(FadePlan),
}

impl EngineState {
    pub const fn tag(&self) -> FadeState {
        match self {
            Self::Idle => FadeState::Idle,
            Self::Fading(_) => FadeState::Fading,
            Self::Complete(_) => FadeState::Complete,
        }
    }
}

/// Segmented fade engine
///
/// Mutating methods are meant to run on a single owner, typically the
/// [`TickScheduler`](crate::TickScheduler). Wrap the engine in a
/// [`SharedFadeEngine`](crate::SharedFadeEngine) when several contexts need it.
pub struct FadeEngine<C: ParameterChannel> {
    channel: C,
    state: EngineState,
    /// What the actuators are fading toward or holding
    current: LightingState,
    /// Most recently started fade, kept for progress reporting once idle
    last_plan: Option<FadePlan>,
}

impl<C: ParameterChannel> FadeEngine<C> {
    /// Create an idle engine with an all-off `current` state
    pub const fn new(channel: C) -> Self {
        Self {
            channel,
            state: EngineState::Idle,
            current: LightingState::OFF,
            last_plan: None,
        }
    }

    /// Start a fade from `current` toward the requested target.
    ///
    /// Any running fade is discarded; the new fade starts from the last
    /// segment target sent, not from the actuators' live position. If the
    /// first command set cannot be sent the engine is left `Idle`.
    pub fn start(&mut self, request: FadeRequest, now: Instant) -> FadeResult {
        let plan = FadePlan::from_request(self.current, &request);
        log::info!(
            "fade: starting {}ms ({} segment(s)) to R={} G={} B={} W={} Br={}",
            request.duration_ms,
            plan.segment_count(),
            request.target.red,
            request.target.green,
            request.target.blue,
            request.target.white,
            request.target.brightness
        );

        let Some(first) = plan.segment(0) else {
            self.state = EngineState::Idle;
            return Ok(());
        };

        if let Err(err) = CommandSet::from_segment(&first).emit(&mut self.channel) {
            log::warn!("fade: failed to send first segment: {}", err);
            self.state = EngineState::Idle;
            return Err(err.into());
        }

        self.state = EngineState::Fading(ActiveFade {
            plan,
            segment_index: 0,
            segment_started_at: now,
            fade_started_at: now,
        });
        self.current = first.target;
        self.last_plan = Some(plan);

        Ok(())
    }

    /// Apply `state` without a transition
    pub fn apply_immediate(&mut self, state: LightingState, now: Instant) -> FadeResult {
        self.start(FadeRequest::immediate(state), now)
    }

    /// Advance the state machine.
    ///
    /// Call this periodically. Send failures while advancing are logged and
    /// retried on the next tick; the fade is never dropped.
    pub fn tick(&mut self, now: Instant) -> FadeState {
        match self.state {
            EngineState::Idle => {}
            EngineState::Complete(_) => {
                self.state = EngineState::Idle;
            }
            EngineState::Fading(active) => self.advance(active, now),
        }
        self.state.tag()
    }

    /// Move to the next segment once the active one has run its course
    fn advance(&mut self, active: ActiveFade, now: Instant) {
        let Some(segment) = active.segment() else {
            self.state = EngineState::Complete(active.plan);
            return;
        };
        if now.saturating_duration_since(active.segment_started_at) < segment.duration() {
            return;
        }

        let next_index = active.segment_index + 1;
        let Some(next) = active.plan.segment(next_index) else {
            log::debug!("fade: all {} segment(s) complete", active.plan.segment_count());
            self.state = EngineState::Complete(active.plan);
            return;
        };

        log::debug!(
            "fade: starting segment {}/{}: {}ms",
            next_index + 1,
            active.plan.segment_count(),
            next.duration_ms
        );

        match CommandSet::from_segment(&next).emit(&mut self.channel) {
            Ok(()) => {
                self.state = EngineState::Fading(ActiveFade {
                    segment_index: next_index,
                    segment_started_at: now,
                    ..active
                });
                self.current = next.target;
            }
            Err(err) => {
                log::warn!(
                    "fade: failed to send segment {}, retrying: {}",
                    next_index + 1,
                    err
                );
            }
        }
    }

    /// Current state and progress snapshot
    pub fn progress(&self, now: Instant) -> (FadeState, ProgressSnapshot) {
        (
            self.state.tag(),
            ProgressSnapshot::capture(&self.state, self.last_plan.as_ref(), self.current, now),
        )
    }

    /// Check if a fade is in progress
    pub const fn is_active(&self) -> bool {
        matches!(self.state, EngineState::Fading(_))
    }

    /// Stop tracking the running fade.
    ///
    /// Nothing is sent: actuators keep fading toward the last target they
    /// received on their own timers.
    pub fn abort(&mut self) {
        if self.is_active() {
            log::info!("fade: aborted");
        }
        self.state = EngineState::Idle;
    }

    /// Last transmitted or seeded lighting state
    pub const fn current(&self) -> LightingState {
        self.current
    }

    /// Seed the known lighting state without transmitting anything
    pub fn set_current(&mut self, state: LightingState) {
        log::info!(
            "fade: current state set: Br={} R={} G={} B={} W={}",
            state.brightness,
            state.red,
            state.green,
            state.blue,
            state.white
        );
        self.current = state;
    }

    /// Plan of the most recently started fade, if any
    pub const fn last_plan(&self) -> Option<&FadePlan> {
        self.last_plan.as_ref()
    }

    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    pub const fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Tear down the engine and hand back its channel
    pub fn into_channel(self) -> C {
        self.channel
    }
}
