use embassy_time::Instant;

use crate::engine::EngineState;
use crate::math8::percent;
use crate::plan::FadePlan;
use crate::state::LightingState;

/// A point-in-time view of fade progress for UI consumption.
///
/// Progress spans the whole fade, across all segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    /// Final target of the fade (not the current segment's target)
    pub target: LightingState,
    /// Time since the fade started, clamped to `total_ms`
    pub elapsed_ms: u32,
    /// Requested fade duration
    pub total_ms: u32,
    /// Progress 0-100
    pub percent: u8,
}

impl ProgressSnapshot {
    /// Derive a snapshot from engine state.
    ///
    /// While idle, the last started fade's target and total are reported
    /// with zero progress. Before any fade, `current` is the target.
    #[allow(clippy::cast_possible_truncation)]
    pub fn capture(
        state: &EngineState,
        last_plan: Option<&FadePlan>,
        current: LightingState,
        now: Instant,
    ) -> Self {
        match state {
            EngineState::Idle => match last_plan {
                Some(plan) => Self {
                    target: plan.target(),
                    total_ms: plan.total_ms(),
                    ..Self::default()
                },
                None => Self {
                    target: current,
                    ..Self::default()
                },
            },
            EngineState::Complete(plan) => Self {
                target: plan.target(),
                elapsed_ms: plan.total_ms(),
                total_ms: plan.total_ms(),
                percent: 100,
            },
            EngineState::Fading(active) => {
                let total_ms = active.plan.total_ms();
                let elapsed = now
                    .saturating_duration_since(active.fade_started_at)
                    .as_millis()
                    .min(u64::from(total_ms)) as u32;

                Self {
                    target: active.plan.target(),
                    elapsed_ms: elapsed,
                    total_ms,
                    percent: percent(elapsed, total_ms),
                }
            }
        }
    }

    /// Whether the fade has reached its end
    pub const fn is_finished(&self) -> bool {
        self.percent >= 100
    }
}
