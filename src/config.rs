use embassy_time::{Duration, Instant};

use crate::ParameterChannel;
use crate::engine::FadeEngine;
use crate::error::FadeError;
use crate::state::{FadeRequest, LightingState};
use crate::tick_scheduler::DEFAULT_TICK_INTERVAL;

/// Default startup transition duration in seconds
pub const DEFAULT_AUTO_APPLY_DURATION_SECS: u16 = 10;

/// Longest startup transition accepted, in seconds
pub const MAX_AUTO_APPLY_DURATION_SECS: u16 = 300;

/// Startup scene transition settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoApplyConfig {
    /// Fade to the first scene at boot
    pub enabled: bool,
    /// Transition duration in seconds
    pub duration_secs: u16,
}

impl Default for AutoApplyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: DEFAULT_AUTO_APPLY_DURATION_SECS,
        }
    }
}

impl AutoApplyConfig {
    /// Fade request for `scene`, or `None` when auto-apply is disabled
    pub fn request(&self, scene: LightingState) -> Result<Option<FadeRequest>, FadeError> {
        if self.duration_secs > MAX_AUTO_APPLY_DURATION_SECS {
            return Err(FadeError::InvalidArgument);
        }
        if !self.enabled {
            return Ok(None);
        }
        Ok(Some(FadeRequest::new(
            scene,
            u32::from(self.duration_secs) * 1000,
        )))
    }

    /// Fade from darkness to `scene` at boot.
    ///
    /// Lights are assumed off at power-up, so `current` is seeded with
    /// [`LightingState::OFF`] before the fade starts. Returns whether a fade
    /// was started.
    pub fn apply<C: ParameterChannel>(
        &self,
        engine: &mut FadeEngine<C>,
        scene: LightingState,
        now: Instant,
    ) -> Result<bool, FadeError> {
        let Some(request) = self.request(scene)? else {
            log::info!("fade: auto-apply is disabled");
            return Ok(false);
        };

        log::info!("fade: auto-applying scene over {}s", self.duration_secs);
        engine.set_current(LightingState::OFF);
        engine.start(request, now)?;
        Ok(true)
    }
}

/// Configuration for the fade controller
#[derive(Debug, Clone, Copy)]
pub struct FaderConfig {
    /// Interval between engine ticks
    pub tick_interval: Duration,
    pub auto_apply: AutoApplyConfig,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            auto_apply: AutoApplyConfig::default(),
        }
    }
}
