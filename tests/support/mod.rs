#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use myrtio_scene_fader::{ChannelError, Clock, Instant, LightParameter, ParameterChannel};

/// Channel that records every `(parameter, value)` pair it accepts
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub events: Vec<(u8, u8)>,
    /// Reject every send while set
    pub offline: bool,
    /// Number of sends accepted before reporting a full queue
    pub budget: Option<usize>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    /// Duration values of every command set sent so far
    pub fn durations(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter(|(parameter, _)| *parameter == LightParameter::Duration.as_raw())
            .map(|(_, value)| *value)
            .collect()
    }
}

impl ParameterChannel for RecordingChannel {
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError> {
        if self.offline {
            return Err(ChannelError::Offline);
        }
        if let Some(budget) = self.budget.as_mut() {
            if *budget == 0 {
                return Err(ChannelError::Full);
            }
            *budget -= 1;
        }
        self.events.push((parameter.as_raw(), value));
        Ok(())
    }
}

/// Clock driven by the test
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
    reads: AtomicU64,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self {
            millis: AtomicU64::new(0),
            reads: AtomicU64::new(0),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    /// Number of times `now` has been called
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Instant::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
