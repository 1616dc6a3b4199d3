#![no_std]

pub mod channel;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event_id;
pub mod math8;
pub mod parameter;
pub mod plan;
pub mod progress;
pub mod shared;
pub mod state;
pub mod tick_scheduler;

pub use channel::ParameterQueue;
pub use clock::{Clock, SystemClock};
pub use command::CommandSet;
pub use config::{AutoApplyConfig, FaderConfig};
pub use engine::{EngineState, FadeEngine, FadeState};
pub use error::{ChannelError, FadeError, FadeResult};
pub use event_id::{EventIdCodec, EventTransport, LccEventChannel};
pub use parameter::{LightParameter, ParameterEvent};
pub use plan::{FadePlan, MAX_SEGMENT_MS, Segment};
pub use progress::ProgressSnapshot;
pub use shared::SharedFadeEngine;
pub use state::{FadeRequest, LightingState};
pub use tick_scheduler::{TickResult, TickScheduler};

pub use embassy_time::{Duration, Instant};

/// Abstract parameter bus
///
/// Implement this trait on top of the node's transport. Sends must preserve
/// order and must not block: report backpressure as an error instead.
pub trait ParameterChannel {
    /// Send one parameter update to the actuators
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError>;
}

impl<C: ParameterChannel + ?Sized> ParameterChannel for &mut C {
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError> {
        (**self).send(parameter, value)
    }
}
