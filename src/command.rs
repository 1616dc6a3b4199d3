use crate::ParameterChannel;
use crate::error::ChannelError;
use crate::parameter::{LightParameter, ParameterEvent};
use crate::plan::Segment;
use crate::state::LightingState;

/// The six bus events that start one segment on the actuators
///
/// Channel values always precede the duration: receivers begin their local
/// fade as soon as the duration arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    pub target: LightingState,
    /// Transition duration in whole seconds
    pub duration_secs: u8,
}

impl CommandSet {
    pub const fn new(target: LightingState, duration_secs: u8) -> Self {
        Self {
            target,
            duration_secs,
        }
    }

    pub const fn from_segment(segment: &Segment) -> Self {
        Self::new(segment.target, segment.duration_secs())
    }

    /// Events in transmission order
    pub fn events(&self) -> [ParameterEvent; LightParameter::COUNT] {
        LightParameter::TRANSMIT_ORDER.map(|parameter| {
            let value = self
                .target
                .channel(parameter)
                .unwrap_or(self.duration_secs);
            ParameterEvent::new(parameter, value)
        })
    }

    /// Send the whole set through `channel`.
    ///
    /// Stops at the first failed send; the caller retransmits the full set.
    pub fn emit<C: ParameterChannel>(&self, channel: &mut C) -> Result<(), ChannelError> {
        for event in self.events() {
            channel.send(event.parameter, event.value)?;
        }

        log::debug!(
            "fade: sent R={} G={} B={} W={} Br={} Dur={}s",
            self.target.red,
            self.target.green,
            self.target.blue,
            self.target.white,
            self.target.brightness,
            self.duration_secs
        );
        Ok(())
    }
}
