//! LCC event id encoding for lighting parameters
//!
//! A parameter event travels as a 64-bit event id built from the node's
//! base id: `XX.XX.XX.XX.XX.XX.PP.VV`, where `PP` is the parameter index and
//! `VV` the value.

use crate::ParameterChannel;
use crate::error::ChannelError;
use crate::parameter::{LightParameter, ParameterEvent};

const BASE_MASK: u64 = 0xFFFF_FFFF_FFFF_0000;

/// Encodes and decodes parameter events for a single base event id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventIdCodec {
    base: u64,
}

impl EventIdCodec {
    /// The low two bytes of `base` are ignored.
    pub const fn new(base: u64) -> Self {
        Self {
            base: base & BASE_MASK,
        }
    }

    pub const fn base(&self) -> u64 {
        self.base
    }

    #[allow(clippy::cast_lossless)]
    pub const fn encode(&self, event: ParameterEvent) -> u64 {
        self.base | ((event.parameter.as_raw() as u64) << 8) | event.value as u64
    }

    /// Decode an event id produced for this base.
    ///
    /// Returns `None` for foreign ids and unknown parameter indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(&self, event_id: u64) -> Option<ParameterEvent> {
        if event_id & BASE_MASK != self.base {
            return None;
        }
        let parameter = LightParameter::from_raw((event_id >> 8) as u8)?;
        Some(ParameterEvent::new(parameter, event_id as u8))
    }
}

/// Transport able to produce a raw LCC event
pub trait EventTransport {
    fn send_event(&mut self, event_id: u64) -> Result<(), ChannelError>;
}

/// Parameter channel that publishes every event as an LCC event id
pub struct LccEventChannel<T: EventTransport> {
    codec: EventIdCodec,
    transport: T,
}

impl<T: EventTransport> LccEventChannel<T> {
    pub const fn new(base_event_id: u64, transport: T) -> Self {
        Self {
            codec: EventIdCodec::new(base_event_id),
            transport,
        }
    }

    pub const fn codec(&self) -> EventIdCodec {
        self.codec
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: EventTransport> ParameterChannel for LccEventChannel<T> {
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError> {
        let event_id = self.codec.encode(ParameterEvent::new(parameter, value));
        log::trace!("lcc: sending event {:016x} ({}={})", event_id, parameter.as_str(), value);
        self.transport.send_event(event_id)
    }
}
