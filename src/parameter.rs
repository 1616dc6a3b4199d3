//! Lighting parameters carried on the bus
//!
//! Every bus message sets exactly one parameter on the receiving actuators.
//! The numeric ids are part of the wire contract and must not be reordered.

const PARAMETER_ID_RED: u8 = 0;
const PARAMETER_ID_GREEN: u8 = 1;
const PARAMETER_ID_BLUE: u8 = 2;
const PARAMETER_ID_WHITE: u8 = 3;
const PARAMETER_ID_BRIGHTNESS: u8 = 4;
const PARAMETER_ID_DURATION: u8 = 5;

const PARAMETER_NAME_RED: &str = "red";
const PARAMETER_NAME_GREEN: &str = "green";
const PARAMETER_NAME_BLUE: &str = "blue";
const PARAMETER_NAME_WHITE: &str = "white";
const PARAMETER_NAME_BRIGHTNESS: &str = "brightness";
const PARAMETER_NAME_DURATION: &str = "duration";

/// Parameter index on the lighting bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LightParameter {
    Red = PARAMETER_ID_RED,
    Green = PARAMETER_ID_GREEN,
    Blue = PARAMETER_ID_BLUE,
    White = PARAMETER_ID_WHITE,
    Brightness = PARAMETER_ID_BRIGHTNESS,
    /// Transition duration in whole seconds. Receivers start fading on it.
    Duration = PARAMETER_ID_DURATION,
}

impl LightParameter {
    /// Number of distinct parameters
    pub const COUNT: usize = 6;

    /// Transmission order of a segment's command set
    pub const TRANSMIT_ORDER: [Self; Self::COUNT] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::White,
        Self::Brightness,
        Self::Duration,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PARAMETER_ID_RED => Self::Red,
            PARAMETER_ID_GREEN => Self::Green,
            PARAMETER_ID_BLUE => Self::Blue,
            PARAMETER_ID_WHITE => Self::White,
            PARAMETER_ID_BRIGHTNESS => Self::Brightness,
            PARAMETER_ID_DURATION => Self::Duration,
            _ => return None,
        })
    }

    /// Wire index of the parameter
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => PARAMETER_NAME_RED,
            Self::Green => PARAMETER_NAME_GREEN,
            Self::Blue => PARAMETER_NAME_BLUE,
            Self::White => PARAMETER_NAME_WHITE,
            Self::Brightness => PARAMETER_NAME_BRIGHTNESS,
            Self::Duration => PARAMETER_NAME_DURATION,
        }
    }
}

/// A single `(parameter, value)` bus message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterEvent {
    pub parameter: LightParameter,
    pub value: u8,
}

impl ParameterEvent {
    pub const fn new(parameter: LightParameter, value: u8) -> Self {
        Self { parameter, value }
    }
}
