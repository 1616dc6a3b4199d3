//! Lighting state and fade requests

use smart_leds::RGB8;

use crate::parameter::LightParameter;

/// Values of all five lighting channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LightingState {
    /// Master brightness (0-255)
    pub brightness: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl LightingState {
    /// All channels at zero
    pub const OFF: Self = Self::new(0, 0, 0, 0, 0);

    pub const fn new(brightness: u8, red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            brightness,
            red,
            green,
            blue,
            white,
        }
    }

    /// Build a state from an RGB color plus white and brightness channels
    pub const fn from_rgb(brightness: u8, color: RGB8, white: u8) -> Self {
        Self::new(brightness, color.r, color.g, color.b, white)
    }

    /// RGB part of the state
    pub const fn rgb(&self) -> RGB8 {
        RGB8 {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Channel value carried by `parameter`.
    ///
    /// Returns `None` for [`LightParameter::Duration`], which is not a channel.
    pub const fn channel(&self, parameter: LightParameter) -> Option<u8> {
        match parameter {
            LightParameter::Red => Some(self.red),
            LightParameter::Green => Some(self.green),
            LightParameter::Blue => Some(self.blue),
            LightParameter::White => Some(self.white),
            LightParameter::Brightness => Some(self.brightness),
            LightParameter::Duration => None,
        }
    }

    /// Apply `f` to every channel pair of `self` and `other`
    pub(crate) fn zip_with(&self, other: &Self, mut f: impl FnMut(u8, u8) -> u8) -> Self {
        Self {
            brightness: f(self.brightness, other.brightness),
            red: f(self.red, other.red),
            green: f(self.green, other.green),
            blue: f(self.blue, other.blue),
            white: f(self.white, other.white),
        }
    }
}

/// Request to fade toward `target` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeRequest {
    pub target: LightingState,
    /// Total fade duration in milliseconds (0 = instant)
    pub duration_ms: u32,
}

impl FadeRequest {
    pub const fn new(target: LightingState, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    /// Request that applies `target` without a transition
    pub const fn immediate(target: LightingState) -> Self {
        Self::new(target, 0)
    }
}
