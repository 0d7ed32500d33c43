//! Pin identifiers and logic levels
//!
//! Pins are addressed by their edge connector number, the same way the
//! host board labels them (P0-P20).

use core::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Edge connector pin number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PinId(pub u8);

impl PinId {
    pub const P8: Self = Self(8);
    pub const P12: Self = Self(12);
    pub const P13: Self = Self(13);
    pub const P14: Self = Self(14);
    pub const P15: Self = Self(15);
    pub const P16: Self = Self(16);

    /// Highest pin number on the edge connector
    pub const MAX: u8 = 20;

    /// Get the raw pin number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Check if the pin exists on the edge connector
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::MAX
    }
}

/// Digital logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level as the 0/1 value written to the pin
    pub const fn bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// Check if the level is high
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for embedded_hal::digital::PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => embedded_hal::digital::PinState::Low,
            Level::High => embedded_hal::digital::PinState::High,
        }
    }
}
