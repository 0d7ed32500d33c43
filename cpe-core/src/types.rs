//! Command vocabulary for the motor board
//!
//! Every enum here is a plain selector; none of them carry state between
//! calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor output on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotorChannel {
    M1,
    M2,
}

/// Rotation sense of a single motor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotorDirection {
    #[default]
    Forward,
    Backward,
}

impl MotorDirection {
    /// The opposite direction
    pub const fn reversed(self) -> Self {
        match self {
            MotorDirection::Forward => MotorDirection::Backward,
            MotorDirection::Backward => MotorDirection::Forward,
        }
    }
}

/// Pivot turn: one wheel held, the other driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

/// In-place spin: both wheels driven in opposite senses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpinDirection {
    Left,
    Right,
}

/// Servo header on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServoChannel {
    SV1,
    SV2,
}

/// Multiplexed input of the external I2C ADC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

/// Number of ADC inputs
pub const ADC_CHANNELS: usize = 8;

/// ADC channel index outside 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAdcChannel(pub u8);

impl AdcChannel {
    /// All channels in index order
    pub const ALL: [AdcChannel; ADC_CHANNELS] = [
        AdcChannel::Adc0,
        AdcChannel::Adc1,
        AdcChannel::Adc2,
        AdcChannel::Adc3,
        AdcChannel::Adc4,
        AdcChannel::Adc5,
        AdcChannel::Adc6,
        AdcChannel::Adc7,
    ];

    /// Channel index as sent to the ADC (0-7)
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AdcChannel {
    type Error = InvalidAdcChannel;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        AdcChannel::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidAdcChannel(index))
    }
}

impl From<AdcChannel> for u8 {
    fn from(channel: AdcChannel) -> u8 {
        channel.index()
    }
}
