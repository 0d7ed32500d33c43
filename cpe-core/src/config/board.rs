//! Board pin table
//!
//! Each logical output owns a fixed pin for the lifetime of the driver.
//! The table is data rather than constants so a driver can be pointed at a
//! board revision or a mock without code changes.

use cpe_hal::{Level, PinId, PinMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{MotorChannel, MotorDirection, ServoChannel};

/// Default 7-bit address of the on-board ADC (72 decimal)
pub const DEFAULT_ADC_ADDRESS: u8 = 0x48;

/// Highest valid 7-bit I2C address
const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Pins of one motor half-bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorPins {
    /// Direction/enable line
    pub enable: PinId,
    /// Speed line (10-bit PWM)
    pub pwm: PinId,
    /// Enable level that drives this motor forward
    ///
    /// The two half-bridges are wired mirror-image, so M1 and M2 use
    /// opposite levels for the same direction.
    pub forward_level: Level,
}

impl MotorPins {
    /// Enable level for a direction
    pub fn level_for(&self, direction: MotorDirection) -> Level {
        match direction {
            MotorDirection::Forward => self.forward_level,
            MotorDirection::Backward => !self.forward_level,
        }
    }
}

/// Resolved pin writes for one motor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorDrive {
    pub enable: PinId,
    pub level: Level,
    pub pwm: PinId,
}

/// Board configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin is assigned to more than one output
    DuplicatePin(PinId),
    /// Pin does not exist on the edge connector
    InvalidPin(PinId),
    /// ADC address does not fit in 7 bits
    InvalidI2cAddress(u8),
}

/// Complete board pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Motor 1 half-bridge
    pub m1: MotorPins,
    /// Motor 2 half-bridge
    pub m2: MotorPins,
    /// Servo 1 signal pin
    pub sv1: PinId,
    /// Servo 2 signal pin
    pub sv2: PinId,
    /// 7-bit I2C address of the ADC
    #[cfg_attr(feature = "serde", serde(default = "default_adc_address"))]
    pub adc_address: u8,
}

#[cfg(feature = "serde")]
fn default_adc_address() -> u8 {
    DEFAULT_ADC_ADDRESS
}

impl BoardConfig {
    /// Pin table of the CPE PNU board
    pub const CPE_PNU: Self = Self {
        m1: MotorPins {
            enable: PinId::P13,
            pwm: PinId::P14,
            forward_level: Level::High,
        },
        m2: MotorPins {
            enable: PinId::P15,
            pwm: PinId::P16,
            forward_level: Level::Low,
        },
        sv1: PinId::P8,
        sv2: PinId::P12,
        adc_address: DEFAULT_ADC_ADDRESS,
    };

    /// Pins of a motor channel
    pub fn motor(&self, channel: MotorChannel) -> &MotorPins {
        match channel {
            MotorChannel::M1 => &self.m1,
            MotorChannel::M2 => &self.m2,
        }
    }

    /// Signal pin of a servo channel
    pub fn servo(&self, channel: ServoChannel) -> PinId {
        match channel {
            ServoChannel::SV1 => self.sv1,
            ServoChannel::SV2 => self.sv2,
        }
    }

    /// Look up the writes for a (channel, direction) pair
    pub fn motor_drive(&self, channel: MotorChannel, direction: MotorDirection) -> MotorDrive {
        let pins = self.motor(channel);
        MotorDrive {
            enable: pins.enable,
            level: pins.level_for(direction),
            pwm: pins.pwm,
        }
    }

    /// All output pins, motors first
    pub fn pins(&self) -> [PinId; 6] {
        [
            self.m1.enable,
            self.m1.pwm,
            self.m2.enable,
            self.m2.pwm,
            self.sv1,
            self.sv2,
        ]
    }

    /// Pin map for the embedded-hal adapter
    pub fn pin_map(&self) -> PinMap {
        PinMap {
            m1_enable: self.m1.enable,
            m1_pwm: self.m1.pwm,
            m2_enable: self.m2.enable,
            m2_pwm: self.m2.pwm,
            sv1: self.sv1,
            sv2: self.sv2,
        }
    }

    /// Check that every output owns a distinct, existing pin
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.pins();

        for (i, pin) in pins.iter().enumerate() {
            if !pin.is_valid() {
                return Err(ConfigError::InvalidPin(*pin));
            }
            if pins[..i].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        if self.adc_address > MAX_I2C_ADDRESS {
            return Err(ConfigError::InvalidI2cAddress(self.adc_address));
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::CPE_PNU
    }
}
