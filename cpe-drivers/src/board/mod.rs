//! CPE PNU board driver
//!
//! Translates motor, servo and ADC commands into pin writes and one I2C
//! transaction. The driver holds no state besides the pin table: every
//! call runs to completion and leaves nothing pending.
//!
//! # Usage
//!
//! ```ignore
//! let mut board = MotorBoardDriver::with_default_pins(pins, i2c);
//!
//! board.set_motor(MotorChannel::M1, MotorDirection::Forward, 50)?;
//! board.spin(SpinDirection::Right, 100)?;
//! board.motor_stop()?;
//!
//! board.set_servo(ServoChannel::SV1, 90)?;
//! let raw = board.read_adc(AdcChannel::Adc3)?;
//! ```
//!
//! Pin errors surface as the `PinIo` error, bus errors as the I2C error,
//! both unmodified. A failed write aborts the rest of that command.
//!
//! A custom pin table is validated once in [`MotorBoardDriver::new`], so a
//! table that assigns one pin to two outputs never reaches the hardware.

mod adc;
mod motor;
mod servo;

use cpe_core::config::{BoardConfig, ConfigError};

/// Driver for the motor, servo and ADC outputs of the board
pub struct MotorBoardDriver<P, I> {
    pins: P,
    i2c: I,
    config: BoardConfig,
}

impl<P, I> MotorBoardDriver<P, I> {
    /// Create a new driver
    ///
    /// Fails if the pin table assigns a pin to more than one output, names
    /// a pin that does not exist, or has an ADC address wider than 7 bits.
    ///
    /// # Arguments
    /// - `pins`: Host pin primitives
    /// - `i2c`: Bus the ADC is attached to
    /// - `config`: Pin table of the board
    pub fn new(pins: P, i2c: I, config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { pins, i2c, config })
    }

    /// Create a driver using the stock CPE PNU pin table
    pub fn with_default_pins(pins: P, i2c: I) -> Self {
        Self {
            pins,
            i2c,
            config: BoardConfig::CPE_PNU,
        }
    }

    /// Get the pin table
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Release the pin and bus collaborators
    pub fn release(self) -> (P, I) {
        (self.pins, self.i2c)
    }
}
