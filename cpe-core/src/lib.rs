//! Board-agnostic core logic for the CPE PNU motor board
//!
//! This crate contains everything that does not touch a bus or a pin:
//!
//! - Command vocabulary (motor, turn, spin, servo and ADC selectors)
//! - Board pin table with validation
//! - Speed and angle range mapping
//! - Control traits implemented by the driver

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod scale;
pub mod traits;
pub mod types;

pub use config::{BoardConfig, ConfigError, MotorDrive, MotorPins};
pub use types::{
    AdcChannel, InvalidAdcChannel, MotorChannel, MotorDirection, ServoChannel, SpinDirection,
    TurnDirection,
};
