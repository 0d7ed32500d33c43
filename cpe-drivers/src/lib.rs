//! Hardware driver for the CPE PNU robotics board
//!
//! This crate provides [`MotorBoardDriver`], which implements the control
//! traits defined in cpe-core on top of:
//!
//! - a [`cpe_hal::PinIo`] for motor enable/PWM lines and servo outputs
//! - an `embedded_hal::i2c::I2c` bus for the 8-channel ADC

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;

#[cfg(test)]
mod mock;

pub use board::MotorBoardDriver;
