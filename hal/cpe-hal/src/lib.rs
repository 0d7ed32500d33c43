//! CPE PNU Hardware Abstraction Layer
//!
//! This crate defines the pin-level surface the motor board driver talks
//! to. On a micro:bit host the board is driven through pin-numbered
//! primitives (digital write, analog write, servo write); [`PinIo`] keeps
//! that shape so the driver can be tested against a mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  cpe-drivers (MotorBoardDriver)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cpe-hal (this crate - PinIo)           │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   HalPins     │       │  host-native  │
//! │ (embedded-hal)│       │  PinIo impl   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`gpio`] - Pin numbers and logic levels
//! - [`pins`] - The [`PinIo`] trait
//! - [`servo`] - Servo pulse timing
//! - [`adapter`] - [`HalPins`], a `PinIo` over embedded-hal outputs

#![no_std]
#![deny(unsafe_code)]

pub mod adapter;
pub mod gpio;
pub mod pins;
pub mod servo;

// Re-export key types at crate root for convenience
pub use adapter::{HalPinError, HalPins, PinMap, ANALOG_MAX};
pub use gpio::{Level, PinId};
pub use pins::PinIo;
