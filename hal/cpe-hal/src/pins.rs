//! Host pin I/O abstraction
//!
//! The host board exposes its pins through a small set of primitives
//! addressed by pin number. This trait mirrors that surface so drivers can
//! be written once and run against real hardware or a test double.

use crate::gpio::{Level, PinId};

/// Pin-addressed output primitives provided by the host board
///
/// Implementations own every pin they can address. Writing to a pin the
/// implementation does not control should return an error rather than
/// silently succeeding.
pub trait PinIo {
    /// Error type for pin operations
    type Error;

    /// Drive a digital output to the given level
    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Write an analog (PWM) value
    ///
    /// # Arguments
    /// * `pin` - Target pin
    /// * `value` - Duty value in 0..=1023
    fn analog_write(&mut self, pin: PinId, value: u16) -> Result<(), Self::Error>;

    /// Position a servo on the given pin
    ///
    /// The implementation converts degrees (0-180) into a pulse width.
    fn servo_write(&mut self, pin: PinId, degrees: u8) -> Result<(), Self::Error>;

    /// Override the servo pulse width in microseconds
    ///
    /// A width of 0 releases the servo: no more control pulses are sent
    /// and the horn turns freely.
    fn servo_set_pulse(&mut self, pin: PinId, width_us: u16) -> Result<(), Self::Error>;
}

impl<T: PinIo + ?Sized> PinIo for &mut T {
    type Error = T::Error;

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        T::digital_write(self, pin, level)
    }

    fn analog_write(&mut self, pin: PinId, value: u16) -> Result<(), Self::Error> {
        T::analog_write(self, pin, value)
    }

    fn servo_write(&mut self, pin: PinId, degrees: u8) -> Result<(), Self::Error> {
        T::servo_write(self, pin, degrees)
    }

    fn servo_set_pulse(&mut self, pin: PinId, width_us: u16) -> Result<(), Self::Error> {
        T::servo_set_pulse(self, pin, width_us)
    }
}
