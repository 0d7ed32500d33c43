//! Hobby servo pulse timing
//!
//! Standard servos expect a 50 Hz frame with a 0.5-2.5 ms pulse:
//! - 0° = 500 µs
//! - 90° = 1500 µs
//! - 180° = 2500 µs

/// Servo frame period in microseconds (50 Hz)
pub const SERVO_PERIOD_US: u16 = 20_000;

/// Pulse width at the centre position (90°)
pub const SERVO_CENTER_US: u16 = 1_500;

/// Pulse width span covering 0-180°
pub const SERVO_RANGE_US: u16 = 2_000;

/// Maximum servo angle in degrees
pub const SERVO_MAX_DEGREES: u8 = 180;

/// Convert a servo angle to a pulse width in microseconds
///
/// Angles above 180° saturate.
pub fn servo_pulse_us(degrees: u8) -> u16 {
    let degrees = degrees.min(SERVO_MAX_DEGREES) as u32;
    let min = (SERVO_CENTER_US - SERVO_RANGE_US / 2) as u32;

    (min + degrees * SERVO_RANGE_US as u32 / SERVO_MAX_DEGREES as u32) as u16
}
