//! Integer range mapping
//!
//! Speeds are given in percent and written as 10-bit duty values. All math
//! is integer-only and rounds to nearest.

/// Maximum speed in percent
pub const SPEED_MAX: u8 = 100;

/// Full-scale duty value for motor PWM
pub const DUTY_MAX: u16 = 1023;

/// Maximum servo angle in degrees
pub const DEGREE_MAX: u8 = 180;

/// Linearly map `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Rounds half away from zero. Values outside the input range extrapolate,
/// and results beyond the `i32` range saturate at `i32::MIN`/`i32::MAX`.
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    // Two 33-bit spans multiplied need 66 bits
    let in_span = in_max as i128 - in_min as i128;
    if in_span == 0 {
        return out_min;
    }

    let num = (value as i128 - in_min as i128) * (out_max as i128 - out_min as i128);
    let half = in_span.abs() / 2;
    let q = if (num < 0) == (in_span < 0) {
        (num.abs() + half) / in_span.abs()
    } else {
        -((num.abs() + half) / in_span.abs())
    };

    (out_min as i128 + q).clamp(i32::MIN as i128, i32::MAX as i128) as i32
}

/// Convert a speed percentage to a motor duty value
///
/// Speeds above 100% saturate. 0 → 0, 50 → 512, 100 → 1023.
pub fn speed_to_duty(speed: u8) -> u16 {
    let speed = speed.min(SPEED_MAX);
    map_range(speed as i32, 0, SPEED_MAX as i32, 0, DUTY_MAX as i32) as u16
}

/// Constrain a servo angle to 0-180°
pub fn clamp_degree(degrees: u8) -> u8 {
    degrees.min(DEGREE_MAX)
}
