//! Servo control trait

use crate::types::ServoChannel;

/// Two-channel hobby servo output
pub trait ServoControl {
    /// Error type for servo operations
    type Error;

    /// Move a servo to an angle in degrees (0-180)
    fn set_servo(&mut self, channel: ServoChannel, degrees: u8) -> Result<(), Self::Error>;

    /// Release a servo so it stops holding position
    ///
    /// Distinct from `set_servo(channel, 0)`, which holds at 0°.
    fn stop_servo(&mut self, channel: ServoChannel) -> Result<(), Self::Error>;
}
