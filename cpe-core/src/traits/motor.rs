//! Motor control trait
//!
//! Both motors are driven by one enable line and one PWM line each. A
//! speed of 0-100% is mapped to a 10-bit duty value before it reaches the
//! pin.

use crate::types::{MotorChannel, MotorDirection, SpinDirection, TurnDirection};

/// Two-motor differential drive
pub trait MotorControl {
    /// Error type for motor operations
    type Error;

    /// Drive one motor in a direction at a speed percentage (0-100)
    fn set_motor(
        &mut self,
        channel: MotorChannel,
        direction: MotorDirection,
        speed: u8,
    ) -> Result<(), Self::Error>;

    /// Pivot turn: hold one wheel and drive the other
    ///
    /// Turning left holds M1 and drives M2; turning right is the mirror.
    fn turn(&mut self, direction: TurnDirection, speed: u8) -> Result<(), Self::Error>;

    /// Spin in place with both motors at equal speed
    fn spin(&mut self, direction: SpinDirection, speed: u8) -> Result<(), Self::Error>;

    /// Put both half-bridges in their stop state
    ///
    /// This is enable high with zero duty on both motors, regardless of
    /// what was commanded before.
    fn motor_stop(&mut self) -> Result<(), Self::Error>;
}
