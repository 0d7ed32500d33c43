//! Board control traits
//!
//! These traits define the command surface of the motor board. The
//! concrete driver lives in `cpe-drivers`; application code can stay
//! generic over them.

pub mod adc;
pub mod motor;
pub mod servo;

pub use adc::AnalogInput;
pub use motor::MotorControl;
pub use servo::ServoControl;
