//! Servo commands

use cpe_core::scale::clamp_degree;
use cpe_core::traits::ServoControl;
use cpe_core::types::ServoChannel;
use cpe_hal::PinIo;

use super::MotorBoardDriver;

/// Pulse width that tells the host to stop sending servo pulses
const SERVO_RELEASE_US: u16 = 0;

impl<P: PinIo, I> ServoControl for MotorBoardDriver<P, I> {
    type Error = P::Error;

    fn set_servo(&mut self, channel: ServoChannel, degrees: u8) -> Result<(), Self::Error> {
        let pin = self.config.servo(channel);
        let degrees = clamp_degree(degrees);

        #[cfg(feature = "defmt")]
        defmt::trace!("set_servo {} -> {} deg", channel, degrees);

        self.pins.servo_write(pin, degrees)
    }

    fn stop_servo(&mut self, channel: ServoChannel) -> Result<(), Self::Error> {
        let pin = self.config.servo(channel);

        #[cfg(feature = "defmt")]
        defmt::trace!("stop_servo {}", channel);

        self.pins.servo_set_pulse(pin, SERVO_RELEASE_US)
    }
}
