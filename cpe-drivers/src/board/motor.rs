//! Motor commands
//!
//! Each motor is one half-bridge with an enable line and a PWM line.
//! Direction is resolved through the pin table, which knows that M1 and
//! M2 are wired with opposite enable polarity.

use cpe_core::config::MotorDrive;
use cpe_core::scale::speed_to_duty;
use cpe_core::traits::MotorControl;
use cpe_core::types::{MotorChannel, MotorDirection, SpinDirection, TurnDirection};
use cpe_hal::{Level, PinIo};

use super::MotorBoardDriver;

impl<P: PinIo, I> MotorBoardDriver<P, I> {
    /// Write the enable level, then the duty
    fn drive(&mut self, drive: MotorDrive, duty: u16) -> Result<(), P::Error> {
        self.pins.digital_write(drive.enable, drive.level)?;
        self.pins.analog_write(drive.pwm, duty)
    }

    /// Drive both motors, M1 first
    fn drive_pair(
        &mut self,
        m1: (MotorDirection, u16),
        m2: (MotorDirection, u16),
    ) -> Result<(), P::Error> {
        let m1_drive = self.config.motor_drive(MotorChannel::M1, m1.0);
        let m2_drive = self.config.motor_drive(MotorChannel::M2, m2.0);
        self.drive(m1_drive, m1.1)?;
        self.drive(m2_drive, m2.1)
    }
}

impl<P: PinIo, I> MotorControl for MotorBoardDriver<P, I> {
    type Error = P::Error;

    fn set_motor(
        &mut self,
        channel: MotorChannel,
        direction: MotorDirection,
        speed: u8,
    ) -> Result<(), Self::Error> {
        let duty = speed_to_duty(speed);
        let drive = self.config.motor_drive(channel, direction);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "set_motor {} {} {}% -> en={} duty={}",
            channel,
            direction,
            speed,
            drive.level,
            duty
        );

        self.drive(drive, duty)
    }

    fn turn(&mut self, direction: TurnDirection, speed: u8) -> Result<(), Self::Error> {
        let duty = speed_to_duty(speed);

        #[cfg(feature = "defmt")]
        defmt::trace!("turn {} duty={}", direction, duty);

        // Inner wheel held, outer wheel forward
        match direction {
            TurnDirection::Left => self.drive_pair(
                (MotorDirection::Forward, 0),
                (MotorDirection::Forward, duty),
            ),
            TurnDirection::Right => self.drive_pair(
                (MotorDirection::Forward, duty),
                (MotorDirection::Forward, 0),
            ),
        }
    }

    fn spin(&mut self, direction: SpinDirection, speed: u8) -> Result<(), Self::Error> {
        let duty = speed_to_duty(speed);

        #[cfg(feature = "defmt")]
        defmt::trace!("spin {} duty={}", direction, duty);

        match direction {
            SpinDirection::Left => self.drive_pair(
                (MotorDirection::Backward, duty),
                (MotorDirection::Forward, duty),
            ),
            SpinDirection::Right => self.drive_pair(
                (MotorDirection::Forward, duty),
                (MotorDirection::Backward, duty),
            ),
        }
    }

    fn motor_stop(&mut self) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("motor_stop");

        // Stop state is enable high on both bridges, not a direction
        for channel in [MotorChannel::M1, MotorChannel::M2] {
            let pins = *self.config.motor(channel);
            self.drive(
                MotorDrive {
                    enable: pins.enable,
                    level: Level::High,
                    pwm: pins.pwm,
                },
                0,
            )?;
        }
        Ok(())
    }
}
