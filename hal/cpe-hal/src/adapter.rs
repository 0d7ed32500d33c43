//! `PinIo` over embedded-hal peripherals
//!
//! Routes pin-addressed writes to concrete embedded-hal pins. The chip HAL
//! configures the peripherals (PWM frequency, servo slices at 50 Hz) and
//! hands them over; this adapter only decides which one a pin id refers to.

use embedded_hal::digital::{self, Error as _, OutputPin};
use embedded_hal::pwm::{self, Error as _, SetDutyCycle};

use crate::gpio::{Level, PinId};
use crate::pins::PinIo;
use crate::servo::{servo_pulse_us, SERVO_PERIOD_US};

/// Full scale of an analog write
pub const ANALOG_MAX: u16 = 1023;

/// Pin numbers wired to each adapter output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub m1_enable: PinId,
    pub m1_pwm: PinId,
    pub m2_enable: PinId,
    pub m2_pwm: PinId,
    pub sv1: PinId,
    pub sv2: PinId,
}

/// Errors from the embedded-hal adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalPinError {
    /// Pin is not wired to an output of the right kind
    UnknownPin(PinId),
    /// Digital output failed
    Digital(digital::ErrorKind),
    /// PWM output failed
    Pwm(pwm::ErrorKind),
}

/// Which adapter output a pin id resolves to
#[derive(Clone, Copy)]
enum Target {
    M1Enable,
    M1Pwm,
    M2Enable,
    M2Pwm,
    Sv1,
    Sv2,
}

/// Board pins backed by embedded-hal outputs
///
/// Enable lines are plain digital outputs. Motor PWM lines and servo
/// outputs are duty-cycle channels; servo channels must run a 20 ms period.
pub struct HalPins<EN1, PWM1, EN2, PWM2, SV1, SV2> {
    map: PinMap,
    m1_enable: EN1,
    m1_pwm: PWM1,
    m2_enable: EN2,
    m2_pwm: PWM2,
    sv1: SV1,
    sv2: SV2,
}

impl<EN1, PWM1, EN2, PWM2, SV1, SV2> HalPins<EN1, PWM1, EN2, PWM2, SV1, SV2>
where
    EN1: OutputPin,
    PWM1: SetDutyCycle,
    EN2: OutputPin,
    PWM2: SetDutyCycle,
    SV1: SetDutyCycle,
    SV2: SetDutyCycle,
{
    /// Create a new adapter
    ///
    /// Pins in `map` must be distinct. A pin listed twice only reaches the
    /// first output in M1, M2, SV1, SV2 order, so build the map from a
    /// validated `BoardConfig`.
    ///
    /// # Arguments
    /// - `map`: Pin numbers the outputs are wired to
    /// - `m1`: Motor 1 (enable, PWM)
    /// - `m2`: Motor 2 (enable, PWM)
    /// - `servos`: (SV1, SV2) duty channels at 50 Hz
    pub fn new(map: PinMap, m1: (EN1, PWM1), m2: (EN2, PWM2), servos: (SV1, SV2)) -> Self {
        Self {
            map,
            m1_enable: m1.0,
            m1_pwm: m1.1,
            m2_enable: m2.0,
            m2_pwm: m2.1,
            sv1: servos.0,
            sv2: servos.1,
        }
    }

    /// Get the pin map
    pub fn map(&self) -> &PinMap {
        &self.map
    }

    fn target(&self, pin: PinId) -> Option<Target> {
        let m = &self.map;
        if pin == m.m1_enable {
            Some(Target::M1Enable)
        } else if pin == m.m1_pwm {
            Some(Target::M1Pwm)
        } else if pin == m.m2_enable {
            Some(Target::M2Enable)
        } else if pin == m.m2_pwm {
            Some(Target::M2Pwm)
        } else if pin == m.sv1 {
            Some(Target::Sv1)
        } else if pin == m.sv2 {
            Some(Target::Sv2)
        } else {
            None
        }
    }

    /// Set a duty fraction on any PWM-capable output
    fn duty(&mut self, pin: PinId, num: u16, denom: u16) -> Result<(), HalPinError> {
        match self.target(pin) {
            Some(Target::M1Pwm) => set_fraction(&mut self.m1_pwm, num, denom),
            Some(Target::M2Pwm) => set_fraction(&mut self.m2_pwm, num, denom),
            Some(Target::Sv1) => set_fraction(&mut self.sv1, num, denom),
            Some(Target::Sv2) => set_fraction(&mut self.sv2, num, denom),
            _ => Err(HalPinError::UnknownPin(pin)),
        }
    }

    /// Release ownership of the underlying outputs
    #[allow(clippy::type_complexity)]
    pub fn release(self) -> ((EN1, PWM1), (EN2, PWM2), (SV1, SV2)) {
        (
            (self.m1_enable, self.m1_pwm),
            (self.m2_enable, self.m2_pwm),
            (self.sv1, self.sv2),
        )
    }
}

fn set_fraction<D: SetDutyCycle>(out: &mut D, num: u16, denom: u16) -> Result<(), HalPinError> {
    let result = if num == 0 {
        out.set_duty_cycle_fully_off()
    } else {
        out.set_duty_cycle_fraction(num.min(denom), denom)
    };
    result.map_err(|e| HalPinError::Pwm(e.kind()))
}

fn set_level<O: OutputPin>(out: &mut O, level: Level) -> Result<(), HalPinError> {
    out.set_state(level.into())
        .map_err(|e| HalPinError::Digital(e.kind()))
}

impl<EN1, PWM1, EN2, PWM2, SV1, SV2> PinIo for HalPins<EN1, PWM1, EN2, PWM2, SV1, SV2>
where
    EN1: OutputPin,
    PWM1: SetDutyCycle,
    EN2: OutputPin,
    PWM2: SetDutyCycle,
    SV1: SetDutyCycle,
    SV2: SetDutyCycle,
{
    type Error = HalPinError;

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        match self.target(pin) {
            Some(Target::M1Enable) => set_level(&mut self.m1_enable, level),
            Some(Target::M2Enable) => set_level(&mut self.m2_enable, level),
            _ => Err(HalPinError::UnknownPin(pin)),
        }
    }

    fn analog_write(&mut self, pin: PinId, value: u16) -> Result<(), Self::Error> {
        self.duty(pin, value, ANALOG_MAX)
    }

    fn servo_write(&mut self, pin: PinId, degrees: u8) -> Result<(), Self::Error> {
        match self.target(pin) {
            Some(Target::Sv1 | Target::Sv2) => {
                self.duty(pin, servo_pulse_us(degrees), SERVO_PERIOD_US)
            }
            _ => Err(HalPinError::UnknownPin(pin)),
        }
    }

    fn servo_set_pulse(&mut self, pin: PinId, width_us: u16) -> Result<(), Self::Error> {
        match self.target(pin) {
            Some(Target::Sv1 | Target::Sv2) => self.duty(pin, width_us, SERVO_PERIOD_US),
            _ => Err(HalPinError::UnknownPin(pin)),
        }
    }
}
