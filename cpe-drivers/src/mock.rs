//! Recording test doubles for the pin and I2C collaborators

use cpe_hal::{Level, PinId, PinIo};
use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource, Operation};
use heapless::Vec;

/// One recorded pin primitive call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOp {
    Digital(PinId, u8),
    Analog(PinId, u16),
    Servo(PinId, u8),
    Pulse(PinId, u16),
}

/// Pin write rejected by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError(pub PinId);

/// Mock pin bank that records every write
#[derive(Default)]
pub struct MockPins {
    pub ops: Vec<PinOp, 64>,
    /// Writes to this pin fail
    pub fail_on: Option<PinId>,
}

impl MockPins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(pin: PinId) -> Self {
        Self {
            ops: Vec::new(),
            fail_on: Some(pin),
        }
    }

    fn record(&mut self, pin: PinId, op: PinOp) -> Result<(), MockPinError> {
        if self.fail_on == Some(pin) {
            return Err(MockPinError(pin));
        }
        self.ops.push(op).expect("mock op log full");
        Ok(())
    }

    /// Last digital level written to a pin
    pub fn level(&self, pin: PinId) -> Option<u8> {
        self.ops.iter().rev().find_map(|op| match *op {
            PinOp::Digital(p, level) if p == pin => Some(level),
            _ => None,
        })
    }

    /// Last analog value written to a pin
    pub fn analog(&self, pin: PinId) -> Option<u16> {
        self.ops.iter().rev().find_map(|op| match *op {
            PinOp::Analog(p, value) if p == pin => Some(value),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl PinIo for MockPins {
    type Error = MockPinError;

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        self.record(pin, PinOp::Digital(pin, level.bit()))
    }

    fn analog_write(&mut self, pin: PinId, value: u16) -> Result<(), Self::Error> {
        self.record(pin, PinOp::Analog(pin, value))
    }

    fn servo_write(&mut self, pin: PinId, degrees: u8) -> Result<(), Self::Error> {
        self.record(pin, PinOp::Servo(pin, degrees))
    }

    fn servo_set_pulse(&mut self, pin: PinId, width_us: u16) -> Result<(), Self::Error> {
        self.record(pin, PinOp::Pulse(pin, width_us))
    }
}

/// One recorded I2C operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cOp {
    Write(u8, Vec<u8, 4>),
    Read(u8, usize),
}

/// Bus error raised by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockI2cError;

impl i2c::Error for MockI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// Mock I2C bus emulating the board ADC
///
/// A one-byte write selects a channel; the next read returns that
/// channel's raw value big-endian.
#[derive(Default)]
pub struct MockI2c {
    pub ops: Vec<I2cOp, 32>,
    pub values: [u16; 8],
    selected: usize,
    /// Reads fail once this many have succeeded
    pub fail_read_after: Option<usize>,
    reads: usize,
}

impl MockI2c {
    pub fn with_values(values: [u16; 8]) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = MockI2cError;
}

impl i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let bytes: &[u8] = &**bytes;
                    let mut data = Vec::new();
                    data.extend_from_slice(bytes).map_err(|_| MockI2cError)?;
                    if let Some(&channel) = bytes.first() {
                        self.selected = channel as usize;
                    }
                    self.ops.push(I2cOp::Write(address, data)).expect("mock op log full");
                }
                Operation::Read(buf) => {
                    if self.fail_read_after == Some(self.reads) {
                        return Err(MockI2cError);
                    }
                    self.reads += 1;
                    let value = self.values.get(self.selected).copied().unwrap_or(0);
                    let bytes = value.to_be_bytes();
                    for (dst, src) in buf.iter_mut().zip(bytes.iter()) {
                        *dst = *src;
                    }
                    self.ops.push(I2cOp::Read(address, buf.len())).expect("mock op log full");
                }
            }
        }
        Ok(())
    }
}

/// embedded-hal digital output that remembers its state
#[derive(Default)]
pub struct MockOut {
    pub high: bool,
}

impl embedded_hal::digital::ErrorType for MockOut {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockOut {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// embedded-hal PWM channel with a 1023-step counter
#[derive(Default)]
pub struct MockPwm {
    pub duty: u16,
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        1023
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}
