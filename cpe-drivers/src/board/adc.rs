//! ADC reads over I2C
//!
//! The on-board ADC is an 8-input mux behind a single I2C address. A
//! conversion is requested by writing the channel index as one byte; the
//! result is then read back as a big-endian 16-bit word. The two steps are
//! separate bus transactions.

use cpe_core::traits::AnalogInput;
use cpe_core::types::AdcChannel;
use embedded_hal::i2c::I2c;

use super::MotorBoardDriver;

impl<P, I: I2c> AnalogInput for MotorBoardDriver<P, I> {
    type Error = I::Error;

    fn read_adc(&mut self, channel: AdcChannel) -> Result<u16, Self::Error> {
        let address = self.config.adc_address;

        self.i2c.write(address, &[channel.index()])?;

        let mut buf = [0u8; 2];
        self.i2c.read(address, &mut buf)?;
        let raw = u16::from_be_bytes(buf);

        #[cfg(feature = "defmt")]
        defmt::debug!("ADC{} = {}", channel.index(), raw);

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{I2cOp, MockI2c, MockI2cError, MockPins};
    use cpe_core::config::BoardConfig;
    use heapless::Vec;

    const VALUES: [u16; 8] = [0, 1, 0x0102, 0x7FFF, 0x8000, 1023, 4095, 0xFFFF];

    fn write_op(address: u8, channel: u8) -> I2cOp {
        let mut data = Vec::new();
        data.push(channel).unwrap();
        I2cOp::Write(address, data)
    }

    #[test]
    fn test_read_adc_single_channel() {
        let mut board =
            MotorBoardDriver::with_default_pins(MockPins::new(), MockI2c::with_values(VALUES));

        assert_eq!(board.read_adc(AdcChannel::Adc2), Ok(0x0102));

        let (pins, i2c) = board.release();
        assert!(pins.ops.is_empty());
        assert_eq!(
            i2c.ops.as_slice(),
            &[write_op(0x48, 2), I2cOp::Read(0x48, 2)]
        );
    }

    #[test]
    fn test_read_adc_returns_raw_value() {
        let mut board =
            MotorBoardDriver::with_default_pins(MockPins::new(), MockI2c::with_values(VALUES));

        for channel in AdcChannel::ALL {
            assert_eq!(
                board.read_adc(channel),
                Ok(VALUES[channel.index() as usize])
            );
        }

        let (_, i2c) = board.release();
        assert_eq!(i2c.ops.len(), 16);
        for (i, pair) in i2c.ops.chunks(2).enumerate() {
            assert_eq!(pair, &[write_op(72, i as u8), I2cOp::Read(72, 2)]);
        }
    }

    #[test]
    fn test_read_all() {
        let mut board =
            MotorBoardDriver::with_default_pins(MockPins::new(), MockI2c::with_values(VALUES));

        assert_eq!(board.read_all(), Ok(VALUES));
    }

    #[test]
    fn test_read_all_stops_at_first_error() {
        let mut i2c = MockI2c::with_values(VALUES);
        i2c.fail_read_after = Some(3);
        let mut board = MotorBoardDriver::with_default_pins(MockPins::new(), i2c);

        assert_eq!(board.read_all(), Err(MockI2cError));

        let (_, i2c) = board.release();
        // Three full reads plus the channel select of the failing one
        assert_eq!(i2c.ops.len(), 7);
        assert_eq!(i2c.ops.last(), Some(&write_op(0x48, 3)));
    }

    #[test]
    fn test_custom_adc_address() {
        let mut config = BoardConfig::CPE_PNU;
        config.adc_address = 0x49;
        let mut board =
            MotorBoardDriver::new(MockPins::new(), MockI2c::with_values(VALUES), config).unwrap();

        assert_eq!(board.read_adc(AdcChannel::Adc7), Ok(0xFFFF));

        let (_, i2c) = board.release();
        assert_eq!(
            i2c.ops.as_slice(),
            &[write_op(0x49, 7), I2cOp::Read(0x49, 2)]
        );
    }
}
