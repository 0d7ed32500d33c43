//! Analog input trait

use crate::types::{AdcChannel, ADC_CHANNELS};

/// Multiplexed ADC reached over a bus
pub trait AnalogInput {
    /// Error type for ADC reads
    type Error;

    /// Read the raw conversion result of one channel
    fn read_adc(&mut self, channel: AdcChannel) -> Result<u16, Self::Error>;

    /// Read every channel in index order
    ///
    /// Stops at the first failing channel.
    fn read_all(&mut self) -> Result<[u16; ADC_CHANNELS], Self::Error> {
        let mut values = [0; ADC_CHANNELS];
        for (value, channel) in values.iter_mut().zip(AdcChannel::ALL) {
            *value = self.read_adc(channel)?;
        }
        Ok(values)
    }
}
