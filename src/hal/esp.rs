//! ESP-IDF microphone adapter.
//!
//! Oneshot ADC read on one channel, reduced from 12 to 10 bits so the
//! reading lands in the PWM output range.

use core::borrow::Borrow;

use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_svc::hal::gpio::ADCPin;
use esp_idf_svc::sys::EspError;

use super::AnalogInput;

/// 12-bit ADC to 10-bit output range.
const ADC_TO_OUTPUT_SHIFT: u16 = 2;

/// Microphone on a oneshot ADC channel.
pub struct MicInput<'d, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'d, T::Adc>>,
{
    channel: AdcChannelDriver<'d, T, M>,
}

impl<'d, T, M> MicInput<'d, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'d, T::Adc>>,
{
    pub fn new(channel: AdcChannelDriver<'d, T, M>) -> Self {
        Self { channel }
    }
}

impl<'d, T, M> AnalogInput for MicInput<'d, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'d, T::Adc>>,
{
    type Error = EspError;

    #[inline]
    fn read_raw(&mut self) -> Result<u16, EspError> {
        Ok(self.channel.read()? >> ADC_TO_OUTPUT_SHIFT)
    }
}
