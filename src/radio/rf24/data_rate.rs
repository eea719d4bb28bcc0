use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbDataRate, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::DataRate;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbDataRate for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type DataRateErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// Returns [`Nrf24Error::BinaryCorruption`] if both data rate bits are set,
    /// which is a reserved combination.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?)
            .data_rate()
            .ok_or(Nrf24Error::BinaryCorruption)
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.modify_register(registers::RF_SETUP, |value| {
            RfSetup::from_bits(value)
                .with_data_rate(data_rate)
                .into_bits()
        })?;
        Ok(())
    }
}
