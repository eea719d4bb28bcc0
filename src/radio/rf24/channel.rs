use super::{mnemonics, registers};
use crate::radio::{prelude::EsbChannel, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::InvalidArgument;
use embedded_hal::digital::OutputPin;

/// The highest channel the nRF24L01 supports.
const MAX_CHANNEL: u8 = 125;

impl<BUS, DO> EsbChannel for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type ChannelErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// The nRF24L01 support 126 channels. A `channel` above 125 is rejected.
    ///
    /// Bit 7 of the RF_CH register is reserved and kept as it was.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        if channel > MAX_CHANNEL {
            return Err(InvalidArgument::Channel(channel).into());
        }
        self.modify_register(registers::RF_CH, |value| {
            (value & !mnemonics::RF_CH_MASK) | (channel & mnemonics::RF_CH_MASK)
        })?;
        Ok(())
    }

    /// See also [`Nrf24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.read_byte(registers::RF_CH)? & mnemonics::RF_CH_MASK)
    }
}
