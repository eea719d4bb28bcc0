use super::{
    bit_fields::{Config, Feature},
    mnemonics,
    payload_length::MAX_PAYLOAD_LEN,
    registers,
};
use crate::radio::{prelude::EsbRadio, Nrf24, Nrf24Error};
use crate::transport::{Command, Frame, Transport};
use crate::InvalidArgument;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbRadio for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type RadioErrorType = Nrf24Error<BUS::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    fn is_rx(&mut self) -> Result<bool, Self::RadioErrorType> {
        Ok(Config::from_bits(self.read_byte(registers::CONFIG)?).is_rx())
    }

    /// An empty `buf` or one longer than 32 bytes is rejected.
    fn write_payload(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        if buf.is_empty() || buf.len() > MAX_PAYLOAD_LEN as usize {
            return Err(InvalidArgument::PayloadLength(buf.len()).into());
        }
        self.transfer(Frame::write(Command::WriteTxPayload, buf))
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if the radio reports a dynamic
    /// payload width above 32.
    /// The payload is left in the RX FIFO in that case; flushing it is up to the caller.
    fn read_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType> {
        let dynamic = Feature::from_bits(self.read_byte(registers::FEATURE)?).dynamic_payloads();
        let width = if dynamic {
            let mut width = [0u8];
            self.transfer(Frame::read(Command::ReadPayloadWidth, &mut width))?;
            if width[0] > MAX_PAYLOAD_LEN {
                return Err(Nrf24Error::BinaryCorruption);
            }
            width[0]
        } else {
            self.read_byte(registers::RX_PW_P0)? & mnemonics::RX_PW_MASK
        };
        let len = buf.len().min(width as usize);
        if len > 0 {
            self.transfer(Frame::read(Command::ReadRxPayload, &mut buf[..len]))?;
        }
        Ok(len as u8)
    }
}
