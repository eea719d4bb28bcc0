use super::{bit_fields::Feature, mnemonics, registers};
use crate::radio::{prelude::EsbPayloadLength, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::{InvalidArgument, Pipe};
use embedded_hal::digital::OutputPin;

/// The largest payload the radio can carry.
pub(super) const MAX_PAYLOAD_LEN: u8 = 32;

impl<BUS, DO> EsbPayloadLength for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type PayloadLengthErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// A `length` above 32 is rejected.
    ///
    /// When dynamic payloads get enabled (`length` is `0`), the static length registers are
    /// left as they were.
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::PayloadLengthErrorType> {
        if length > MAX_PAYLOAD_LEN {
            return Err(InvalidArgument::PayloadLength(length as usize).into());
        }
        let dynamic = length == 0;
        self.modify_register(registers::FEATURE, |value| {
            Feature::from_bits(value)
                .with_dynamic_payloads(dynamic)
                .into_bits()
        })?;
        self.modify_register(registers::DYNPD, |value| {
            if dynamic {
                value | Pipe::ALL_MASK
            } else {
                value & !Pipe::ALL_MASK
            }
        })?;
        if !dynamic {
            for pipe in 0..6 {
                self.write_byte(
                    registers::RX_PW_P0 + pipe,
                    length & mnemonics::RX_PW_MASK,
                )?;
            }
        }
        Ok(())
    }

    fn get_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        Ok(self.read_byte(registers::RX_PW_P0)? & mnemonics::RX_PW_MASK)
    }

    fn get_dynamic_payloads(&mut self) -> Result<bool, Self::PayloadLengthErrorType> {
        Ok(Feature::from_bits(self.read_byte(registers::FEATURE)?).dynamic_payloads())
    }
}
