use super::registers;
use crate::radio::{prelude::EsbStatus, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::StatusFlags;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbStatus for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type StatusErrorType = Nrf24Error<BUS::Error, DO::Error>;

    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        Ok(StatusFlags::from_bits(self.read_byte(registers::STATUS)?))
    }

    /// The IRQ flags are cleared by writing `1` to them, so no read is needed.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }
}
