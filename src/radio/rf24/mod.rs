use embedded_hal::{digital::OutputPin, spi::SpiDevice};
mod address;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fifo;
mod init;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod status;
pub use address::Address;
pub(crate) use address::SharedBase;
pub use constants::{commands, mnemonics, registers};

use crate::transport::{Command, Frame, SpiTransport, Transport};
use crate::InvalidArgument;

/// A collection of error types to describe hardware malfunctions and rejected input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// An argument was rejected before any SPI transaction took place.
    InvalidArgument(InvalidArgument),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

impl<SPI, DO> From<InvalidArgument> for Nrf24Error<SPI, DO> {
    fn from(value: InvalidArgument) -> Self {
        Nrf24Error::InvalidArgument(value)
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Nothing about the radio's configuration is cached here. Every operation
/// reads the registers it touches before writing them, so changes made behind
/// this driver's back are respected.
///
/// The struct is not meant to be shared: operations that touch a register more
/// than once are not atomic.
pub struct Nrf24<BUS, DO> {
    _bus: BUS,
    /// The CE pin for the radio.
    ///
    /// This is exposed for manipulation of active TX/RX mode beyond what
    /// [`EsbPower`](trait@crate::radio::prelude::EsbPower) and
    /// [`EsbRadio`](trait@crate::radio::prelude::EsbRadio) offer.
    pub ce_pin: DO,
}

impl<BUS, DO> Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    /// Instantiate an [`Nrf24`] object that talks to the radio through `bus`
    /// and drives the radio's CE pin with `ce_pin`.
    ///
    /// No SPI transactions are performed, and the CE pin is left untouched.
    pub fn new(bus: BUS, ce_pin: DO) -> Nrf24<BUS, DO> {
        Nrf24 { _bus: bus, ce_pin }
    }

    /// Release the transport and the CE pin.
    pub fn free(self) -> (BUS, DO) {
        (self._bus, self.ce_pin)
    }

    fn transfer(
        &mut self,
        frame: Frame<'_>,
    ) -> Result<(), Nrf24Error<BUS::Error, DO::Error>> {
        self._bus.transfer(frame).map_err(Nrf24Error::Spi)
    }

    /// Read `buf.len()` bytes from a register.
    fn read_register(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<BUS::Error, DO::Error>> {
        self.transfer(Frame::read(Command::ReadRegister(register), buf))
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, Nrf24Error<BUS::Error, DO::Error>> {
        let mut buf = [0u8];
        self.read_register(register, &mut buf)?;
        Ok(buf[0])
    }

    fn write_register(
        &mut self,
        register: u8,
        data: &[u8],
    ) -> Result<(), Nrf24Error<BUS::Error, DO::Error>> {
        self.transfer(Frame::write(Command::WriteRegister(register), data))?;
        #[cfg(feature = "defmt")]
        defmt::trace!("register {=u8:#04X} <- {=[u8]:#04X}", register, data);
        Ok(())
    }

    fn write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<BUS::Error, DO::Error>> {
        self.write_register(register, &[byte])
    }

    /// Read a register, pass its value through `transform`, then write the result back.
    ///
    /// Returns the value that was written.
    fn modify_register<F>(
        &mut self,
        register: u8,
        transform: F,
    ) -> Result<u8, Nrf24Error<BUS::Error, DO::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = transform(self.read_byte(register)?);
        self.write_byte(register, value)?;
        Ok(value)
    }

    fn send_command(
        &mut self,
        command: Command,
    ) -> Result<(), Nrf24Error<BUS::Error, DO::Error>> {
        self.transfer(Frame::command(command))
    }
}

impl<SPI, DO> Nrf24<SpiTransport<SPI>, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    /// Instantiate an [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    pub fn with_spi(spi: SPI, ce_pin: DO) -> Self {
        Self::new(SpiTransport::new(spi), ce_pin)
    }
}
