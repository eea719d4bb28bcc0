//! The command framing used to talk to the nRF24L01 over SPI.
//!
//! Every exchange with the radio is a single [`Frame`]: one command byte, an optional
//! number of address bits, the bytes to write, and the bytes to read back.
//! The [`Transport`] trait is the seam between the register logic in
//! [`crate::radio`] and whatever actually clocks bits over the bus.
//! [`SpiTransport`] implements it for any [`SpiDevice`].

use embedded_hal::spi::SpiDevice;

use crate::radio::{commands, registers};

/// The commands understood by the nRF24L01.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read a register. The address is masked to 5 bits.
    ReadRegister(u8),
    /// Write a register. The address is masked to 5 bits.
    WriteRegister(u8),
    /// Discard everything in the TX FIFO.
    FlushTx,
    /// Discard everything in the RX FIFO.
    FlushRx,
    /// Push a payload into the TX FIFO.
    WriteTxPayload,
    /// Pop a payload from the RX FIFO.
    ReadRxPayload,
    /// Get the length of the payload at the top of the RX FIFO.
    ReadPayloadWidth,
}

impl Command {
    /// The byte clocked out first in the transaction.
    pub const fn opcode(self) -> u8 {
        match self {
            Command::ReadRegister(reg) => commands::R_REGISTER | (reg & registers::ADDRESS_MASK),
            Command::WriteRegister(reg) => commands::W_REGISTER | (reg & registers::ADDRESS_MASK),
            Command::FlushTx => commands::FLUSH_TX,
            Command::FlushRx => commands::FLUSH_RX,
            Command::WriteTxPayload => commands::W_TX_PAYLOAD,
            Command::ReadRxPayload => commands::R_RX_PAYLOAD,
            Command::ReadPayloadWidth => commands::R_RX_PL_WID,
        }
    }

    /// The number of address bits clocked between the command byte and the data phase.
    ///
    /// Register reads carry one address bit. The radio's response to a register read
    /// starts with a one-bit lead-in, and this bit absorbs it so the data phase is aligned.
    pub const fn address_bits(self) -> u8 {
        match self {
            Command::ReadRegister(_) => 1,
            _ => 0,
        }
    }
}

/// A single request/response exchange with the radio.
///
/// The `tx` bytes follow the command (and its address bits, if any).
/// The `rx` slice is overwritten in place with the bytes received after that.
#[derive(Debug)]
pub struct Frame<'a> {
    /// The command for this exchange.
    pub command: Command,
    /// The bytes written after the command.
    pub tx: &'a [u8],
    /// The buffer that receives the data phase.
    pub rx: &'a mut [u8],
}

impl<'a> Frame<'a> {
    /// A command that has no data phase.
    pub fn command(command: Command) -> Self {
        Self {
            command,
            tx: &[],
            rx: &mut [],
        }
    }

    /// A command followed by written data.
    pub fn write(command: Command, tx: &'a [u8]) -> Self {
        Self {
            command,
            tx,
            rx: &mut [],
        }
    }

    /// A command followed by data read back into `rx`.
    pub fn read(command: Command, rx: &'a mut [u8]) -> Self {
        Self {
            command,
            tx: &[],
            rx,
        }
    }
}

/// Something that can perform a blocking [`Frame`] exchange with the radio.
///
/// The chip select line is expected to be asserted for the duration of
/// each [`Transport::transfer()`] and released afterward.
/// Errors are returned to the caller as-is; nothing in this crate retries a transfer.
pub trait Transport {
    /// The error type reported by the underlying bus.
    type Error;

    /// Perform one exchange.
    fn transfer(&mut self, frame: Frame<'_>) -> Result<(), Self::Error>;
}

/// The longest exchange a [`SpiTransport`] can carry:
/// command byte, 32 data bytes, and one byte to cover the address bits.
const MAX_FRAME_LEN: usize = 34;

/// A [`Transport`] for any [`SpiDevice`].
///
/// The radio's CSN pin (aka Chip Select pin) shall be defined
/// when instantiating the [`SpiDevice`] object.
///
/// An [`SpiDevice`] only moves whole bytes, so the address bits of a
/// [`Command`] are realized by clocking one more byte than needed
/// and reading the data phase from `address_bits` bits into the response.
///
/// # Panics
/// [`Transport::transfer()`] panics if `frame.tx.len() + frame.rx.len()` exceeds 32.
/// The driver's own frames never do.
pub struct SpiTransport<SPI> {
    spi: SPI,
    buf: [u8; MAX_FRAME_LEN],
}

impl<SPI> SpiTransport<SPI> {
    /// Wrap the given `spi` device.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            buf: [0; MAX_FRAME_LEN],
        }
    }

    /// Give back the wrapped [`SpiDevice`].
    pub fn free(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> Transport for SpiTransport<SPI> {
    type Error = SPI::Error;

    /// `frame.tx.len() + frame.rx.len()` must not exceed 32.
    fn transfer(&mut self, frame: Frame<'_>) -> Result<(), Self::Error> {
        let skew = frame.command.address_bits() as usize;
        let data_start = 1 + frame.tx.len();
        let len = data_start + frame.rx.len() + (skew > 0) as usize;
        assert!(
            len <= MAX_FRAME_LEN,
            "frame data exceeds {} bytes",
            MAX_FRAME_LEN - 2
        );

        self.buf[0] = frame.command.opcode();
        self.buf[1..data_start].copy_from_slice(frame.tx);
        self.buf[data_start..len].fill(0);
        self.spi.transfer_in_place(&mut self.buf[..len])?;

        let response = &self.buf[data_start..len];
        for (i, byte) in frame.rx.iter_mut().enumerate() {
            *byte = if skew == 0 {
                response[i]
            } else {
                (response[i] << skew) | (response[i + 1] >> (8 - skew))
            };
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Command, Frame, SpiTransport, Transport};
    use crate::radio::{commands, registers};
    use crate::{spi_test_expects, test::skewed};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use std::vec;

    #[test]
    fn opcodes() {
        assert_eq!(Command::ReadRegister(registers::RF_CH).opcode(), 0x05);
        assert_eq!(Command::WriteRegister(registers::RF_CH).opcode(), 0x25);
        // register addresses are only 5 bits wide
        assert_eq!(Command::ReadRegister(0xFF).opcode(), 0x1F);
        assert_eq!(Command::WriteRegister(0xFF).opcode(), 0x3F);
        assert_eq!(Command::FlushTx.opcode(), 0xE1);
        assert_eq!(Command::FlushRx.opcode(), 0xE2);
        assert_eq!(Command::WriteTxPayload.opcode(), 0xA0);
        assert_eq!(Command::ReadRxPayload.opcode(), 0x61);
        assert_eq!(Command::ReadPayloadWidth.opcode(), 0x60);
    }

    #[test]
    fn only_register_reads_carry_address_bits() {
        assert_eq!(Command::ReadRegister(0).address_bits(), 1);
        for cmd in [
            Command::WriteRegister(0),
            Command::FlushTx,
            Command::FlushRx,
            Command::WriteTxPayload,
            Command::ReadRxPayload,
            Command::ReadPayloadWidth,
        ] {
            assert_eq!(cmd.address_bits(), 0);
        }
    }

    #[test]
    fn skewed_register_read() {
        let spi_expectations = spi_test_expects![
            // one extra byte is clocked to cover the address bit
            (
                vec![registers::RX_ADDR_P0 + 1, 0, 0, 0, 0],
                skewed(&[0xA5, 0xFF, 0x01]),
            ),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut transport = SpiTransport::new(spi.clone());
        let mut buf = [0u8; 3];
        transport
            .transfer(Frame::read(
                Command::ReadRegister(registers::RX_ADDR_P0 + 1),
                &mut buf,
            ))
            .unwrap();
        assert_eq!(buf, [0xA5, 0xFF, 0x01]);
        spi.done();
    }

    #[test]
    fn aligned_payload_read() {
        let spi_expectations = spi_test_expects![
            (vec![commands::R_RX_PAYLOAD, 0, 0], vec![0xE, 0x12, 0x34]),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut transport = SpiTransport::new(spi.clone());
        let mut buf = [0u8; 2];
        transport
            .transfer(Frame::read(Command::ReadRxPayload, &mut buf))
            .unwrap();
        assert_eq!(buf, [0x12, 0x34]);
        spi.done();
    }

    #[test]
    fn write_and_command_only() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::TX_ADDR | commands::W_REGISTER, 1, 2, 3],
                vec![0xE, 0, 0, 0],
            ),
            (vec![commands::FLUSH_TX], vec![0xE]),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut transport = SpiTransport::new(spi.clone());
        transport
            .transfer(Frame::write(
                Command::WriteRegister(registers::TX_ADDR),
                &[1, 2, 3],
            ))
            .unwrap();
        transport.transfer(Frame::command(Command::FlushTx)).unwrap();
        drop(transport.free());
        spi.done();
    }

    #[test]
    #[should_panic(expected = "frame data exceeds 32 bytes")]
    fn oversize_frame_panics_before_the_bus() {
        let spi_expectations: [SpiTransaction<u8>; 0] = [];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut transport = SpiTransport::new(spi.clone());
        let mut buf = [0u8; 40];
        let _ = transport.transfer(Frame::read(Command::ReadRxPayload, &mut buf));
        spi.done();
    }
}
