use super::{registers, Address, SharedBase};
use crate::radio::{prelude::EsbPipe, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::Pipe;
use embedded_hal::digital::OutputPin;

/// SETUP_AW holds the address length minus 2.
const SETUP_AW_MASK: u8 = 3;

impl<BUS, DO> Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    fn read_address_length(&mut self) -> Result<usize, Nrf24Error<BUS::Error, DO::Error>> {
        match self.read_byte(registers::SETUP_AW)? & SETUP_AW_MASK {
            0 => Err(Nrf24Error::BinaryCorruption),
            aw => Ok(aw as usize + 2),
        }
    }

    /// Read a full address register (pipe 0, pipe 1 or TX) of `len` bytes.
    fn read_address(
        &mut self,
        register: u8,
        len: usize,
    ) -> Result<Address, Nrf24Error<BUS::Error, DO::Error>> {
        let mut image = [0u8; Address::MAX_LEN];
        self.read_register(register, &mut image[..len])?;
        Ok(Address::from_register_bytes(&image[..len])?)
    }

    fn read_shared_base(
        &mut self,
        len: usize,
    ) -> Result<SharedBase, Nrf24Error<BUS::Error, DO::Error>> {
        let mut image = [0u8; Address::MAX_LEN];
        self.read_register(registers::RX_ADDR_P1, &mut image[..len])?;
        Ok(SharedBase::from_register(&image[..len])?)
    }
}

impl<BUS, DO> EsbPipe for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type PipeErrorType = Nrf24Error<BUS::Error, DO::Error>;

    fn enable_rx_pipe(&mut self, pipe: Pipe) -> Result<(), Self::PipeErrorType> {
        self.modify_register(registers::EN_RXADDR, |value| value | pipe.into_bits())?;
        Ok(())
    }

    fn disable_rx_pipe(&mut self, pipe: Pipe) -> Result<(), Self::PipeErrorType> {
        self.modify_register(registers::EN_RXADDR, |value| value & !pipe.into_bits())?;
        Ok(())
    }

    /// Pipes 2 - 5 cause 3 transactions: pipe 1's address is read
    /// (using the length of `address`), its least significant byte is replaced and
    /// written back, and then the pipe's own byte is written.
    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let pipe = Pipe::try_from(pipe)?;
        let address = Address::from_msb_first(address)?;
        let register = registers::RX_ADDR_P0 + pipe as u8;
        match pipe {
            Pipe::P0 | Pipe::P1 => self.write_register(register, address.as_register_bytes()),
            _ => {
                let base = self.read_shared_base(address.len())?.with_lsb(address.lsb());
                self.write_register(registers::RX_ADDR_P1, base.as_register_bytes())?;
                self.write_byte(register, address.msb())
            }
        }
    }

    fn get_rx_address(
        &mut self,
        pipe: u8,
        address: &mut [u8],
    ) -> Result<usize, Self::PipeErrorType> {
        let pipe = Pipe::try_from(pipe)?;
        let len = self.read_address_length()?;
        let register = registers::RX_ADDR_P0 + pipe as u8;
        let full = match pipe {
            Pipe::P0 | Pipe::P1 => self.read_address(register, len)?,
            _ => {
                let base = self.read_shared_base(len)?;
                base.compose(self.read_byte(register)?)
            }
        };
        Ok(full.copy_msb_first(address))
    }

    fn set_tx_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let address = Address::from_msb_first(address)?;
        self.write_register(registers::TX_ADDR, address.as_register_bytes())?;
        // pipe 0 receives the auto-ACK packets
        self.write_register(registers::RX_ADDR_P0, address.as_register_bytes())
    }

    fn get_tx_address(&mut self, address: &mut [u8]) -> Result<usize, Self::PipeErrorType> {
        let len = self.read_address_length()?;
        Ok(self
            .read_address(registers::TX_ADDR, len)?
            .copy_msb_first(address))
    }

    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType> {
        let length = Address::check_len(length as usize)? as u8;
        self.modify_register(registers::SETUP_AW, |value| {
            (value & !SETUP_AW_MASK) | (length - 2)
        })?;
        Ok(())
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if SETUP_AW holds the illegal value `0`.
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        Ok(self.read_address_length()? as u8)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPipe};
    use crate::radio::{commands, Nrf24Error};
    use crate::test::{mk_fake, mk_radio, skewed, FakeChip};
    use crate::transport::Command;
    use crate::{spi_test_expects, InvalidArgument, Pipe};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn pipe_3_borrows_pipe_1() {
        let (mut radio, chip, _ce) = mk_fake();
        radio
            .set_rx_address(3, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE])
            .unwrap();
        assert_eq!(
            chip.commands(),
            [
                Command::ReadRegister(registers::RX_ADDR_P1),
                Command::WriteRegister(registers::RX_ADDR_P1),
                Command::WriteRegister(registers::RX_ADDR_P0 + 3),
            ]
        );
        assert_eq!(
            chip.writes_to(registers::RX_ADDR_P1),
            [vec![0xEE, 0xC2, 0xC2, 0xC2, 0xC2]]
        );
        assert_eq!(chip.writes_to(registers::RX_ADDR_P0 + 3), [vec![0xAA]]);

        let mut out = [0u8; 5];
        assert_eq!(radio.get_rx_address(3, &mut out).unwrap(), 5);
        assert_eq!(out, [0xC2, 0xC2, 0xC2, 0xC2, 0xAA]);
        assert_eq!(radio.get_rx_address(1, &mut out).unwrap(), 5);
        assert_eq!(out, [0xC2, 0xC2, 0xC2, 0xC2, 0xEE]);
    }

    #[test]
    fn shared_base_follows_caller_length() {
        let (mut radio, chip, _ce) = mk_fake();
        radio.set_rx_address(2, &[0x01, 0x02, 0x03]).unwrap();
        // only the caller's 3 bytes of pipe 1 are read and rewritten
        assert_eq!(chip.writes_to(registers::RX_ADDR_P1), [vec![0x03, 0xC2, 0xC2]]);
        assert_eq!(chip.writes_to(registers::RX_ADDR_P0 + 2), [vec![0x01]]);
    }

    #[test]
    fn full_addresses_are_reversed() {
        let (mut radio, chip, _ce) = mk_fake();
        let address = [0x11, 0x22, 0x33, 0x44, 0x55];
        for len in 3..=5usize {
            chip.clear_log();
            radio.set_address_length(len as u8).unwrap();
            for pipe in 0..=1u8 {
                radio.set_rx_address(pipe, &address[..len]).unwrap();
                let mut expected = address[..len].to_vec();
                expected.reverse();
                assert_eq!(chip.writes_to(registers::RX_ADDR_P0 + pipe), [expected]);
                let mut out = [0u8; 5];
                assert_eq!(radio.get_rx_address(pipe, &mut out).unwrap(), len);
                assert_eq!(out[..len], address[..len]);
            }
        }
    }

    #[test]
    fn tx_address_mirrors_pipe_0() {
        let (mut radio, chip, _ce) = mk_fake();
        radio.set_tx_address(b"1Node").unwrap();
        let image = std::vec::Vec::from(*b"edoN1");
        assert_eq!(chip.writes_to(registers::TX_ADDR), [image.clone()]);
        assert_eq!(chip.writes_to(registers::RX_ADDR_P0), [image]);
        let mut out = [0u8; 5];
        assert_eq!(radio.get_tx_address(&mut out).unwrap(), 5);
        assert_eq!(&out, b"1Node");
    }

    #[test]
    fn bad_arguments_never_touch_the_bus() {
        let (mut radio, chip, _ce) = mk_fake();
        assert_eq!(
            radio.set_rx_address(6, &[1, 2, 3]),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::Pipe(6)))
        );
        assert_eq!(
            radio.set_rx_address(0, &[1, 2]),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(2)))
        );
        assert_eq!(
            radio.set_tx_address(&[1, 2, 3, 4, 5, 6]),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(6)))
        );
        assert_eq!(
            radio.get_rx_address(7, &mut [0u8; 5]),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::Pipe(7)))
        );
        for length in [0u8, 2, 6] {
            assert_eq!(
                radio.set_address_length(length),
                Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(
                    length as usize
                )))
            );
        }
        assert!(chip.commands().is_empty());
    }

    #[test]
    fn enable_then_disable_restores() {
        let (mut radio, chip, _ce) = mk_fake();
        for pipe in [
            Pipe::P0,
            Pipe::P1,
            Pipe::P2,
            Pipe::P3,
            Pipe::P4,
            Pipe::P5,
            Pipe::All,
        ] {
            // reserved bits set, selected bits clear
            let before = 0xC0 | (Pipe::ALL_MASK & !pipe.into_bits());
            chip.set_register(registers::EN_RXADDR, &[before]);
            radio.enable_rx_pipe(pipe).unwrap();
            assert_ne!(chip.register(registers::EN_RXADDR)[0], before);
            radio.disable_rx_pipe(pipe).unwrap();
            assert_eq!(chip.register(registers::EN_RXADDR)[0], before);
        }
    }

    #[test]
    fn address_length_round_trip() {
        let (mut radio, chip, _ce) = mk_fake();
        chip.set_register(registers::SETUP_AW, &[0xFC]);
        radio.set_address_length(4).unwrap();
        assert_eq!(chip.register(registers::SETUP_AW)[0], 0xFE);
        assert_eq!(radio.get_address_length().unwrap(), 4);
        chip.set_register(registers::SETUP_AW, &[0]);
        assert_eq!(radio.get_address_length(), Err(Nrf24Error::BinaryCorruption));
    }

    #[test]
    fn fault_in_pipe_1_rewrite_stops_the_rest() {
        let (mut radio, chip, _ce) = mk_fake();
        chip.fail_at(1);
        assert_eq!(
            radio.set_rx_address(4, &[0xAA, 0xBB, 0xCC]),
            Err(Nrf24Error::Spi(FakeChip::FAULT))
        );
        assert_eq!(chip.commands().len(), 2);
        // pipe 4 keeps its reset value
        assert_eq!(chip.register(registers::RX_ADDR_P0 + 4)[0], 0xC5);
    }

    #[test]
    pub fn set_rx_address_wire() {
        let spi_expectations = spi_test_expects![
            // read pipe 1's address
            (
                vec![registers::RX_ADDR_P1, 0, 0, 0, 0],
                skewed(&[0xC2, 0xC2, 0xC2]),
            ),
            // rewrite pipe 1's address with a new LSB
            (
                vec![registers::RX_ADDR_P1 | commands::W_REGISTER, 0x33, 0xC2, 0xC2],
                vec![0xE, 0, 0, 0],
            ),
            // pipe 5's own byte
            (
                vec![(registers::RX_ADDR_P0 + 5) | commands::W_REGISTER, 0x11],
                vec![0xE, 0],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_rx_address(5, &[0x11, 0x22, 0x33]).unwrap();
        spi.done();
        ce_pin.done();
    }
}
