use super::registers;
use crate::radio::{prelude::EsbFifo, Nrf24, Nrf24Error};
use crate::transport::{Command, Transport};
use crate::FifoState;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbFifo for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type FifoErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(Command::FlushRx)
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(Command::FlushTx)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let offset = about_tx as u8 * 4;
        let status = (self.read_byte(registers::FIFO_STATUS)? >> offset) & 3;
        match status {
            1 => Ok(FifoState::Empty),
            2 => Ok(FifoState::Full),
            _ => Ok(FifoState::Occupied),
        }
    }

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(self.get_fifo_state(false)? != FifoState::Empty)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbFifo, FifoState};
    use crate::radio::commands;
    use crate::spi_test_expects;
    use crate::test::{mk_fake, mk_radio, skewed};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn rx_fifo_tracks_payloads() {
        let (mut radio, chip, _ce) = mk_fake();
        assert!(!radio.available().unwrap());
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Empty);
        chip.push_rx(&[1]);
        assert!(radio.available().unwrap());
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Occupied);
        chip.push_rx(&[2]);
        chip.push_rx(&[3]);
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Full);
        radio.flush_rx().unwrap();
        assert_eq!(chip.rx_fifo_len(), 0);
        assert!(!radio.available().unwrap());
    }

    #[test]
    pub fn get_fifo_state_wire() {
        let spi_expectations = spi_test_expects![
            // TX FIFO full, RX FIFO empty
            (vec![registers::FIFO_STATUS, 0, 0], skewed(&[0x21])),
            (vec![registers::FIFO_STATUS, 0, 0], skewed(&[0x21])),
            (vec![registers::FIFO_STATUS, 0, 0], skewed(&[0x00])),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_fifo_state(true).unwrap(), FifoState::Full);
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Empty);
        assert_eq!(radio.get_fifo_state(true).unwrap(), FifoState::Occupied);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn flush_wire() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_RX], vec![0xE]),
            (vec![commands::FLUSH_TX], vec![0xE]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        ce_pin.done();
    }
}
