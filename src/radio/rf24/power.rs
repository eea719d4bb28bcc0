use super::{bit_fields::Config, registers};
use crate::radio::prelude::{EsbFifo, EsbPower};
use crate::radio::{Nrf24, Nrf24Error};
use crate::transport::Transport;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbPower for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type PowerErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// The radio needs up to 5 ms (Tpd2standby) after leaving power down mode
    /// before a transmission actually starts. Waiting for it is up to the caller.
    fn power_up_tx(&mut self) -> Result<(), Self::PowerErrorType> {
        self.modify_register(registers::CONFIG, |value| {
            Config::from_bits(value).as_tx().into_bits()
        })?;
        self.flush_tx()?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn power_up_rx(&mut self) -> Result<(), Self::PowerErrorType> {
        self.modify_register(registers::CONFIG, |value| {
            Config::from_bits(value).as_rx().into_bits()
        })?;
        self.flush_rx()
    }

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        self.modify_register(registers::CONFIG, |value| {
            Config::from_bits(value).with_power(false).into_bits()
        })?;
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(Config::from_bits(self.read_byte(registers::CONFIG)?).power())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPower};
    use crate::radio::{commands, mnemonics, Nrf24Error};
    use crate::spi_test_expects;
    use crate::test::{mk_fake, mk_radio, skewed};
    use crate::transport::Command;
    use embedded_hal::digital::ErrorKind;
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    fn rx_then_down_always_ends_low_and_unpowered() {
        for prim_rx in [false, true] {
            let (mut radio, chip, ce_pin) = mk_fake();
            chip.set_register(registers::CONFIG, &[0x0C | prim_rx as u8]);
            radio.power_up_rx().unwrap();
            let config = chip.register(registers::CONFIG)[0];
            assert_eq!(config & 3, mnemonics::PWR_UP | mnemonics::PRIM_RX);
            assert!(radio.is_powered().unwrap());
            radio.power_down().unwrap();
            assert_eq!(chip.register(registers::CONFIG)[0] & mnemonics::PWR_UP, 0);
            assert_eq!(ce_pin.is_high(), Some(false));
            assert!(!radio.is_powered().unwrap());
        }
    }

    #[test]
    fn rx_leaves_ce_alone() {
        let (mut radio, chip, ce_pin) = mk_fake();
        chip.push_rx(&[1, 2, 3]);
        radio.power_up_rx().unwrap();
        assert_eq!(ce_pin.is_high(), None);
        assert_eq!(chip.rx_fifo_len(), 0);
        assert_eq!(*chip.commands().last().unwrap(), Command::FlushRx);
    }

    #[test]
    fn tx_flushes_then_raises_ce() {
        let (mut radio, chip, ce_pin) = mk_fake();
        chip.set_register(registers::CONFIG, &[0x0B]);
        radio.power_up_tx().unwrap();
        assert_eq!(chip.register(registers::CONFIG)[0], 0x0A);
        assert_eq!(*chip.commands().last().unwrap(), Command::FlushTx);
        assert_eq!(ce_pin.history(), [true]);
    }

    #[test]
    fn ce_failure_happens_before_power_down() {
        let (mut radio, chip, ce_pin) = mk_fake();
        ce_pin.fail();
        assert_eq!(radio.power_down(), Err(Nrf24Error::Gpo(ErrorKind::Other)));
        assert!(chip.commands().is_empty());
    }

    #[test]
    pub fn power_up_tx_wire() {
        let spi_expectations = spi_test_expects![
            // read the CONFIG register value
            (vec![registers::CONFIG, 0, 0], skewed(&[0x09])),
            // clear PRIM_RX and set PWR_UP
            (vec![registers::CONFIG | commands::W_REGISTER, 0x0A], vec![0xE, 0]),
            (vec![commands::FLUSH_TX], vec![0xE]),
        ];
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.power_up_tx().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn power_down_wire() {
        let spi_expectations = spi_test_expects![
            // read the CONFIG register value
            (vec![registers::CONFIG, 0, 0], skewed(&[0x0B])),
            // clear PWR_UP
            (vec![registers::CONFIG | commands::W_REGISTER, 0x09], vec![0xE, 0]),
        ];
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.power_down().unwrap();
        spi.done();
        ce_pin.done();
    }
}
