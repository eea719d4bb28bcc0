use super::{bit_fields::Config, registers};
use crate::radio::{prelude::EsbCrcLength, Nrf24, Nrf24Error};
use crate::transport::Transport;
use crate::CrcLength;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbCrcLength for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type CrcLengthErrorType = Nrf24Error<BUS::Error, DO::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        Ok(Config::from_bits(self.read_byte(registers::CONFIG)?).crc_length())
    }

    /// [`CrcLength::Disabled`] only clears the EN_CRC bit. The CRCO bit keeps its value.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        self.modify_register(registers::CONFIG, |value| {
            Config::from_bits(value)
                .with_crc_length(crc_length)
                .into_bits()
        })?;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbCrcLength};
    use crate::radio::commands;
    use crate::test::{mk_fake, mk_radio, skewed};
    use crate::{spi_test_expects, CrcLength};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn crc_round_trip() {
        let (mut radio, chip, _ce) = mk_fake();
        for length in [CrcLength::Bit16, CrcLength::Disabled, CrcLength::Bit8] {
            radio.set_crc_length(length).unwrap();
            assert_eq!(radio.get_crc_length().unwrap(), length);
        }
        // reset value 0x08 with CRCO cleared by the 8 bit setting
        assert_eq!(chip.register(registers::CONFIG)[0], 0x08);
    }

    #[test]
    fn disabling_leaves_crco() {
        let (mut radio, chip, _ce) = mk_fake();
        chip.set_register(registers::CONFIG, &[0x0E]);
        radio.set_crc_length(CrcLength::Disabled).unwrap();
        assert_eq!(chip.register(registers::CONFIG)[0], 0x06);
        assert_eq!(radio.get_crc_length().unwrap(), CrcLength::Disabled);
    }

    #[test]
    pub fn set_crc_length_wire() {
        let spi_expectations = spi_test_expects![
            // read the CONFIG register value
            (vec![registers::CONFIG, 0, 0], skewed(&[0x0A])),
            // set EN_CRC and CRCO; keep PWR_UP
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0E],
                vec![0xE, 0],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_crc_length(CrcLength::Bit16).unwrap();
        spi.done();
        ce_pin.done();
    }
}
