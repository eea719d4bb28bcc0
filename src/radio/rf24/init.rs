use crate::radio::prelude::{
    EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbInit, EsbPayloadLength, EsbPipe, EsbPower,
};
use crate::radio::{Nrf24, Nrf24Error, RadioConfig};
use crate::transport::Transport;
use embedded_hal::digital::OutputPin;

impl<BUS, DO> EsbInit for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type ConfigErrorType = Nrf24Error<BUS::Error, DO::Error>;

    /// Settings are applied in this order: address length, data rate, CRC length,
    /// channel, payload length, TX address.
    ///
    /// The radio is left powered down. If a transaction fails, the settings applied
    /// before it stay applied.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        config.validate()?;

        self.power_down()?;
        self.flush_rx()?;
        self.flush_tx()?;

        self.set_address_length(config.address_length())?;
        self.set_data_rate(config.data_rate())?;
        self.set_crc_length(config.crc_length())?;
        self.set_channel(config.channel())?;
        self.set_payload_length(config.payload_length())?;
        if let Some(address) = config.tx_address_bytes() {
            self.set_tx_address(address)?;
        }
        Ok(())
    }
}
