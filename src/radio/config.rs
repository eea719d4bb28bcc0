use crate::radio::rf24::bit_fields::{Config, RfSetup};
use crate::radio::Address;
use crate::{CrcLength, DataRate, InvalidArgument};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Values are not checked by the builder.
/// [`RadioConfig::validate()`] is called before the config is applied with
/// [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config).
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    config_reg: Config,
    rf_setup: RfSetup,
    channel: u8,
    payload_length: u8,
    address_length: u8,
    tx_address: Option<([u8; Address::MAX_LEN], usize)>,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::address_length()`] | `5` |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::payload_length()`] | `32` |
    /// | [`RadioConfig::tx_address()`] | `None` (left as the radio has it) |
    fn default() -> Self {
        Self {
            config_reg: Config::new().with_crc_length(CrcLength::Bit16),
            rf_setup: RfSetup::new().with_data_rate(DataRate::Mbps1),
            channel: 76,
            payload_length: 32,
            address_length: 5,
            tx_address: None,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`EsbCrcLength::set_crc_length()`](fn@crate::radio::prelude::EsbCrcLength::set_crc_length).
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            config_reg: self.config_reg.with_crc_length(length),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate().unwrap_or(DataRate::Mbps1)
    }

    /// The Data Rate (over the air).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            rf_setup: self.rf_setup.with_data_rate(data_rate),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// Must be in range [0, 125].
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The payload length for all pipes. `0` enables dynamic payloads.
    ///
    /// Must be in range [0, 32].
    /// See [`EsbPayloadLength::set_payload_length()`](fn@crate::radio::prelude::EsbPayloadLength::set_payload_length).
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_address_length()`].
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// The address length.
    ///
    /// Must be in range [3, 5].
    pub fn with_address_length(self, value: u8) -> Self {
        Self {
            address_length: value,
            ..self
        }
    }

    /// Copy the address set by [`RadioConfig::with_tx_address()`] into `address`.
    ///
    /// Returns the number of bytes copied, or `None` if no TX address is set.
    pub fn tx_address(&self, address: &mut [u8]) -> Option<usize> {
        self.tx_address.map(|(bytes, len)| {
            let len = len.min(Address::MAX_LEN).min(address.len());
            address[..len].copy_from_slice(&bytes[..len]);
            len
        })
    }

    /// The TX address (most significant byte first).
    ///
    /// Its length must equal [`RadioConfig::address_length()`].
    /// Only the first 5 bytes are kept; a longer address fails validation.
    pub fn with_tx_address(self, address: &[u8]) -> Self {
        let mut bytes = [0u8; Address::MAX_LEN];
        let kept = address.len().min(Address::MAX_LEN);
        bytes[..kept].copy_from_slice(&address[..kept]);
        Self {
            tx_address: Some((bytes, address.len())),
            ..self
        }
    }

    /// Check every setting against the radio's limits.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.channel > 125 {
            return Err(InvalidArgument::Channel(self.channel));
        }
        if self.payload_length > 32 {
            return Err(InvalidArgument::PayloadLength(self.payload_length as usize));
        }
        let address_length = Address::check_len(self.address_length as usize)?;
        if let Some((_, len)) = self.tx_address {
            if len != address_length {
                return Err(InvalidArgument::AddressLength(len));
            }
        }
        Ok(())
    }

    /// The TX address as it is written to the radio.
    pub(crate) fn tx_address_bytes(&self) -> Option<&[u8]> {
        self.tx_address
            .as_ref()
            .map(|(bytes, len)| &bytes[..(*len).min(Address::MAX_LEN)])
    }
}
