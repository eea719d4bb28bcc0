//! Typed images of the registers that get read-modify-written.
//!
//! Every transform here is pure: it takes the value last read from the radio
//! and returns the value to write back. Bits a transform does not own are preserved.

use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate};

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _reserved: u8,

    /// The IRQ mask bits (MASK_RX_DR, MASK_TX_DS, MASK_MAX_RT).
    #[bits(3)]
    _irq_mask: u8,

    pub crc_enabled: bool,

    pub crc_two_bytes: bool,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        if !self.crc_enabled() {
            CrcLength::Disabled
        } else if self.crc_two_bytes() {
            CrcLength::Bit16
        } else {
            CrcLength::Bit8
        }
    }

    /// Disabling only clears EN_CRC; the CRCO bit is left as it was.
    pub const fn with_crc_length(self, length: CrcLength) -> Self {
        match length {
            CrcLength::Disabled => self.with_crc_enabled(false),
            CrcLength::Bit8 => self.with_crc_enabled(true).with_crc_two_bytes(false),
            CrcLength::Bit16 => self.with_crc_enabled(true).with_crc_two_bytes(true),
        }
    }

    /// Powered up as primary receiver.
    pub const fn as_rx(self) -> Self {
        self.with_is_rx(true).with_power(true)
    }

    /// Powered up as primary transmitter.
    pub const fn as_tx(self) -> Self {
        self.with_is_rx(false).with_power(true)
    }
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    /// CONT_WAVE and a reserved bit.
    #[bits(2)]
    _reserved: u8,

    /// RF_DR_LOW, PLL_LOCK and RF_DR_HIGH.
    #[bits(3, access = None)]
    data_rate: u8,

    /// RF_PWR and the LNA bit.
    #[bits(3)]
    _pa_lna: u8,
}

impl RfSetup {
    /// `None` if both data rate bits are set (a reserved combination).
    pub const fn data_rate(&self) -> Option<DataRate> {
        DataRate::from_bits(self.into_bits())
    }

    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self::from_bits(self.into_bits() & !DataRate::MASK | data_rate.into_bits())
    }
}

/// The FEATURE register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _reserved: u8,

    pub dynamic_payloads: bool,

    /// EN_ACK_PAY and EN_DYN_ACK.
    #[bits(2)]
    _ack: u8,
}
