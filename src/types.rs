//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Describes why an argument was rejected before any SPI transaction took place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A raw value that does not name a [`DataRate`].
    DataRate(u8),
    /// A raw value that does not name a [`CrcLength`].
    CrcLength(u8),
    /// A pipe number outside the range [0, 5].
    Pipe(u8),
    /// A channel outside the range [0, 125].
    Channel(u8),
    /// An address length outside the range [3, 5].
    AddressLength(usize),
    /// A payload length outside the range allowed by the operation.
    PayloadLength(usize),
}

#[cfg(feature = "defmt")]
impl defmt::Format for InvalidArgument {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            InvalidArgument::DataRate(v) => defmt::write!(fmt, "invalid data rate {=u8}", v),
            InvalidArgument::CrcLength(v) => defmt::write!(fmt, "invalid CRC length {=u8}", v),
            InvalidArgument::Pipe(v) => defmt::write!(fmt, "invalid pipe {=u8}", v),
            InvalidArgument::Channel(v) => defmt::write!(fmt, "invalid channel {=u8}", v),
            InvalidArgument::AddressLength(v) => {
                defmt::write!(fmt, "invalid address length {=usize}", v)
            }
            InvalidArgument::PayloadLength(v) => {
                defmt::write!(fmt, "invalid payload length {=usize}", v)
            }
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InvalidArgument::DataRate(v) => write!(f, "invalid data rate {v}"),
            InvalidArgument::CrcLength(v) => write!(f, "invalid CRC length {v}"),
            InvalidArgument::Pipe(v) => write!(f, "invalid pipe {v}"),
            InvalidArgument::Channel(v) => write!(f, "invalid channel {v}"),
            InvalidArgument::AddressLength(v) => write!(f, "invalid address length {v}"),
            InvalidArgument::PayloadLength(v) => write!(f, "invalid payload length {v}"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// RF_DR_LOW (bit 5) and RF_DR_HIGH (bit 3) in the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    /// Decode the masked RF_SETUP bits.
    ///
    /// Returns `None` for the reserved combination where both bits are set.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value & Self::MASK {
            0 => Some(DataRate::Mbps1),
            0x8 => Some(DataRate::Mbps2),
            0x20 => Some(DataRate::Kbps250),
            _ => None,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = InvalidArgument;

    /// `0` is 1 Mbps, `1` is 250 Kbps and `2` is 2 Mbps.
    ///
    /// The low bit of `value` lands on RF_DR_LOW and the high bit on RF_DR_HIGH.
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(DataRate::Mbps1),
            1 => Ok(DataRate::Kbps250),
            2 => Ok(DataRate::Mbps2),
            _ => Err(InvalidArgument::DataRate(value)),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl TryFrom<u8> for CrcLength {
    type Error = InvalidArgument;

    /// The raw value is the checksum length in bytes: `0`, `1` or `2`.
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(CrcLength::Disabled),
            1 => Ok(CrcLength::Bit8),
            2 => Ok(CrcLength::Bit16),
            _ => Err(InvalidArgument::CrcLength(value)),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// Selects one or all of the radio's 6 RX pipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pipe {
    /// Pipe 0. Also receives the auto-ACK packets while in TX mode.
    P0,
    /// Pipe 1. Holds the base address shared with pipes 2 - 5.
    P1,
    /// Pipe 2.
    P2,
    /// Pipe 3.
    P3,
    /// Pipe 4.
    P4,
    /// Pipe 5.
    P5,
    /// Every pipe at once.
    All,
}

impl Pipe {
    pub(crate) const ALL_MASK: u8 = 0x3F;

    /// The bit(s) this selector occupies in the EN_RXADDR (and DYNPD) register.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Pipe::P0 => 1,
            Pipe::P1 => 1 << 1,
            Pipe::P2 => 1 << 2,
            Pipe::P3 => 1 << 3,
            Pipe::P4 => 1 << 4,
            Pipe::P5 => 1 << 5,
            Pipe::All => Self::ALL_MASK,
        }
    }
}

impl TryFrom<u8> for Pipe {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Pipe::P0),
            1 => Ok(Pipe::P1),
            2 => Ok(Pipe::P2),
            3 => Ok(Pipe::P3),
            4 => Ok(Pipe::P4),
            5 => Ok(Pipe::P5),
            _ => Err(InvalidArgument::Pipe(value)),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Pipe {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Pipe::P0 => defmt::write!(fmt, "pipe 0"),
            Pipe::P1 => defmt::write!(fmt, "pipe 1"),
            Pipe::P2 => defmt::write!(fmt, "pipe 2"),
            Pipe::P3 => defmt::write!(fmt, "pipe 3"),
            Pipe::P4 => defmt::write!(fmt, "pipe 4"),
            Pipe::P5 => defmt::write!(fmt, "pipe 5"),
            Pipe::All => defmt::write!(fmt, "all pipes"),
        }
    }
}

impl Display for Pipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Pipe::P0 => write!(f, "pipe 0"),
            Pipe::P1 => write!(f, "pipe 1"),
            Pipe::P2 => write!(f, "pipe 2"),
            Pipe::P3 => write!(f, "pipe 3"),
            Pipe::P4 => write!(f, "pipe 4"),
            Pipe::P5 => write!(f, "pipe 5"),
            Pipe::All => write!(f, "all pipes"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The radio's STATUS register.
///
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all IRQ flags set to true (useful for
/// [`EsbStatus::clear_status_flags()`](fn@crate::radio::prelude::EsbStatus::clear_status_flags)).
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed.
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `7` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all IRQ flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        self.with_flag(Self::RX_DR_OFFSET, flag)
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        self.with_flag(Self::TX_DS_OFFSET, flag)
    }

    /// A flag to describe if TX Data Failed.
    pub fn with_tx_df(self, flag: bool) -> Self {
        self.with_flag(Self::TX_DF_OFFSET, flag)
    }

    fn with_flag(self, offset: usize, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << offset);
        Self::from_bits(new_val | ((flag as u8) << offset))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}
