//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24::radio::prelude::*;
//! ```
//!
//! Every method re-reads the registers it depends on.
//! Arguments are validated before anything is sent over the bus, and a rejected
//! argument is reported as an `InvalidArgument` error.

use crate::types::{CrcLength, DataRate, FifoState, Pipe, StatusFlags};

use super::RadioConfig;

/// A trait to represent manipulation of data pipes and their addresses.
pub trait EsbPipe {
    type PipeErrorType;

    /// Allow the given `pipe` (or [`Pipe::All`]) to receive data when in RX mode.
    ///
    /// Other pipes' enabled state is left untouched.
    fn enable_rx_pipe(&mut self, pipe: Pipe) -> Result<(), Self::PipeErrorType>;

    /// Stop the given `pipe` (or [`Pipe::All`]) from receiving data.
    ///
    /// Other pipes' enabled state is left untouched.
    fn disable_rx_pipe(&mut self, pipe: Pipe) -> Result<(), Self::PipeErrorType>;

    /// Set the RX `address` for a `pipe` in range [0, 5].
    ///
    /// The `address` is given most significant byte first and must be 3 to 5 bytes long.
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 store a full address. Pipes 2 - 5 only store a single byte
    /// and borrow the remaining bytes from pipe 1.
    /// For pipes 2 - 5, the least significant byte of `address` is written into pipe 1's
    /// address, and the most significant byte of `address` becomes the pipe's own byte.
    ///
    /// ```ignore
    /// // pipe 1's LSB becomes 0xEE; pipe 3's register holds 0xAA
    /// radio.set_rx_address(3, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE])?;
    /// ```
    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Get the RX address of a `pipe` in range [0, 5] (most significant byte first).
    ///
    /// The address length is taken from [`EsbPipe::get_address_length()`].
    /// Returns the number of bytes copied into `address`.
    fn get_rx_address(
        &mut self,
        pipe: u8,
        address: &mut [u8],
    ) -> Result<usize, Self::PipeErrorType>;

    /// Set the TX address.
    ///
    /// The same address is written to pipe 0 so auto-ACK packets are received.
    fn set_tx_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Get the TX address (most significant byte first).
    ///
    /// Returns the number of bytes copied into `address`.
    fn get_tx_address(&mut self, address: &mut [u8]) -> Result<usize, Self::PipeErrorType>;

    /// Set the address length (applies to all pipes).
    ///
    /// The `length` must be in range [3, 5].
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address length (applied to all pipes).
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency).
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected `channel`.
    ///
    /// The `channel` must be in range [0, 125].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the current setting of the radio's CRC Length.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC Length.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the Data Rate.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the current setting of the radio's Data Rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the payload length.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the payload length (applies to all pipes).
    ///
    /// `0` enables dynamic payload lengths for all pipes.
    /// Any value in range [1, 32] disables dynamic payloads and
    /// sets that static length for all pipes.
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the static payload length configured for pipe 0.
    fn get_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;

    /// Are dynamic payload lengths enabled?
    fn get_dynamic_payloads(&mut self) -> Result<bool, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the radio's power state.
pub trait EsbPower {
    type PowerErrorType;

    /// Power up as a transmitter.
    ///
    /// The TX FIFO is flushed and the CE pin is driven high.
    fn power_up_tx(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up as a receiver.
    ///
    /// The RX FIFO is flushed. The CE pin is not touched;
    /// see [`EsbRadio::start_listening()`].
    fn power_up_rx(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Drive the CE pin low, then power down the radio.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a payload waiting in the RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of the STATUS register.
pub trait EsbStatus {
    type StatusErrorType;

    /// Read the STATUS register.
    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the IRQ flags that are set `true` in `flags`.
    ///
    /// Pass [`StatusFlags::new()`] to clear all of them.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent sending and receiving payloads.
pub trait EsbRadio {
    type RadioErrorType;

    /// Drive the CE pin high to begin actively listening (after [`EsbPower::power_up_rx()`]).
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Drive the CE pin low to stop actively listening.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Is the radio configured as a receiver?
    fn is_rx(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Put a payload of 1 to 32 bytes in the TX FIFO.
    fn write_payload(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Take the payload at the top of the RX FIFO.
    ///
    /// The payload length is the dynamic payload width if dynamic payloads are enabled,
    /// otherwise the static payload length of pipe 0.
    /// No more than `buf.len()` bytes are read.
    /// Returns the number of bytes read.
    fn read_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to apply a whole [`RadioConfig`] at once.
pub trait EsbInit {
    type ConfigErrorType;

    /// Power down, flush both FIFOs, then apply every setting in `config`.
    ///
    /// The `config` is validated first. Nothing is sent to the radio if it is invalid.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent debug output.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about the radio's current configuration.
    ///
    /// Uses `defmt::println!` with the `defmt` feature,
    /// `std::println!` with the `std` feature, or does nothing otherwise.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
