#![doc = include_str!("../README.md")]
//!
//! ## Configuration API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::with_spi()`](fn@crate::radio::Nrf24::with_spi)
//! - [`Nrf24::free()`](fn@crate::radio::Nrf24::free)
//! - [`Nrf24::with_config()`](radio/struct.Nrf24.html#method.with_config)
//! - [`Nrf24::set_channel()`](radio/struct.Nrf24.html#method.set_channel)
//! - [`Nrf24::set_data_rate()`](radio/struct.Nrf24.html#method.set_data_rate)
//! - [`Nrf24::set_crc_length()`](radio/struct.Nrf24.html#method.set_crc_length)
//! - [`Nrf24::set_payload_length()`](radio/struct.Nrf24.html#method.set_payload_length)
//! - [`Nrf24::set_address_length()`](radio/struct.Nrf24.html#method.set_address_length)
//! - [`Nrf24::set_rx_address()`](radio/struct.Nrf24.html#method.set_rx_address)
//! - [`Nrf24::set_tx_address()`](radio/struct.Nrf24.html#method.set_tx_address)
//! - [`Nrf24::enable_rx_pipe()`](radio/struct.Nrf24.html#method.enable_rx_pipe)
//! - [`Nrf24::disable_rx_pipe()`](radio/struct.Nrf24.html#method.disable_rx_pipe)
//!
//! ## Operation API
//!
//! - [`Nrf24::power_up_tx()`](radio/struct.Nrf24.html#method.power_up_tx)
//! - [`Nrf24::power_up_rx()`](radio/struct.Nrf24.html#method.power_up_rx)
//! - [`Nrf24::power_down()`](radio/struct.Nrf24.html#method.power_down)
//! - [`Nrf24::start_listening()`](radio/struct.Nrf24.html#method.start_listening)
//! - [`Nrf24::stop_listening()`](radio/struct.Nrf24.html#method.stop_listening)
//! - [`Nrf24::write_payload()`](radio/struct.Nrf24.html#method.write_payload)
//! - [`Nrf24::read_payload()`](radio/struct.Nrf24.html#method.read_payload)
//! - [`Nrf24::available()`](radio/struct.Nrf24.html#method.available)
//! - [`Nrf24::get_fifo_state()`](radio/struct.Nrf24.html#method.get_fifo_state)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::get_status_flags()`](radio/struct.Nrf24.html#method.get_status_flags)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::print_details()`](radio/struct.Nrf24.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{CrcLength, DataRate, FifoState, InvalidArgument, Pipe, StatusFlags};
pub mod radio;
pub mod transport;
