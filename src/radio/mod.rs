//! A module to encapsulate all things related to radio configuration and operation.
pub mod prelude;

mod rf24;
pub use rf24::{commands, mnemonics, registers, Address, Nrf24, Nrf24Error};

mod config;
pub use config::RadioConfig;
