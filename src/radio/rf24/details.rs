use super::{Nrf24, Nrf24Error};
use crate::radio::prelude::EsbDetails;
use crate::transport::Transport;
use embedded_hal::digital::OutputPin;

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
use super::{registers, Address};
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
use crate::radio::prelude::{
    EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbPayloadLength, EsbPipe, EsbPower, EsbRadio,
    EsbStatus,
};
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
use crate::{CrcLength, DataRate, FifoState, StatusFlags};

#[cfg(feature = "std")]
extern crate std;

/// A snapshot of everything [`EsbDetails::print_details()`] reports.
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
struct Details {
    channel: u8,
    data_rate: DataRate,
    crc_length: CrcLength,
    address_length: u8,
    payload_length: u8,
    dynamic_payloads: bool,
    powered: bool,
    is_rx: bool,
    status: StatusFlags,
    tx_fifo: FifoState,
    rx_fifo: FifoState,
    open_pipes: u8,
    tx_address: [u8; Address::MAX_LEN],
    rx_addresses: [[u8; Address::MAX_LEN]; 6],
}

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
impl<BUS, DO> Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    fn read_details(&mut self) -> Result<Details, Nrf24Error<BUS::Error, DO::Error>> {
        let mut tx_address = [0u8; Address::MAX_LEN];
        self.get_tx_address(&mut tx_address)?;
        let mut rx_addresses = [[0u8; Address::MAX_LEN]; 6];
        for (pipe, address) in rx_addresses.iter_mut().enumerate() {
            self.get_rx_address(pipe as u8, address)?;
        }
        Ok(Details {
            channel: self.get_channel()?,
            data_rate: self.get_data_rate()?,
            crc_length: self.get_crc_length()?,
            address_length: self.get_address_length()?,
            payload_length: self.get_payload_length()?,
            dynamic_payloads: self.get_dynamic_payloads()?,
            powered: self.is_powered()?,
            is_rx: self.is_rx()?,
            status: self.get_status_flags()?,
            tx_fifo: self.get_fifo_state(true)?,
            rx_fifo: self.get_fifo_state(false)?,
            open_pipes: self.read_byte(registers::EN_RXADDR)?,
            tx_address,
            rx_addresses,
        })
    }
}

impl<BUS, DO> EsbDetails for Nrf24<BUS, DO>
where
    BUS: Transport,
    DO: OutputPin,
{
    type DetailsErrorType = Nrf24Error<BUS::Error, DO::Error>;

    #[cfg(all(feature = "defmt", target_os = "none"))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let details = self.read_details()?;
        let len = details.address_length as usize;

        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            details.channel,
            details.channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", details.data_rate);
        defmt::println!("CRC Length________________{}", details.crc_length);
        defmt::println!("Address length____________{=u8} bytes", details.address_length);
        defmt::println!("Payload length____________{=u8} bytes", details.payload_length);
        defmt::println!("Dynamic Payloads__________{=bool}", details.dynamic_payloads);
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if details.is_rx { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", details.powered);
        defmt::println!("Status____________________{}", details.status);
        defmt::println!("TX FIFO___________________{}", details.tx_fifo);
        defmt::println!("RX FIFO___________________{}", details.rx_fifo);
        defmt::println!(
            "TX address________________{=[u8]:#04X}",
            &details.tx_address[..len]
        );
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for (pipe, address) in details.rx_addresses.iter().enumerate() {
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {=[u8]:#04X}",
                pipe as u8,
                if details.open_pipes & (1 << pipe) > 0 {
                    opened
                } else {
                    closed
                },
                &address[..len],
            );
        }
        Ok(())
    }

    #[cfg(not(any(all(feature = "defmt", target_os = "none"), feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(all(feature = "std", not(all(feature = "defmt", target_os = "none"))))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let details = self.read_details()?;
        let len = details.address_length as usize;

        std::println!(
            "Channel___________________{} ~ {} MHz",
            details.channel,
            details.channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", details.data_rate);
        std::println!("CRC Length________________{}", details.crc_length);
        std::println!("Address length____________{} bytes", details.address_length);
        std::println!("Payload length____________{} bytes", details.payload_length);
        std::println!("Dynamic Payloads__________{}", details.dynamic_payloads);
        std::println!(
            "Primary Mode______________{}X",
            if details.is_rx { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", details.powered);
        std::println!("Status____________________{}", details.status);
        std::println!("TX FIFO___________________{}", details.tx_fifo);
        std::println!("RX FIFO___________________{}", details.rx_fifo);
        std::println!(
            "TX address________________{:02X?}",
            &details.tx_address[..len]
        );
        for (pipe, address) in details.rx_addresses.iter().enumerate() {
            std::println!(
                "Pipe {pipe} ({}) bound to {:02X?}",
                if details.open_pipes & (1 << pipe) > 0 {
                    " open "
                } else {
                    "closed"
                },
                &address[..len],
            );
        }
        Ok(())
    }
}
