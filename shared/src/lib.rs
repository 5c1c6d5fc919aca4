#![cfg_attr(not(test), no_std)]

mod board;
mod config;
mod eeprom;
mod protocol;
mod store;

pub use board::{estimate_free_memory, Board};
pub use config::{DeviceConfig, RawDeviceConfig};
pub use eeprom::{read_anything, write_anything, MemEeprom, MemEepromError};
pub use protocol::{CommandType, ReturnCode, StripType};
pub use store::{ConfigStore, CONFIG_CHECK, CONFIG_OFFSET, CONFIG_SIZE, MARKER_OFFSET, MARKER_INITIALIZED, RESERVED_OFFSET};

pub const FIRMWARE_VERSION: u8 = 3;

pub const BAUD_RATE: u32 = 1_000_000;

/// Data pin for one-wire chipsets (NeoPixel and friends).
pub const ONE_WIRE_PIN: u8 = 2;
/// Wired to the reset line; driving it low restarts the controller.
pub const REBOOT_PIN: u8 = 15;

/// Bytes of RAM that must stay free after the pixel buffer is allocated.
pub const FREE_RAM_BUFFER: usize = 180;

pub const BYTES_PER_PIXEL: usize = 3;
/// This could be increased on boards with more RAM, see [`DeviceConfig::fits_in_memory`].
pub const MAX_PIXEL_COUNT: u16 = 512;

/// Size of the (emulated) EEPROM, matches the ATmega328.
pub const EEPROM_SIZE: usize = 1024;
