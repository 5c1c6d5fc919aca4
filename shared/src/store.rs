//! # Config Store
//!
//! ## Memory Map
//!
//! ```text
//!  0          1                                          5            16
//!  +----------+----------+-----------------------+-------+--  ...  --+--------+
//!  | Reserved | Type     | PixelCount (u16, LE)  | Speed |  unused   | Marker |
//!  +----------+----------+-----------------------+-------+--  ...  --+--------+
//! ```
//!
//! The marker is written as `0` together with the default config. Nothing here
//! reads it back to decide anything, [`ConfigStore::read_or_init_config`] looks
//! at the config itself.

use bytemuck::Zeroable;
use embedded_storage::{ReadStorage, Storage};

use crate::{read_anything, write_anything, DeviceConfig, RawDeviceConfig};

pub const RESERVED_OFFSET: u32 = 0;
pub const CONFIG_OFFSET: u32 = 1;
pub const CONFIG_SIZE: usize = core::mem::size_of::<RawDeviceConfig>();
pub const MARKER_OFFSET: u32 = 16;
pub const MARKER_INITIALIZED: u8 = 0;
/// Config layout check value. The store never writes or compares it, the
/// marker is the only byte written besides the record.
pub const CONFIG_CHECK: u8 = 7;

const _: () = assert!(CONFIG_OFFSET as usize + CONFIG_SIZE <= MARKER_OFFSET as usize);

/// Reads and writes the [`DeviceConfig`] record at its fixed place in storage.
///
/// Every write costs one write cycle per byte on real EEPROM, so don't call the
/// write methods in a loop.
pub struct ConfigStore<S> {
	storage: S,
}

impl<S> ConfigStore<S> {
	pub fn new(storage: S) -> Self {
		Self { storage }
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn into_inner(self) -> S {
		self.storage
	}
}

impl<S: ReadStorage> ConfigStore<S> {
	/// Reads the config record as-is. Storage that was never written yields garbage.
	pub fn read_config(&mut self) -> Result<DeviceConfig, S::Error> {
		let mut raw = RawDeviceConfig::zeroed();
		read_anything(&mut self.storage, CONFIG_OFFSET, &mut raw)?;
		Ok(raw.into())
	}

	pub fn read_marker(&mut self) -> Result<u8, S::Error> {
		let mut marker = 0u8;
		read_anything(&mut self.storage, MARKER_OFFSET, &mut marker)?;
		Ok(marker)
	}
}

impl<S: Storage> ConfigStore<S> {
	pub fn write_config(&mut self, config: &DeviceConfig) -> Result<(), S::Error> {
		write_anything(&mut self.storage, CONFIG_OFFSET, &RawDeviceConfig::from(*config))?;
		Ok(())
	}

	/// Writes [`DeviceConfig::DEFAULT`] followed by the marker byte.
	pub fn write_default_config(&mut self) -> Result<DeviceConfig, S::Error> {
		let config = DeviceConfig::DEFAULT;
		self.write_config(&config)?;
		write_anything(&mut self.storage, MARKER_OFFSET, &MARKER_INITIALIZED)?;
		Ok(config)
	}

	/// Boot helper: returns the stored config, or writes and returns the default
	/// one if the stored config would be rejected by the command dispatcher.
	pub fn read_or_init_config(&mut self) -> Result<DeviceConfig, S::Error> {
		let config = self.read_config()?;
		match config.validate() {
			Ok(_) => Ok(config),
			Err(_) => self.write_default_config(),
		}
	}
}
