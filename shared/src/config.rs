use bytemuck::{Pod, Zeroable};
use num_enum::TryFromPrimitiveError;

use crate::{ReturnCode, StripType, BYTES_PER_PIXEL, FREE_RAM_BUFFER, MAX_PIXEL_COUNT};

/// Controller configuration, persisted in EEPROM and restored at boot.
///
/// `strip_type` is kept as the raw byte so whatever is in storage survives a
/// read unchanged; use [`DeviceConfig::strip`] or [`DeviceConfig::validate`] to
/// interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
	pub strip_type:  u8,
	pub pixel_count: u16,
	pub spi_speed:   u8,
}

impl DeviceConfig {
	pub const DEFAULT: Self = Self {
		strip_type:  StripType::Lpd8806 as u8,
		pixel_count: 1,
		spi_speed:   16,
	};

	pub fn new(strip_type: StripType, pixel_count: u16, spi_speed: u8) -> Self {
		Self {
			strip_type: strip_type.into(),
			pixel_count,
			spi_speed,
		}
	}

	pub fn strip(&self) -> Result<StripType, TryFromPrimitiveError<StripType>> {
		StripType::try_from(self.strip_type)
	}

	/// Checks the config the way the command dispatcher does before accepting it.
	pub fn validate(&self) -> Result<StripType, ReturnCode> {
		let strip = self.strip().map_err(|_| ReturnCode::ErrorUnsupported)?;

		if !(1..=MAX_PIXEL_COUNT).contains(&self.pixel_count) {
			return Err(ReturnCode::ErrorPixelCount);
		}

		Ok(strip)
	}

	/// Whether a pixel buffer for this config leaves at least [`FREE_RAM_BUFFER`] bytes free.
	pub fn fits_in_memory(&self, free_bytes: usize) -> bool {
		self.pixel_count as usize * BYTES_PER_PIXEL + FREE_RAM_BUFFER <= free_bytes
	}
}

impl Default for DeviceConfig {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// On-storage layout of [`DeviceConfig`]: 4 bytes, no padding, little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct RawDeviceConfig {
	pub strip_type:  u8,
	pub pixel_count: [u8; 2],
	pub spi_speed:   u8,
}

const _: () = assert!(core::mem::size_of::<RawDeviceConfig>() == 4);

impl From<DeviceConfig> for RawDeviceConfig {
	fn from(config: DeviceConfig) -> Self {
		Self {
			strip_type:  config.strip_type,
			pixel_count: config.pixel_count.to_le_bytes(),
			spi_speed:   config.spi_speed,
		}
	}
}

impl From<RawDeviceConfig> for DeviceConfig {
	fn from(raw: RawDeviceConfig) -> Self {
		Self {
			strip_type:  raw.strip_type,
			pixel_count: u16::from_le_bytes(raw.pixel_count),
			spi_speed:   raw.spi_speed,
		}
	}
}
