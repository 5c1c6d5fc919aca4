//! Host side of the serial pixel controller configuration.
//!
//! The controller keeps its [`DeviceConfig`] in EEPROM. This crate provides an
//! on-disk [`EepromImage`] with the same layout, so the store can be inspected
//! and prepared without hardware.

use std::path::Path;

pub use serial_pixel_shared::*;

mod error;
mod image;

pub use error::{Error, Result};
pub use image::EepromImage;

/// Opens (or creates) an EEPROM image the size of the controller's EEPROM and wraps it in a [`ConfigStore`].
pub fn open_store(path: impl AsRef<Path>) -> Result<ConfigStore<EepromImage>> {
	let image = EepromImage::open(path, EEPROM_SIZE)?;
	Ok(ConfigStore::new(image))
}
