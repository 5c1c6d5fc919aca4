use embassy_rp::{
	flash::{self, Blocking, Flash, ERASE_SIZE},
	peripherals::FLASH,
};
use embedded_storage::{nor_flash::RmwNorFlashStorage, ReadStorage, Storage};
use serial_pixel_shared::EEPROM_SIZE;

pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// The EEPROM lives in the last flash sector, far past the end of the firmware image.
const EEPROM_BASE: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

const _: () = assert!(EEPROM_SIZE <= ERASE_SIZE);

pub type MergeBuffer = [u8; ERASE_SIZE];

type RpFlash = Flash<'static, FLASH, Blocking, FLASH_SIZE>;

#[derive(Debug, defmt::Format)]
pub enum FlashEepromError {
	Flash(flash::Error),
	OutOfBounds { offset: u32, len: usize },
}

/// Byte addressable EEPROM emulated on one flash sector.
///
/// Every write erases and reprograms the whole sector, so a 4 byte config
/// write costs 4 erase cycles.
pub struct FlashEeprom<'a> {
	flash: RmwNorFlashStorage<'a, RpFlash>,
}

impl<'a> FlashEeprom<'a> {
	pub fn new(flash: RpFlash, merge_buffer: &'a mut MergeBuffer) -> Self {
		Self {
			flash: RmwNorFlashStorage::new(flash, merge_buffer),
		}
	}

	fn address(offset: u32, len: usize) -> Result<u32, FlashEepromError> {
		match (offset as usize).checked_add(len) {
			Some(end) if end <= EEPROM_SIZE => Ok(EEPROM_BASE + offset),
			_ => Err(FlashEepromError::OutOfBounds { offset, len }),
		}
	}
}

impl ReadStorage for FlashEeprom<'_> {
	type Error = FlashEepromError;

	fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
		let address = Self::address(offset, bytes.len())?;
		self.flash.read(address, bytes).map_err(FlashEepromError::Flash)
	}

	fn capacity(&self) -> usize {
		EEPROM_SIZE
	}
}

impl Storage for FlashEeprom<'_> {
	fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
		let address = Self::address(offset, bytes.len())?;
		self.flash.write(address, bytes).map_err(FlashEepromError::Flash)
	}
}
