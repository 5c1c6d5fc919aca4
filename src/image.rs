use std::{
	fs::{File, OpenOptions},
	io::{Read, Seek, SeekFrom, Write},
	ops::Range,
	path::{Path, PathBuf},
};

use embedded_storage::{ReadStorage, Storage};
use tracing::{debug, info};

use crate::{Error, Result};

/// EEPROM contents backed by a file on disk.
///
/// Writes go straight to the file, so reopening the image behaves like power
/// cycling the controller.
pub struct EepromImage {
	path:  PathBuf,
	file:  File,
	bytes: Vec<u8>,
}

impl EepromImage {
	pub const ERASED: u8 = 0xFF;

	/// Opens the image at `path`, creating an erased one of `capacity` bytes if it doesn't exist yet.
	pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
		let path = path.as_ref().to_path_buf();
		let mut file = OpenOptions::new()
			.read(true)
			.write(true)
			.create(true)
			.truncate(false)
			.open(&path)?;

		let len = file.metadata()?.len() as usize;
		let bytes = if len == 0 {
			info!("creating erased eeprom image {:?} ({} bytes)", path, capacity);

			let bytes = vec![Self::ERASED; capacity];
			file.write_all(&bytes)?;
			file.sync_data()?;
			bytes
		} else if len == capacity {
			debug!("opening eeprom image {:?}", path);

			let mut bytes = Vec::with_capacity(capacity);
			file.read_to_end(&mut bytes)?;
			bytes
		} else {
			return Err(Error::ImageSize {
				path,
				expected: capacity,
				actual: len,
			});
		};

		Ok(Self { path, file, bytes })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	fn range(&self, offset: u32, len: usize) -> Result<Range<usize>> {
		let start = offset as usize;
		match start.checked_add(len) {
			Some(end) if end <= self.bytes.len() => Ok(start..end),
			_ => Err(Error::OutOfBounds {
				offset,
				len,
				capacity: self.bytes.len(),
			}),
		}
	}
}

impl ReadStorage for EepromImage {
	type Error = Error;

	fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<()> {
		let range = self.range(offset, bytes.len())?;
		bytes.copy_from_slice(&self.bytes[range]);
		Ok(())
	}

	fn capacity(&self) -> usize {
		self.bytes.len()
	}
}

impl Storage for EepromImage {
	fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<()> {
		let range = self.range(offset, bytes.len())?;

		debug!("writing {} bytes at offset {}: {:02X?}", bytes.len(), offset, bytes);

		self.file.seek(SeekFrom::Start(offset as u64))?;
		self.file.write_all(bytes)?;
		self.bytes[range].copy_from_slice(bytes);

		Ok(())
	}
}
