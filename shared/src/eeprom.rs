use core::slice;

use bytemuck::{Pod, Zeroable};
use embedded_storage::{ReadStorage, Storage};

/// Writes the raw bytes of `value` starting at `offset`, one byte per storage write.
///
/// Returns the number of bytes written, always `size_of::<T>()`. The whole range
/// is read once up front, so an out of range write fails before any byte changes.
pub fn write_anything<S: Storage, T: Pod>(storage: &mut S, offset: u32, value: &T) -> Result<usize, S::Error> {
	let mut current = T::zeroed();
	storage.read(offset, bytemuck::bytes_of_mut(&mut current))?;

	let bytes = bytemuck::bytes_of(value);

	let mut ee = offset;
	for byte in bytes {
		storage.write(ee, slice::from_ref(byte))?;
		ee += 1;
	}

	Ok(bytes.len())
}

/// Reads `size_of::<T>()` bytes starting at `offset` into `value`, one byte per storage read.
///
/// Returns the number of bytes read. Every bit pattern is a valid `T`, so this
/// happily returns garbage for storage that was never written. `value` is only
/// assigned once every byte has been read.
pub fn read_anything<S: ReadStorage, T: Pod>(storage: &mut S, offset: u32, value: &mut T) -> Result<usize, S::Error> {
	let mut read = T::zeroed();
	let bytes = bytemuck::bytes_of_mut(&mut read);

	let mut ee = offset;
	for byte in bytes.iter_mut() {
		storage.read(ee, slice::from_mut(byte))?;
		ee += 1;
	}

	*value = read;
	Ok(core::mem::size_of::<T>())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemEepromError {
	OutOfBounds { offset: u32, len: usize },
}

/// RAM-backed EEPROM stand-in, erased to `0xFF` like a fresh chip.
#[derive(Debug, Clone)]
pub struct MemEeprom<const N: usize> {
	bytes:  [u8; N],
	writes: usize,
}

impl<const N: usize> MemEeprom<N> {
	pub const ERASED: u8 = 0xFF;

	pub const fn new() -> Self {
		Self::from_bytes([Self::ERASED; N])
	}

	/// Restores a previously captured image, e.g. to simulate a power cycle.
	pub const fn from_bytes(bytes: [u8; N]) -> Self {
		Self { bytes, writes: 0 }
	}

	pub fn as_bytes(&self) -> &[u8; N] {
		&self.bytes
	}

	/// Number of byte write cycles since construction.
	pub fn write_cycles(&self) -> usize {
		self.writes
	}

	fn range(offset: u32, len: usize) -> Result<core::ops::Range<usize>, MemEepromError> {
		let start = offset as usize;
		match start.checked_add(len) {
			Some(end) if end <= N => Ok(start..end),
			_ => Err(MemEepromError::OutOfBounds { offset, len }),
		}
	}
}

impl<const N: usize> Default for MemEeprom<N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const N: usize> ReadStorage for MemEeprom<N> {
	type Error = MemEepromError;

	fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
		let range = Self::range(offset, bytes.len())?;
		bytes.copy_from_slice(&self.bytes[range]);
		Ok(())
	}

	fn capacity(&self) -> usize {
		N
	}
}

impl<const N: usize> Storage for MemEeprom<N> {
	fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
		let range = Self::range(offset, bytes.len())?;
		self.bytes[range].copy_from_slice(bytes);
		self.writes += bytes.len();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_eeprom_is_erased() {
		let mut eeprom = MemEeprom::<32>::new();
		let mut value = 0u32;

		assert_eq!(read_anything(&mut eeprom, 0, &mut value), Ok(4));
		assert_eq!(value, u32::MAX);
		assert_eq!(eeprom.capacity(), 32);
	}

	#[test]
	fn transfers_exactly_size_of_value() {
		let mut eeprom = MemEeprom::<32>::new();

		assert_eq!(write_anything(&mut eeprom, 3, &0x0102_0304u32), Ok(4));
		assert_eq!(write_anything(&mut eeprom, 10, &0xAAu8), Ok(1));
		assert_eq!(write_anything(&mut eeprom, 12, &[7u16; 3]), Ok(6));

		let mut word = 0u32;
		let mut shorts = [0u16; 3];
		assert_eq!(read_anything(&mut eeprom, 3, &mut word), Ok(4));
		assert_eq!(read_anything(&mut eeprom, 12, &mut shorts), Ok(6));
		assert_eq!(word, 0x0102_0304);
		assert_eq!(shorts, [7; 3]);
	}

	#[test]
	fn writes_one_byte_at_a_time() {
		let mut eeprom = MemEeprom::<32>::new();

		write_anything(&mut eeprom, 0, &[0u8; 5]).unwrap();
		assert_eq!(eeprom.write_cycles(), 5);
	}

	#[test]
	fn value_occupies_only_its_range() {
		let mut eeprom = MemEeprom::<16>::new();

		write_anything(&mut eeprom, 4, &[0x11u8, 0x22, 0x33]).unwrap();

		let bytes = eeprom.as_bytes();
		assert!(bytes[..4].iter().all(|&b| b == 0xFF));
		assert_eq!(&bytes[4..7], &[0x11, 0x22, 0x33]);
		assert!(bytes[7..].iter().all(|&b| b == 0xFF));
	}

	#[test]
	fn neighbouring_values_do_not_overlap() {
		let mut eeprom = MemEeprom::<16>::new();

		write_anything(&mut eeprom, 0, &0xDEAD_BEEFu32).unwrap();
		write_anything(&mut eeprom, 4, &0x1234u16).unwrap();
		write_anything(&mut eeprom, 6, &0x5566_7788u32).unwrap();

		let mut first = 0u32;
		let mut second = 0u16;
		read_anything(&mut eeprom, 0, &mut first).unwrap();
		read_anything(&mut eeprom, 4, &mut second).unwrap();
		assert_eq!(first, 0xDEAD_BEEF);
		assert_eq!(second, 0x1234);
	}

	#[test]
	fn out_of_bounds_is_reported() {
		let mut eeprom = MemEeprom::<8>::new();

		assert_eq!(eeprom.read(u32::MAX, &mut [0u8; 2]), Err(MemEepromError::OutOfBounds { offset: u32::MAX, len: 2 }));
	}

	#[test]
	fn failed_write_leaves_storage_untouched() {
		let mut eeprom = MemEeprom::<8>::new();

		assert_eq!(
			write_anything(&mut eeprom, 6, &0x1122_3344u32),
			Err(MemEepromError::OutOfBounds { offset: 6, len: 4 })
		);
		assert_eq!(eeprom.as_bytes(), &[0xFF; 8]);
		assert_eq!(eeprom.write_cycles(), 0);

		assert!(write_anything(&mut eeprom, u32::MAX, &0u8).is_err());
		assert_eq!(eeprom.write_cycles(), 0);
	}

	#[test]
	fn failed_read_leaves_value_untouched() {
		let mut eeprom = MemEeprom::<8>::new();
		write_anything(&mut eeprom, 0, &[0u8; 8]).unwrap();

		let mut value = 0x1122_3344u32;
		assert_eq!(
			read_anything(&mut eeprom, 6, &mut value),
			Err(MemEepromError::OutOfBounds { offset: 8, len: 1 })
		);
		assert_eq!(value, 0x1122_3344);
	}

	#[test]
	fn reload_keeps_contents() {
		let mut eeprom = MemEeprom::<8>::new();
		write_anything(&mut eeprom, 2, &0xBEEFu16).unwrap();

		let mut reloaded = MemEeprom::from_bytes(*eeprom.as_bytes());
		let mut value = 0u16;
		read_anything(&mut reloaded, 2, &mut value).unwrap();
		assert_eq!(value, 0xBEEF);
		assert_eq!(reloaded.write_cycles(), 0);
	}
}
