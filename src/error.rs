use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	#[error("eeprom image I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("access of {len} bytes at offset {offset} is outside the {capacity} byte image")]
	OutOfBounds { offset: u32, len: usize, capacity: usize },

	#[error("eeprom image {path:?} has {actual} bytes, expected {expected}")]
	ImageSize {
		path:     PathBuf,
		expected: usize,
		actual:   usize,
	},
}
