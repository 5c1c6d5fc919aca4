#![no_std]
#![no_main]

mod board;
mod eeprom;

extern crate defmt_rtt;
extern crate panic_probe;

use defmt::*;
use embassy_rp::{
	flash::{Flash, ERASE_SIZE},
	gpio::{Level, Output, Pin},
};
use embassy_time::{block_for, Duration};
use serial_pixel_shared::{Board, ConfigStore, FIRMWARE_VERSION};
use static_cell::StaticCell;

use crate::{
	board::PicoBoard,
	eeprom::{FlashEeprom, MergeBuffer},
};

#[cortex_m_rt::entry]
fn main() -> ! {
	static MERGE_BUFFER: StaticCell<MergeBuffer> = StaticCell::new();

	let p = embassy_rp::init(Default::default());
	info!("serial pixel firmware v{}", FIRMWARE_VERSION);

	// REBOOT_PIN, idles high
	let mut board = PicoBoard::new(Output::new(p.PIN_15.degrade(), Level::High));

	let merge_buffer = MERGE_BUFFER.init([0u8; ERASE_SIZE]);
	let flash = Flash::new_blocking(p.FLASH);
	let mut store = ConfigStore::new(FlashEeprom::new(flash, merge_buffer));

	let config = unwrap!(store.read_or_init_config());
	let free = board.free_memory();
	info!("config: {}, marker: {}, {} bytes free", config, unwrap!(store.read_marker()), free);

	if !config.fits_in_memory(free) {
		warn!("{} pixels don't fit into {} bytes, restoring defaults", config.pixel_count, free);
		unwrap!(store.write_default_config());

		// give the rtt host a moment to pick up the logs
		block_for(Duration::from_millis(10));
		board.request_hard_reset();
	}

	loop {
		cortex_m::asm::wfi();
	}
}
