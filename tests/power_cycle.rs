use std::{fs, path::PathBuf};

use serial_pixel::{open_store, DeviceConfig, StripType, CONFIG_OFFSET, EEPROM_SIZE, MARKER_OFFSET};

fn temp_image(name: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("serial-pixel-it-{}-{}.eeprom", std::process::id(), name));
	let _ = fs::remove_file(&path);
	path
}

#[test]
fn neopixel_config_survives_power_cycle() {
	let path = temp_image("neopixel");

	{
		let mut store = open_store(&path).unwrap();
		store.write_config(&DeviceConfig::new(StripType::NeoPixel, 150, 0)).unwrap();
	}

	let mut store = open_store(&path).unwrap();
	let config = store.read_config().unwrap();
	assert_eq!((config.strip_type, config.pixel_count, config.spi_speed), (3, 150, 0));
	assert_eq!(config.strip().ok(), Some(StripType::NeoPixel));

	fs::remove_file(path).unwrap();
}

#[test]
fn first_boot_writes_defaults() {
	let path = temp_image("first-boot");

	{
		let mut store = open_store(&path).unwrap();
		assert_eq!(store.read_marker().unwrap(), 0xFF);
		assert_eq!(store.read_or_init_config().unwrap(), DeviceConfig::DEFAULT);
	}

	let image = fs::read(&path).unwrap();
	assert_eq!(image.len(), EEPROM_SIZE);
	assert_eq!(image[0], 0xFF);
	let config = CONFIG_OFFSET as usize;
	assert_eq!(&image[config..config + 4], &[1, 1, 0, 16]);
	assert_eq!(image[MARKER_OFFSET as usize], 0);

	let mut store = open_store(&path).unwrap();
	assert_eq!(store.read_or_init_config().unwrap(), DeviceConfig::DEFAULT);

	fs::remove_file(path).unwrap();
}

#[test]
fn second_boot_keeps_user_config() {
	let path = temp_image("second-boot");
	let config = DeviceConfig::new(StripType::Apa102, 300, 2);

	{
		let mut store = open_store(&path).unwrap();
		store.write_default_config().unwrap();
		store.write_config(&config).unwrap();
	}

	let mut store = open_store(&path).unwrap();
	assert_eq!(store.read_or_init_config().unwrap(), config);
	assert_eq!(store.read_marker().unwrap(), 0);

	fs::remove_file(path).unwrap();
}
