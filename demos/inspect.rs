use eyre::{bail, Result};
use serial_pixel::{open_store, ReturnCode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// usage: cargo run --example inspect -- <image> [--reset]
fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let mut args = std::env::args().skip(1);
	let Some(path) = args.next() else {
		bail!("missing eeprom image path");
	};
	let reset = args.any(|arg| arg == "--reset");

	let mut store = open_store(&path)?;

	if reset {
		let config = store.write_default_config()?;
		info!("wrote default config: {:?}", config);
	}

	let config = store.read_config()?;
	let marker = store.read_marker()?;
	info!("marker byte: {:#04x}", marker);

	match config.validate() {
		Ok(strip) => {
			info!(
				"{:?} with {} pixels, spi speed {}{}",
				strip,
				config.pixel_count,
				config.spi_speed,
				if strip.is_clocked() { "" } else { " (unused)" }
			);
		}
		Err(ReturnCode::ErrorUnsupported) => warn!("unsupported strip type {}", config.strip_type),
		Err(ReturnCode::ErrorPixelCount) => warn!("invalid pixel count {}", config.pixel_count),
		Err(code) => warn!("invalid config: {:?}", code),
	}

	Ok(())
}
