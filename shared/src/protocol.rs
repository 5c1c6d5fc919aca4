use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Command byte sent by the host at the start of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandType {
	SetupData  = 1,
	PixelData  = 2,
	Brightness = 3,
	GetId      = 4,
	SetId      = 5,
	GetVersion = 6,
}

/// Status byte returned to the host after every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ReturnCode {
	Success          = 255,
	Reboot           = 42,
	Error            = 0,
	ErrorSize        = 1,
	ErrorUnsupported = 2,
	ErrorPixelCount  = 3,
	ErrorBadCommand  = 4,
}

/// LED chipset driven by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StripType {
	Generic      = 0,
	Lpd8806      = 1,
	Ws2801       = 2,
	/// Also known as WS2811, WS2812, WS2812B and APA104.
	NeoPixel     = 3,
	/// 400kHz variant of [`StripType::NeoPixel`].
	Ws2811_400   = 4,
	Tm1809Tm1804 = 5,
	Tm1803       = 6,
	Ucs1903      = 7,
	Sm16716      = 8,
	Apa102       = 9,
	Lpd1886      = 10,
	P9813        = 11,
}

impl StripType {
	/// Whether the chipset has a separate clock line, i.e. whether `spi_speed` applies.
	pub fn is_clocked(self) -> bool {
		matches!(
			self,
			Self::Generic | Self::Lpd8806 | Self::Ws2801 | Self::Sm16716 | Self::Apa102 | Self::P9813
		)
	}
}
