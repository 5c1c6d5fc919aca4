use defmt::warn;
use embassy_rp::gpio::{AnyPin, Output};
use serial_pixel_shared::{estimate_free_memory, Board};

extern "C" {
	// end of .data + .bss, provided by cortex-m-rt's link.x
	static __sheap: u8;
}

pub struct PicoBoard<'d> {
	reset: Output<'d, AnyPin>,
}

impl<'d> PicoBoard<'d> {
	/// `reset` must idle high, see [`serial_pixel_shared::REBOOT_PIN`].
	pub fn new(reset: Output<'d, AnyPin>) -> Self {
		Self { reset }
	}
}

impl Board for PicoBoard<'_> {
	fn request_hard_reset(&mut self) -> ! {
		warn!("pulling reset line low");
		self.reset.set_low();

		loop {
			cortex_m::asm::wfi();
		}
	}

	fn free_memory(&self) -> usize {
		// no allocator, so the heap never grows past its start
		let heap_top = unsafe { core::ptr::addr_of!(__sheap) } as usize;
		let stack_pointer = cortex_m::register::msp::read() as usize;

		estimate_free_memory(heap_top, stack_pointer)
	}
}
