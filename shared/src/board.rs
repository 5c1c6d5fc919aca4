/// Hardware capabilities the command dispatcher needs from the board.
pub trait Board {
	/// Drives [`crate::REBOOT_PIN`] low and halts until the reset circuit pulls the plug.
	fn request_hard_reset(&mut self) -> !;

	/// Approximate free RAM in bytes, see [`estimate_free_memory`].
	fn free_memory(&self) -> usize;
}

/// Bytes between the top of static + dynamic allocation and the stack pointer.
///
/// Returns 0 once the stack has grown into the heap.
pub fn estimate_free_memory(heap_top: usize, stack_pointer: usize) -> usize {
	stack_pointer.saturating_sub(heap_top)
}
