//! Bit packing of several configuration fields into one integer slot.

mod bit_field;
mod packed_slot;

pub use bit_field::*;
pub use packed_slot::*;
