/// A contiguous range of bits inside one 64 bit integer slot.
///
/// Slots are stored as `i64`, but all mask arithmetic happens on the unsigned
/// bit pattern so that the sign bit is just another bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    offset: u32,
    width: u32,
}

impl BitField {
    /// Field of `width` bits starting at bit `offset` (0 is the least
    /// significant bit). Panics (at compile time when used in a const) if the
    /// field doesn't fit into 64 bits.
    pub const fn new(offset: u32, width: u32) -> Self {
        assert!(width >= 1 && width <= 64, "bit field width must be 1 to 64");
        assert!(offset + width <= 64, "bit field must fit into 64 bits");
        BitField { offset, width }
    }

    /// Single bit field.
    pub const fn flag(offset: u32) -> Self {
        Self::new(offset, 1)
    }

    pub const fn offset(&self) -> u32 {
        self.offset
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask of the field value before shifting, which is also the largest
    /// value the field can hold.
    pub const fn value_mask(&self) -> u64 {
        u64::MAX >> (64 - self.width)
    }

    /// Mask of the field's bits at their position in the slot.
    pub const fn mask(&self) -> u64 {
        self.value_mask() << self.offset
    }

    pub const fn decode(&self, slot: i64) -> u64 {
        ((slot as u64) >> self.offset) & self.value_mask()
    }

    pub const fn decode_flag(&self, slot: i64) -> bool {
        self.decode(slot) != 0
    }

    /// Replace the field's bits in `slot` with `value`. Bits of `value` that
    /// don't fit into the field are discarded, all other bits of `slot` are
    /// kept.
    pub const fn encode(&self, slot: i64, value: u64) -> i64 {
        clear(slot, self.mask()) | ((value & self.value_mask()) << self.offset) as i64
    }

    pub const fn encode_flag(&self, slot: i64, value: bool) -> i64 {
        self.encode(slot, value as u64)
    }

    pub const fn overlaps(&self, other: &BitField) -> bool {
        self.mask() & other.mask() != 0
    }
}

/// Clear all bits of `mask` in `slot`.
pub const fn clear(slot: i64, mask: u64) -> i64 {
    ((slot as u64) & !mask) as i64
}
