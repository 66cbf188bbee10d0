use crate::{
    bits::{clear, BitField},
    ChannelConfig, ConfigValue, Problem, Problems, Range,
};

/// How the bits of a [`FieldSpec`] are exposed in a [`ChannelConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned integer, clamped to `0..=max` on write.
    Integer { max: u64 },
    /// Single bit exposed as a boolean.
    Flag,
    /// Single bit exposed as 0 or 1, selecting one of two named options.
    Choice,
}

/// One named sub-field of a packed integer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub bits: BitField,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn integer(key: &'static str, bits: BitField, max: u64) -> Self {
        FieldSpec {
            key,
            bits,
            kind: FieldKind::Integer { max },
        }
    }

    pub const fn flag(key: &'static str, offset: u32) -> Self {
        FieldSpec {
            key,
            bits: BitField::flag(offset),
            kind: FieldKind::Flag,
        }
    }

    pub const fn choice(key: &'static str, offset: u32) -> Self {
        FieldSpec {
            key,
            bits: BitField::flag(offset),
            kind: FieldKind::Choice,
        }
    }

    /// Read the field from `slot`. Never fails, whatever bits are set.
    pub fn decode(&self, slot: i64) -> ConfigValue {
        match self.kind {
            FieldKind::Integer { .. } | FieldKind::Choice => self.bits.decode(slot).into(),
            FieldKind::Flag => self.bits.decode_flag(slot).into(),
        }
    }

    /// Write `value` into the field's bits of `slot`.
    ///
    /// Integers are truncated towards zero and clamped to the field's range.
    /// Values that are not numbers leave the field untouched. Both cases are
    /// recorded in `problems`.
    pub fn encode(&self, slot: i64, value: &ConfigValue, problems: &mut Problems) -> i64 {
        match self.kind {
            FieldKind::Integer { max } => {
                let Some(number) = value.to_number() else {
                    Problem::UnexpectedType {
                        key: self.key.to_owned(),
                        expected: "a number",
                    }
                    .handled_by("keeping previous value", problems);
                    return slot;
                };
                let truncated = number.trunc();
                let range = Range::new(0.0, max as f64);
                let clamped = range.clamp(truncated);
                if !range.contains(truncated) {
                    Problem::ValueOutOfRange {
                        key: self.key.to_owned(),
                        value: number,
                        range,
                    }
                    .handled_by(format!("clamping to {clamped}"), problems);
                }
                self.bits.encode(slot, clamped as u64)
            }
            FieldKind::Flag | FieldKind::Choice => self.bits.encode_flag(slot, value.to_bool()),
        }
    }
}

/// Layout of an integer slot holding several independent sub-fields.
///
/// `reserved` marks bits that are known to contain rubbish in legacy data. They
/// are cleared on every write. Bits that are neither in a field nor reserved
/// are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedSlot {
    pub fields: &'static [FieldSpec],
    pub reserved: u64,
}

impl PackedSlot {
    /// Insert all fields of `slot` into `config`, in table order.
    pub fn decode_into(&self, slot: i64, config: &mut ChannelConfig) {
        for field in self.fields {
            config.insert(field.key, field.decode(slot));
        }
    }

    /// Return `slot` with reserved bits cleared and every field whose key is
    /// present in `config` overwritten.
    pub fn encode_from(&self, slot: i64, config: &ChannelConfig, problems: &mut Problems) -> i64 {
        let mut slot = clear(slot, self.reserved);
        for field in self.fields {
            if let Some(value) = config.get(field.key) {
                slot = field.encode(slot, value, problems);
            }
        }
        slot
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Mask of all bits belonging to a field.
    pub fn used_bits(&self) -> u64 {
        self.fields.iter().fold(0, |acc, f| acc | f.bits.mask())
    }

    /// Check that no two fields share a bit, no field uses a reserved bit,
    /// integer maxima fit their fields and keys are unique.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (i, field) in self.fields.iter().enumerate() {
            if field.bits.mask() & self.reserved != 0 {
                Err(LayoutError::Reserved(field.key))?
            }
            if let FieldKind::Integer { max } = field.kind {
                if max > field.bits.value_mask() {
                    Err(LayoutError::MaximumTooBig {
                        key: field.key,
                        max,
                    })?
                }
            }
            for other in self.fields.iter().skip(i + 1) {
                if other.key == field.key {
                    Err(LayoutError::DuplicateKey(field.key))?
                }
                if field.bits.overlaps(&other.bits) {
                    Err(LayoutError::Overlap {
                        first: field.key,
                        second: other.key,
                    })?
                }
            }
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("fields '{first}' and '{second}' share bits")]
    Overlap {
        first: &'static str,
        second: &'static str,
    },
    #[error("field '{0}' uses reserved bits")]
    Reserved(&'static str),
    #[error("maximum {max} of field '{key}' does not fit into its bits")]
    MaximumTooBig { key: &'static str, max: u64 },
    #[error("field key '{0}' is used more than once")]
    DuplicateKey(&'static str),
}
