use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Constrain `value` to the closed interval `[min, max]`.
///
/// This is `max(min, min(value, max))`, written for `PartialOrd` so it works
/// for floats. A NaN `value` is returned unchanged. `min` must not be bigger
/// than `max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// An inclusive numeric range used to silently correct input values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub const fn new(min: T, max: T) -> Self {
        Range { min, max }
    }

    pub fn clamp(&self, value: T) -> T {
        clamp(value, self.min, self.max)
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Number of characters (Unicode scalar values) in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whether `text` has at most `cap` characters.
///
/// Bytes are not counted, so "µ" is one character even though it is two bytes
/// in UTF-8.
pub fn fits_char_cap(text: &str, cap: usize) -> bool {
    char_count(text) <= cap
}
