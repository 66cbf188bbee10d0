//! Field transforms shared by translators that don't pack bits.

use serde::{Deserialize, Serialize};

use crate::{char_count, fits_char_cap, ConfigValue, Problem, Problems, Range};

/// Round `value` to at most `decimals` digits after the decimal point.
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// A decimal number stored in an integer slot as a multiple of
/// `10^-decimals`, e.g. 12.3457 is stored as 123457 with 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledDecimal {
    pub range: Range<f64>,
    pub decimals: u32,
}

impl ScaledDecimal {
    pub fn scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }

    pub fn decode(&self, raw: i64) -> f64 {
        round_decimals(raw as f64 / self.scale(), self.decimals)
    }

    /// Raw slot value for `value`, clamped into the range and rounded to the
    /// supported decimals. `None` if `value` is not a number.
    pub fn encode(&self, key: &str, value: &ConfigValue, problems: &mut Problems) -> Option<i64> {
        let Some(number) = value.to_number() else {
            Problem::UnexpectedType {
                key: key.to_owned(),
                expected: "a number",
            }
            .handled_by("keeping previous value", problems);
            return None;
        };
        let clamped = self.range.clamp(number);
        if !self.range.contains(number) {
            Problem::ValueOutOfRange {
                key: key.to_owned(),
                value: number,
                range: self.range,
            }
            .handled_by(format!("clamping to {clamped}"), problems);
        }
        Some((round_decimals(clamped, self.decimals) * self.scale()).round() as i64)
    }
}

/// A text slot that only accepts texts up to a number of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedText {
    pub max_chars: usize,
}

impl CappedText {
    /// The text to store for `value`, or `None` if the write has to be
    /// dropped. Overlong texts are dropped as a whole, not truncated.
    pub fn encode(&self, key: &str, value: &ConfigValue, problems: &mut Problems) -> Option<String> {
        let Some(text) = value.to_text() else {
            Problem::UnexpectedType {
                key: key.to_owned(),
                expected: "a text",
            }
            .handled_by("keeping previous text", problems);
            return None;
        };
        if !fits_char_cap(&text, self.max_chars) {
            Problem::TextTooLong {
                key: key.to_owned(),
                length: char_count(&text),
                max: self.max_chars,
            }
            .handled_by("keeping previous text", problems);
            return None;
        }
        Some(text)
    }
}
