use std::fmt::{self, Display};

use duplicate::duplicate_item;
use serde::{Deserialize, Serialize};

/// A single value of a [`ChannelConfig`](crate::ChannelConfig).
///
/// Values coming from an API are loosely typed, so translators read them
/// through the coercions [`to_number`](Self::to_number),
/// [`to_bool`](Self::to_bool) and [`to_text`](Self::to_text) instead of
/// matching on the variant.
///
/// `Integer` and `Float` compare equal when they hold the same number, so
/// `Integer(5) == Float(5.0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ConfigValue {
    /// Numeric view. Booleans are 1 or 0, texts are parsed after trimming.
    /// `None` for texts that are not a number and for NaN.
    pub fn to_number(&self) -> Option<f64> {
        let number = match self {
            ConfigValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ConfigValue::Integer(i) => Some(*i as f64),
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Text(s) => s.trim().parse().ok(),
        };
        number.filter(|n: &f64| !n.is_nan())
    }

    /// Truthiness: numbers are true unless zero, texts are true unless empty
    /// or "0".
    pub fn to_bool(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Integer(i) => *i != 0,
            ConfigValue::Float(f) => *f != 0.0,
            ConfigValue::Text(s) => !(s.is_empty() || s == "0"),
        }
    }

    /// Text view. Numbers are rendered in decimal, booleans have no text.
    pub fn to_text(&self) -> Option<String> {
        match self {
            ConfigValue::Bool(_) => None,
            ConfigValue::Integer(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            ConfigValue::Text(s) => Some(s.clone()),
        }
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConfigValue::Bool(a), ConfigValue::Bool(b)) => a == b,
            (ConfigValue::Text(a), ConfigValue::Text(b)) => a == b,
            (ConfigValue::Integer(a), ConfigValue::Integer(b)) => a == b,
            (ConfigValue::Float(a), ConfigValue::Float(b)) => a == b,
            (ConfigValue::Integer(i), ConfigValue::Float(f))
            | (ConfigValue::Float(f), ConfigValue::Integer(i)) => *i as f64 == *f,
            _ => false,
        }
    }
}

impl Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Integer(i) => write!(f, "{i}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
            ConfigValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

#[duplicate_item(integer; [i8]; [i16]; [i32]; [i64]; [u8]; [u16]; [u32])]
impl From<integer> for ConfigValue {
    fn from(value: integer) -> Self {
        ConfigValue::Integer(value.into())
    }
}

/// Values above `i64::MAX` become floats.
impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ConfigValue::Integer)
            .unwrap_or(ConfigValue::Float(value as f64))
    }
}

#[duplicate_item(float; [f32]; [f64])]
impl From<float> for ConfigValue {
    fn from(value: float) -> Self {
        ConfigValue::Float(value.into())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_variants_compare_by_value() {
        assert_eq!(ConfigValue::Integer(5), ConfigValue::Float(5.0));
        assert_eq!(ConfigValue::Float(1_000_000.0), ConfigValue::from(1_000_000));
        assert_ne!(ConfigValue::Integer(1), ConfigValue::Bool(true));
        assert_ne!(ConfigValue::Integer(1), ConfigValue::from("1"));
        assert_eq!(ConfigValue::from(7u64), ConfigValue::Integer(7));
        assert!(matches!(ConfigValue::from(u64::MAX), ConfigValue::Float(_)));
    }

    #[test]
    fn coercions() {
        assert_eq!(ConfigValue::from(true).to_number(), Some(1.0));
        assert_eq!(ConfigValue::from(" 12.5 ").to_number(), Some(12.5));
        assert_eq!(ConfigValue::from("twelve").to_number(), None);
        assert_eq!(ConfigValue::from("NaN").to_number(), None);
        assert_eq!(ConfigValue::from(f64::NAN).to_number(), None);

        assert!(ConfigValue::from(1).to_bool());
        assert!(!ConfigValue::from(0.0).to_bool());
        assert!(!ConfigValue::from("0").to_bool());
        assert!(!ConfigValue::from("").to_bool());
        assert!(ConfigValue::from("yes").to_bool());

        assert_eq!(ConfigValue::from(42).to_text().as_deref(), Some("42"));
        assert_eq!(ConfigValue::from(2.5).to_text().as_deref(), Some("2.5"));
        assert_eq!(ConfigValue::from(false).to_text(), None);
    }

    #[test]
    fn untagged_json_shape() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ConfigValue::from(3))?, "3");
        assert_eq!(serde_json::to_string(&ConfigValue::from(12.3457))?, "12.3457");
        assert_eq!(serde_json::to_string(&ConfigValue::from(true))?, "true");
        assert_eq!(serde_json::to_string(&ConfigValue::from("kg"))?, "\"kg\"");

        assert!(matches!(
            serde_json::from_str::<ConfigValue>("3")?,
            ConfigValue::Integer(3)
        ));
        assert!(matches!(
            serde_json::from_str::<ConfigValue>("3.5")?,
            ConfigValue::Float(f) if f == 3.5
        ));
        assert!(matches!(
            serde_json::from_str::<ConfigValue>("false")?,
            ConfigValue::Bool(false)
        ));
        Ok(())
    }
}
