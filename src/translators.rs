//! The translators for every supported channel function.

pub mod fields;
mod general_purpose_measurement;

pub use general_purpose_measurement::*;

use crate::ParamTranslator;

/// One instance of every translator in this crate, with default settings.
pub fn all() -> Vec<Box<dyn ParamTranslator>> {
    vec![Box::new(GeneralPurposeMeasurementTranslator::default())]
}
