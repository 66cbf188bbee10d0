use derivative::Derivative;
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::{
    bits::{BitField, FieldSpec, PackedSlot},
    translators::fields::{CappedText, ScaledDecimal},
    ChannelConfig, ChannelFunction, ChannelStorage, ConfigValue, ParamTranslator, Problems, Range,
};

pub const INITIAL_VALUE: &str = "initialValue";
pub const IMPULSES_PER_UNIT: &str = "impulsesPerUnit";
pub const UNIT_PREFIX: &str = "unitPrefix";
pub const UNIT_SUFFIX: &str = "unitSuffix";
pub const PRECISION: &str = "precision";
pub const STORE_MEASUREMENT_HISTORY: &str = "storeMeasurementHistory";
pub const CHART_TYPE: &str = "chartType";
pub const CHART_DATA_SOURCE_TYPE: &str = "chartDataSourceType";
pub const INTERPOLATE_MEASUREMENTS: &str = "interpolateMeasurements";

/// Layout of `param2`:
///
/// ```text
/// 0b000000111  precision (0-5)
/// 0b000001000  store the measurement history
/// 0b000010000  chart type (0 linear, 1 bar)
/// 0b000100000  reserved, rubbish in old data
/// 0b001000000  chart data source type (0 differential, 1 standard)
/// 0b010000000  reserved, rubbish in old data
/// 0b100000000  interpolate measurements (only for differential)
/// ```
pub const PARAM2: PackedSlot = PackedSlot {
    fields: &[
        FieldSpec::integer(PRECISION, BitField::new(0, 3), 5),
        FieldSpec::flag(STORE_MEASUREMENT_HISTORY, 3),
        FieldSpec::choice(CHART_TYPE, 4),
        FieldSpec::choice(CHART_DATA_SOURCE_TYPE, 6),
        FieldSpec::flag(INTERPOLATE_MEASUREMENTS, 8),
    ],
    reserved: 0b0_1010_0000,
};

const PACKED_SLOTS: &[&PackedSlot] = &[&PARAM2];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::FromRepr, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ChartType {
    Linear = 0,
    Bar = 1,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::FromRepr, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ChartDataSourceType {
    Differential = 0,
    Standard = 1,
}

impl From<ChartType> for ConfigValue {
    fn from(value: ChartType) -> Self {
        (value as u8).into()
    }
}

impl From<ChartDataSourceType> for ConfigValue {
    fn from(value: ChartDataSourceType) -> Self {
        (value as u8).into()
    }
}

/// Tunables of [`GeneralPurposeMeasurementTranslator`]. The defaults are what
/// devices expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasurementSettings {
    /// Allowed range of the initial value and of impulses per unit.
    #[derivative(Default(value = "Range::new(-1_000_000.0, 1_000_000.0)"))]
    pub value_range: Range<f64>,
    /// Decimal digits kept when storing those two values.
    #[derivative(Default(value = "4"))]
    pub decimals: u32,
    /// Maximum number of characters of unit prefix and suffix.
    #[derivative(Default(value = "4"))]
    pub unit_max_chars: usize,
}

/// Translator for general purpose measurement channels.
///
/// | key                     | slot        | stored as                          |
/// |-------------------------|-------------|------------------------------------|
/// | initialValue            | param1      | value × 10⁴, clamped to ±10⁶       |
/// | impulsesPerUnit         | param3      | value × 10⁴, clamped to ±10⁶       |
/// | unitPrefix              | textParam1  | text up to 4 characters            |
/// | unitSuffix              | textParam2  | text up to 4 characters            |
/// | precision, flags, chart | param2      | bits, see [`PARAM2`]               |
///
/// `param4` is not used.
#[derive(Debug, Clone, Default, Getters)]
pub struct GeneralPurposeMeasurementTranslator {
    #[getset(get = "pub")]
    settings: MeasurementSettings,
}

impl GeneralPurposeMeasurementTranslator {
    pub fn new(settings: MeasurementSettings) -> Self {
        GeneralPurposeMeasurementTranslator { settings }
    }

    fn scaled(&self) -> ScaledDecimal {
        ScaledDecimal {
            range: self.settings.value_range,
            decimals: self.settings.decimals,
        }
    }

    fn unit(&self) -> CappedText {
        CappedText {
            max_chars: self.settings.unit_max_chars,
        }
    }
}

impl ParamTranslator for GeneralPurposeMeasurementTranslator {
    fn name(&self) -> &'static str {
        "general purpose measurement"
    }

    fn functions(&self) -> &'static [ChannelFunction] {
        &[ChannelFunction::GeneralPurposeMeasurement]
    }

    fn packed_slots(&self) -> &'static [&'static PackedSlot] {
        PACKED_SLOTS
    }

    fn decode(&self, storage: &ChannelStorage) -> ChannelConfig {
        let scaled = self.scaled();
        let mut config = ChannelConfig::new()
            .with(INITIAL_VALUE, scaled.decode(storage.param1()))
            .with(IMPULSES_PER_UNIT, scaled.decode(storage.param3()))
            .with(UNIT_PREFIX, storage.text_param1().as_str())
            .with(UNIT_SUFFIX, storage.text_param2().as_str());
        PARAM2.decode_into(storage.param2(), &mut config);
        config
    }

    fn encode(&self, storage: &mut ChannelStorage, config: &ChannelConfig, problems: &mut Problems) {
        let scaled = self.scaled();
        let unit = self.unit();

        if let Some(raw) = config
            .get(INITIAL_VALUE)
            .and_then(|v| scaled.encode(INITIAL_VALUE, v, problems))
        {
            storage.set_param1(raw);
        }

        storage.set_param2(PARAM2.encode_from(storage.param2(), config, problems));

        if let Some(raw) = config
            .get(IMPULSES_PER_UNIT)
            .and_then(|v| scaled.encode(IMPULSES_PER_UNIT, v, problems))
        {
            storage.set_param3(raw);
        }

        if let Some(text) = config
            .get(UNIT_PREFIX)
            .and_then(|v| unit.encode(UNIT_PREFIX, v, problems))
        {
            storage.set_text_param1(text);
        }

        if let Some(text) = config
            .get(UNIT_SUFFIX)
            .and_then(|v| unit.encode(UNIT_SUFFIX, v, problems))
        {
            storage.set_text_param2(text);
        }
    }
}
