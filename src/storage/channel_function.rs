use serde::{Deserialize, Serialize};

/// Capability classification of a channel, as stored in its `function` slot.
///
/// Only a subset of the ids used by devices is listed. Channels may carry
/// ids that are not in this enum, which is why [`ChannelStorage`] keeps the
/// raw number.
///
/// [`ChannelStorage`]: crate::ChannelStorage
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ChannelFunction {
    #[strum(serialize = "NONE")]
    NoFunction = 0,
    ControllingTheGatewayLock = 10,
    ControllingTheGate = 20,
    ControllingTheGarageDoor = 30,
    Thermometer = 40,
    Humidity = 42,
    HumidityAndTemperature = 45,
    PowerSwitch = 130,
    LightSwitch = 140,
    Dimmer = 180,
    RgbLighting = 190,
    DepthSensor = 210,
    DistanceSensor = 220,
    ElectricityMeter = 310,
    GasMeter = 320,
    WaterMeter = 330,
    HeatMeter = 340,
    GeneralPurposeMeasurement = 520,
    GeneralPurposeMeter = 530,
}

impl ChannelFunction {
    pub const fn id(self) -> i32 {
        self as i32
    }
}

impl From<ChannelFunction> for i32 {
    fn from(value: ChannelFunction) -> Self {
        value.id()
    }
}

impl TryFrom<i32> for ChannelFunction {
    type Error = UnknownFunction;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ChannelFunction::from_repr(value).ok_or(UnknownFunction(value))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown channel function id {0}")]
pub struct UnknownFunction(pub i32);
