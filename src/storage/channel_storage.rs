use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};

use crate::ChannelFunction;

/// Raw configuration slots of one channel, as persisted.
///
/// The meaning of the generic slots depends on the channel function. This
/// type does not validate anything; translators read and write it through its
/// accessors.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, CopyGetters, Getters, Setters,
)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStorage {
    #[getset(get_copy = "pub", set = "pub")]
    function: i32,
    #[getset(get_copy = "pub", set = "pub")]
    param1: i64,
    #[getset(get_copy = "pub", set = "pub")]
    param2: i64,
    #[getset(get_copy = "pub", set = "pub")]
    param3: i64,
    #[getset(get_copy = "pub", set = "pub")]
    param4: i64,
    #[getset(get = "pub", set = "pub")]
    text_param1: String,
    #[getset(get = "pub", set = "pub")]
    text_param2: String,
}

impl ChannelStorage {
    /// Empty slots for a channel with raw function id `function`.
    pub fn new(function: i32) -> Self {
        ChannelStorage {
            function,
            ..Default::default()
        }
    }

    /// The function as a known [`ChannelFunction`], `None` for unknown ids.
    pub fn channel_function(&self) -> Option<ChannelFunction> {
        ChannelFunction::from_repr(self.function)
    }
}

impl From<ChannelFunction> for ChannelStorage {
    fn from(function: ChannelFunction) -> Self {
        ChannelStorage::new(function.id())
    }
}
