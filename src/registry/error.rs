use crate::{bits::LayoutError, ChannelFunction};

/// Errors when assembling a [`TranslatorRegistry`](crate::TranslatorRegistry).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no translator supports claimed channel function {0}")]
    Gap(ChannelFunction),
    #[error("channel function {function} is supported by more than one translator: {translators:?}")]
    Overlap {
        function: ChannelFunction,
        translators: Vec<&'static str>,
    },
    #[error("invalid packed slot layout in translator '{translator}': {source}")]
    Layout {
        translator: &'static str,
        source: LayoutError,
    },
}

/// Errors when selecting the translator for a channel.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no translator supports channel function id {function}")]
    Unsupported { function: i32 },
    #[error("channel function id {function} is supported by more than one translator: {translators:?}")]
    Ambiguous {
        function: i32,
        translators: Vec<&'static str>,
    },
}
