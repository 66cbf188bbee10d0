use std::fmt::Debug;

use crate::{bits::PackedSlot, ChannelConfig, ChannelFunction, ChannelStorage, Problems};

/// Translation between the raw slots of a channel and its structured
/// configuration, for the channel functions in [`functions`](Self::functions).
///
/// Implementations are stateless apart from settings fixed at construction.
pub trait ParamTranslator: Debug + Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Channel functions this translator is responsible for.
    fn functions(&self) -> &'static [ChannelFunction];

    /// Whether this translator handles `storage`. Only looks at the function
    /// id, never at slot contents.
    fn supports(&self, storage: &ChannelStorage) -> bool {
        self.functions()
            .iter()
            .any(|f| f.id() == storage.function())
    }

    /// Layouts of the packed integer slots used by this translator. They are
    /// validated when the translator is registered.
    fn packed_slots(&self) -> &'static [&'static PackedSlot] {
        &[]
    }

    /// Structured view of the current raw slots.
    ///
    /// Must not fail for any raw state. Garbage decodes to whatever nominal
    /// value its bits represent.
    fn decode(&self, storage: &ChannelStorage) -> ChannelConfig;

    /// Write every recognized key of `config` into the raw slots.
    ///
    /// Keys missing from `config` leave their slots untouched and unknown keys
    /// are ignored. Invalid values are corrected or dropped, never rejected;
    /// each correction is pushed onto `problems`. Writing an already valid
    /// configuration again does not change `storage`.
    fn encode(&self, storage: &mut ChannelStorage, config: &ChannelConfig, problems: &mut Problems);
}
