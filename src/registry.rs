mod error;

pub use error::*;

use crate::{translators, ChannelConfig, ChannelFunction, ChannelStorage, ParamTranslator, Problems};

/// The set of translators, responsible for choosing the right one for a
/// channel.
///
/// On construction the registry checks that every claimed channel function is
/// supported by exactly one translator, so dispatch for those functions can't
/// be ambiguous later on.
#[derive(Debug)]
pub struct TranslatorRegistry {
    translators: Vec<Box<dyn ParamTranslator>>,
    claimed: Vec<ChannelFunction>,
}

impl TranslatorRegistry {
    pub fn new(
        translators: Vec<Box<dyn ParamTranslator>>,
        claimed: &[ChannelFunction],
    ) -> Result<Self, RegistryError> {
        for t in translators.iter() {
            for slot in t.packed_slots() {
                slot.validate().map_err(|source| RegistryError::Layout {
                    translator: t.name(),
                    source,
                })?;
            }
        }

        let mut checked = Vec::with_capacity(claimed.len());
        for &function in claimed {
            if checked.contains(&function) {
                continue;
            }
            let storage = ChannelStorage::from(function);
            let supporting: Vec<&'static str> = translators
                .iter()
                .filter(|t| t.supports(&storage))
                .map(|t| t.name())
                .collect();
            match supporting.len() {
                0 => Err(RegistryError::Gap(function))?,
                1 => checked.push(function),
                _ => Err(RegistryError::Overlap {
                    function,
                    translators: supporting,
                })?,
            }
        }

        Ok(TranslatorRegistry {
            translators,
            claimed: checked,
        })
    }

    /// Registry of all translators of this crate with default settings,
    /// claiming every function they declare.
    pub fn builtin() -> Result<Self, RegistryError> {
        let translators = translators::all();
        let claimed: Vec<ChannelFunction> = translators
            .iter()
            .flat_map(|t| t.functions().iter().copied())
            .collect();
        Self::new(translators, &claimed)
    }

    /// Channel functions guaranteed to have exactly one translator.
    pub fn claimed(&self) -> &[ChannelFunction] {
        &self.claimed
    }

    pub fn translators(&self) -> impl Iterator<Item = &dyn ParamTranslator> {
        self.translators.iter().map(|t| t.as_ref())
    }

    /// The single translator supporting `storage`.
    pub fn translator_for(
        &self,
        storage: &ChannelStorage,
    ) -> Result<&dyn ParamTranslator, DispatchError> {
        let mut supporting = self.translators.iter().filter(|t| t.supports(storage));
        match (supporting.next(), supporting.next()) {
            (Some(translator), None) => {
                tracing::trace!(
                    translator = translator.name(),
                    function = storage.function(),
                    "selected translator"
                );
                Ok(translator.as_ref())
            }
            (None, _) => {
                tracing::warn!(function = storage.function(), "no translator for channel");
                Err(DispatchError::Unsupported {
                    function: storage.function(),
                })
            }
            (Some(_), Some(_)) => {
                let translators: Vec<&'static str> = self
                    .translators
                    .iter()
                    .filter(|t| t.supports(storage))
                    .map(|t| t.name())
                    .collect();
                tracing::warn!(
                    function = storage.function(),
                    ?translators,
                    "ambiguous translators for channel"
                );
                Err(DispatchError::Ambiguous {
                    function: storage.function(),
                    translators,
                })
            }
        }
    }

    /// Decode the configuration of `storage` with its translator.
    pub fn get_config(&self, storage: &ChannelStorage) -> Result<ChannelConfig, DispatchError> {
        Ok(self.translator_for(storage)?.decode(storage))
    }

    /// Encode `config` into `storage` with its translator.
    ///
    /// Invalid values are silently clamped or dropped. Use
    /// [`set_config_reporting`](Self::set_config_reporting) to find out which.
    pub fn set_config(
        &self,
        storage: &mut ChannelStorage,
        config: &ChannelConfig,
    ) -> Result<(), DispatchError> {
        self.set_config_reporting(storage, config).map(|_| ())
    }

    /// Like [`set_config`](Self::set_config), but returns the problems that were
    /// corrected while writing. `storage` ends up the same either way.
    pub fn set_config_reporting(
        &self,
        storage: &mut ChannelStorage,
        config: &ChannelConfig,
    ) -> Result<Problems, DispatchError> {
        let translator = self.translator_for(storage)?;
        let mut problems = Problems::new();
        translator.encode(storage, config, &mut problems);
        Ok(problems)
    }
}
