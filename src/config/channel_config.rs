use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DeserializeAs, Map, Same};

use crate::ConfigValue;

/// Structured configuration of a channel: an ordered mapping from field name
/// to value.
///
/// Keys keep their insertion order, which is also the order in which they are
/// serialized. Inserting an existing key replaces its value in place. The same
/// holds when deserializing, so of duplicate keys in an object the last value
/// wins, at the position of the first.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, derive_more::IntoIterator)]
#[serde(transparent)]
#[into_iterator(owned, ref)]
pub struct ChannelConfig(#[serde_as(as = "Map<_, _>")] Vec<(String, ConfigValue)>);

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert<K: Into<String>, V: Into<ConfigValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<ConfigValue> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<K: Into<String>, V: Into<ConfigValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the entries whose key is in `keys`, in their current order.
    pub fn only(&self, keys: &[&str]) -> ChannelConfig {
        self.iter()
            .filter(|(k, _)| keys.contains(k))
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }
}

impl<'de> Deserialize<'de> for ChannelConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(String, ConfigValue)> =
            Map::<Same, Same>::deserialize_as(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ChannelConfig {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut config = ChannelConfig::new();
        config.extend(iter);
        config
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> Extend<(K, V)> for ChannelConfig {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
