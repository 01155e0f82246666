//! Per-language maximum channel counts.

use crate::{Error, Result};
use std::collections::BTreeMap;
use trackwise_probe::{normalize_language, CodecType, ProbeData};

/// Grouping key for audio streams.
///
/// Untagged streams form their own group and are never merged into a named
/// language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageKey {
    Named(String),
    Unknown,
}

impl LanguageKey {
    pub fn of(language: Option<&str>) -> Self {
        match normalize_language(language.map(str::to_string)) {
            Some(lang) => Self::Named(lang),
            None => Self::Unknown,
        }
    }
}

impl std::fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageKey::Named(lang) => write!(f, "{}", lang),
            LanguageKey::Unknown => write!(f, "unknown"),
        }
    }
}

/// Maximum audio channel count observed per language.
///
/// Built once per evaluation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageChannelIndex {
    max_channels: BTreeMap<LanguageKey, u32>,
}

impl LanguageChannelIndex {
    /// Fold the audio streams of `data` into per-language maxima.
    pub fn build(data: &ProbeData) -> Result<Self> {
        let mut index = Self::default();

        for (_, stream) in data.of_type(CodecType::Audio) {
            let channels = stream.channels.ok_or_else(|| {
                Error::malformed(stream.index, "audio stream has no channel count")
            })?;
            index.record(LanguageKey::of(stream.language.as_deref()), channels);
        }

        Ok(index)
    }

    /// Build an index from explicit entries. Later entries for the same key
    /// are folded with `max`.
    pub fn from_entries(entries: impl IntoIterator<Item = (LanguageKey, u32)>) -> Self {
        let mut index = Self::default();
        for (key, channels) in entries {
            index.record(key, channels);
        }
        index
    }

    fn record(&mut self, key: LanguageKey, channels: u32) {
        self.max_channels
            .entry(key)
            .and_modify(|max| *max = (*max).max(channels))
            .or_insert(channels);
    }

    /// Maximum channel count for a language, if any audio carried it.
    pub fn max_channels(&self, key: &LanguageKey) -> Option<u32> {
        self.max_channels.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageKey, u32)> {
        self.max_channels.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.max_channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_channels.is_empty()
    }
}
