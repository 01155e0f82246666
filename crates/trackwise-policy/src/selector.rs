//! Stream selection: keep the highest channel count audio per language.
//!
//! Selection runs in two passes over the audio streams. The first builds a
//! [`LanguageChannelIndex`]; the second marks every stream whose channel
//! count is strictly below its language's maximum for removal. Streams tied
//! at the maximum are all kept.

use crate::index::{LanguageChannelIndex, LanguageKey};
use crate::log::PluginLog;
use crate::{Error, Result};
use serde::Serialize;
use trackwise_probe::{CodecType, ProbeData};

/// Warning logged when the guard keeps every audio stream.
pub const ALL_REMOVED_WARNING: &str =
    "*** All audio tracks would have been removed. Defaulting to keeping all tracks for this file.";

/// Keep/drop decision for one audio stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioDecision {
    /// Position among the audio streams only.
    pub ordinal: usize,
    /// Position within the file.
    pub stream_index: u32,
    #[serde(serialize_with = "serialize_key")]
    pub language: LanguageKey,
    pub channels: u32,
    pub title: String,
    pub keep: bool,
}

fn serialize_key<S>(key: &LanguageKey, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(key)
}

/// Result of running the selector over one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// One decision per audio stream, in ordinal order.
    pub decisions: Vec<AudioDecision>,
    /// Removal lines, or the single fallback warning.
    pub log: PluginLog,
    /// Set when every audio stream was marked for removal and the guard
    /// kept them all instead.
    pub fallback_applied: bool,
}

impl Selection {
    pub fn kept(&self) -> impl Iterator<Item = &AudioDecision> {
        self.decisions.iter().filter(|d| d.keep)
    }

    pub fn dropped(&self) -> impl Iterator<Item = &AudioDecision> {
        self.decisions.iter().filter(|d| !d.keep)
    }

    pub fn removal_count(&self) -> usize {
        self.dropped().count()
    }
}

/// Decide which audio streams of `data` survive.
pub fn select(data: &ProbeData) -> Result<Selection> {
    let index = LanguageChannelIndex::build(data)?;
    select_with_index(data, &index)
}

/// Run the decision pass against a caller-supplied index.
///
/// A language absent from `index` never causes a removal.
pub fn select_with_index(data: &ProbeData, index: &LanguageChannelIndex) -> Result<Selection> {
    let mut decisions = Vec::new();
    let mut removals = PluginLog::new();

    for (ordinal, stream) in data.of_type(CodecType::Audio) {
        let channels = stream.channels.ok_or_else(|| {
            Error::malformed(stream.index, "audio stream has no channel count")
        })?;
        let language = LanguageKey::of(stream.language.as_deref());

        let keep = !index
            .max_channels(&language)
            .is_some_and(|max| channels < max);

        if !keep {
            removals.add_error(format!("Removing audio track: {}", stream.title));

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Dropping audio stream {} ({}, {} channels)",
                ordinal,
                language,
                channels
            );
        }

        decisions.push(AudioDecision {
            ordinal,
            stream_index: stream.index,
            language,
            channels,
            title: stream.title.clone(),
            keep,
        });
    }

    let all_removed = !decisions.is_empty() && decisions.iter().all(|d| !d.keep);

    let mut log = PluginLog::new();
    if all_removed {
        #[cfg(feature = "tracing")]
        tracing::warn!("Every audio stream was marked for removal, keeping all of them");

        for decision in &mut decisions {
            decision.keep = true;
        }
        log.add_error(ALL_REMOVED_WARNING);
    } else {
        log.append(removals);
    }

    Ok(Selection {
        decisions,
        log,
        fallback_applied: all_removed,
    })
}
