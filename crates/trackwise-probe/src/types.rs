//! Stream descriptor types.

use serde::{Deserialize, Serialize};

/// Kind of elementary stream, decided once when a descriptor is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    /// Attachments and anything the prober reports that we don't address.
    Other,
}

impl CodecType {
    /// Classify a raw `codec_type` string. Matching ignores ASCII case.
    pub fn from_probe(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "video" => Self::Video,
            "audio" => Self::Audio,
            "subtitle" => Self::Subtitle,
            "data" => Self::Data,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for CodecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecType::Video => write!(f, "video"),
            CodecType::Audio => write!(f, "audio"),
            CodecType::Subtitle => write!(f, "subtitle"),
            CodecType::Data => write!(f, "data"),
            CodecType::Other => write!(f, "other"),
        }
    }
}

/// One elementary stream inside a probed container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Position within the file as reported by the prober.
    pub index: u32,
    /// Stream kind.
    pub codec_type: CodecType,
    /// Language tag (e.g., "eng"). Empty tags are stored as `None`.
    pub language: Option<String>,
    /// Channel count. Always present on audio streams parsed from probe output.
    pub channels: Option<u32>,
    /// Display title, empty when untagged.
    pub title: String,
}

impl StreamDescriptor {
    /// Create an audio stream descriptor.
    pub fn audio(index: u32, language: Option<&str>, channels: u32, title: &str) -> Self {
        Self {
            index,
            codec_type: CodecType::Audio,
            language: normalize_language(language.map(str::to_string)),
            channels: Some(channels),
            title: title.to_string(),
        }
    }

    /// Create a descriptor for a non-audio stream.
    pub fn other(index: u32, codec_type: CodecType) -> Self {
        Self {
            index,
            codec_type,
            language: None,
            channels: None,
            title: String::new(),
        }
    }
}

/// All streams of one probed file, in container order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeData {
    pub streams: Vec<StreamDescriptor>,
}

impl ProbeData {
    pub fn new(streams: Vec<StreamDescriptor>) -> Self {
        Self { streams }
    }

    /// Iterate the streams of one type together with their per-type ordinal.
    ///
    /// The ordinal counts only streams of `codec_type`, which is what ffmpeg
    /// stream specifiers such as `0:a:1` address.
    pub fn of_type(
        &self,
        codec_type: CodecType,
    ) -> impl Iterator<Item = (usize, &StreamDescriptor)> + '_ {
        self.streams
            .iter()
            .filter(move |s| s.codec_type == codec_type)
            .enumerate()
    }

    /// Number of streams of the given type.
    pub fn count(&self, codec_type: CodecType) -> usize {
        self.of_type(codec_type).count()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

/// Trim a language tag, treating blank tags as absent.
pub fn normalize_language(language: Option<String>) -> Option<String> {
    language
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}
