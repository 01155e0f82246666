//! Conversion of ffprobe JSON output into stream descriptors.
//!
//! Expects the document produced by
//! `ffprobe -v quiet -print_format json -show_streams`. Only the fields the
//! selection policy relies on are read; everything else is ignored.

use crate::types::{normalize_language, CodecType, ProbeData, StreamDescriptor};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: Option<u32>,
    codec_type: Option<String>,
    channels: Option<Value>,
    #[serde(default)]
    tags: FfprobeTags,
}

/// Stream tags. Matroska muxers differ on key case, so lookups ignore it.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct FfprobeTags(Map<String, Value>);

impl FfprobeTags {
    /// Look up a tag, preferring the exact lowercase key.
    fn get(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .or_else(|| {
                self.0
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v)
            })
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Parse an ffprobe JSON document.
pub fn parse_ffprobe_json(json: &str) -> Result<ProbeData> {
    let output: FfprobeOutput = serde_json::from_str(json)?;
    convert(output)
}

/// Parse an ffprobe JSON document from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ProbeData> {
    let output: FfprobeOutput = serde_json::from_reader(reader)?;
    convert(output)
}

fn convert(output: FfprobeOutput) -> Result<ProbeData> {
    let streams = output
        .streams
        .into_iter()
        .enumerate()
        .map(|(position, stream)| convert_stream(position as u32, stream))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProbeData::new(streams))
}

fn convert_stream(position: u32, stream: FfprobeStream) -> Result<StreamDescriptor> {
    let index = stream.index.unwrap_or(position);

    let codec_type = stream
        .codec_type
        .as_deref()
        .map(CodecType::from_probe)
        .ok_or_else(|| Error::missing_field(index, "codec_type"))?;

    let channels = match (codec_type, stream.channels) {
        (CodecType::Audio, None) => return Err(Error::missing_field(index, "channels")),
        (CodecType::Audio, Some(value)) => Some(parse_channels(index, &value)?),
        // Only audio channel counts feed the policy.
        (_, value) => value.and_then(|v| parse_channels(index, &v).ok()),
    };

    Ok(StreamDescriptor {
        index,
        codec_type,
        language: normalize_language(stream.tags.get("language")),
        channels,
        title: stream.tags.get("title").unwrap_or_default(),
    })
}

/// Channel counts arrive as JSON integers from ffprobe, but some wrappers
/// stringify them.
fn parse_channels(index: u32, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| Error::invalid_field(index, "channels", value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SAMPLE: &str = r#"{
        "streams": [
            {"index": 0, "codec_name": "hevc", "codec_type": "video", "width": 3840, "height": 2160},
            {"index": 1, "codec_name": "truehd", "codec_type": "audio", "channels": 8,
             "tags": {"language": "eng", "title": "TrueHD 7.1"}},
            {"index": 2, "codec_name": "ac3", "codec_type": "audio", "channels": "2",
             "tags": {"language": "eng"}},
            {"index": 3, "codec_name": "subrip", "codec_type": "subtitle",
             "tags": {"language": "eng", "title": "English"}},
            {"index": 4, "codec_type": "attachment", "tags": {"filename": "font.ttf"}}
        ],
        "format": {"filename": "movie.mkv", "format_name": "matroska,webm"}
    }"#;

    #[test]
    fn test_parse_sample() {
        let data = parse_ffprobe_json(SAMPLE).unwrap();
        assert_eq!(data.streams.len(), 5);

        let audio: Vec<_> = data.of_type(CodecType::Audio).map(|(_, s)| s).collect();
        assert_eq!(audio[0].channels, Some(8));
        assert_eq!(audio[0].title, "TrueHD 7.1");
        assert_eq!(audio[1].channels, Some(2));
        assert_eq!(audio[1].title, "");
        assert_eq!(data.streams[4].codec_type, CodecType::Other);
    }

    #[test]
    fn test_missing_codec_type_is_rejected() {
        let json = r#"{"streams": [{"index": 0, "channels": 2}]}"#;
        assert_matches!(
            parse_ffprobe_json(json),
            Err(Error::MissingField { index: 0, field: "codec_type" })
        );
    }

    #[test]
    fn test_audio_without_channels_is_rejected() {
        let json = r#"{"streams": [{"index": 7, "codec_type": "audio"}]}"#;
        assert_matches!(
            parse_ffprobe_json(json),
            Err(Error::MissingField { index: 7, field: "channels" })
        );
    }

    #[test]
    fn test_non_numeric_channels_are_rejected() {
        let json = r#"{"streams": [{"index": 1, "codec_type": "audio", "channels": "six"}]}"#;
        assert_matches!(
            parse_ffprobe_json(json),
            Err(Error::InvalidField { index: 1, field: "channels", .. })
        );

        let json = r#"{"streams": [{"index": 1, "codec_type": "audio", "channels": -2}]}"#;
        assert_matches!(parse_ffprobe_json(json), Err(Error::InvalidField { .. }));
    }

    #[test]
    fn test_video_without_channels_is_fine() {
        let json = r#"{"streams": [{"codec_type": "video"}]}"#;
        let data = parse_ffprobe_json(json).unwrap();
        assert_eq!(data.streams[0].index, 0);
        assert_eq!(data.streams[0].channels, None);
    }

    #[test]
    fn test_uppercase_tags() {
        let json = r#"{"streams": [{"codec_type": "audio", "channels": 2,
            "tags": {"LANGUAGE": "jpn", "TITLE": "Japanese"}}]}"#;
        let data = parse_ffprobe_json(json).unwrap();
        assert_eq!(data.streams[0].language.as_deref(), Some("jpn"));
        assert_eq!(data.streams[0].title, "Japanese");
    }

    #[test]
    fn test_tags_in_both_cases() {
        let json = r#"{"streams": [{"codec_type": "audio", "channels": 2,
            "tags": {"LANGUAGE": "ger", "language": "eng", "title": "Stereo", "TITLE": "STEREO"}}]}"#;
        let data = parse_ffprobe_json(json).unwrap();
        assert_eq!(data.streams[0].language.as_deref(), Some("eng"));
        assert_eq!(data.streams[0].title, "Stereo");
    }

    #[test]
    fn test_from_reader() {
        let data = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.count(CodecType::Audio), 2);
    }

    #[test]
    fn test_invalid_json() {
        assert_matches!(parse_ffprobe_json("{not json"), Err(Error::Json(_)));
    }
}
