//! # trackwise-probe
//!
//! Stream descriptors for a probed media container.
//!
//! This crate turns the JSON emitted by `ffprobe -show_streams` into a
//! validated list of [`StreamDescriptor`]s. Codec types are classified into
//! the closed [`CodecType`] enum at construction time, and fields the
//! selection policy depends on (codec type, audio channel count) are
//! required rather than defaulted.
//!
//! ## Example
//!
//! ```
//! use trackwise_probe::{parse_ffprobe_json, CodecType};
//!
//! let json = r#"{"streams": [
//!     {"index": 0, "codec_type": "video"},
//!     {"index": 1, "codec_type": "audio", "channels": 6, "tags": {"language": "eng"}}
//! ]}"#;
//!
//! let data = parse_ffprobe_json(json)?;
//! assert_eq!(data.count(CodecType::Audio), 1);
//! # Ok::<(), trackwise_probe::Error>(())
//! ```

mod error;
mod ffprobe;
mod types;

pub use error::{Error, Result};
pub use ffprobe::{from_reader, parse_ffprobe_json};
pub use types::{normalize_language, CodecType, ProbeData, StreamDescriptor};
