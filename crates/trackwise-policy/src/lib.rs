//! # trackwise-policy
//!
//! Audio stream selection and ffmpeg directive planning.
//!
//! Given the streams of one probed file, the policy keeps, per language, the
//! audio streams carrying the highest channel count and unmaps the rest.
//! Video and subtitles are copied through unchanged. The outcome is an
//! [`OutputPlan`] of ordered ffmpeg directives plus a [`PluginLog`] for the
//! operator.
//!
//! Evaluation is pure and synchronous. Nothing is shared between calls, so
//! the host may evaluate many files concurrently.
//!
//! ## Features
//!
//! - `tracing` - Emit tracing events alongside the returned log
//!
//! ## Example
//!
//! ```
//! use trackwise_policy::{evaluate, PolicyOptions};
//! use trackwise_probe::parse_ffprobe_json;
//!
//! let data = parse_ffprobe_json(r#"{"streams": [
//!     {"index": 0, "codec_type": "video"},
//!     {"index": 1, "codec_type": "audio", "channels": 6, "tags": {"language": "eng"}},
//!     {"index": 2, "codec_type": "audio", "channels": 2, "tags": {"language": "eng", "title": "Stereo"}}
//! ]}"#)?;
//!
//! let eval = evaluate(&data, &PolicyOptions::default())?;
//! assert!(eval.response.process_file);
//! assert!(eval.response.preset.contains("-map -0:a:1"));
//! # Ok::<(), trackwise_policy::Error>(())
//! ```

pub mod directives;
mod error;
mod index;
mod log;
mod plan;
pub mod selector;

pub use directives::{DirectiveSet, TailPolicy};
pub use error::{Error, Result};
pub use index::{LanguageChannelIndex, LanguageKey};
pub use log::PluginLog;
pub use plan::{evaluate, Evaluation, OutputPlan, PluginResponse, PolicyOptions};
pub use selector::{select, select_with_index, AudioDecision, Selection};
