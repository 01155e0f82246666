//! ffmpeg output directives per stream type.

use crate::plan::OutputPlan;
use crate::selector::Selection;
use serde::{Deserialize, Serialize};

/// Output directives for one stream type.
///
/// Baseline directives (the plain codec copies) do not by themselves
/// require processing; anything pushed afterwards does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    output: Vec<String>,
    should_process: bool,
}

impl DirectiveSet {
    /// Create a set holding only baseline output directives.
    pub fn with_baseline(baseline: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            output: baseline.into_iter().map(Into::into).collect(),
            should_process: false,
        }
    }

    /// Append an output directive. The stream type now needs processing.
    pub fn push_output(&mut self, directive: impl Into<String>) {
        self.should_process = true;
        self.output.push(directive.into());
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn should_process(&self) -> bool {
        self.should_process
    }

    pub fn output_args(&self) -> String {
        self.output.join(" ")
    }
}

/// Map everything except data streams and copy video.
pub fn video_directives() -> DirectiveSet {
    DirectiveSet::with_baseline(["-map 0", "-map -0:d", "-c:v copy"])
}

/// Copy audio and unmap every dropped stream by its audio ordinal.
pub fn audio_directives(selection: &Selection) -> DirectiveSet {
    let mut set = DirectiveSet::with_baseline(["-c:a copy"]);
    for decision in selection.dropped() {
        set.push_output(format!("-map -0:a:{}", decision.ordinal));
    }
    set
}

/// Copy subtitles unchanged.
pub fn subtitle_directives() -> DirectiveSet {
    DirectiveSet::with_baseline(["-c:s copy"])
}

/// Directives appended to every plan regardless of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailPolicy {
    pub max_muxing_queue_size: u32,
    /// Fixed B-frame count.
    pub b_frames: u32,
    /// Microseconds ffmpeg may spend analyzing the input.
    pub analyze_duration: u64,
    /// Bytes ffmpeg may read while probing the input.
    pub probe_size: u64,
}

impl TailPolicy {
    pub const MAX_MUXING_QUEUE_SIZE: u32 = 9999;
    pub const B_FRAMES: u32 = 5;
    pub const ANALYZE_DURATION: u64 = 2_147_483_647;
    pub const PROBE_SIZE: u64 = 2_147_483_647;

    pub fn directives(&self) -> Vec<String> {
        vec![
            format!("-max_muxing_queue_size {}", self.max_muxing_queue_size),
            format!("-bf {}", self.b_frames),
            format!(
                "-analyzeduration {} -probesize {}",
                self.analyze_duration, self.probe_size
            ),
        ]
    }
}

impl Default for TailPolicy {
    fn default() -> Self {
        Self {
            max_muxing_queue_size: Self::MAX_MUXING_QUEUE_SIZE,
            b_frames: Self::B_FRAMES,
            analyze_duration: Self::ANALYZE_DURATION,
            probe_size: Self::PROBE_SIZE,
        }
    }
}

/// Combine the per-type directive sets into an ordered plan.
pub fn build(
    video: &DirectiveSet,
    audio: &DirectiveSet,
    subtitle: &DirectiveSet,
    tail: &TailPolicy,
) -> OutputPlan {
    OutputPlan {
        video: video.output().to_vec(),
        audio: audio.output().to_vec(),
        subtitle: subtitle.output().to_vec(),
        tail: tail.directives(),
        should_process: video.should_process()
            || audio.should_process()
            || subtitle.should_process(),
    }
}
