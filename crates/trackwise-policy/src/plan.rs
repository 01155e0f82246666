//! Output plan and the host-facing response.

use crate::directives::{self, TailPolicy};
use crate::log::PluginLog;
use crate::selector::{self, Selection};
use crate::Result;
use serde::{Deserialize, Serialize};
use trackwise_probe::ProbeData;

/// Ordered ffmpeg directives for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPlan {
    pub video: Vec<String>,
    pub audio: Vec<String>,
    pub subtitle: Vec<String>,
    pub tail: Vec<String>,
    /// Whether remuxing changes anything at all.
    pub should_process: bool,
}

impl OutputPlan {
    /// All output directives: video, audio, subtitle, then the tail.
    pub fn directives(&self) -> impl Iterator<Item = &str> {
        self.video
            .iter()
            .chain(&self.audio)
            .chain(&self.subtitle)
            .chain(&self.tail)
            .map(String::as_str)
    }

    /// Compose the preset string: `<input args>,<output directives>`.
    ///
    /// The policy adds no input-side arguments, so the preset starts with
    /// the separating comma.
    pub fn command_args(&self) -> String {
        format!(
            ",{} {} {} {}",
            self.video.join(" "),
            self.audio.join(" "),
            self.subtitle.join(" "),
            self.tail.join(" ")
        )
    }
}

/// Knobs the host passes alongside the probe data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOptions {
    /// Languages the host asked for. Carried through for reporting; the
    /// selector groups by whatever languages the file contains instead.
    pub audio_languages: Vec<String>,
    pub tail: TailPolicy,
    /// Output container extension, including the leading dot.
    pub container: String,
    pub requeue_after: bool,
}

impl PolicyOptions {
    /// Split a comma separated language list, dropping blanks.
    pub fn parse_languages(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            audio_languages: Vec::new(),
            tail: TailPolicy::default(),
            container: ".mkv".to_string(),
            requeue_after: true,
        }
    }
}

/// Response handed back to the transcoding host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginResponse {
    pub container: String,
    #[serde(rename = "FFmpegMode")]
    pub ffmpeg_mode: bool,
    #[serde(rename = "handBrakeMode")]
    pub handbrake_mode: bool,
    #[serde(rename = "infoLog")]
    pub info_log: String,
    #[serde(rename = "processFile")]
    pub process_file: bool,
    pub preset: String,
    #[serde(rename = "reQueueAfter")]
    pub requeue_after: bool,
}

/// Everything produced by one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub selection: Selection,
    pub plan: OutputPlan,
    pub log: PluginLog,
    pub response: PluginResponse,
}

/// Run selection and directive building for one file.
pub fn evaluate(data: &ProbeData, options: &PolicyOptions) -> Result<Evaluation> {
    let selection = selector::select(data)?;

    let video = directives::video_directives();
    let audio = directives::audio_directives(&selection);
    let subtitle = directives::subtitle_directives();
    let plan = directives::build(&video, &audio, &subtitle, &options.tail);

    let mut log = selection.log.clone();
    if !plan.should_process {
        log.add_success("No need to process file");
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Evaluated {} audio stream(s), {} removed, process_file={}",
        selection.decisions.len(),
        selection.removal_count(),
        plan.should_process
    );

    let response = PluginResponse {
        container: options.container.clone(),
        ffmpeg_mode: true,
        handbrake_mode: false,
        info_log: log.render(),
        process_file: plan.should_process,
        preset: plan.command_args(),
        requeue_after: options.requeue_after,
    };

    Ok(Evaluation {
        selection,
        plan,
        log,
        response,
    })
}
