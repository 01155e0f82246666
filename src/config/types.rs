use serde::{Deserialize, Serialize};
use trackwise_policy::{PolicyOptions, TailPolicy};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub plugin: PluginConfig,

    #[serde(default)]
    pub tail: TailPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginConfig {
    /// Comma separated language list. Accepted for compatibility with
    /// existing host configs; selection does not filter on it.
    #[serde(default)]
    pub audio_language: String,

    #[serde(default = "default_container")]
    pub container: String,

    #[serde(default = "default_requeue_after")]
    pub requeue_after: bool,
}

fn default_container() -> String {
    ".mkv".to_string()
}

fn default_requeue_after() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            audio_language: String::new(),
            container: default_container(),
            requeue_after: default_requeue_after(),
        }
    }
}

impl Config {
    pub fn policy_options(&self) -> PolicyOptions {
        PolicyOptions {
            audio_languages: PolicyOptions::parse_languages(&self.plugin.audio_language),
            tail: self.tail,
            container: self.plugin.container.clone(),
            requeue_after: self.plugin.requeue_after,
        }
    }
}
