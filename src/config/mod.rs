mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./trackwise.toml",
        "~/.config/trackwise/config.toml",
        "/etc/trackwise/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if !config.plugin.container.starts_with('.') || config.plugin.container.len() < 2 {
        anyhow::bail!(
            "Container must be an extension like \".mkv\", got {:?}",
            config.plugin.container
        );
    }

    let tail = &config.tail;
    if tail.max_muxing_queue_size == 0 {
        anyhow::bail!("tail.max_muxing_queue_size cannot be 0");
    }
    if tail.b_frames == 0 {
        anyhow::bail!("tail.b_frames cannot be 0");
    }
    if tail.analyze_duration == 0 || tail.probe_size == 0 {
        anyhow::bail!("tail.analyze_duration and tail.probe_size cannot be 0");
    }

    if !config.plugin.audio_language.is_empty() {
        tracing::debug!(
            "audio_language = {:?} is recorded but not used for selection",
            config.plugin.audio_language
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackwise_policy::TailPolicy;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.plugin.container, ".mkv");
        assert!(config.plugin.requeue_after);
        assert_eq!(config.tail, TailPolicy::default());
    }

    #[test]
    fn test_partial_tail_section() {
        let config = parse_config("[tail]\nb_frames = 3\n").unwrap();
        assert_eq!(config.tail.b_frames, 3);
        assert_eq!(config.tail.max_muxing_queue_size, 9999);
    }

    #[test]
    fn test_policy_options() {
        let config = parse_config(
            r#"
[plugin]
audio_language = "eng,jpn"
container = ".mp4"
requeue_after = false
"#,
        )
        .unwrap();

        let options = config.policy_options();
        assert_eq!(options.audio_languages, vec!["eng", "jpn"]);
        assert_eq!(options.container, ".mp4");
        assert!(!options.requeue_after);
    }

    #[test]
    fn test_rejects_bad_container() {
        assert!(parse_config("[plugin]\ncontainer = \"mkv\"\n").is_err());
        assert!(parse_config("[plugin]\ncontainer = \".\"\n").is_err());
    }

    #[test]
    fn test_rejects_zero_tail_values() {
        assert!(parse_config("[tail]\nmax_muxing_queue_size = 0\n").is_err());
        assert!(parse_config("[tail]\nprobe_size = 0\n").is_err());
    }
}
