mod cli;

use trackwise::{config, processor};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use trackwise_policy::LanguageChannelIndex;
use trackwise_probe::CodecType;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "trackwise=trace,trackwise_policy=trace".to_string()
        } else {
            "trackwise=info,trackwise_policy=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan { input, json } => plan_file(&input, cli.config.as_deref(), json),
        Commands::Inspect { input } => inspect_file(&input),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("trackwise {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn plan_file(input: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    tracing::info!("Planning remux for {:?}", input);
    let data = processor::read_probe(input)?;
    let evaluation = processor::plan(&data, &config)?;
    let response = &evaluation.response;

    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    println!("Process file: {}", if response.process_file { "yes" } else { "no" });
    println!("Container: {}", response.container);
    println!("Preset: {}", response.preset);

    println!("\nAudio Streams: {}", evaluation.selection.decisions.len());
    for decision in &evaluation.selection.decisions {
        print!(
            "  [{}] {}ch ({})",
            decision.ordinal, decision.channels, decision.language
        );
        if !decision.title.is_empty() {
            print!(" \"{}\"", decision.title);
        }
        println!(" {}", if decision.keep { "keep" } else { "drop" });
    }

    if !response.info_log.is_empty() {
        println!("\nLog:");
        for line in response.info_log.lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}

fn inspect_file(input: &Path) -> Result<()> {
    let data = processor::read_probe(input)?;

    for codec_type in [
        CodecType::Video,
        CodecType::Audio,
        CodecType::Subtitle,
        CodecType::Data,
        CodecType::Other,
    ] {
        let count = data.count(codec_type);
        if count == 0 {
            continue;
        }

        println!("{} streams: {}", codec_type, count);
        for (ordinal, stream) in data.of_type(codec_type) {
            print!("  [{}] #{}", ordinal, stream.index);
            if let Some(ref lang) = stream.language {
                print!(" ({})", lang);
            }
            if let Some(channels) = stream.channels {
                print!(" {}ch", channels);
            }
            if !stream.title.is_empty() {
                print!(" \"{}\"", stream.title);
            }
            println!();
        }
    }

    let index = LanguageChannelIndex::build(&data)?;
    if !index.is_empty() {
        println!("\nMax channels per language:");
        for (language, channels) in index.iter() {
            println!("  {}: {}", language, channels);
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Container: {}", config.plugin.container);
            println!("  Re-queue after: {}", config.plugin.requeue_after);
            println!(
                "  Audio languages: {:?} (not used for selection)",
                config.policy_options().audio_languages
            );
            println!("  Tail: {}", config.tail.directives().join(" "));
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Container: {}", config.plugin.container);
            println!("  Tail: {}", config.tail.directives().join(" "));
        }
    }

    Ok(())
}
