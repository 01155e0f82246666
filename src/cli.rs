use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trackwise")]
#[command(author, version, about = "Keep the best audio stream per language when remuxing")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan the remux for a file from its ffprobe JSON
    Plan {
        /// ffprobe JSON document (`-` reads stdin)
        #[arg(required = true)]
        input: PathBuf,

        /// Output the host response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List streams with their per-type ordinals and language maxima
    Inspect {
        /// ffprobe JSON document (`-` reads stdin)
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
