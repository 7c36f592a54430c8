use clap::{Args, Parser, Subcommand, ValueEnum};
use dialogkit_core::utils::logging::LoggingArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dialogkit")]
#[command(about = "Helpers for preparing conversational agent training data")]
#[command(version)]
#[command(after_help = "Examples:
  dialogkit convert domain.yml --to json       # Write domain.json next to domain.yml
  dialogkit convert data/*.json --to yaml --out-dir out
  dialogkit zip models/dialogue               # Archive a trained model directory
  dialogkit id --prefix sender_ --max-chars 8  # Random conversation id
  dialogkit ask --valid y,n --prompt 'Continue? '
  dialogkit sample stories.md --max 5 --seed 42
  dialogkit config show                       # Show current configuration

Environment Variables:
  DIALOGKIT_LOG_LEVEL   Log level (debug, info, warning, error)
  DIALOGKIT_LOG_FILE    File receiving a copy of the log output
  NO_COLOR              Disable colored output")]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// Append log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Convert files between YAML and JSON
    Convert(ConvertArgs),
    /// Create a zip archive of a directory
    Zip {
        /// Directory to archive
        folder: PathBuf,
    },
    /// Print a random identifier
    Id {
        /// Text placed before the identifier
        #[arg(long, default_value = "")]
        prefix: String,
        /// Keep only this many characters of the random part
        #[arg(long)]
        max_chars: Option<usize>,
    },
    /// Ask a question on the terminal until a valid answer is given
    Ask(AskArgs),
    /// Print a random subset of the lines of a file
    Sample(SampleArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  dialogkit config set --log-level info
  dialogkit config set --log-file /var/log/dialogkit.log --max-suggested 5")]
    Set {
        /// Default log level (debug, info, warning, error)
        #[arg(long)]
        log_level: Option<String>,
        /// Default log file
        #[arg(long)]
        log_file: Option<PathBuf>,
        /// Number of allowed answers listed after a wrong answer
        #[arg(long)]
        max_suggested: Option<usize>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Yaml => "yml",
        }
    }

    /// Guess the format of a file from its extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(DataFormat::Json),
            Some("yml") | Some("yaml") => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Arguments for converting data files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Files to convert (.json, .yml or .yaml)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Target format
    #[arg(long, value_enum)]
    pub to: DataFormat,

    /// Directory for the converted files (default: next to each input)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the interactive prompt
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Allowed answers, comma separated (any answer if omitted)
    #[arg(long, value_delimiter = ',')]
    pub valid: Option<Vec<String>>,

    /// Text shown before reading an answer
    #[arg(long)]
    pub prompt: Option<String>,

    /// Number of allowed answers listed after a wrong answer
    #[arg(long)]
    pub max_suggested: Option<usize>,
}

/// Arguments for sampling lines
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Text file to sample from
    pub file: PathBuf,

    /// Maximum number of lines to print
    #[arg(long, default_value = "10")]
    pub max: usize,

    /// Seed for a reproducible sample
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shorten printed lines to this many characters
    #[arg(long, default_value = "80")]
    pub width: usize,
}
