//! CLI command implementations

use crate::config::CliConfig;
use crate::input::InputSource;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod generate_config;
pub mod play;
pub mod step;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Walk every fragment of the input from start to finish
    Play(play::PlayArgs),

    /// Run a script of steps against the input and print each fragment reached
    Step(step::StepArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Play(args) => args.execute(),
            Commands::Step(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Where the prose comes from
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Prose given directly on the command line
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Resolve the sources in processing order
    pub fn sources(&self) -> Result<Vec<InputSource>> {
        InputSource::collect(&self.input, self.text.as_deref())
    }
}

/// Split parameter overrides layered on top of the configuration file
#[derive(Debug, Clone, Default, Args)]
pub struct SplitArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum characters per fragment (0 disables splitting)
    #[arg(short, long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Separator appended to every fragment but a word's last
    #[arg(long, value_name = "STR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Budgets below this length never get a separator
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub min_length_for_separator: Option<i64>,

    /// Share of the budget a word's last fragment must reach
    #[arg(long, value_name = "FRACTION")]
    pub fraction_of_max: Option<f64>,

    /// Keep short trailing fragments as they fall
    #[arg(long)]
    pub no_redistribute: bool,
}

impl SplitArgs {
    /// Load the configuration and apply command-line overrides
    pub fn resolve(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        let split = &mut config.split;

        if let Some(max) = self.max_chars {
            split.max_num_characters = max;
        }
        if let Some(separator) = &self.separator {
            split.separator = separator.clone();
        }
        if let Some(min) = self.min_length_for_separator {
            split.min_length_for_separator = min;
        }
        if let Some(fraction) = self.fraction_of_max {
            split.fraction_of_max = fraction;
        }
        if self.no_redistribute {
            split.redistribute = false;
        }

        config.validate()?;
        log::debug!("Split parameters: {:?}", config.split);
        Ok(config)
    }
}

/// Verbosity flags shared by the stepping commands
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
