//! Play command implementation

use super::{open_output, InputArgs, LogArgs, SplitArgs};
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{create_formatter, FragmentRecord, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use prose_stepper_core::{ProseStepper, SentenceCollection, Step};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Arguments for the play command
#[derive(Debug, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Prefix each text line with its sentence:word:fragment position
    #[arg(short, long)]
    pub positions: bool,

    /// Pause between fragments, for reading along
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    #[command(flatten)]
    pub split: SplitArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

impl PlayArgs {
    /// Execute the play command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();

        log::info!("Starting playback");
        log::debug!("Arguments: {self:?}");

        let config = self.split.resolve()?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let sources = self.input.sources()?;

        let writer = open_output(self.output.as_deref())?;
        let mut formatter =
            create_formatter(format, writer, config.output.pretty_json, self.positions);
        // The bar shares the terminal with stdout output, so only show it for files
        let mut reporter = ProgressReporter::new(self.log.quiet || self.output.is_none());
        let mut stepper = ProseStepper::with_params(config.split);

        let mut played = 0;
        for source in &sources {
            if self.play_source(&mut stepper, formatter.as_mut(), &mut reporter, source)? {
                played += 1;
            }
        }
        formatter.finish()?;

        log::info!("Played {played} of {} source(s)", sources.len());
        Ok(())
    }

    /// Walk one source fragment by fragment. Returns false when a file held no
    /// words and was skipped.
    fn play_source(
        &self,
        stepper: &mut ProseStepper,
        formatter: &mut dyn OutputFormatter,
        reporter: &mut ProgressReporter,
        source: &InputSource,
    ) -> Result<bool> {
        let name = source.name();
        let text = source.read()?;

        let collection = match SentenceCollection::from_text(&text) {
            Ok(collection) => collection,
            Err(_) if matches!(source, InputSource::File(_)) => {
                log::warn!("Skipping {name}: no words");
                return Ok(false);
            }
            Err(_) => return Err(CliError::EmptyInput(name).into()),
        };

        log::debug!(
            "{name}: {} sentence(s), {} word(s)",
            collection.sentence_count(),
            collection.word_count()
        );
        stepper.process(collection);
        formatter.begin_source(&name)?;
        reporter.init_words(&name, stepper.get_length() as u64);

        let mut step = Step::Current;
        loop {
            let fragment = stepper.get_fragment(step)?.to_string();
            formatter.format_fragment(&FragmentRecord::capture(stepper, &fragment))?;
            reporter.word_reached(stepper.get_index());

            if stepper.is_at_end() {
                break;
            }
            if let Some(delay) = self.delay_ms {
                thread::sleep(Duration::from_millis(delay));
            }
            step = Step::Fragment(1);
        }

        reporter.finish();
        Ok(true)
    }
}
