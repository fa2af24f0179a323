//! Step command implementation

use super::{open_output, InputArgs, LogArgs, SplitArgs};
use crate::error::CliError;
use crate::output::{create_formatter, FragmentRecord, OutputFormat};
use anyhow::Result;
use clap::Args;
use prose_stepper_core::{ProseStepper, SentenceCollection, Step};
use std::path::PathBuf;

/// Arguments for the step command
#[derive(Debug, Args)]
pub struct StepArgs {
    /// Steps to run in order: s/w/f followed by a signed count (s+1, w-2, f+1),
    /// j followed by a word index (j5, j-1), '.' for the current fragment, or a
    /// JSON step such as 3 or [0,1,0]
    #[arg(value_name = "STEP", required = true, allow_negative_numbers = true)]
    pub script: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print only the fragment text, without positions
    #[arg(long)]
    pub bare: bool,

    #[command(flatten)]
    pub split: SplitArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

impl StepArgs {
    /// Execute the step command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();
        log::debug!("Arguments: {self:?}");

        // Reject a bad script before touching any input
        let steps = self
            .script
            .iter()
            .map(String::as_str)
            .map(parse_step)
            .collect::<Result<Vec<_>, _>>()?;

        let config = self.split.resolve()?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };

        let writer = open_output(self.output.as_deref())?;
        let mut formatter =
            create_formatter(format, writer, config.output.pretty_json, !self.bare);
        let mut stepper = ProseStepper::with_params(config.split);

        for source in self.input.sources()? {
            let name = source.name();
            let collection = SentenceCollection::from_text(&source.read()?)
                .map_err(|_| CliError::EmptyInput(name.clone()))?;

            stepper.process(collection);
            formatter.begin_source(&name)?;
            for step in &steps {
                let fragment = stepper.get_fragment(*step)?.to_string();
                let record = FragmentRecord::capture(&stepper, &fragment).with_step(step);
                formatter.format_fragment(&record)?;
            }
        }

        formatter.finish()
    }
}

/// Parse one script token into a step
pub fn parse_step(token: &str) -> Result<Step, CliError> {
    let invalid = || CliError::InvalidStep(token.to_string());

    if token == "." {
        return Ok(Step::Current);
    }

    let mut chars = token.chars();
    let kind = chars.next().ok_or_else(invalid)?;
    if kind.is_ascii_alphabetic() {
        let count: i64 = chars.as_str().parse().map_err(|_| invalid())?;
        return match kind.to_ascii_lowercase() {
            's' => Ok(Step::Sentence(count)),
            'w' => Ok(Step::Word(count)),
            'f' => Ok(Step::Fragment(count)),
            'j' => Ok(Step::Jump(count)),
            _ => Err(invalid()),
        };
    }

    let value: serde_json::Value = serde_json::from_str(token).map_err(|_| invalid())?;
    Step::from_value(Some(&value)).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_step_letters() {
        assert_eq!(parse_step("s+1").unwrap(), Step::Sentence(1));
        assert_eq!(parse_step("w-2").unwrap(), Step::Word(-2));
        assert_eq!(parse_step("f3").unwrap(), Step::Fragment(3));
        assert_eq!(parse_step("J-1").unwrap(), Step::Jump(-1));
        assert_eq!(parse_step(".").unwrap(), Step::Current);
    }

    #[test]
    fn test_parse_step_json() {
        assert_eq!(parse_step("5").unwrap(), Step::Jump(5));
        assert_eq!(parse_step("-1").unwrap(), Step::Jump(-1));
        assert_eq!(parse_step("[0,-1,3]").unwrap(), Step::Word(-1));
        assert_eq!(parse_step("[0,0,0]").unwrap(), Step::Current);
    }

    #[test]
    fn test_parse_step_rejects_garbage() {
        for token in ["", "x+1", "s", "w+", "f1.5", "[1,2]", "1.1", "\"3\"", "s++1"] {
            assert!(
                matches!(parse_step(token), Err(CliError::InvalidStep(_))),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_runs_script() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.txt");
        let args = StepArgs {
            script: ["f+1", "s+1", "j-1", "w-1"].map(String::from).to_vec(),
            input: InputArgs {
                input: Vec::new(),
                text: Some("Victorious, you brave flag. Why, oh walrus?".to_string()),
            },
            output: Some(out.clone()),
            format: Some(OutputFormat::Text),
            bare: false,
            split: SplitArgs {
                max_chars: Some(5),
                ..SplitArgs::default()
            },
            log: LogArgs {
                quiet: true,
                verbose: 0,
            },
        };
        args.execute().unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "0:0:1\torio-\n1:0:0\tWhy,\n1:2:0\twalr-\n1:1:0\toh\n"
        );
    }

    #[test]
    fn test_bad_script_fails_before_reading_input() {
        let args = StepArgs {
            script: vec!["q7".to_string()],
            input: InputArgs {
                input: vec!["/nonexistent/*.txt".to_string()],
                text: None,
            },
            output: None,
            format: None,
            bare: true,
            split: SplitArgs::default(),
            log: LogArgs {
                quiet: true,
                verbose: 0,
            },
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Invalid step 'q7'"));
    }
}
