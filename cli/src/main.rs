//! birthtime CLI - Genesis creation-week birth time lookup
//!
//! Reads the creation-week spreadsheet, asks for a birth time, and prints the
//! matching row.

use birthtime::{Lookup, LookupOptions, LookupOutcome, OutputFormat};
use clap::{ArgAction, Parser};
use colored::*;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Map a birth time onto the Genesis creation week
#[derive(Parser)]
#[command(
    name = "birthtime",
    author = "iyulab",
    version,
    about = "Map a birth time onto the Genesis creation week",
    long_about = "birthtime - Genesis creation-week birth time lookup.\n\n\
                  Measures the birth time as a percentage of the day starting at 6 PM\n\
                  and prints the matching row of the creation-week spreadsheet."
)]
struct Cli {
    /// Spreadsheet holding the creation-week table
    #[arg(value_name = "FILE", default_value = birthtime::DEFAULT_DATASET_PATH)]
    file: PathBuf,

    /// Birth time in HH:MM format (asked for when omitted or invalid)
    #[arg(short, long, value_name = "HH:MM")]
    time: Option<String>,

    /// AM or PM (asked for when omitted or invalid)
    #[arg(short, long, value_name = "AM|PM")]
    meridiem: Option<String>,

    /// Use the percentage formula even for calibrated times
    #[arg(long)]
    no_calibration: bool,

    /// Print the selected row as JSON
    #[arg(long)]
    json: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> LookupOptions {
        let mut options = LookupOptions::new().with_dataset_path(self.file.clone());
        if self.no_calibration {
            options = options.without_calibration();
        }
        if self.json {
            options = options.with_output_format(OutputFormat::Json);
        }
        if let Some(time) = &self.time {
            options = options.with_time_answer(time.as_str());
        }
        if let Some(meridiem) = &self.meridiem {
            options = options.with_meridiem_answer(meridiem.as_str());
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = Lookup::new(cli.options());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let outcome = match lookup.options().output_format {
        // Keep stdout parseable: questions go to stderr
        OutputFormat::Json => lookup.run_with_prompts(&mut input, &mut io::stderr().lock(), &mut output)?,
        OutputFormat::Text => lookup.run(&mut input, &mut output)?,
    };

    match outcome {
        LookupOutcome::Selected(sel) => debug!(row = sel.row_index, "lookup finished"),
        other => debug!(?other, "lookup finished without a row"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthtime::prompt::{TIME_ERROR, TIME_PROMPT};
    use birthtime::{Dataset, Row};

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["birthtime"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("birthtime3.xlsx"));
        assert!(cli.time.is_none());

        let options = cli.options();
        assert!(options.calibration.is_some());
        assert_eq!(options.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_preset_answers() {
        let cli = Cli::try_parse_from([
            "birthtime",
            "data.xlsx",
            "--time",
            "05:59",
            "--meridiem",
            "pm",
            "--json",
            "--no-calibration",
        ])
        .unwrap();

        let options = cli.options();
        assert_eq!(options.dataset_path, PathBuf::from("data.xlsx"));
        assert_eq!(options.time_answer.as_deref(), Some("05:59"));
        assert_eq!(options.meridiem_answer.as_deref(), Some("pm"));
        assert!(options.calibration.is_none());
        assert_eq!(options.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_answers_are_accepted_for_reprompt() {
        let cli = Cli::try_parse_from(["birthtime", "--time", "25:00", "-m", "noon"]).unwrap();
        let options = cli.options();
        assert_eq!(options.time_answer.as_deref(), Some("25:00"));
        assert_eq!(options.meridiem_answer.as_deref(), Some("noon"));
    }

    #[test]
    fn test_invalid_time_flag_reprompts() {
        let cli = Cli::try_parse_from(["birthtime", "--time", "25:00", "--meridiem", "AM"]).unwrap();
        let lookup = Lookup::new(cli.options());
        let dataset: Dataset = (0..409)
            .map(|i| Row::from_cells([format!("row-{}", i)]))
            .collect();

        let mut input = "05:59\n".as_bytes();
        let mut output = Vec::new();
        let outcome = lookup
            .run_with_dataset(&dataset, &mut input, &mut output)
            .unwrap();

        assert!(matches!(outcome, LookupOutcome::Selected(ref s) if s.row_index == 203));
        let out = String::from_utf8(output).unwrap();
        assert!(out.starts_with(&format!("{}\n{}", TIME_ERROR, TIME_PROMPT)));
        assert!(out.ends_with("row-203\n"));
    }

    #[test]
    fn test_meridiem_without_time() {
        let cli = Cli::try_parse_from(["birthtime", "--meridiem", "AM"]).unwrap();
        assert!(cli.options().time_answer.is_none());
        assert_eq!(cli.options().meridiem_answer.as_deref(), Some("AM"));
    }
}
