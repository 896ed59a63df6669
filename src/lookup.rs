//! Load → ask → map → print.

use std::io::{BufRead, Write};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::mapper::select_row;
use crate::model::{Dataset, Selection, TimeInput};
use crate::options::{LookupOptions, OutputFormat};
use crate::prompt::read_time_input_with;
use crate::render::{self, JsonFormat, INVALID_ROW_MESSAGE, NO_DATA_MESSAGE};

/// How a lookup run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The dataset was empty or unreadable; nothing was asked.
    NoData,
    /// A row was selected and printed.
    Selected(Selection),
    /// The computed row was outside the dataset.
    OutOfBounds { row_index: usize, row_count: usize },
}

/// A configured lookup.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    options: LookupOptions,
}

impl Lookup {
    /// Create a lookup with the given options.
    pub fn new(options: LookupOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    /// Load the configured spreadsheet.
    ///
    /// A read failure is logged, reported on `output`, and becomes an empty
    /// dataset. Only a failure to write the report is returned as an error.
    pub fn load_dataset<W: Write>(&self, output: &mut W) -> Result<Dataset> {
        let path = &self.options.dataset_path;
        match Dataset::load(path) {
            Ok(dataset) => {
                info!(path = %path.display(), rows = dataset.len(), "dataset loaded");
                Ok(dataset)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read dataset");
                writeln!(output, "{}", render::read_error_message(&e))?;
                Ok(Dataset::new())
            }
        }
    }

    /// Load the dataset, ask for the time, and print the selected row.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use birthtime::{Lookup, LookupOptions};
    ///
    /// let lookup = Lookup::new(LookupOptions::new().with_dataset_path("birthtime3.xlsx"));
    /// let mut input = "06:00\nPM\n".as_bytes();
    /// let outcome = lookup.run(&mut input, &mut std::io::stdout())?;
    /// # Ok::<(), birthtime::Error>(())
    /// ```
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<LookupOutcome> {
        let dataset = self.load_dataset(output)?;
        self.run_with_dataset(&dataset, input, output)
    }

    /// Like [`run`](Self::run), but prompts and re-prompts go to `prompts`
    /// while messages and the selected row go to `output`.
    ///
    /// Keeps `output` machine-readable in JSON mode.
    pub fn run_with_prompts<R: BufRead, P: Write, W: Write>(
        &self,
        input: &mut R,
        prompts: &mut P,
        output: &mut W,
    ) -> Result<LookupOutcome> {
        let dataset = self.load_dataset(output)?;
        if dataset.is_empty() {
            writeln!(output, "{}", NO_DATA_MESSAGE)?;
            return Ok(LookupOutcome::NoData);
        }

        let time = self.read_answers(input, prompts)?;
        self.print_selection(&dataset, &time, output)
    }

    /// Ask for the time and print the selected row of an already loaded dataset.
    pub fn run_with_dataset<R: BufRead, W: Write>(
        &self,
        dataset: &Dataset,
        input: &mut R,
        output: &mut W,
    ) -> Result<LookupOutcome> {
        if dataset.is_empty() {
            writeln!(output, "{}", NO_DATA_MESSAGE)?;
            return Ok(LookupOutcome::NoData);
        }

        let time = self.read_answers(input, output)?;
        self.print_selection(dataset, &time, output)
    }

    /// Pre-supplied answers first, prompting for whatever is missing or invalid.
    fn read_answers<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<TimeInput> {
        read_time_input_with(
            self.options.time_answer.as_deref(),
            self.options.meridiem_answer.as_deref(),
            input,
            output,
        )
    }

    /// Print the row of `dataset` selected for `time`, without prompting.
    pub fn print_selection<W: Write>(
        &self,
        dataset: &Dataset,
        time: &TimeInput,
        output: &mut W,
    ) -> Result<LookupOutcome> {
        if dataset.is_empty() {
            writeln!(output, "{}", NO_DATA_MESSAGE)?;
            return Ok(LookupOutcome::NoData);
        }

        let mapped = select_row(time, dataset.len(), self.options.calibration.as_ref());
        debug!(
            time = %time,
            percentage = mapped.percentage,
            row = mapped.row,
            calibrated = mapped.calibrated,
            "mapped time to row"
        );

        let Some(row) = dataset.get(mapped.row) else {
            if self.options.output_format == OutputFormat::Text {
                writeln!(output, "{}", render::HEADER_LINES.join("\n"))?;
            }
            writeln!(output, "{}", INVALID_ROW_MESSAGE)?;
            return Ok(LookupOutcome::OutOfBounds {
                row_index: mapped.row,
                row_count: dataset.len(),
            });
        };

        let selection = Selection::new(time, &mapped, row);
        match self.options.output_format {
            OutputFormat::Text => writeln!(output, "{}", render::to_text(&selection))?,
            OutputFormat::Json => {
                writeln!(output, "{}", render::to_json(&selection, JsonFormat::Pretty)?)?
            }
        }

        Ok(LookupOutcome::Selected(selection))
    }
}
