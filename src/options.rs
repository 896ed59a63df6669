//! Lookup configuration.

use std::path::PathBuf;

use crate::mapper::Calibration;

/// Spreadsheet read when no path is configured.
pub const DEFAULT_DATASET_PATH: &str = "birthtime3.xlsx";

/// How the selected row is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header lines followed by the space-joined row
    #[default]
    Text,
    /// Pretty-printed JSON selection
    Json,
}

/// Options for a lookup run.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Spreadsheet holding the dataset
    pub dataset_path: PathBuf,

    /// Fixed time-to-row override (None = formula only)
    pub calibration: Option<Calibration>,

    /// Output rendering
    pub output_format: OutputFormat,

    /// Pre-supplied clock time answer, validated like a typed one
    pub time_answer: Option<String>,

    /// Pre-supplied AM/PM answer, validated like a typed one
    pub meridiem_answer: Option<String>,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            calibration: Some(Calibration::default()),
            output_format: OutputFormat::Text,
            time_answer: None,
            meridiem_answer: None,
        }
    }
}

impl LookupOptions {
    /// Create new lookup options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spreadsheet path.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Replace the calibration override.
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    /// Use the percentage formula for every time.
    pub fn without_calibration(mut self) -> Self {
        self.calibration = None;
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Answer the clock time question in advance.
    pub fn with_time_answer(mut self, answer: impl Into<String>) -> Self {
        self.time_answer = Some(answer.into());
        self
    }

    /// Answer the AM/PM question in advance.
    pub fn with_meridiem_answer(mut self, answer: impl Into<String>) -> Self {
        self.meridiem_answer = Some(answer.into());
        self
    }
}
