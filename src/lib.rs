//! # birthtime
//!
//! Maps a birth time onto one row of the Genesis creation-week spreadsheet.
//!
//! The day is measured from 6 PM. A time's position in that day, as a
//! percentage, picks a row of the first worksheet of an `.xlsx` file, and the
//! row is printed below two fixed header lines.
//!
//! ## Quick Start
//!
//! ```no_run
//! use birthtime::{Lookup, LookupOptions};
//!
//! let lookup = Lookup::new(LookupOptions::new().with_dataset_path("birthtime3.xlsx"));
//! let stdin = std::io::stdin();
//! lookup.run(&mut stdin.lock(), &mut std::io::stdout())?;
//! # Ok::<(), birthtime::Error>(())
//! ```
//!
//! ## Pieces
//!
//! ```no_run
//! use birthtime::{mapper, Dataset, TimeInput};
//!
//! let dataset = Dataset::load("birthtime3.xlsx")?;
//! let time = TimeInput::parse("05:59", "AM")?;
//!
//! let percentage = mapper::time_to_percentage(&time);
//! let row = mapper::find_row(percentage, dataset.len());
//! println!("{:.2}% -> row {}", percentage, row);
//! # Ok::<(), birthtime::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod lookup;
pub mod mapper;
pub mod model;
pub mod options;
pub mod prompt;
pub mod render;
pub mod xlsx;

// Re-exports
pub use container::XlsxContainer;
pub use error::{Error, Result};
pub use lookup::{Lookup, LookupOutcome};
pub use mapper::{Calibration, RowSelection};
pub use model::{ClockTime, Dataset, Meridiem, Row, Selection, TimeInput};
pub use options::{LookupOptions, OutputFormat, DEFAULT_DATASET_PATH};

use std::path::Path;

/// Read the first worksheet of an `.xlsx` file.
///
/// # Example
///
/// ```no_run
/// let dataset = birthtime::load_dataset("birthtime3.xlsx")?;
/// println!("Rows: {}", dataset.len());
/// # Ok::<(), birthtime::Error>(())
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    Dataset::load(path)
}

/// Pick the row of `dataset` for a time, applying the default calibration.
///
/// Returns `None` for an empty dataset.
///
/// # Example
///
/// ```
/// use birthtime::{select, Dataset, Row, TimeInput};
///
/// let dataset: Dataset = (0..5).map(|i| Row::from_cells([i.to_string()])).collect();
/// let row = select(&dataset, &TimeInput::parse("06:00", "AM")?);
/// assert_eq!(row.map(Row::joined), Some("2".to_string()));
/// # Ok::<(), birthtime::Error>(())
/// ```
pub fn select<'a>(dataset: &'a Dataset, time: &TimeInput) -> Option<&'a Row> {
    if dataset.is_empty() {
        return None;
    }
    let mapped = mapper::select_row(time, dataset.len(), Some(&Calibration::default()));
    dataset.get(mapped.row)
}
