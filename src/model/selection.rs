//! The row picked for a time.

use serde::{Deserialize, Serialize};

use super::{Meridiem, Row, TimeInput};
use crate::mapper::RowSelection;

/// A dataset row chosen for a time, with how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Time text as entered
    pub time: String,

    /// AM/PM designation
    pub meridiem: Meridiem,

    /// Percentage of the 6 PM-anchored day
    pub percentage: f64,

    /// Index of the selected row
    pub row_index: usize,

    /// Whether a calibration override picked the row
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub calibrated: bool,

    /// Cell values of the selected row
    pub cells: Vec<String>,
}

impl Selection {
    /// Build a selection from the mapped row.
    pub fn new(input: &TimeInput, mapped: &RowSelection, row: &Row) -> Self {
        Self {
            time: input.time.as_str().to_string(),
            meridiem: input.meridiem,
            percentage: mapped.percentage,
            row_index: mapped.row,
            calibrated: mapped.calibrated,
            cells: row.cells.clone(),
        }
    }
}
