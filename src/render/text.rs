//! Plain text renderer and fixed messages.

use crate::error::Error;
use crate::model::Selection;

/// Lines printed above the selected row.
pub const HEADER_LINES: [&str; 2] = [
    "Estimation of your birth time association with the 7-Day Creation week time in Genesis:",
    "Order of line below: NIV English Translation | Verse | %Day | %Week | Hebrew Word",
];

/// Printed when the dataset has no rows.
pub const NO_DATA_MESSAGE: &str = "No data available in the file.";

/// Printed when the computed row is outside the dataset.
pub const INVALID_ROW_MESSAGE: &str = "Invalid row number calculated.";

/// Prefix of the message printed when the spreadsheet cannot be read.
pub const READ_ERROR_PREFIX: &str = "Error reading the Excel file:";

/// Message for a spreadsheet that could not be read.
pub fn read_error_message(err: &Error) -> String {
    format!("{} {}", READ_ERROR_PREFIX, err)
}

/// Header lines, then the row's cells joined by single spaces.
pub fn to_text(selection: &Selection) -> String {
    let mut out = HEADER_LINES.join("\n");
    out.push('\n');
    out.push_str(&selection.cells.join(" "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Meridiem;

    fn selection(cells: &[&str]) -> Selection {
        Selection {
            time: "06:00".to_string(),
            meridiem: Meridiem::Pm,
            percentage: 0.0,
            row_index: 0,
            calibrated: false,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_to_text() {
        let text = to_text(&selection(&["In the beginning", "Gen 1:1", "0%", "0%", "bereshit"]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER_LINES[0]);
        assert_eq!(lines[1], HEADER_LINES[1]);
        assert_eq!(lines[2], "In the beginning Gen 1:1 0% 0% bereshit");
    }

    #[test]
    fn test_to_text_empty_row() {
        let text = to_text(&selection(&[]));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_read_error_message() {
        let err = Error::MissingComponent("xl/sharedStrings.xml".to_string());
        assert_eq!(
            read_error_message(&err),
            "Error reading the Excel file: Missing component: xl/sharedStrings.xml"
        );
    }
}
