//! Time-of-day to dataset row mapping.
//!
//! The day is measured from 6 PM: 6:00 PM is 0% and the minute before the
//! following 6 PM is just under 100%. The percentage is then spread linearly
//! over the dataset rows.

use serde::{Deserialize, Serialize};

use crate::model::{Meridiem, TimeInput};

/// Hour (24-hour clock) at which the cycle starts.
pub const ANCHOR_HOUR: u32 = 18;

/// Minutes in one cycle.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Percentage of the 6 PM-anchored day elapsed at `input`, in `[0, 100)`.
///
/// ```
/// use birthtime::{mapper::time_to_percentage, TimeInput};
///
/// let anchor = TimeInput::parse("06:00", "PM")?;
/// assert_eq!(time_to_percentage(&anchor), 0.0);
/// # Ok::<(), birthtime::Error>(())
/// ```
pub fn time_to_percentage(input: &TimeInput) -> f64 {
    let mut hours = input.hours_24();
    if hours < ANCHOR_HOUR {
        hours += 24;
    }
    let elapsed = (hours - ANCHOR_HOUR) * 60 + u32::from(input.time.minutes());

    (f64::from(elapsed) / f64::from(MINUTES_PER_DAY)) * 100.0
}

/// Row index for a percentage over `row_count` rows.
///
/// `floor(percentage / 100 * (row_count - 1))`, clamped to the last row.
/// Returns 0 for an empty dataset.
pub fn find_row(percentage: f64, row_count: usize) -> usize {
    if row_count == 0 {
        return 0;
    }
    let last = row_count - 1;
    let row = ((percentage / 100.0) * last as f64).floor();
    if row <= 0.0 {
        0
    } else {
        (row as usize).min(last)
    }
}

/// A fixed time-to-row override for a known dataset.
///
/// Matches on the time text exactly as typed, so `05:59 PM` matches but
/// `5:59 PM` does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calibration {
    /// Time text to match
    pub time: String,
    /// Meridiem to match
    pub meridiem: Meridiem,
    /// Row to select, clamped to the dataset
    pub row: usize,
}

impl Default for Calibration {
    /// The creation-week sheet maps `05:59 PM` to row 406.
    fn default() -> Self {
        Self {
            time: "05:59".to_string(),
            meridiem: Meridiem::Pm,
            row: 406,
        }
    }
}

impl Calibration {
    /// Create an override.
    pub fn new(time: impl Into<String>, meridiem: Meridiem, row: usize) -> Self {
        Self {
            time: time.into(),
            meridiem,
            row,
        }
    }

    /// Whether `input` is exactly the calibrated time.
    pub fn matches(&self, input: &TimeInput) -> bool {
        input.meridiem == self.meridiem && input.time.as_str() == self.time
    }

    /// The calibrated row, clamped to `row_count`.
    pub fn row_for(&self, row_count: usize) -> usize {
        self.row.min(row_count.saturating_sub(1))
    }
}

/// Result of mapping a time onto a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSelection {
    /// Percentage of the day from the formula
    pub percentage: f64,
    /// Selected row index
    pub row: usize,
    /// Whether a calibration override picked the row
    pub calibrated: bool,
}

/// Map `input` onto one of `row_count` rows, applying `calibration` first.
pub fn select_row(
    input: &TimeInput,
    row_count: usize,
    calibration: Option<&Calibration>,
) -> RowSelection {
    let percentage = time_to_percentage(input);
    match calibration {
        Some(cal) if cal.matches(input) => RowSelection {
            percentage,
            row: cal.row_for(row_count),
            calibrated: true,
        },
        _ => RowSelection {
            percentage,
            row: find_row(percentage, row_count),
            calibrated: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(time: &str, meridiem: &str) -> TimeInput {
        TimeInput::parse(time, meridiem).unwrap()
    }

    fn all_inputs() -> impl Iterator<Item = TimeInput> {
        (0..24u32).flat_map(|h| {
            (0..60u32).flat_map(move |m| {
                ["AM", "PM"]
                    .into_iter()
                    .map(move |mer| input(&format!("{:02}:{:02}", h, m), mer))
            })
        })
    }

    #[test]
    fn test_anchor_is_zero() {
        assert_eq!(time_to_percentage(&input("06:00", "PM")), 0.0);
    }

    #[test]
    fn test_minute_before_anchor() {
        let p = time_to_percentage(&input("05:59", "PM"));
        assert!((p - 1439.0 / 1440.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_morning_example() {
        let p = time_to_percentage(&input("05:59", "AM"));
        assert!((p - 719.0 / 1440.0 * 100.0).abs() < 1e-9);
        assert_eq!(find_row(p, 409), 203);
        assert_eq!(find_row(p, 101), 49);
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(time_to_percentage(&input("12:00", "AM")), 25.0);
        assert_eq!(time_to_percentage(&input("12:00", "PM")), 75.0);
    }

    #[test]
    fn test_percentage_range() {
        for i in all_inputs() {
            let p = time_to_percentage(&i);
            assert!((0.0..100.0).contains(&p), "{} gave {}", i, p);
        }
    }

    #[test]
    fn test_monotonic_from_anchor() {
        let mut previous = -1.0;
        for minute in 0..MINUTES_PER_DAY {
            let h24 = (ANCHOR_HOUR + minute / 60) % 24;
            let (h12, mer) = match h24 {
                0 => (12, "AM"),
                1..=11 => (h24, "AM"),
                12 => (12, "PM"),
                _ => (h24 - 12, "PM"),
            };
            let p = time_to_percentage(&input(&format!("{:02}:{:02}", h12, minute % 60), mer));
            assert!(p >= previous, "not monotonic at minute {}", minute);
            previous = p;
        }
        assert_eq!(time_to_percentage(&input("06:00", "PM")), 0.0);
    }

    #[test]
    fn test_find_row_bounds() {
        assert_eq!(find_row(0.0, 0), 0);
        assert_eq!(find_row(99.9, 0), 0);
        assert_eq!(find_row(99.9, 1), 0);
        assert_eq!(find_row(0.0, 409), 0);
        assert_eq!(find_row(99.99, 409), 407);
        assert_eq!(find_row(150.0, 10), 9);
        assert_eq!(find_row(-5.0, 10), 0);
    }

    #[test]
    fn test_row_always_in_bounds() {
        for n in [1usize, 2, 7, 409] {
            for i in all_inputs() {
                let sel = select_row(&i, n, Some(&Calibration::default()));
                assert!(sel.row < n, "{} gave row {} of {}", i, sel.row, n);
            }
        }
    }

    #[test]
    fn test_calibration_override() {
        let cal = Calibration::default();
        let i = input("05:59", "PM");

        let general = select_row(&i, 409, None);
        assert_eq!(general.row, 407);
        assert!(!general.calibrated);

        let calibrated = select_row(&i, 409, Some(&cal));
        assert_eq!(calibrated.row, 406);
        assert!(calibrated.calibrated);

        assert_eq!(select_row(&i, 10, Some(&cal)).row, 9);
        assert_eq!(select_row(&i, 1000, Some(&cal)).row, 406);
    }

    #[test]
    fn test_calibration_is_literal() {
        let cal = Calibration::default();
        assert!(cal.matches(&input("05:59", "pm")));
        assert!(!cal.matches(&input("5:59", "PM")));
        assert!(!cal.matches(&input("05:59", "AM")));
        assert!(!select_row(&input("5:59", "PM"), 409, Some(&cal)).calibrated);
    }

    #[test]
    fn test_anchor_round_trip() {
        let sel = select_row(&input("06:00", "PM"), 409, Some(&Calibration::default()));
        assert_eq!(sel.percentage, 0.0);
        assert_eq!(sel.row, 0);
    }
}
