//! Interactive time entry.
//!
//! Each question is asked again until the answer parses; there is no retry
//! limit. Input and output are any [`BufRead`] and [`Write`], so the same loop
//! serves a terminal, pre-supplied answers, or a test buffer.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{ClockTime, Meridiem, TimeInput};

/// Prompt for the clock time.
pub const TIME_PROMPT: &str = "Enter your Birth Time in HH:MM format: ";

/// Printed when the clock time is rejected.
pub const TIME_ERROR: &str =
    "Invalid time format. Please use HH:MM, where HH is 0-23 and MM is 0-59.";

/// Prompt for the AM/PM designation.
pub const MERIDIEM_PROMPT: &str = "Is this AM or PM? (Type 'AM' or 'PM'): ";

/// Printed when the AM/PM designation is rejected.
pub const MERIDIEM_ERROR: &str = "Please enter either 'AM' or 'PM'.";

/// Ask `prompt` until `parse` accepts a line, printing `error` after each rejection.
///
/// Only the line terminator is removed before parsing. Fails with
/// [`Error::InputClosed`] when the input ends, and with [`Error::Io`] when
/// reading or writing fails.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    error: &str,
    mut parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match parse(strip_line_ending(&line)) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, "rejected answer");
                writeln!(output, "{}", error)?;
            }
        }
    }
}

/// Use a pre-supplied answer if `parse` accepts it, otherwise prompt.
///
/// A rejected answer prints `error` once and falls through to
/// [`prompt_until`], the same as a rejected typed line.
pub fn answer_or_prompt<R, W, T, F>(
    answer: Option<&str>,
    input: &mut R,
    output: &mut W,
    prompt: &str,
    error: &str,
    mut parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T>,
{
    if let Some(answer) = answer {
        match parse(answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, answer, "rejected pre-supplied answer");
                writeln!(output, "{}", error)?;
            }
        }
    }
    prompt_until(input, output, prompt, error, parse)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Ask for the clock time, then the AM/PM designation.
///
/// # Example
///
/// ```
/// use birthtime::{prompt::read_time_input, Meridiem};
///
/// let mut input = "25:00\n06:30\npm\n".as_bytes();
/// let mut output = Vec::new();
/// let time = read_time_input(&mut input, &mut output)?;
///
/// assert_eq!(time.time.as_str(), "06:30");
/// assert_eq!(time.meridiem, Meridiem::Pm);
/// # Ok::<(), birthtime::Error>(())
/// ```
pub fn read_time_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<TimeInput> {
    read_time_input_with(None, None, input, output)
}

/// Like [`read_time_input`], but each question is skipped when its
/// pre-supplied answer is valid.
///
/// ```
/// use birthtime::{prompt::read_time_input_with, Meridiem};
///
/// let mut input = "".as_bytes();
/// let mut output = Vec::new();
/// let time = read_time_input_with(Some("05:59"), Some("PM"), &mut input, &mut output)?;
///
/// assert_eq!(time.meridiem, Meridiem::Pm);
/// assert!(output.is_empty());
/// # Ok::<(), birthtime::Error>(())
/// ```
pub fn read_time_input_with<R: BufRead, W: Write>(
    time: Option<&str>,
    meridiem: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<TimeInput> {
    let time = answer_or_prompt(time, input, output, TIME_PROMPT, TIME_ERROR, ClockTime::parse)?;
    let meridiem = answer_or_prompt(meridiem, input, output, MERIDIEM_PROMPT, MERIDIEM_ERROR, |s| {
        s.parse::<Meridiem>()
    })?;
    Ok(TimeInput::new(time, meridiem))
}
