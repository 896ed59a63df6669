//! Clock time and AM/PM input types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// AM/PM designation of a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    /// The canonical uppercase token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(Error::InvalidMeridiem(s.to_string())),
        }
    }
}

/// A validated `HH:MM` clock time.
///
/// Keeps the text as typed, since calibration overrides match on it
/// literally (`05:59` and `5:59` are different inputs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTime {
    text: String,
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Parse `HH:MM` where both parts are ASCII digits, hours 0-23, minutes 0-59.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(text.to_string());

        let mut parts = text.split(':');
        let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let hours = parse_component(hours).ok_or_else(invalid)?;
        let minutes = parse_component(minutes).ok_or_else(invalid)?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(Self {
            text: text.to_string(),
            hours: hours as u8,
            minutes: minutes as u8,
        })
    }

    /// The text as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Hour component as written (0-23).
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minute component (0-59).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A clock time together with its AM/PM designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInput {
    pub time: ClockTime,
    pub meridiem: Meridiem,
}

impl TimeInput {
    /// Combine an already validated time and meridiem.
    pub fn new(time: ClockTime, meridiem: Meridiem) -> Self {
        Self { time, meridiem }
    }

    /// Validate both parts from text.
    ///
    /// # Example
    ///
    /// ```
    /// use birthtime::{Meridiem, TimeInput};
    ///
    /// let input = TimeInput::parse("06:00", "pm")?;
    /// assert_eq!(input.meridiem, Meridiem::Pm);
    /// assert_eq!(input.hours_24(), 18);
    /// # Ok::<(), birthtime::Error>(())
    /// ```
    pub fn parse(time: &str, meridiem: &str) -> Result<Self> {
        Ok(Self::new(ClockTime::parse(time)?, meridiem.parse()?))
    }

    /// Hour on a 24-hour clock.
    ///
    /// PM adds 12 unless the hour is 12; `12 AM` is hour 0. Hours above 12
    /// are not rejected, so `13:00 PM` yields 25.
    pub fn hours_24(&self) -> u32 {
        let hours = u32::from(self.time.hours());
        match self.meridiem {
            Meridiem::Pm if hours != 12 => hours + 12,
            Meridiem::Am if hours == 12 => 0,
            _ => hours,
        }
    }
}

impl fmt::Display for TimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.meridiem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        let t = ClockTime::parse("05:59").unwrap();
        assert_eq!((t.hours(), t.minutes()), (5, 59));
        assert_eq!(t.as_str(), "05:59");

        let t = ClockTime::parse("23:00").unwrap();
        assert_eq!(t.hours(), 23);

        let t = ClockTime::parse("0:0").unwrap();
        assert_eq!((t.hours(), t.minutes()), (0, 0));
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        for text in ["", "12", "12:00:00", "12:", ":30", "ab:cd", "12-30", " 12:30", "12:30 "] {
            assert!(
                matches!(ClockTime::parse(text), Err(Error::InvalidTime(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_rejects_signs_and_ranges() {
        for text in ["+1:30", "-1:30", "24:00", "12:60", "99999999999:00"] {
            assert!(ClockTime::parse(text).is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_meridiem_case_insensitive() {
        assert_eq!("am".parse::<Meridiem>().unwrap(), Meridiem::Am);
        assert_eq!("Pm".parse::<Meridiem>().unwrap(), Meridiem::Pm);
        assert!("A.M.".parse::<Meridiem>().is_err());
        assert!(" PM".parse::<Meridiem>().is_err());
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn test_hours_24() {
        assert_eq!(TimeInput::parse("12:00", "AM").unwrap().hours_24(), 0);
        assert_eq!(TimeInput::parse("12:30", "PM").unwrap().hours_24(), 12);
        assert_eq!(TimeInput::parse("06:00", "PM").unwrap().hours_24(), 18);
        assert_eq!(TimeInput::parse("05:59", "AM").unwrap().hours_24(), 5);
        assert_eq!(TimeInput::parse("13:00", "PM").unwrap().hours_24(), 25);
    }

    #[test]
    fn test_display() {
        let input = TimeInput::parse("7:05", "am").unwrap();
        assert_eq!(input.to_string(), "7:05 AM");
    }
}
