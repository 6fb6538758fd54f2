//! Calendar values carried by DATE and DATETIME tokens
//!
//!     The notation does not type-check literals, so these are the components exactly as
//!     written. `2024-02-31` is a perfectly good DATE as far as the lexer is concerned.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date with a time of day; seconds and milliseconds are optional in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDateTime {
    pub date: CalendarDate,
    pub hour: u32,
    pub minute: u32,
    pub second: Option<u32>,
    pub millisecond: Option<u32>,
}

impl CalendarDateTime {
    pub fn new(date: CalendarDate, hour: u32, minute: u32) -> Self {
        Self {
            date,
            hour,
            minute,
            second: None,
            millisecond: None,
        }
    }

    pub fn with_second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    pub fn with_millisecond(mut self, millisecond: u32) -> Self {
        self.millisecond = Some(millisecond);
        self
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)?;
        if let Some(second) = self.second {
            write!(f, ":{:02}", second)?;
            if let Some(ms) = self.millisecond {
                write!(f, ".{:03}", ms)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_iso_like() {
        let date = CalendarDate::new(2024, 3, 7);
        assert_eq!(date.to_string(), "2024-03-07");

        let short = CalendarDateTime::new(date, 9, 5);
        assert_eq!(short.to_string(), "2024-03-07T09:05");

        let full = short.with_second(30).with_millisecond(7);
        assert_eq!(full.to_string(), "2024-03-07T09:05:30.007");
    }
}
