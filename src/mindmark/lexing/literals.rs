//! Literal conversion
//!
//!     Turns the matched text of numeric, percentage and calendar categories into token
//!     payloads. The patterns have already guaranteed the shape of the text, so conversion
//!     cannot fail: digit runs are folded directly, and numbers go through `str::parse`.

use crate::mindmark::ast::{CalendarDate, CalendarDateTime, TokenKind};

/// Fold an ASCII digit run into a value. Callers only pass runs of at most four digits.
fn digits(text: &str) -> u32 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| *c != '_').collect()
}

fn parse_float(cleaned: &str) -> f64 {
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// INTEGER unless the text has a decimal point or an exponent marker.
/// Integers too large for `i64` fall back to FLOAT.
pub fn number(text: &str) -> TokenKind {
    let cleaned = strip_separators(text);
    let is_float = cleaned.contains(|c| matches!(c, '.' | 'e' | 'E'));
    if !is_float {
        if let Ok(value) = cleaned.parse::<i64>() {
            return TokenKind::Integer { value };
        }
    }
    TokenKind::Float {
        value: parse_float(&cleaned),
    }
}

/// `12.5%` holds 0.125; a bare `%` holds 0
pub fn percentage(text: &str) -> TokenKind {
    let numeric = strip_separators(text.trim_end_matches('%'));
    let value = if numeric.is_empty() {
        0.0
    } else {
        parse_float(&numeric) / 100.0
    };
    TokenKind::Percentage { value }
}

fn calendar_date(text: &str) -> CalendarDate {
    let mut parts = text.splitn(3, '-').map(digits);
    CalendarDate::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

pub fn date(text: &str) -> TokenKind {
    TokenKind::Date {
        value: calendar_date(text),
    }
}

/// `YYYY-M-D H:M`, optionally followed by `:S` and `.mmm`. A fraction shorter than
/// three digits is read as a decimal fraction, so `.5` is 500 milliseconds.
pub fn datetime(text: &str) -> TokenKind {
    let (date_part, time_part) = text.split_once(' ').unwrap_or((text, ""));
    let mut fields = time_part.splitn(3, ':');
    let hour = fields.next().map(digits).unwrap_or_default();
    let minute = fields.next().map(digits).unwrap_or_default();

    let mut value = CalendarDateTime::new(calendar_date(date_part), hour, minute);
    if let Some(seconds) = fields.next() {
        let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
        value = value.with_second(digits(whole));
        if !fraction.is_empty() {
            let scale = 10u32.pow(3u32.saturating_sub(fraction.len() as u32));
            value = value.with_millisecond(digits(fraction) * scale);
        }
    }
    TokenKind::DateTime { value }
}
