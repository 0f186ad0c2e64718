//! Pattern detection for raw cell text

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Detected shape of a single raw cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Calendar date (YYYY-MM-DD or DD/MM/YYYY)
    Date,
    /// Date with a time component (YYYY-MM-DD[T ]HH:MM[:SS[.fff]][offset])
    DateTime,
    /// The literals `true` / `false`
    Boolean,
    /// A finite decimal number
    Number,
    /// Anything else
    Text,
    /// Empty or whitespace only
    Blank,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Date => write!(f, "date"),
            Pattern::DateTime => write!(f, "date-time"),
            Pattern::Boolean => write!(f, "boolean"),
            Pattern::Number => write!(f, "number"),
            Pattern::Text => write!(f, "text"),
            Pattern::Blank => write!(f, "blank"),
        }
    }
}

static ISO_DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DMY_DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Whether the text is a calendar date in one of the accepted layouts
pub fn is_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value) || DMY_DATE_REGEX.is_match(value)
}

/// Whether the text is a date with a time component
pub fn is_datetime(value: &str) -> bool {
    DATETIME_REGEX.is_match(value)
}

/// Parse a numeric string
///
/// Surrounding whitespace is ignored; the result must be finite, so `NaN` and
/// `inf` are not numbers.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a date or date-time string into a naive timestamp
///
/// Offsets are normalised to UTC; plain dates land on midnight.
pub fn parse_temporal(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Detect the pattern of a raw text cell
///
/// Checks run from most to least specific.
pub fn detect_pattern(value: &str) -> Pattern {
    let value = value.trim();
    if value.is_empty() {
        return Pattern::Blank;
    }

    if is_date(value) {
        return Pattern::Date;
    }

    if is_datetime(value) {
        return Pattern::DateTime;
    }

    if value == "true" || value == "false" {
        return Pattern::Boolean;
    }

    if parse_number(value).is_some() {
        return Pattern::Number;
    }

    Pattern::Text
}
