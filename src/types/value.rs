//! Scalar measurement values

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single stored measurement value.
///
/// `Absent` is a first-class state, distinct from zero: an operator who
/// never entered a correction offset must not be confused with one who
/// entered `0.0`. Downstream formulas treat `Absent` operands as
/// "result absent", never as a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
    Absent,
}

impl Value {
    /// Numeric view of the value.
    ///
    /// Text is parsed leniently (comma decimal separators accepted, as
    /// pasted from Russian-locale spreadsheets). Unparseable text reads
    /// as `None` — unparseable and missing are the same condition.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) => None,
            Value::Text(s) => parse_number(s),
            Value::Date(_) | Value::Absent => None,
        }
    }

    /// Text view of the value. Numbers and dates do not coerce to text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            Value::Text(s) => parse_datetime(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Parse a spreadsheet-pasted number: trims whitespace, accepts a comma
/// as the decimal separator ("1,5" → 1.5).
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Timestamp formats accepted from pasted gauge data.
const DATETIME_FORMATS: [&str; 2] = ["%d.%m.%Y %H:%M:%S", "%d.%m.%Y"];

/// Parse a timestamp in either accepted format (date-with-time first,
/// then date-only at midnight). Returns `None` for anything else.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in DATETIME_FORMATS {
        if format.contains("%H") {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(dt);
            }
        } else if let Ok(d) = chrono::NaiveDate::parse_from_str(trimmed, format) {
            return Some(d.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}
