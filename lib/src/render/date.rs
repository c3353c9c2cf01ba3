use crate::models::Timestamp;
use chrono::DateTime;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display form of a timestamp.
///
/// Values that cannot be turned into a calendar date are kept raw and shown
/// with a marker instead of failing the render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLabel {
    Formatted(String),
    Invalid(String),
}

impl DateLabel {
    pub fn from_timestamp(timestamp: &Timestamp) -> Self {
        match timestamp
            .as_millis()
            .and_then(DateTime::from_timestamp_millis)
        {
            Some(dt) => DateLabel::Formatted(dt.format(DATE_FORMAT).to_string()),
            None => {
                log::debug!("unrepresentable timestamp {}", timestamp);
                DateLabel::Invalid(timestamp.to_string())
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateLabel::Formatted(_))
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLabel::Formatted(s) => write!(f, "{}", s),
            DateLabel::Invalid(raw) => write!(f, "⚠ invalid date ({})", raw),
        }
    }
}
