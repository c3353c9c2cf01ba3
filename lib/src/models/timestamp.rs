use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Epoch-millisecond timestamp as it appeared in the source.
///
/// The raw JSON number is kept so that export writes back exactly what was read,
/// whether the source used an integer or a fractional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(Number);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Self(Number::from(millis))
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        Self::from_millis(millis)
    }

    /// Whole milliseconds, or `None` when the raw value cannot be read as one
    pub fn as_millis(&self) -> Option<i64> {
        if let Some(ms) = self.0.as_i64() {
            return Some(ms);
        }
        match self.0.as_f64() {
            Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Some(f.trunc() as i64),
            _ => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
