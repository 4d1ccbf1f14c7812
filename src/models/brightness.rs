use std::fmt;

use serde_json::{Number, Value};

use crate::error::RecordError;

/// Divisor taking the gateway's 0-255 scale to an approximate percentage.
const RAW_PER_PERCENT: f64 = 2.55;

/// Raw brightness as reported by the gateway. The JSON number is kept as-is
/// so integer levels are written back out as integers.
#[derive(Debug, Clone, PartialEq)]
pub struct Brightness {
    raw: Number,
    level: f64,
}

impl Brightness {
    pub fn from_json(value: &Value, key: &'static str) -> Result<Self, RecordError> {
        match value {
            Value::Number(raw) => {
                let level = raw.as_f64().ok_or(RecordError::InvalidField(key))?;
                Ok(Self {
                    raw: raw.clone(),
                    level,
                })
            }
            _ => Err(RecordError::InvalidField(key)),
        }
    }

    pub fn raw(&self) -> &Number {
        &self.raw
    }

    pub fn percent(&self) -> f64 {
        self.level / RAW_PER_PERCENT
    }
}

/// Formats as a one-decimal percentage, e.g. `49.8%`.
impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}
