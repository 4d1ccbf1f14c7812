use serde_json::Value;

use crate::error::RecordError;
use crate::models::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Group,
    Bulb,
}

impl RecordKind {
    /// Bulbs carry a light-control array; everything else is treated as a group.
    pub fn classify(record: &Value) -> Self {
        if record.get(keys::LIGHT_CONTROL).is_some() {
            RecordKind::Bulb
        } else {
            RecordKind::Group
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Group => "group",
            RecordKind::Bulb => "bulb",
        }
    }
}

pub(crate) fn field<'a>(record: &'a Value, key: &'static str) -> Result<&'a Value, RecordError> {
    record.get(key).ok_or(RecordError::MissingField(key))
}

/// Identifiers and names are printed as-is: strings without quotes, anything
/// else in its JSON form.
pub(crate) fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn is_on(value: &Value) -> bool {
    value.as_f64() == Some(1.0) || value.as_bool() == Some(true)
}

/// The first entry of a bulb's light-control array.
pub(crate) fn light_control(record: &Value) -> Result<&Value, RecordError> {
    field(record, keys::LIGHT_CONTROL)?
        .as_array()
        .and_then(|entries| entries.first())
        .filter(|entry| entry.is_object())
        .ok_or(RecordError::MissingField(keys::LIGHT_CONTROL))
}
