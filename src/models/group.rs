use serde_json::{json, Value};

use crate::error::RecordError;
use crate::models::brightness::Brightness;
use crate::models::keys;
use crate::models::record::{field, is_on, text};

/// Display state of a lighting group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatus {
    pub id: String,
    pub name: String,
    pub on: bool,
    pub brightness: Brightness,
}

impl GroupStatus {
    pub fn from_json(record: &Value) -> Result<Self, RecordError> {
        let on = is_on(field(record, keys::ON_OFF)?);
        let id = text(field(record, keys::INSTANCE_ID)?);
        let brightness = Brightness::from_json(field(record, keys::BRIGHTNESS)?, keys::BRIGHTNESS)?;
        let name = text(field(record, keys::NAME)?);
        Ok(Self {
            id,
            name,
            on,
            brightness,
        })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "kind": "group",
            "id": self.id,
            "name": self.name,
            "on": self.on,
            "brightness": self.brightness.raw(),
            "brightness_pct": (self.brightness.percent() * 10.0).round() / 10.0,
        })
    }
}
