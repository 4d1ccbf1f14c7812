use serde_json::{json, Value};

use crate::error::RecordError;
use crate::models::brightness::Brightness;
use crate::models::color::ColorLookup;
use crate::models::keys;
use crate::models::record::{field, is_on, light_control, text};

/// Display state of a single bulb, taken from its first light-control entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BulbStatus {
    pub id: String,
    pub name: String,
    pub on: bool,
    pub brightness: Brightness,
    pub color: ColorLookup,
}

impl BulbStatus {
    pub fn from_json(record: &Value) -> Result<Self, RecordError> {
        let id = text(field(record, keys::INSTANCE_ID)?);
        let name = text(field(record, keys::NAME)?);
        let light = light_control(record)?;
        let on = is_on(field(light, keys::ON_OFF)?);
        let brightness = Brightness::from_json(field(light, keys::BRIGHTNESS)?, keys::BRIGHTNESS)?;
        Ok(Self {
            id,
            name,
            on,
            brightness,
            color: ColorLookup::from_light_control(light),
        })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "kind": "bulb",
            "id": self.id,
            "name": self.name,
            "on": self.on,
            "brightness": self.brightness.raw(),
            "brightness_pct": (self.brightness.percent() * 10.0).round() / 10.0,
            "color": self.color.hex_text(),
        })
    }
}
