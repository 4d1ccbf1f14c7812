use serde_json::Value;

use crate::models::keys;

/// Shown in place of a bulb color that is missing or unreadable.
pub const FALLBACK_COLOR: &str = "ffffff";

/// A hex color code (`rrggbb` or `rgb` shorthand), kept alongside the text it
/// was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    text: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Case-insensitive; spaces anywhere in the code are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text
            .trim()
            .chars()
            .filter(|c| *c != ' ')
            .collect::<String>()
            .to_lowercase();
        let digits = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits
        };

        let mut rgb = [0u8; 3];
        hex::decode_to_slice(&digits, &mut rgb).ok()?;
        Some(Self {
            text: text.to_string(),
            rgb,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.rgb;
        (r, g, b)
    }
}

/// Outcome of reading a bulb's color from its light-control entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorLookup {
    Found(HexColor),
    Fallback,
}

impl ColorLookup {
    /// Reads `5706` from a light-control entry. Numbers are read through their
    /// JSON text, so `123456` is a color. A missing key, or a value that is
    /// not a hex color, lands on `Fallback`.
    pub fn from_light_control(light: &Value) -> Self {
        let text = match light.get(keys::COLOR_HEX) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return ColorLookup::Fallback,
        };
        HexColor::parse(&text).map_or(ColorLookup::Fallback, ColorLookup::Found)
    }

    pub fn hex_text(&self) -> &str {
        match self {
            ColorLookup::Found(color) => color.text(),
            ColorLookup::Fallback => FALLBACK_COLOR,
        }
    }
}
