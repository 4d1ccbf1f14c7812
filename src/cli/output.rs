use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::bulb::BulbStatus;
use crate::models::group::GroupStatus;

#[derive(Tabled)]
pub struct StatusRow {
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "BRIGHTNESS")]
    brightness: String,
    #[tabled(rename = "COLOR")]
    color: String,
}

impl From<&GroupStatus> for StatusRow {
    fn from(group: &GroupStatus) -> Self {
        Self {
            kind: "group".to_string(),
            id: group.id.clone(),
            name: group.name.clone(),
            state: on_off(group.on).to_string(),
            brightness: group.brightness.to_string(),
            color: String::new(),
        }
    }
}

impl From<&BulbStatus> for StatusRow {
    fn from(bulb: &BulbStatus) -> Self {
        Self {
            kind: "bulb".to_string(),
            id: bulb.id.clone(),
            name: bulb.name.clone(),
            state: on_off(bulb.on).to_string(),
            brightness: bulb.brightness.to_string(),
            color: bulb.color.hex_text().to_string(),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

pub fn print_json<W: Write>(out: &mut W, value: &serde_json::Value) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    )
}

pub fn print_table<W: Write>(out: &mut W, rows: &[StatusRow]) -> std::io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No results.");
    }
    let table = Table::new(rows).with(Style::rounded()).to_string();
    writeln!(out, "{}", table)
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}
