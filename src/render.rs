//! Status lines for groups and bulbs.
//!
//! Rendering is best effort: a record missing any required field produces no
//! line at all and the reason is only logged at debug level. A bulb whose
//! color is missing or unreadable still renders, with a plain `ffffff`.

use std::io::Write;

use serde_json::Value;

use crate::models::bulb::BulbStatus;
use crate::models::color::ColorLookup;
use crate::models::group::GroupStatus;
use crate::style::{Fg, Style, StyleProvider};

fn paint_state(on: bool, style: &dyn StyleProvider) -> String {
    if on {
        style.paint("on", &Style::Fg(Fg::Green))
    } else {
        style.paint("off", &Style::Fg(Fg::Red))
    }
}

fn paint_color_suffix(color: &ColorLookup, style: &dyn StyleProvider) -> String {
    match color {
        ColorLookup::Found(hex) => {
            style.paint(&format!(", #{}", hex.text()), &Style::Hex(hex.clone()))
        }
        ColorLookup::Fallback => format!(", {}", color.hex_text()),
    }
}

pub fn format_group(group: &GroupStatus, style: &dyn StyleProvider) -> String {
    format!(
        "{} {} - {}, {}",
        group.id,
        style.paint(&group.name, &Style::Bold),
        paint_state(group.on, style),
        group.brightness,
    )
}

pub fn format_bulb(bulb: &BulbStatus, style: &dyn StyleProvider) -> String {
    format!(
        " {} {} - {}, {}{}",
        bulb.id,
        style.paint(&bulb.name, &Style::Plain),
        paint_state(bulb.on, style),
        bulb.brightness,
        paint_color_suffix(&bulb.color, style),
    )
}

pub fn render_group(record: &Value, style: &dyn StyleProvider) -> Option<String> {
    match GroupStatus::from_json(record) {
        Ok(group) => Some(format_group(&group, style)),
        Err(err) => {
            tracing::debug!(kind = "group", reason = %err, "skipping record");
            None
        }
    }
}

pub fn render_bulb(record: &Value, style: &dyn StyleProvider) -> Option<String> {
    match BulbStatus::from_json(record) {
        Ok(bulb) => Some(format_bulb(&bulb, style)),
        Err(err) => {
            tracing::debug!(kind = "bulb", reason = %err, "skipping record");
            None
        }
    }
}

/// Write the group's line to `out`. Returns whether a line was written.
pub fn write_group<W: Write>(
    out: &mut W,
    record: &Value,
    style: &dyn StyleProvider,
) -> std::io::Result<bool> {
    write_line(out, render_group(record, style))
}

/// Write the bulb's line to `out`. Returns whether a line was written.
pub fn write_bulb<W: Write>(
    out: &mut W,
    record: &Value,
    style: &dyn StyleProvider,
) -> std::io::Result<bool> {
    write_line(out, render_bulb(record, style))
}

fn write_line<W: Write>(out: &mut W, line: Option<String>) -> std::io::Result<bool> {
    match line {
        Some(line) => {
            writeln!(out, "{}", line)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
