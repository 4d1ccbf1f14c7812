//! Terminal decoration for rendered status text.
//!
//! Renderers never emit escape codes themselves; they ask a [`StyleProvider`]
//! to paint each fragment. [`AnsiStyle`] paints through `colored` and
//! [`PlainStyle`] returns text untouched, for pipes and tests.

use colored::Colorize;

use crate::config::ColorChoice;
use crate::models::color::HexColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fg {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Fg(Fg),
    Hex(HexColor),
}

pub trait StyleProvider: Send + Sync {
    fn paint(&self, text: &str, style: &Style) -> String;
}

/// ANSI escapes via `colored`. Whether escapes are actually emitted follows
/// `colored`'s own detection (`NO_COLOR`, `CLICOLOR_FORCE`, TTY) unless an
/// override has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl StyleProvider for AnsiStyle {
    fn paint(&self, text: &str, style: &Style) -> String {
        match style {
            Style::Plain => text.to_string(),
            Style::Bold => text.bold().to_string(),
            Style::Fg(Fg::Green) => text.green().to_string(),
            Style::Fg(Fg::Red) => text.red().to_string(),
            Style::Hex(color) => {
                let (r, g, b) = color.rgb();
                text.truecolor(r, g, b).to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl StyleProvider for PlainStyle {
    fn paint(&self, text: &str, _style: &Style) -> String {
        text.to_string()
    }
}

/// Pick a provider for the requested color behaviour. `Always` forces
/// `colored` on for the rest of the process.
pub fn provider_for(choice: ColorChoice) -> Box<dyn StyleProvider> {
    match choice {
        ColorChoice::Never => Box::new(PlainStyle),
        ColorChoice::Always => {
            colored::control::set_override(true);
            Box::new(AnsiStyle)
        }
        ColorChoice::Auto => Box::new(AnsiStyle),
    }
}
