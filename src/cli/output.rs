//! Labelled shell output. Every line goes to stdout so scripts can capture it.

use std::fmt::Display;

use colored::{ColoredString, Colorize};

use crate::theme::parse_hex;

/// How a shell message is labelled and coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO: [i] ",
            Tone::Success => "SUCCESS: [✓] ",
            Tone::Warning => "WARNING: [!] ",
            Tone::Error => "ERROR: [x] ",
            Tone::Hint => "HINT: ",
            Tone::Section => "",
        }
    }

    fn style(self, text: String) -> ColoredString {
        match self {
            Tone::Info => text.normal(),
            Tone::Success => text.bright_green(),
            Tone::Warning => text.bright_yellow(),
            Tone::Error => text.bright_red(),
            Tone::Hint => text.dimmed(),
            Tone::Section => text.bold(),
        }
    }

    fn render(self, message: impl Display) -> String {
        let text = match self {
            Tone::Section => format!("=== {} ===", message.to_string().trim()),
            _ => format!("{}{}", self.tag(), message),
        };
        self.style(text).to_string()
    }
}

pub fn emit(tone: Tone, message: impl Display) {
    let rendered = tone.render(message);
    if tone == Tone::Section {
        println!();
    }
    println!("{rendered}");
}

pub fn info(message: impl Display) {
    emit(Tone::Info, message);
}

pub fn success(message: impl Display) {
    emit(Tone::Success, message);
}

pub fn warning(message: impl Display) {
    emit(Tone::Warning, message);
}

pub fn error(message: impl Display) {
    emit(Tone::Error, message);
}

pub fn hint(message: impl Display) {
    emit(Tone::Hint, message);
}

pub fn section(title: impl Display) {
    emit(Tone::Section, title);
}

/// Unlabelled line, used for list rows.
pub fn line(message: impl Display) {
    println!("{message}");
}

/// Colours `text` with a `#RRGGBB` palette entry; invalid colours leave it unstyled.
pub fn paint(text: impl Display, hex: &str) -> String {
    let text = text.to_string();
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_label_their_messages() {
        colored::control::set_override(false);
        assert_eq!(Tone::Info.render("hello"), "INFO: [i] hello");
        assert_eq!(Tone::Error.render("boom"), "ERROR: [x] boom");
        assert_eq!(Tone::Hint.render("try help"), "HINT: try help");
        assert_eq!(Tone::Section.render(" Goals "), "=== Goals ===");
    }

    #[test]
    fn paint_ignores_invalid_colours() {
        colored::control::set_override(false);
        assert_eq!(paint("text", "nope"), "text");
        assert_eq!(paint("text", "#8B5CF6"), "text");
    }
}
