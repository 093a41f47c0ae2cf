//! Line-oriented output for one-shot CLI mode.

use crossterm::style::Stylize;

use crate::tui::style;

/// Injectable output interface used by one-shot orchestration.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink so they never touch stderr.
pub trait RenderSink {
    /// Render a titled section line.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render a plain line to stdout.
    fn line(&self, text: &str);
}

/// Terminal renderer writing status to stderr and listings to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                style::GLYPH_SECTION_BULLET.with(style::COLOR_CLI_SECTION_BULLET),
                title.with(style::COLOR_CLI_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                style::INDENT_1,
                format!("{key}:").with(style::COLOR_CLI_FIELD_KEY),
                value.with(style::COLOR_CLI_FIELD_VALUE),
            );
        } else {
            eprintln!("{}{key}: {value}", style::INDENT_1);
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                style::LABEL_WARNING.with(style::COLOR_CLI_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", style::LABEL_WARNING);
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                style::LABEL_ERROR.with(style::COLOR_CLI_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", style::LABEL_ERROR);
        }
    }

    fn line(&self, text: &str) {
        println!("{text}");
    }
}
