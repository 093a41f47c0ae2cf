//! Schema checks for partial documents and opacity values.
//!
//! Only the top-level keys of the `colors` and `font` sections are checked;
//! nested values are passed through to Alacritty untouched.

use serde_yaml_ng::Value;

use crate::document::Document;
use crate::error::{Section, ValidationError};

/// Recognized keys under `colors`.
pub const COLOR_KEYS: &[&str] = &[
    "primary",
    "normal",
    "bright",
    "cursor",
    "vi_mode_cursor",
    "search",
    "hints",
    "line_indicator",
    "footer_bar",
    "selection",
    "dim",
    "indexed_colors",
    "transparent_background_colors",
];

/// Recognized keys under `font`.
pub const FONT_KEYS: &[&str] = &[
    "normal",
    "bold",
    "italic",
    "bold_italic",
    "size",
    "offset",
    "glyph_offset",
    "use_thin_strokes",
    "builtin_box_drawing",
];

/// Check every key under `colors` against [`COLOR_KEYS`].
pub fn validate_colors(doc: &Document) -> Result<(), ValidationError> {
    validate_section(doc, Section::Colors, COLOR_KEYS)
}

/// Check every key under `font` against [`FONT_KEYS`].
pub fn validate_fonts(doc: &Document) -> Result<(), ValidationError> {
    validate_section(doc, Section::Font, FONT_KEYS)
}

/// Whether `opacity` lies in `[0.0, 1.0]`.
pub fn validate_opacity(opacity: f64) -> bool {
    (0.0..=1.0).contains(&opacity)
}

fn validate_section(
    doc: &Document,
    section: Section,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    let mapping = match doc.section(section) {
        Some(Value::Mapping(mapping)) => mapping,
        Some(_) => return Err(ValidationError::NotAMapping(section)),
        None => return Err(ValidationError::MissingSection(section)),
    };
    // Fail on the first offender in document order.
    for key in mapping.keys() {
        match key.as_str() {
            Some(name) if allowed.contains(&name) => {}
            _ => {
                return Err(ValidationError::UnknownKey {
                    section,
                    key: key_label(key),
                })
            }
        }
    }
    Ok(())
}

fn key_label(key: &Value) -> String {
    if let Some(s) = key.as_str() {
        return s.to_string();
    }
    serde_yaml_ng::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{key:?}"))
}
