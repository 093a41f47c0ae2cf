//! aed: an appearance editor for Alacritty's YAML configuration.
//!
//! The library loads `alacritty.yml` into an order-preserving [`Document`],
//! discovers color and font presets on disk, validates preset sections
//! against Alacritty's recognized keys, and persists each accepted change
//! immediately. The `aed` binary drives it either from CLI flags or from a
//! full-screen terminal view.
//!
//! # Quick start
//!
//! ```no_run
//! use aed::editor::{Editor, PresetSource};
//! use std::path::Path;
//!
//! let mut editor = Editor::open(
//!     Path::new("/home/me/.config/alacritty/alacritty.yml"),
//!     Path::new("/home/me/.config/alacritty/colors"),
//!     Path::new("/home/me/.config/alacritty/fonts"),
//! )?;
//! editor.apply_colors(PresetSource::ByName("gruvbox".into()))?;
//! editor.apply_opacity(0.9)?;
//! # Ok::<(), aed::error::EditError>(())
//! ```
//!
//! [`Document`]: document::Document

pub mod build_info;
pub mod catalog;
pub mod document;
pub mod editor;
pub mod error;
pub mod settings;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod validate;
