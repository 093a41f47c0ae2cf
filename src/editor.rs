//! The active configuration plus the operations that change it.
//!
//! [`Editor`] is the single context object for one process: it owns the
//! loaded Alacritty document, the path it came from, and both preset
//! catalogs. Every successful mutation is written back immediately; a failed
//! one leaves the in-memory document untouched.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::document::{Document, BOLD_BRIGHT_KEY};
use crate::error::{CatalogKind, EditError, Section};
use crate::validate::{validate_colors, validate_fonts, validate_opacity};

/// Opacity shown when the document does not set `window.opacity`.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Increment used by the interactive `-`/`+` keys.
pub const OPACITY_STEP: f64 = 0.01;

/// Where a color or font update comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetSource {
    /// A preset name looked up in the matching catalog.
    ByName(String),
    /// An already-parsed partial document.
    Inline(Document),
}

/// Loaded configuration, its on-disk location, and the preset catalogs.
#[derive(Debug, Clone)]
pub struct Editor {
    config_path: PathBuf,
    document: Document,
    colors: Catalog,
    fonts: Catalog,
}

impl Editor {
    /// Load the configuration at `config_path` and scan both preset directories.
    pub fn open(config_path: &Path, colors_dir: &Path, fonts_dir: &Path) -> Result<Self, EditError> {
        let document = Document::load(config_path)?;
        let colors = Catalog::scan(CatalogKind::Colors, colors_dir)?;
        let fonts = Catalog::scan(CatalogKind::Fonts, fonts_dir)?;
        Ok(Self::new(config_path.to_path_buf(), document, colors, fonts))
    }

    /// Assemble an editor from parts that are already loaded.
    pub fn new(config_path: PathBuf, document: Document, colors: Catalog, fonts: Catalog) -> Self {
        Self {
            config_path,
            document,
            colors,
            fonts,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn colors(&self) -> &Catalog {
        &self.colors
    }

    pub fn fonts(&self) -> &Catalog {
        &self.fonts
    }

    /// Current `window.opacity`, defaulting to fully opaque.
    pub fn opacity(&self) -> f64 {
        self.document.opacity().unwrap_or(DEFAULT_OPACITY)
    }

    /// Replace the `colors` section with the one from `source`.
    pub fn apply_colors(&mut self, source: PresetSource) -> Result<(), EditError> {
        let preset = self.resolve(CatalogKind::Colors, source)?;
        validate_colors(&preset)?;

        let mut next = self.document.clone();
        next.set(Section::Colors.key(), section_value(&preset, Section::Colors));
        self.commit(next)?;
        info!(path = %self.config_path.display(), "applied colors");
        Ok(())
    }

    /// Replace the `font` section (and the bold-bright flag, when present).
    pub fn apply_font(&mut self, source: PresetSource) -> Result<(), EditError> {
        let preset = self.resolve(CatalogKind::Fonts, source)?;
        validate_fonts(&preset)?;

        let mut next = self.document.clone();
        next.set(Section::Font.key(), section_value(&preset, Section::Font));
        if let Some(flag) = preset.get(BOLD_BRIGHT_KEY) {
            next.set(BOLD_BRIGHT_KEY, flag.clone());
        }
        self.commit(next)?;
        info!(path = %self.config_path.display(), "applied font");
        Ok(())
    }

    /// Round to two decimals, validate, and write `window.opacity`.
    ///
    /// Returns the value that was stored.
    pub fn apply_opacity(&mut self, value: f64) -> Result<f64, EditError> {
        let rounded = round_opacity(value);
        if !validate_opacity(rounded) {
            return Err(EditError::Range(rounded));
        }

        let mut next = self.document.clone();
        next.set_opacity(rounded);
        self.commit(next)?;
        info!(path = %self.config_path.display(), opacity = rounded, "applied opacity");
        Ok(rounded)
    }

    /// Move the current opacity by `delta` (see [`Editor::apply_opacity`]).
    pub fn step_opacity(&mut self, delta: f64) -> Result<f64, EditError> {
        self.apply_opacity(self.opacity() + delta)
    }

    /// Load `path` and apply its `colors` section.
    pub fn apply_colors_file(&mut self, path: &Path) -> Result<(), EditError> {
        let preset = Document::load(path)?;
        self.apply_colors(PresetSource::Inline(preset))
    }

    /// Load `path` and apply its `font` section.
    pub fn apply_font_file(&mut self, path: &Path) -> Result<(), EditError> {
        let preset = Document::load(path)?;
        self.apply_font(PresetSource::Inline(preset))
    }

    fn resolve(&self, kind: CatalogKind, source: PresetSource) -> Result<Document, EditError> {
        match source {
            PresetSource::Inline(doc) => Ok(doc),
            PresetSource::ByName(name) => {
                let catalog = match kind {
                    CatalogKind::Colors => &self.colors,
                    CatalogKind::Fonts => &self.fonts,
                };
                let path = catalog.get(&name)?;
                debug!(preset = %name, path = %path.display(), "resolving {kind} preset");
                Document::load(path)
            }
        }
    }

    /// Persist `next`, then adopt it as the active document.
    fn commit(&mut self, next: Document) -> Result<(), EditError> {
        next.save(&self.config_path)?;
        self.document = next;
        Ok(())
    }
}

/// Round to the nearest hundredth, folding `-0.0` into `0.0`.
pub fn round_opacity(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn section_value(doc: &Document, section: Section) -> Value {
    doc.section(section).cloned().unwrap_or(Value::Null)
}
