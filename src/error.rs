//! Unified error type for document, catalog, and editor operations.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which configuration section a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Colors,
    Font,
}

impl Section {
    /// Top-level document key for this section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Font => "font",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a partial document was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A key under the section is not a recognized Alacritty option.
    UnknownKey { section: Section, key: String },
    /// The partial document has no such section.
    MissingSection(Section),
    /// The section exists but is not a mapping.
    NotAMapping(Section),
}

impl ValidationError {
    /// The offending key, when the failure is about a specific key.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownKey { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { section, key } => {
                let kind = match section {
                    Section::Colors => "color",
                    Section::Font => "font",
                };
                write!(f, "`{key}` is not an acceptable Alacritty {kind} option")
            }
            Self::MissingSection(section) => write!(f, "document has no `{section}` section"),
            Self::NotAMapping(section) => write!(f, "`{section}` section is not a mapping"),
        }
    }
}

/// Which preset catalog a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Colors,
    Fonts,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colors => f.write_str("color"),
            Self::Fonts => f.write_str("font"),
        }
    }
}

/// Top-level error type for aed operations.
#[derive(Debug)]
pub enum EditError {
    /// A document file could not be read or written.
    Io { path: PathBuf, source: std::io::Error },
    /// A document file is not valid YAML or not a mapping at the top level.
    Parse { path: PathBuf, message: String },
    /// A partial document contains an unrecognized key.
    Validation(ValidationError),
    /// Opacity outside `[0.0, 1.0]`.
    Range(f64),
    /// A preset name is absent from its catalog.
    Lookup { catalog: CatalogKind, name: String },
    /// Editor settings could not be resolved.
    Settings(String),
}

impl EditError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
            Self::Parse { path, message } => write!(f, "parse: {}: {message}", path.display()),
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Range(value) => write!(f, "range: opacity {value} is not within [0.0, 1.0]"),
            Self::Lookup { catalog, name } => write!(f, "lookup: no {catalog} preset named `{name}`"),
            Self::Settings(msg) => write!(f, "settings: {msg}"),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ValidationError> for EditError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
