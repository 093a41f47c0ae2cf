//! Preset catalogs built by scanning a directory of YAML documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CatalogKind, EditError};

/// File extensions recognized as preset documents.
pub const PRESET_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Name → absolute path index of preset documents in one directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    entries: BTreeMap<String, PathBuf>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn empty(kind: CatalogKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Scan `dir` for preset documents.
    ///
    /// Files are visited in filename order; a later file with the same stem
    /// replaces an earlier one. A missing directory yields an empty catalog.
    pub fn scan(kind: CatalogKind, dir: &Path) -> Result<Self, EditError> {
        let mut catalog = Self::empty(kind);
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "{kind} preset directory does not exist");
                return Ok(catalog);
            }
            Err(e) => return Err(EditError::io(dir, e)),
        };

        let base = absolute_dir(dir);
        let mut files = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| EditError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() && has_preset_extension(&path) {
                files.push(entry.file_name());
            }
        }
        files.sort();

        for file_name in files {
            let path = base.join(&file_name);
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            catalog.entries.insert(stem, path);
        }
        debug!(dir = %dir.display(), count = catalog.len(), "scanned {kind} presets");
        Ok(catalog)
    }

    /// Resolve a preset name to its file path.
    pub fn get(&self, name: &str) -> Result<&Path, EditError> {
        self.entries
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| EditError::Lookup {
                catalog: self.kind,
                name: name.to_string(),
            })
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn has_preset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PRESET_EXTENSIONS.contains(&ext))
}

fn absolute_dir(dir: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(dir) {
        return canonical;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}
