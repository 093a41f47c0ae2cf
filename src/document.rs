//! YAML document store for the Alacritty configuration and preset files.
//!
//! A [`Document`] keeps the whole top-level mapping, including keys aed does
//! not understand, so a load → modify → save cycle only touches the section
//! that was edited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::error::{EditError, Section};

/// Top-level key holding window settings.
pub const WINDOW_KEY: &str = "window";
/// Key under `window` holding the background opacity.
pub const OPACITY_KEY: &str = "opacity";
/// Optional boolean carried alongside font presets.
pub const BOLD_BRIGHT_KEY: &str = "draw_bold_text_with_bright_colors";

/// In-memory keyed tree of one YAML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML text. `origin` is only used to label errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, EditError> {
        let value: Value =
            serde_yaml_ng::from_str(text).map_err(|e| EditError::parse(origin, e.to_string()))?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            // An empty file deserializes to null.
            Value::Null => Ok(Self::new()),
            _ => Err(EditError::parse(origin, "top-level value is not a mapping")),
        }
    }

    /// Read and parse the document at `path`.
    pub fn load(path: &Path) -> Result<Self, EditError> {
        let text = fs::read_to_string(path).map_err(|e| EditError::io(path, e))?;
        let doc = Self::parse(&text, path)?;
        debug!(path = %path.display(), keys = doc.root.len(), "loaded document");
        Ok(doc)
    }

    /// Serialize the document to YAML text.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(&self.root)
    }

    /// Write the document to `path`, replacing its previous contents.
    ///
    /// The text lands in a sibling temp file first and is renamed over the
    /// target, carrying over the target's permissions. Symlinked targets are
    /// resolved so the link itself survives. When the directory refuses the
    /// temp file but the target already exists, the target is rewritten in
    /// place.
    pub fn save(&self, path: &Path) -> Result<(), EditError> {
        let target = resolve_save_target(path);
        let yaml = self.to_yaml().map_err(|e| {
            EditError::io(&target, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EditError::io(parent, e))?;
        }

        let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());
        let temp_path = temp_sibling(&target);
        match fs::write(&temp_path, yaml.as_bytes()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied && existing.is_some() => {
                debug!(path = %target.display(), "directory not writable, saving in place");
                fs::write(&target, yaml.as_bytes()).map_err(|e| EditError::io(&target, e))?;
                debug!(path = %target.display(), bytes = yaml.len(), "saved document");
                return Ok(());
            }
            Err(e) => return Err(EditError::io(&temp_path, e)),
        }

        if let Some(permissions) = existing {
            if let Err(e) = fs::set_permissions(&temp_path, permissions) {
                let _ = fs::remove_file(&temp_path);
                return Err(EditError::io(&temp_path, e));
            }
        }
        if let Err(e) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(EditError::io(&target, e));
        }
        debug!(path = %target.display(), bytes = yaml.len(), "saved document");
        Ok(())
    }

    /// Borrow the raw top-level mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Look up one top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Insert or replace one top-level value, keeping its position if present.
    pub fn set(&mut self, key: &str, value: Value) {
        self.root.insert(Value::String(key.to_string()), value);
    }

    /// Look up the `colors` or `font` section.
    pub fn section(&self, section: Section) -> Option<&Value> {
        self.get(section.key())
    }

    /// Current `window.opacity`, if present and numeric.
    pub fn opacity(&self) -> Option<f64> {
        self.get(WINDOW_KEY)?
            .as_mapping()?
            .get(OPACITY_KEY)?
            .as_f64()
    }

    /// Write `window.opacity`, creating the `window` mapping when needed.
    pub fn set_opacity(&mut self, opacity: f64) {
        let window_key = Value::String(WINDOW_KEY.to_string());
        if !matches!(self.root.get(&window_key), Some(Value::Mapping(_))) {
            self.root.insert(window_key.clone(), Value::Mapping(Mapping::new()));
        }
        if let Some(Value::Mapping(window)) = self.root.get_mut(&window_key) {
            window.insert(Value::String(OPACITY_KEY.to_string()), Value::from(opacity));
        }
    }

    /// The optional `draw_bold_text_with_bright_colors` flag.
    pub fn bold_bright_flag(&self) -> Option<bool> {
        self.get(BOLD_BRIGHT_KEY)?.as_bool()
    }
}

fn resolve_save_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    path.with_file_name(format!(".{name}.aed-tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    const SAMPLE: &str = "\
env:
  TERM: xterm-256color
window:
  opacity: 0.9
  padding:
    x: 4
    y: 4
font:
  size: 11.0
colors:
  primary:
    background: '#1d1f21'
draw_bold_text_with_bright_colors: true
";

    #[test]
    fn parse_reads_sections_and_opacity() {
        let doc = Document::parse(SAMPLE, Path::new("a.yml")).expect("parse");
        assert_eq!(doc.opacity(), Some(0.9));
        assert!(doc.section(Section::Colors).is_some());
        assert!(doc.section(Section::Font).is_some());
        assert_eq!(doc.bold_bright_flag(), Some(true));
    }

    #[test]
    fn parse_empty_text_is_empty_document() {
        let doc = Document::parse("", Path::new("empty.yml")).expect("parse");
        assert!(doc.root().is_empty());
        assert_eq!(doc.opacity(), None);
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let err = Document::parse("colors: [unclosed", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(err, EditError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn parse_rejects_non_mapping_root() {
        let err = Document::parse("- a\n- b\n", Path::new("list.yml")).unwrap_err();
        assert!(matches!(err, EditError::Parse { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TestTempDir::new("doc-missing");
        let err = Document::load(&tmp.child("nope.yml")).unwrap_err();
        assert!(matches!(err, EditError::Io { .. }), "got: {err}");
    }

    #[test]
    fn load_save_round_trip_preserves_unknown_keys() {
        let tmp = TestTempDir::new("doc-roundtrip");
        let path = tmp.write_text("alacritty.yml", SAMPLE);

        let original = Document::load(&path).expect("load");
        original.save(&path).expect("save");
        let reloaded = Document::load(&path).expect("reload");

        assert_eq!(original, reloaded);
        let env = reloaded.get("env").and_then(Value::as_mapping).expect("env");
        assert_eq!(
            env.get("TERM").and_then(Value::as_str),
            Some("xterm-256color")
        );
        let keys: Vec<_> = reloaded
            .root()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            keys,
            vec!["env", "window", "font", "colors", BOLD_BRIGHT_KEY]
        );
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let tmp = TestTempDir::new("doc-temp");
        let path = tmp.write_text("alacritty.yml", SAMPLE);
        Document::load(&path).expect("load").save(&path).expect("save");
        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .expect("read dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alacritty.yml".to_string()]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = TestTempDir::new("doc-nested");
        let path = tmp.child("nested/dir/alacritty.yml");
        let mut doc = Document::new();
        doc.set_opacity(0.5);
        doc.save(&path).expect("save");
        assert_eq!(Document::load(&path).expect("load").opacity(), Some(0.5));
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_keeps_the_link() {
        let tmp = TestTempDir::new("doc-symlink");
        let real = tmp.write_text("dotfiles/alacritty.yml", SAMPLE);
        let link = tmp.child("alacritty.yml");
        std::os::unix::fs::symlink(&real, &link).expect("symlink");

        let mut doc = Document::load(&link).expect("load");
        doc.set_opacity(0.42);
        doc.save(&link).expect("save");

        let meta = std::fs::symlink_metadata(&link).expect("meta");
        assert!(meta.file_type().is_symlink());
        assert_eq!(Document::load(&real).expect("load").opacity(), Some(0.42));
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TestTempDir::new("doc-mode");
        let path = tmp.write_text("alacritty.yml", SAMPLE);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).expect("chmod");

        let mut doc = Document::load(&path).expect("load");
        doc.set_opacity(0.5);
        doc.save(&path).expect("save");

        let mode = std::fs::metadata(&path).expect("meta").permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(Document::load(&path).expect("reload").opacity(), Some(0.5));
    }

    #[cfg(unix)]
    #[test]
    fn save_into_read_only_directory_rewrites_in_place() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TestTempDir::new("doc-readonly-dir");
        let path = tmp.write_text("locked/alacritty.yml", SAMPLE);
        let dir = tmp.child("locked");
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).expect("chmod dir");

        let mut doc = Document::load(&path).expect("load");
        doc.set_opacity(0.25);
        let result = doc.save(&path);
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).expect("restore dir");

        result.expect("save");
        assert_eq!(Document::load(&path).expect("reload").opacity(), Some(0.25));
        let names: Vec<_> = std::fs::read_dir(&dir)
            .expect("read dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alacritty.yml".to_string()]);
    }

    #[test]
    fn saved_text_is_to_yaml_output() {
        let tmp = TestTempDir::new("doc-to-yaml");
        let path = tmp.write_text("alacritty.yml", SAMPLE);
        let doc = Document::load(&path).expect("load");
        doc.save(&path).expect("save");
        assert_eq!(tmp.read_text("alacritty.yml"), doc.to_yaml().expect("yaml"));
    }

    #[test]
    fn set_opacity_creates_window_mapping() {
        let mut doc = Document::parse("window:\n", Path::new("w.yml")).expect("parse");
        assert_eq!(doc.opacity(), None);
        doc.set_opacity(0.75);
        assert_eq!(doc.opacity(), Some(0.75));
    }

    #[test]
    fn set_opacity_keeps_sibling_window_keys() {
        let mut doc = Document::parse(SAMPLE, Path::new("a.yml")).expect("parse");
        doc.set_opacity(0.3);
        let window = doc.get(WINDOW_KEY).and_then(Value::as_mapping).expect("window");
        assert!(window.get("padding").is_some());
        assert_eq!(doc.opacity(), Some(0.3));
    }

    #[test]
    fn integer_opacity_reads_as_float() {
        let doc = Document::parse("window:\n  opacity: 1\n", Path::new("i.yml")).expect("parse");
        assert_eq!(doc.opacity(), Some(1.0));
    }
}
