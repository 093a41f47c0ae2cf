//! One-shot CLI mode: apply flag-driven edits in order, or list presets.

use std::path::PathBuf;

use aed::editor::{Editor, PresetSource};
use aed::error::EditError;
use aed::tui::RenderSink;
use tracing::info;

/// One edit requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    ColorsFile(PathBuf),
    ColorPreset(String),
    FontFile(PathBuf),
    FontPreset(String),
    Opacity(f64),
}

/// Apply one action, returning the field label and value to report.
fn apply_action(editor: &mut Editor, action: &Action) -> Result<(&'static str, String), EditError> {
    match action {
        Action::ColorsFile(path) => {
            editor.apply_colors_file(path)?;
            Ok(("colors", path.display().to_string()))
        }
        Action::ColorPreset(name) => {
            editor.apply_colors(PresetSource::ByName(name.clone()))?;
            Ok(("colors", name.clone()))
        }
        Action::FontFile(path) => {
            editor.apply_font_file(path)?;
            Ok(("font", path.display().to_string()))
        }
        Action::FontPreset(name) => {
            editor.apply_font(PresetSource::ByName(name.clone()))?;
            Ok(("font", name.clone()))
        }
        Action::Opacity(value) => {
            let applied = editor.apply_opacity(*value)?;
            Ok(("opacity", format!("{applied:.2}")))
        }
    }
}

/// Apply `actions` in order and return the process exit code.
///
/// The first failure stops processing; edits already written stay written.
pub(crate) fn run_actions(renderer: &dyn RenderSink, editor: &mut Editor, actions: &[Action]) -> i32 {
    let mut header_shown = false;
    for action in actions {
        match apply_action(editor, action) {
            Ok((label, value)) => {
                info!(label, value = %value, "applied");
                if !header_shown {
                    renderer.section(&format!("updated {}", editor.config_path().display()));
                    header_shown = true;
                }
                renderer.field(label, &value);
            }
            Err(err) => {
                renderer.error(&err.to_string());
                return 1;
            }
        }
    }
    0
}

/// Print both catalogs and the current opacity to stdout.
pub(crate) fn render_listing(renderer: &dyn RenderSink, editor: &Editor) {
    for (title, catalog) in [("colors", editor.colors()), ("fonts", editor.fonts())] {
        renderer.line(&format!("{title}:"));
        for name in catalog.names() {
            renderer.line(&format!("  {name}"));
        }
    }
    renderer.line(&format!("opacity: {:.2}", editor.opacity()));
}
