//! Application entry orchestration for the aed CLI.

use aed::editor::Editor;
use aed::settings::resolve_settings;
use aed::tui::{run_interactive, RenderSink, Renderer};

use crate::app::oneshot::{render_listing, run_actions};
use crate::cli;

/// Resolve settings, open the editor, and dispatch to the requested mode.
///
/// Returns the process exit code.
pub(crate) fn run(args: cli::Args) -> i32 {
    let settings = match resolve_settings(&args.overrides()) {
        Ok(settings) => settings,
        Err(err) => {
            Renderer::new(!args.no_color).error(&err.to_string());
            return 1;
        }
    };
    let renderer = Renderer::new(settings.color);

    let mut editor = match Editor::open(
        &settings.config_path,
        &settings.colors_dir,
        &settings.fonts_dir,
    ) {
        Ok(editor) => editor,
        Err(err) => {
            renderer.error(&err.to_string());
            return 1;
        }
    };

    if args.list {
        if editor.colors().is_empty() {
            renderer.warn(&format!("no color presets in {}", settings.colors_dir.display()));
        }
        if editor.fonts().is_empty() {
            renderer.warn(&format!("no font presets in {}", settings.fonts_dir.display()));
        }
        render_listing(&renderer, &editor);
        return 0;
    }

    let actions = args.actions();
    if actions.is_empty() {
        return match run_interactive(&mut editor) {
            Ok(()) => 0,
            Err(err) => {
                renderer.error(&format!("terminal: {err}"));
                1
            }
        };
    }
    run_actions(&renderer, &mut editor, &actions)
}
