//! Blocking full-screen event loop.

use std::io::{self, Write};

use crossterm::{event, terminal};
use tracing::{debug, info};

use crate::editor::Editor;
use crate::tui::draw::draw_frame;
use crate::tui::terminal::{is_interactive_terminal, TerminalGuard};
use crate::tui::view::{Flow, ViewState};

/// Run the interactive editor until the user quits.
///
/// Redraws after every event and blocks on `event::read` in between. The
/// terminal is restored on every exit path, including errors.
pub fn run_interactive(editor: &mut Editor) -> io::Result<()> {
    if !is_interactive_terminal() {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "interactive mode needs a terminal; pass --colors, --font, or --opacity instead",
        ));
    }

    let _guard = TerminalGuard::acquire()?;
    info!(config = %editor.config_path().display(), "interactive session started");
    let mut out = io::stdout();
    let mut view = ViewState::new();
    loop {
        let (cols, rows) = terminal::size()?;
        draw_frame(&mut out, editor, &view, cols, rows)?;
        let ev = event::read()?;
        if view.handle_event(editor, ev) == Flow::Quit {
            break;
        }
    }
    out.flush()?;
    debug!("interactive session finished");
    Ok(())
}
