//! Interactive view state and the single event handler that drives it.
//!
//! Each terminal event is matched once here and turned into a direct call on
//! [`Editor`]. Failures are kept as a transient status message instead of
//! being dropped, and the next key press clears it.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::editor::{Editor, PresetSource, OPACITY_STEP};
use crate::error::EditError;

/// Which list currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Colors,
    Fonts,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Self::Colors => Self::Fonts,
            Self::Fonts => Self::Colors,
        }
    }
}

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-shot message shown under the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Cursor positions, focus, and the status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub focus: Focus,
    pub color_index: usize,
    pub font_index: usize,
    pub status: Option<Status>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Colors,
            color_index: 0,
            font_index: 0,
            status: None,
        }
    }

    /// Handle one terminal event against the editor.
    pub fn handle_event(&mut self, editor: &mut Editor, event: Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(editor, key),
            // Resize needs no state change; the loop redraws every iteration.
            _ => Flow::Continue,
        }
    }

    fn handle_key(&mut self, editor: &mut Editor, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return Flow::Continue;
        }
        self.status = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit
            }
            KeyCode::Char('-') => self.step_opacity(editor, -OPACITY_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_opacity(editor, OPACITY_STEP),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(editor, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(editor, 1),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => self.focus = self.focus.toggled(),
            KeyCode::Enter | KeyCode::Char(' ') => self.apply_selected(editor),
            _ => {}
        }
        Flow::Continue
    }

    /// Name under the cursor in the given list, if the list is non-empty.
    pub fn selected_name<'a>(&self, editor: &'a Editor, focus: Focus) -> Option<&'a str> {
        match focus {
            Focus::Colors => editor.colors().names().nth(self.color_index),
            Focus::Fonts => editor.fonts().names().nth(self.font_index),
        }
    }

    fn move_selection(&mut self, editor: &Editor, delta: isize) {
        let (len, index) = match self.focus {
            Focus::Colors => (editor.colors().len(), &mut self.color_index),
            Focus::Fonts => (editor.fonts().len(), &mut self.font_index),
        };
        if len == 0 {
            return;
        }
        // Wraps at both ends.
        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn apply_selected(&mut self, editor: &mut Editor) {
        let Some(name) = self.selected_name(editor, self.focus).map(str::to_string) else {
            return;
        };
        let source = PresetSource::ByName(name.clone());
        let (label, result) = match self.focus {
            Focus::Colors => ("colors", editor.apply_colors(source)),
            Focus::Fonts => ("font", editor.apply_font(source)),
        };
        match result {
            Ok(()) => self.info(format!("applied {label} preset `{name}`")),
            Err(err) => self.fail(err),
        }
    }

    fn step_opacity(&mut self, editor: &mut Editor, delta: f64) {
        match editor.step_opacity(delta) {
            Ok(value) => self.info(format!("opacity {value:.2}")),
            Err(err) => self.fail(err),
        }
    }

    fn info(&mut self, text: String) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            text,
        });
    }

    fn fail(&mut self, err: EditError) {
        debug!(error = %err, "interactive action rejected");
        self.status = Some(Status {
            kind: StatusKind::Error,
            text: err.to_string(),
        });
    }
}
