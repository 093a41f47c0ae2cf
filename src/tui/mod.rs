//! Terminal UI: the full-screen editor view plus line output for CLI mode.

pub mod draw;
pub mod layout;
pub mod renderer;
pub mod session;
pub mod style;
pub mod terminal;
pub mod text;
pub mod view;

pub use renderer::{RenderSink, Renderer};
pub use session::run_interactive;
pub use view::{Flow, Focus, ViewState};
