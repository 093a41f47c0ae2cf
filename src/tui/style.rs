//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak titles, glyphs, colors, panel sizes,
//! and the static preview content.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Titles / labels
// ---------------------------------------------------------------------------

pub const TITLE_HEADER: &str = "ALACRITTY EDITOR";
pub const TITLE_COLORS: &str = "[ COLORS ]";
pub const TITLE_FONTS: &str = "[ FONTS ]";
pub const TITLE_OPACITY: &str = "[ Opacity ]";
pub const HINT_KEYS: &str = "↑/↓ move  Tab switch  Enter apply  -/+ opacity  q quit";
pub const LABEL_EMPTY_CATALOG: &str = "(no presets)";
pub const LABEL_TOO_SMALL: &str = "terminal too small";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const INDENT_1: &str = "  ";
pub const GLYPH_SECTION_BULLET: &str = "•";

// ---------------------------------------------------------------------------
// Box drawing
// ---------------------------------------------------------------------------

pub const BOX_TOP: char = '═';
pub const BOX_TOP_LEFT: char = '╒';
pub const BOX_TOP_RIGHT: char = '╕';
pub const BOX_SIDE: char = '│';
pub const BOX_BOTTOM: char = '─';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';

pub const GLYPH_SELECTED: &str = "▶";
pub const GLYPH_UNSELECTED: &str = " ";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Share of the screen (percent) used by the main frame, per axis.
pub const FRAME_PERCENT: u16 = 90;
pub const OPACITY_BOX_ROWS: u16 = 3;
pub const FONT_SAMPLE_BOX_ROWS: u16 = 7;
pub const SWATCH_BOX_ROWS: u16 = 4;
pub const STATUS_ROWS: u16 = 1;
pub const MIN_LIST_ROWS: u16 = 3;
pub const MIN_FRAME_COLUMNS: u16 = 24;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_MENU_FG: Color = Color::White;
pub const COLOR_MENU_BG: Color = Color::Black;
pub const COLOR_HEADER_FG: Color = Color::Black;
pub const COLOR_HEADER_BG: Color = Color::DarkGreen;
pub const COLOR_GAUGE_FILLED_FG: Color = Color::Black;
pub const COLOR_GAUGE_FILLED_BG: Color = Color::White;
pub const COLOR_GAUGE_EMPTY_FG: Color = Color::White;
pub const COLOR_GAUGE_EMPTY_BG: Color = Color::DarkGrey;
pub const COLOR_STATUS_INFO: Color = Color::Green;
pub const COLOR_STATUS_ERROR: Color = Color::Red;
pub const COLOR_HINT: Color = Color::DarkGrey;

pub const COLOR_CLI_WARNING: Color = Color::Yellow;
pub const COLOR_CLI_ERROR: Color = Color::Red;
pub const COLOR_CLI_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_CLI_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_CLI_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_CLI_FIELD_VALUE: Color = Color::White;

// ---------------------------------------------------------------------------
// Static previews
// ---------------------------------------------------------------------------

/// Glyph-confusion sample lines, each paired with its foreground color.
pub const FONT_SAMPLE: [(&str, Color); 5] = [
    (
        "o0O s5S z2Z !|l1Iij {([|])}.,;:``''\"\" uvwvu",
        Color::DarkRed,
    ),
    (
        "a@#* vVuUwW <>;^=           -~\\/\\/ -- == __",
        Color::DarkGreen,
    ),
    (
        "the quick brown fox jumps over the lazy dog",
        Color::DarkYellow,
    ),
    (
        "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
        Color::DarkBlue,
    ),
    (
        "0123456789 &-+@ for (int i=0; i<=j; ++i) {}",
        Color::DarkMagenta,
    ),
];

/// ANSI palette indices shown by the swatch: normal (0-7) then bright (8-15).
pub const SWATCH_ROWS: [[u8; 8]; 2] = [[0, 1, 2, 3, 4, 5, 6, 7], [8, 9, 10, 11, 12, 13, 14, 15]];
