//! Panel geometry for the full-screen view.
//!
//! ```text
//! header
//! +-----------------+-----------------+
//! |  colors list    |  fonts list     |
//! +-----------------+-----------------+
//! |  opacity gauge                    |
//! +-----------------------------------+
//! |  font sample                      |
//! +-----------------------------------+
//! |  color swatch                     |
//! +-----------------------------------+
//! status line
//! ```

use crate::tui::style;

/// A screen rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area inside a one-cell border.
    pub fn inner(self) -> Rect {
        Rect {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    pub fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Every panel of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub header: Rect,
    pub colors: Rect,
    pub fonts: Rect,
    pub opacity: Rect,
    pub font_sample: Rect,
    pub swatch: Rect,
    pub status: Rect,
}

/// Fixed rows used by everything except the two lists.
fn fixed_rows() -> u16 {
    style::OPACITY_BOX_ROWS + style::FONT_SAMPLE_BOX_ROWS + style::SWATCH_BOX_ROWS + style::STATUS_ROWS
}

/// Split a `cols` x `rows` screen into panels, or `None` when it is too small.
pub fn compute_layout(cols: u16, rows: u16) -> Option<ViewLayout> {
    // One row for the header; the frame takes FRAME_PERCENT of the rest.
    let body_rows = rows.checked_sub(1)?;
    let width = scale(cols, style::FRAME_PERCENT);
    let height = scale(body_rows, style::FRAME_PERCENT);
    let list_rows = height.checked_sub(fixed_rows())?;
    if width < style::MIN_FRAME_COLUMNS || list_rows < style::MIN_LIST_ROWS {
        return None;
    }

    let x = (cols - width) / 2;
    let y = 1 + (body_rows - height) / 2;
    let left_width = width / 2;

    let colors = Rect::new(x, y, left_width, list_rows);
    let fonts = Rect::new(x + left_width, y, width - left_width, list_rows);
    let opacity = Rect::new(x, colors.bottom(), width, style::OPACITY_BOX_ROWS);
    let font_sample = Rect::new(x, opacity.bottom(), width, style::FONT_SAMPLE_BOX_ROWS);
    let swatch = Rect::new(x, font_sample.bottom(), width, style::SWATCH_BOX_ROWS);
    let status = Rect::new(x, swatch.bottom(), width, style::STATUS_ROWS);

    Some(ViewLayout {
        header: Rect::new(0, 0, cols, 1),
        colors,
        fonts,
        opacity,
        font_sample,
        swatch,
        status,
    })
}

fn scale(value: u16, percent: u16) -> u16 {
    ((u32::from(value) * u32::from(percent)) / 100) as u16
}
