//! Frame drawing for the interactive view.
//!
//! Drawing is generic over `Write` so a frame can be rendered into a buffer
//! in tests; the session loop passes stdout.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, ContentStyle, PrintStyledContent, StyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::build_info;
use crate::catalog::Catalog;
use crate::editor::Editor;
use crate::tui::layout::{compute_layout, Rect};
use crate::tui::style;
use crate::tui::text::{center_offset, ellipsize, pad_to_width, visible_width};
use crate::tui::view::{Focus, StatusKind, ViewState};

/// Draw one complete frame for a `cols` x `rows` screen.
pub fn draw_frame<W: Write>(
    out: &mut W,
    editor: &Editor,
    view: &ViewState,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    let Some(layout) = compute_layout(cols, rows) else {
        put(out, 0, 0, &ellipsize(style::LABEL_TOO_SMALL, cols as usize), menu_style())?;
        return out.flush();
    };

    draw_header(out, layout.header)?;
    draw_list(
        out,
        layout.colors,
        style::TITLE_COLORS,
        editor.colors(),
        view.color_index,
        view.focus == Focus::Colors,
    )?;
    draw_list(
        out,
        layout.fonts,
        style::TITLE_FONTS,
        editor.fonts(),
        view.font_index,
        view.focus == Focus::Fonts,
    )?;
    draw_gauge(out, layout.opacity, editor.opacity())?;
    draw_font_sample(out, layout.font_sample)?;
    draw_swatch(out, layout.swatch)?;
    draw_status(out, layout.status, view)?;
    out.flush()
}

/// Split an inner gauge width into filled cells and the percentage label.
pub fn gauge_cells(width: u16, opacity: f64) -> (u16, String) {
    let fraction = opacity.clamp(0.0, 1.0);
    let filled = (f64::from(width) * fraction).round() as u16;
    (filled.min(width), format!("{:.0} %", fraction * 100.0))
}

/// First visible row so `selected` stays inside a window of `visible` rows.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(visible)
}

fn colored(fg: Option<Color>, bg: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: fg,
        background_color: Some(bg),
        ..ContentStyle::default()
    }
}

fn menu_style() -> ContentStyle {
    colored(Some(style::COLOR_MENU_FG), style::COLOR_MENU_BG)
}

fn put<W: Write>(out: &mut W, x: u16, y: u16, text: &str, content_style: ContentStyle) -> io::Result<()> {
    out.queue(MoveTo(x, y))?;
    out.queue(PrintStyledContent(StyledContent::new(content_style, text)))?;
    Ok(())
}

fn draw_header<W: Write>(out: &mut W, area: Rect) -> io::Result<()> {
    let width = area.width as usize;
    let header_style = colored(Some(style::COLOR_HEADER_FG), style::COLOR_HEADER_BG);
    let title = ellipsize(style::TITLE_HEADER, width);
    let mut line = " ".repeat(center_offset(&title, width));
    line.push_str(&title);
    let tag = build_info::header_tag();
    let line = pad_to_width(&line, width);
    put(out, area.x, area.y, &line, header_style)?;
    if visible_width(line.trim_end()) + visible_width(&tag) + 2 <= width {
        let x = area.x + (width - visible_width(&tag) - 1) as u16;
        put(out, x, area.y, &tag, header_style)?;
    }
    Ok(())
}

/// Border with a double top line and the title embedded in it.
fn draw_box<W: Write>(out: &mut W, area: Rect, title: &str) -> io::Result<()> {
    if area.width < 2 || area.height < 2 {
        return Ok(());
    }
    let inner_width = area.width as usize - 2;
    let title = ellipsize(title, inner_width);
    let lead = center_offset(&title, inner_width);
    let mut top = String::new();
    top.push(style::BOX_TOP_LEFT);
    top.extend(std::iter::repeat(style::BOX_TOP).take(lead));
    top.push_str(&title);
    top.extend(std::iter::repeat(style::BOX_TOP).take(inner_width - lead - visible_width(&title)));
    top.push(style::BOX_TOP_RIGHT);
    put(out, area.x, area.y, &top, menu_style())?;

    let side = style::BOX_SIDE.to_string();
    let blank = " ".repeat(inner_width);
    for row in 1..area.height - 1 {
        put(out, area.x, area.y + row, &side, menu_style())?;
        put(out, area.x + 1, area.y + row, &blank, menu_style())?;
        put(out, area.x + area.width - 1, area.y + row, &side, menu_style())?;
    }

    let mut bottom = String::new();
    bottom.push(style::BOX_BOTTOM_LEFT);
    bottom.extend(std::iter::repeat(style::BOX_BOTTOM).take(inner_width));
    bottom.push(style::BOX_BOTTOM_RIGHT);
    put(out, area.x, area.y + area.height - 1, &bottom, menu_style())
}

fn draw_list<W: Write>(
    out: &mut W,
    area: Rect,
    title: &str,
    catalog: &Catalog,
    selected: usize,
    focused: bool,
) -> io::Result<()> {
    draw_box(out, area, title)?;
    let inner = area.inner();
    if inner.width == 0 || inner.height == 0 {
        return Ok(());
    }
    let width = inner.width as usize;
    if catalog.is_empty() {
        let dim = colored(Some(style::COLOR_HINT), style::COLOR_MENU_BG);
        return put(out, inner.x, inner.y, &ellipsize(style::LABEL_EMPTY_CATALOG, width), dim);
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(selected, visible);
    for (row, (idx, name)) in catalog
        .names()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let active = idx == selected;
        let marker = if active {
            style::GLYPH_SELECTED
        } else {
            style::GLYPH_UNSELECTED
        };
        let text = pad_to_width(&format!("{marker} {name}"), width);
        let mut line_style = menu_style();
        if active && focused {
            line_style.attributes.set(Attribute::Reverse);
        }
        put(out, inner.x, inner.y + row as u16, &text, line_style)?;
    }
    Ok(())
}

fn draw_gauge<W: Write>(out: &mut W, area: Rect, opacity: f64) -> io::Result<()> {
    draw_box(out, area, style::TITLE_OPACITY)?;
    let inner = area.inner();
    if inner.width == 0 || inner.height == 0 {
        return Ok(());
    }
    let width = inner.width as usize;
    let (filled, label) = gauge_cells(inner.width, opacity);
    let label = ellipsize(&label, width);
    let lead = center_offset(&label, width);

    // The label is overlaid on the bar; each cell keeps its fill color.
    let bar: Vec<char> = {
        let mut cells = vec![' '; width];
        for (i, ch) in label.chars().enumerate() {
            cells[lead + i] = ch;
        }
        cells
    };
    let filled = filled as usize;
    let filled_text: String = bar[..filled].iter().collect();
    let empty_text: String = bar[filled..].iter().collect();
    let filled_style = colored(Some(style::COLOR_GAUGE_FILLED_FG), style::COLOR_GAUGE_FILLED_BG);
    let empty_style = colored(Some(style::COLOR_GAUGE_EMPTY_FG), style::COLOR_GAUGE_EMPTY_BG);
    if !filled_text.is_empty() {
        put(out, inner.x, inner.y, &filled_text, filled_style)?;
    }
    if !empty_text.is_empty() {
        put(out, inner.x + filled as u16, inner.y, &empty_text, empty_style)?;
    }
    Ok(())
}

fn draw_font_sample<W: Write>(out: &mut W, area: Rect) -> io::Result<()> {
    draw_box(out, area, "")?;
    let inner = area.inner();
    let width = inner.width as usize;
    for (row, (line, color)) in style::FONT_SAMPLE.iter().enumerate().take(inner.height as usize) {
        let text = ellipsize(line, width);
        let x = inner.x + center_offset(&text, width) as u16;
        let sample_style = colored(Some(*color), style::COLOR_MENU_BG);
        put(out, x, inner.y + row as u16, &text, sample_style)?;
    }
    Ok(())
}

fn draw_swatch<W: Write>(out: &mut W, area: Rect) -> io::Result<()> {
    draw_box(out, area, "")?;
    let inner = area.inner();
    let cell_width = (inner.width / 8) as usize;
    if cell_width == 0 {
        return Ok(());
    }
    let cell = " ".repeat(cell_width);
    for (row, indices) in style::SWATCH_ROWS.iter().enumerate().take(inner.height as usize) {
        for (col, index) in indices.iter().enumerate() {
            let x = inner.x + (col * cell_width) as u16;
            let swatch_style = colored(None, Color::AnsiValue(*index));
            put(out, x, inner.y + row as u16, &cell, swatch_style)?;
        }
    }
    Ok(())
}

fn draw_status<W: Write>(out: &mut W, area: Rect, view: &ViewState) -> io::Result<()> {
    let width = area.width as usize;
    out.queue(MoveTo(area.x, area.y))?;
    match &view.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => style::COLOR_STATUS_INFO,
                StatusKind::Error => style::COLOR_STATUS_ERROR,
            };
            let text = ellipsize(&status.text.replace('\n', " "), width);
            out.queue(PrintStyledContent(text.as_str().with(color)))?;
        }
        None => {
            let hint = ellipsize(style::HINT_KEYS, width);
            out.queue(PrintStyledContent(hint.as_str().with(style::COLOR_HINT)))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use crate::tui::view::Status;

    fn render(editor: &Editor, view: &ViewState, cols: u16, rows: u16) -> String {
        let mut buf = Vec::new();
        draw_frame(&mut buf, editor, view, cols, rows).expect("draw");
        String::from_utf8(buf).expect("utf8")
    }

    fn fixture(prefix: &str) -> (TestTempDir, Editor) {
        let tmp = TestTempDir::new(prefix);
        tmp.write_text("alacritty.yml", "window:\n  opacity: 0.75\n");
        tmp.write_text("colors/gruvbox.yml", "colors: {}\n");
        tmp.write_text("colors/nord.yml", "colors: {}\n");
        tmp.write_text("fonts/hack.yml", "font: {}\n");
        let editor = Editor::open(
            &tmp.child("alacritty.yml"),
            &tmp.child("colors"),
            &tmp.child("fonts"),
        )
        .expect("open");
        (tmp, editor)
    }

    #[test]
    fn gauge_cells_scale_with_opacity() {
        assert_eq!(gauge_cells(40, 0.75), (30, "75 %".to_string()));
        assert_eq!(gauge_cells(40, 0.0), (0, "0 %".to_string()));
        assert_eq!(gauge_cells(40, 1.0), (40, "100 %".to_string()));
        assert_eq!(gauge_cells(40, 7.0), (40, "100 %".to_string()));
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn frame_shows_titles_presets_and_gauge() {
        let (_tmp, editor) = fixture("draw-frame");
        let out = render(&editor, &ViewState::new(), 100, 40);
        for needle in [
            style::TITLE_HEADER,
            style::TITLE_COLORS,
            style::TITLE_FONTS,
            style::TITLE_OPACITY,
            "gruvbox",
            "nord",
            "hack",
            "75 %",
            "the quick brown fox jumps over the lazy dog",
            style::HINT_KEYS,
        ] {
            assert!(out.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn frame_shows_status_instead_of_hint() {
        let (_tmp, editor) = fixture("draw-status");
        let mut view = ViewState::new();
        view.status = Some(Status {
            kind: StatusKind::Error,
            text: "range: opacity 1.01 is not within [0.0, 1.0]".to_string(),
        });
        let out = render(&editor, &view, 100, 40);
        assert!(out.contains("range: opacity 1.01"));
        assert!(!out.contains(style::HINT_KEYS));
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let tmp = TestTempDir::new("draw-empty");
        tmp.write_text("alacritty.yml", "{}\n");
        let editor = Editor::open(&tmp.child("alacritty.yml"), &tmp.child("c"), &tmp.child("f"))
            .expect("open");
        let out = render(&editor, &ViewState::new(), 100, 40);
        assert!(out.contains(style::LABEL_EMPTY_CATALOG));
        assert!(out.contains("100 %"));
    }

    #[test]
    fn tiny_terminal_draws_notice_only() {
        let (_tmp, editor) = fixture("draw-tiny");
        let out = render(&editor, &ViewState::new(), 30, 8);
        assert!(out.contains(style::LABEL_TOO_SMALL));
        assert!(!out.contains(style::TITLE_COLORS));
    }
}
