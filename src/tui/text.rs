//! Shared text helpers for fixed-width terminal drawing.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Clip a string to at most `max_width` visible characters.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Clip `s` and append `...` when it does not fit in `max_width`.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if visible_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return clip_to_width(s, max_width);
    }
    format!("{}...", clip_to_width(s, max_width - 3))
}

/// Left offset that centers `s` within `width` columns.
pub fn center_offset(s: &str, width: usize) -> usize {
    width.saturating_sub(visible_width(s)) / 2
}

/// Pad `s` with spaces on the right up to `width` columns (clipping if longer).
pub fn pad_to_width(s: &str, width: usize) -> String {
    let clipped = clip_to_width(s, width);
    let pad = width.saturating_sub(visible_width(&clipped));
    format!("{clipped}{}", " ".repeat(pad))
}
