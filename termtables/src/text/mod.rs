use crate::types::Alignment;

/// Width of `s` in terminal columns, counted as one column per `char`.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Number of leading spaces needed to place `text_width` columns of content
/// inside `available_width` columns. Centering leans left on odd deficits.
pub fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Alignment::Left => 0,
        Alignment::Center => (available_width - text_width) / 2,
        Alignment::Right => available_width - text_width,
    }
}

/// Pads `text` with spaces to `width` columns. Content wider than `width`
/// is returned unchanged.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let text_width = display_width(text);
    let deficit = width.saturating_sub(text_width);
    let leading = align_offset(text_width, width, alignment);
    let trailing = deficit - leading;

    let mut out = String::with_capacity(text.len() + deficit);
    out.push_str(&" ".repeat(leading));
    out.push_str(text);
    out.push_str(&" ".repeat(trailing));
    out
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Replaces `|` with its numeric entity so it can't end a Markdown cell.
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "&#x7c;")
}
