use std::fmt::Write;

use crate::element::{Cell, Element, Row};
use crate::table::Table;
use crate::text::html_escape;

use super::RenderStyle;

/// Renders an HTML `<table>` fragment.
///
/// Padding is dropped and cell text is trimmed; layout is left to the
/// browser. Alignment survives only as an `align` attribute.
pub(crate) fn render(table: &Table) -> String {
    let style = table.style().clone().padding(0, 0);

    let caption = table
        .title()
        .map(|title| html_escape(title.format().trim()));
    let caption_cell = caption.as_deref().map(Cell::new);

    let style = RenderStyle::resolve(&style, table.elements(), caption_cell.as_ref());
    log::debug!(
        "rendering html table: {} columns, width {}",
        style.columns(),
        style.width()
    );

    let mut out = String::from("<table>\n");

    if let Some(caption) = caption {
        let _ = writeln!(out, "<caption>{caption}</caption>");
    }

    if let Some(headers) = table.headers() {
        out.push_str(&render_row(&Row::new(headers.iter().cloned()), "th", &style));
    }

    for (index, element) in table.elements().iter().enumerate() {
        match element {
            Element::Row(row) => out.push_str(&render_row(row, "td", &style)),
            Element::Separator(_) => {}
            Element::StraightSeparator(_) => {
                let _ = writeln!(out, "<!-- unable to render line {index}, unhandled type -->");
            }
        }
    }

    out.push_str("</table>\n");
    out
}

fn render_row(row: &Row, tag: &str, style: &RenderStyle) -> String {
    let mut out = String::from("<tr>");
    for cell in row.cells() {
        let _ = write!(
            out,
            "<{tag}{}>{}</{tag}>",
            attributes(cell),
            html_escape(cell.render(style).trim())
        );
    }
    out.push_str("</tr>\n");
    out
}

fn attributes(cell: &Cell) -> String {
    let mut attrs = String::new();
    if let Some(alignment) = cell.alignment() {
        let _ = write!(attrs, " align='{}'", alignment.as_html());
    }
    if cell.col_span() > 1 {
        let _ = write!(attrs, " colspan='{}'", cell.col_span());
    }
    attrs
}
