use std::fmt::Write;

use crate::element::{Element, Row, Separator};
use crate::table::Table;
use crate::text::escape_pipes;
use crate::types::{BorderGlyphs, Placement, TableStyle};

use super::RenderStyle;

// Markdown has no inner rules and needs a header row, so the table is
// rebuilt: headers (or column numbers), one dashed rule, then the rows.
pub(crate) fn render(table: &Table) -> String {
    let style = TableStyle {
        borders: BorderGlyphs::new("-", "|", "|"),
        ..table.style().clone()
    };

    let body: Vec<Row> = table
        .elements()
        .iter()
        .filter_map(|element| match element {
            Element::Row(row) => Some(row.map_text(escape_pipes)),
            Element::Separator(_) | Element::StraightSeparator(_) => None,
        })
        .collect();

    let header = match table.headers() {
        Some(headers) => Row::new(headers.iter().cloned()).map_text(escape_pipes),
        None => {
            let columns = body.iter().map(Row::column_count).max().unwrap_or(0);
            Row::new(1..=columns)
        }
    };

    let mut out = String::new();
    if let Some(title) = table.title() {
        let _ = writeln!(out, "Table: {}\n", title.format().trim());
    }

    if header.is_empty() {
        return out;
    }

    let mut elements: Vec<Element> = Vec::with_capacity(body.len() + 2);
    elements.push(header.into());
    elements.push(Separator::new(Placement::Inner).into());
    elements.extend(body.into_iter().map(Element::Row));

    let style = RenderStyle::resolve(&style, &elements, None);
    log::debug!(
        "rendering markdown table: {} columns, width {}",
        style.columns(),
        style.width()
    );

    for element in &elements {
        out.push_str(&element.render(&style));
        out.push('\n');
    }
    out
}
