use crate::element::{Cell, Element, Row, Separator, StraightSeparator};
use crate::table::Table;
use crate::types::{Alignment, CellStyle, Placement};

use super::RenderStyle;

/// Wide enough to cover every column the table can have.
const TITLE_SPAN: usize = usize::MAX;

pub(crate) fn render(table: &Table) -> String {
    let title = table.title().map(|title| {
        let style = CellStyle::new().align(Alignment::Center).span(TITLE_SPAN);
        Cell::styled(title.clone(), style)
    });
    let elements = assemble(table, title.as_ref());

    let style = RenderStyle::resolve(table.style(), &elements, title.as_ref());
    log::debug!(
        "rendering terminal table: {} lines, {} columns, width {}",
        elements.len(),
        style.columns(),
        style.width()
    );

    let mut out = String::new();
    for element in &elements {
        out.push_str(&element.render(&style));
        out.push('\n');
    }
    out
}

/// Lays out title, headers, body and borders top to bottom on a working copy,
/// leaving the table untouched so repeated renders match.
fn assemble(table: &Table, title: Option<&Cell>) -> Vec<Element> {
    let outer = !table.style().skip_border;
    let headers = table.headers();
    let mut elements: Vec<Element> = Vec::with_capacity(table.elements().len() + 6);

    if let Some(title) = title {
        if outer {
            elements.push(StraightSeparator::new(Placement::Top).into());
        }
        elements.push(Row::new([title.clone()]).into());
    }

    if let Some(headers) = headers {
        if title.is_some() {
            elements.push(Separator::new(Placement::SubTop).into());
        } else if outer {
            elements.push(Separator::new(Placement::Top).into());
        }
        elements.push(Row::new(headers.iter().cloned()).into());
    }

    // The rule opening the body. Only the outer top rule is kept for an
    // empty body; an inner one would sit directly on the bottom rule.
    let empty_body = table.elements().is_empty();
    match (title.is_some(), headers.is_some()) {
        (false, false) if outer => elements.push(Separator::new(Placement::Top).into()),
        (false, false) => {}
        _ if empty_body => {}
        (_, true) => elements.push(Separator::new(Placement::Inner).into()),
        (true, false) => elements.push(Separator::new(Placement::SubTop).into()),
    }

    elements.extend(table.elements().iter().cloned());

    if outer {
        elements.push(Separator::new(Placement::Bottom).into());
    }

    log::trace!("assembled {} elements", elements.len());
    elements
}
