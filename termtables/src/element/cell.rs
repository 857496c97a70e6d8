use crate::render::RenderStyle;
use crate::text::{align, display_width};
use crate::types::{Alignment, CellStyle};
use crate::value::Value;

/// A single table cell.
///
/// The text is fixed when the cell is created. Alignment is optional; a cell
/// without one takes the table's default each time it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    column: usize,
    text: String,
    alignment: Option<Alignment>,
    col_span: usize,
}

impl Cell {
    pub fn new(value: impl Into<Value>) -> Self {
        Self::at(0, value.into(), None)
    }

    pub fn styled(value: impl Into<Value>, style: CellStyle) -> Self {
        Self::at(0, value.into(), Some(style))
    }

    pub(crate) fn at(column: usize, value: Value, style: Option<CellStyle>) -> Self {
        let (alignment, col_span) = match style {
            Some(style) => (style.alignment, style.col_span.max(1)),
            None => (None, 1),
        };

        Self {
            column,
            text: value.format(),
            alignment,
            col_span,
        }
    }

    /// Zero-based column index, assigned from the cell's position in its row.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = Some(alignment);
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    /// Width available to the content: the cell's own column plus, for a
    /// spanning cell, every following column it covers together with the
    /// padding and border between them.
    pub fn content_width(&self, style: &RenderStyle) -> usize {
        let mut width = style.cell_width(self.column);
        let gap = style.padding_left()
            + style.padding_right()
            + display_width(&style.borders().vertical);

        for offset in 1..self.col_span {
            let Some(next) = style.recorded_width(self.column + offset) else {
                break;
            };
            width += gap + next;
        }

        width
    }

    pub fn render(&self, style: &RenderStyle) -> String {
        let alignment = self.alignment.unwrap_or(style.alignment());

        let mut out = " ".repeat(style.padding_left());
        out.push_str(&align(&self.text, self.content_width(style), alignment));
        out.push_str(&" ".repeat(style.padding_right()));
        out
    }

    pub(crate) fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            text: f(&self.text),
            ..self.clone()
        }
    }
}

/// Anything that can become a cell at a given column: a pre-built [`Cell`]
/// or any value convertible into a [`Value`].
pub trait IntoCell {
    fn into_cell(self, column: usize) -> Cell;
}

impl IntoCell for Cell {
    fn into_cell(mut self, column: usize) -> Cell {
        self.column = column;
        self
    }
}

impl<T: Into<Value>> IntoCell for T {
    fn into_cell(self, column: usize) -> Cell {
        Cell::at(column, self.into(), None)
    }
}
