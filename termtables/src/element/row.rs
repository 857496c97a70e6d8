use crate::render::RenderStyle;

use super::{Cell, IntoCell};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Builds a row. Each item starts at the first column not covered by
    /// the items before it, so a cell after a span of 2 skips a column.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCell,
    {
        let mut row = Self::default();
        for item in items {
            row.add_cell(item);
        }
        row
    }

    /// Appends a cell after the last covered column and returns it for
    /// further changes.
    pub fn add_cell(&mut self, item: impl IntoCell) -> &mut Cell {
        let cell = item.into_cell(self.column_count());
        let index = self.cells.len();
        self.cells.push(cell);
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index` in insertion order.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// The cell starting at the zero-based `column`, if any.
    pub fn cell_in_column_mut(&mut self, column: usize) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|cell| cell.column() == column)
    }

    /// Columns covered by the cells, spans included.
    pub fn column_count(&self) -> usize {
        self.cells
            .iter()
            .fold(0usize, |acc, cell| acc.saturating_add(cell.col_span()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn render(&self, style: &RenderStyle) -> String {
        let border = &style.borders().vertical;
        let mut parts: Vec<String> = self.cells.iter().map(|cell| cell.render(style)).collect();

        // Ragged rows get blank segments so every line keeps the table width.
        for column in self.column_count()..style.columns() {
            let width = style.padding_left() + style.cell_width(column) + style.padding_right();
            parts.push(" ".repeat(width));
        }

        format!("{border}{}{border}", parts.join(border.as_str()))
    }

    pub(crate) fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            cells: self.cells.iter().map(|cell| cell.map_text(&f)).collect(),
        }
    }
}
