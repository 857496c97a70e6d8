//! Per-render layout: column widths resolved from table content, and the
//! terminal, Markdown and HTML renderers that consume them.

pub(crate) mod html;
pub(crate) mod markdown;
pub(crate) mod terminal;

use crate::element::{Cell, Element};
use crate::text::display_width;
use crate::types::{Alignment, BorderGlyphs, TableStyle};

/// Column widths and effective glyphs for a single render.
///
/// Built fresh by every render from the table's static [`TableStyle`] and its
/// current content, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    style: TableStyle,
    cell_widths: Vec<usize>,
    width: usize,
}

impl RenderStyle {
    /// Measures `elements` and, if given, widens the last column until the
    /// title fits across the whole table.
    ///
    /// Spanning cells are not measured; separators carry no content.
    pub fn resolve<'a, I>(style: &TableStyle, elements: I, title: Option<&Cell>) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut cell_widths: Vec<usize> = Vec::new();

        for element in elements {
            let Element::Row(row) = element else {
                continue;
            };

            for cell in row.cells() {
                if cell.col_span() > 1 {
                    continue;
                }
                let column = cell.column();
                if cell_widths.len() <= column {
                    cell_widths.resize(column + 1, 0);
                }
                cell_widths[column] = cell_widths[column].max(cell.width());
            }
        }

        if title.is_some() && cell_widths.is_empty() {
            cell_widths.push(0);
        }

        let mut resolved = Self::with_widths(style, cell_widths);
        if let Some(title) = title {
            resolved.fit_title(title);
        }
        resolved
    }

    /// Uses the given column widths as-is.
    pub fn with_widths(style: &TableStyle, cell_widths: Vec<usize>) -> Self {
        let style = TableStyle {
            borders: style.borders.filled(),
            ..style.clone()
        };

        let mut resolved = Self {
            style,
            cell_widths,
            width: 0,
        };
        resolved.width = resolved.measure_width();
        resolved
    }

    fn measure_width(&self) -> usize {
        let borders = &self.style.borders;
        let junction = display_width(&borders.join);

        // The left border, then each column followed by its right-hand border.
        display_width(&borders.vertical)
            + (0..self.columns())
                .map(|column| self.padded_width(column) + junction)
                .sum::<usize>()
    }

    fn fit_title(&mut self, title: &Cell) {
        let min_width = title.width()
            + 2 * display_width(&self.style.borders.vertical)
            + self.style.padding_left
            + self.style.padding_right;

        if self.width >= min_width {
            return;
        }

        if let Some(last) = self.cell_widths.last_mut() {
            let shortfall = min_width - self.width;
            log::trace!("widening last column by {shortfall} to fit title");
            *last += shortfall;
            self.width = min_width;
        }
    }

    pub fn columns(&self) -> usize {
        self.cell_widths.len()
    }

    /// Content width of `column`, `0` for columns the table doesn't have.
    pub fn cell_width(&self, column: usize) -> usize {
        self.recorded_width(column).unwrap_or(0)
    }

    pub fn recorded_width(&self, column: usize) -> Option<usize> {
        self.cell_widths.get(column).copied()
    }

    /// Content width of `column` plus its left and right padding.
    pub fn padded_width(&self, column: usize) -> usize {
        self.style.padding_left + self.cell_width(column) + self.style.padding_right
    }

    /// Total width of a rendered line, both outer borders included.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn borders(&self) -> &BorderGlyphs {
        &self.style.borders
    }

    pub fn padding_left(&self) -> usize {
        self.style.padding_left
    }

    pub fn padding_right(&self) -> usize {
        self.style.padding_right
    }

    pub fn alignment(&self) -> Alignment {
        self.style.alignment
    }

    pub fn skip_border(&self) -> bool {
        self.style.skip_border
    }
}
