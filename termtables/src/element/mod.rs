mod cell;
mod row;
mod separator;

pub use cell::{Cell, IntoCell};
pub use row::Row;
pub use separator::{Separator, StraightSeparator};

use crate::render::RenderStyle;

/// One line of a table: a row of cells or a horizontal rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Row(Row),
    Separator(Separator),
    /// A rule with no column junctions, drawn under a full-width title.
    StraightSeparator(StraightSeparator),
}

impl Element {
    pub fn render(&self, style: &RenderStyle) -> String {
        match self {
            Self::Row(row) => row.render(style),
            Self::Separator(separator) => separator.render(style),
            Self::StraightSeparator(separator) => separator.render(style),
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Self::Row(row) => Some(row),
            _ => None,
        }
    }
}

impl From<Row> for Element {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<Separator> for Element {
    fn from(separator: Separator) -> Self {
        Self::Separator(separator)
    }
}

impl From<StraightSeparator> for Element {
    fn from(separator: StraightSeparator) -> Self {
        Self::StraightSeparator(separator)
    }
}

/// Builds a `Vec<Cell>` from values of mixed types.
///
/// ```
/// use termtables::{cells, Alignment, Cell, CellStyle, Table};
///
/// let mut table = Table::new();
/// table.add_row(cells!["ken", 1234, Cell::styled(3.5, CellStyle::new().align(Alignment::Right))]);
/// ```
#[macro_export]
macro_rules! cells {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::IntoCell::into_cell($item, 0)),*]
    };
}
