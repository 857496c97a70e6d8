use std::fmt;

use crate::defaults::{self, Defaults};
use crate::element::{Cell, Element, IntoCell, Row, Separator};
use crate::render;
use crate::types::{Alignment, OutputMode, TableStyle};
use crate::value::Value;

/// A table of rows and separators, with optional headers and title.
///
/// Build it up, then call [`Table::render`]. Rendering never changes the
/// table, so the same table can be rendered repeatedly or in several modes.
///
/// # Example
///
/// ```
/// use termtables::{Defaults, Table};
///
/// let mut table = Table::with_defaults(&Defaults::new());
/// table.add_headers(["Name", "Value"]);
/// table.add_row(["hey", "you"]);
///
/// assert_eq!(
///     table.render(),
///     "+------+-------+\n\
///      | Name | Value |\n\
///      +------+-------+\n\
///      | hey  | you   |\n\
///      +------+-------+\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    style: TableStyle,
    elements: Vec<Element>,
    headers: Option<Vec<Cell>>,
    title: Option<Value>,
    mode: OutputMode,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates a table from a snapshot of the process-wide [`Defaults`].
    /// Later changes to those defaults don't affect this table.
    pub fn new() -> Self {
        Self::with_defaults(&defaults::current())
    }

    pub fn with_defaults(defaults: &Defaults) -> Self {
        let style = if defaults.utf8_box {
            TableStyle::utf8_rounded()
        } else {
            TableStyle::ascii()
        };

        Self {
            style,
            elements: Vec::new(),
            headers: None,
            title: None,
            mode: defaults.mode,
        }
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: TableStyle) {
        self.style = style;
    }

    /// Body rows and separators, in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn headers(&self) -> Option<&[Cell]> {
        self.headers.as_deref()
    }

    pub fn title(&self) -> Option<&Value> {
        self.title.as_ref()
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Appends a row and returns it so individual cells can be adjusted.
    pub fn add_row<I>(&mut self, items: I) -> &mut Row
    where
        I: IntoIterator,
        I::Item: IntoCell,
    {
        let index = self.elements.len();
        self.elements.push(Row::new(items).into());

        let Some(Element::Row(row)) = self.elements.get_mut(index) else {
            unreachable!("a row was just pushed at {index}");
        };
        row
    }

    pub fn add_separator(&mut self) {
        self.elements.push(Separator::default().into());
    }

    /// Sets the header row, replacing any previous one.
    pub fn add_headers<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: IntoCell,
    {
        self.headers = Some(Row::new(items).cells().to_vec());
    }

    pub fn add_title(&mut self, title: impl Into<Value>) {
        self.title = Some(title.into());
    }

    /// Sets the alignment of every cell already in the given columns
    /// (1-based) of the body rows. Rows added later are unaffected.
    pub fn set_column_alignment(&mut self, alignment: Alignment, columns: &[usize]) {
        if columns.contains(&0) {
            log::warn!("ignoring column 0 in set_column_alignment; columns are 1-based");
        }

        for element in &mut self.elements {
            let Element::Row(row) = element else {
                continue;
            };
            for &column in columns.iter().filter(|&&column| column > 0) {
                if let Some(cell) = row.cell_in_column_mut(column - 1) {
                    cell.set_alignment(alignment);
                }
            }
        }
    }

    /// Switches to box-drawing borders with rounded corners.
    pub fn utf8_box(&mut self) {
        self.style.set_utf8_box_style();
    }

    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    pub fn set_mode_terminal(&mut self) {
        self.set_mode(OutputMode::Terminal);
    }

    pub fn set_mode_markdown(&mut self) {
        self.set_mode(OutputMode::Markdown);
    }

    pub fn set_mode_html(&mut self) {
        self.set_mode(OutputMode::Html);
    }

    pub fn render(&self) -> String {
        match self.mode {
            OutputMode::Terminal => render::terminal::render(self),
            OutputMode::Markdown => render::markdown::render(self),
            OutputMode::Html => render::html::render(self),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
