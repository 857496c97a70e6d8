use super::{Alignment, BorderGlyphs};

/// Static, per-table drawing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Omit the outermost top and bottom rules.
    pub skip_border: bool,
    pub borders: BorderGlyphs,
    pub padding_left: usize,
    pub padding_right: usize,
    /// Alignment for cells that don't carry their own.
    pub alignment: Alignment,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::ascii()
    }
}

impl TableStyle {
    pub fn ascii() -> Self {
        Self {
            skip_border: false,
            borders: BorderGlyphs::ascii(),
            padding_left: 1,
            padding_right: 1,
            alignment: Alignment::Left,
        }
    }

    pub fn utf8_rounded() -> Self {
        Self {
            borders: BorderGlyphs::utf8_rounded(),
            ..Self::ascii()
        }
    }

    pub fn utf8_square() -> Self {
        Self {
            borders: BorderGlyphs::utf8_square(),
            ..Self::ascii()
        }
    }

    pub fn set_ascii_box_style(&mut self) {
        self.borders = BorderGlyphs::ascii();
    }

    pub fn set_utf8_box_style(&mut self) {
        self.borders = BorderGlyphs::utf8_rounded();
    }

    pub fn skip_border(mut self, skip: bool) -> Self {
        self.skip_border = skip;
        self
    }

    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Per-cell overrides supplied when a cell is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub alignment: Option<Alignment>,
    /// Number of columns the cell covers; `0` is treated as `1`.
    pub col_span: usize,
}

impl CellStyle {
    pub const fn new() -> Self {
        Self {
            alignment: None,
            col_span: 0,
        }
    }

    pub const fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub const fn span(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }
}
