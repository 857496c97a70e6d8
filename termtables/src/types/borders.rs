/// The glyphs used to draw table borders.
///
/// Only `horizontal`, `vertical` and `join` are required. Any of the
/// directional or corner glyphs left empty take the value of `join` once
/// [`BorderGlyphs::filled`] has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BorderGlyphs {
    pub horizontal: String,
    pub vertical: String,
    pub join: String,
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl BorderGlyphs {
    pub fn new(horizontal: &str, vertical: &str, join: &str) -> Self {
        Self {
            horizontal: horizontal.to_string(),
            vertical: vertical.to_string(),
            join: join.to_string(),
            ..Default::default()
        }
    }

    /// `-`, `|` and `+` everywhere.
    pub fn ascii() -> Self {
        Self::new("-", "|", "+")
    }

    /// Box-drawing glyphs with rounded corners.
    pub fn utf8_rounded() -> Self {
        Self {
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            ..Self::utf8_square()
        }
    }

    /// Box-drawing glyphs with square corners.
    pub fn utf8_square() -> Self {
        Self {
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            join: "┼".to_string(),
            top: "┬".to_string(),
            bottom: "┴".to_string(),
            left: "├".to_string(),
            right: "┤".to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
        }
    }

    /// Returns a copy where every empty directional or corner glyph falls
    /// back to `join`.
    pub fn filled(&self) -> Self {
        let inherit = |glyph: &String| {
            if glyph.is_empty() {
                self.join.clone()
            } else {
                glyph.clone()
            }
        };

        Self {
            horizontal: self.horizontal.clone(),
            vertical: self.vertical.clone(),
            join: self.join.clone(),
            top: inherit(&self.top),
            bottom: inherit(&self.bottom),
            left: inherit(&self.left),
            right: inherit(&self.right),
            top_left: inherit(&self.top_left),
            top_right: inherit(&self.top_right),
            bottom_left: inherit(&self.bottom_left),
            bottom_right: inherit(&self.bottom_right),
        }
    }
}
