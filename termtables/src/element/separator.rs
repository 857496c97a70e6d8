use crate::render::RenderStyle;
use crate::text::display_width;
use crate::types::Placement;

/// A horizontal rule with a junction between every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separator {
    placement: Placement,
}

impl Separator {
    pub const fn new(placement: Placement) -> Self {
        Self { placement }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn render(&self, style: &RenderStyle) -> String {
        let glyphs = style.borders();
        let parts: Vec<String> = (0..style.columns())
            .map(|column| glyphs.horizontal.repeat(style.padded_width(column)))
            .collect();

        let (left, junction, right) = match self.placement {
            Placement::Top => (&glyphs.top_left, &glyphs.top, &glyphs.top_right),
            Placement::SubTop | Placement::Inner => (&glyphs.left, &glyphs.join, &glyphs.right),
            Placement::Bottom => (&glyphs.bottom_left, &glyphs.bottom, &glyphs.bottom_right),
        };

        format!("{left}{}{right}", parts.join(junction.as_str()))
    }
}

/// A horizontal rule drawn as one unbroken run, with no column junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StraightSeparator {
    placement: Placement,
}

impl StraightSeparator {
    pub const fn new(placement: Placement) -> Self {
        Self { placement }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn render(&self, style: &RenderStyle) -> String {
        let glyphs = style.borders();
        let junction = display_width(&glyphs.join);
        let width: usize = (0..style.columns())
            .map(|column| style.padded_width(column) + junction)
            .sum();

        let (left, right) = match self.placement {
            Placement::Top => (&glyphs.top_left, &glyphs.top_right),
            Placement::SubTop | Placement::Inner => (&glyphs.left, &glyphs.right),
            Placement::Bottom => (&glyphs.bottom_left, &glyphs.bottom_right),
        };

        format!(
            "{left}{}{right}",
            glyphs.horizontal.repeat(width.saturating_sub(1))
        )
    }
}
