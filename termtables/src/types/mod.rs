mod borders;
mod enums;
mod style;

pub use borders::BorderGlyphs;
pub use enums::{Alignment, OutputMode, Placement};
pub use style::{CellStyle, TableStyle};
