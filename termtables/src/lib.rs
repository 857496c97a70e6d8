//! Text tables for terminals, with Markdown and HTML output.
//!
//! A [`Table`] holds rows of [`Value`]s. Rendering measures every column,
//! aligns and pads each cell, and draws the borders for the table's
//! [`OutputMode`].

pub mod defaults;
pub mod element;
pub mod locale;
pub mod render;
pub mod table;
pub mod terminal;
pub mod text;
pub mod types;
pub mod value;

pub use defaults::Defaults;
pub use element::{Cell, Element, IntoCell, Row, Separator, StraightSeparator};
pub use render::RenderStyle;
pub use table::Table;
pub use terminal::{max_columns, Size, TermError};
pub use types::*;
pub use value::Value;
