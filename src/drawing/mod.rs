pub mod font;
pub mod gradient;
pub mod layers;
pub mod mask;
pub mod pattern;
pub mod text;

pub use font::{BitmapFont, FontSource, TextBox, Typeface};
pub use gradient::Gradient;
pub use layers::{CircleMaskLayer, FontWeight, GridLinesLayer, ShapeGridLayer, TextLayer, WordmarkLayer};
pub use pattern::{CellKey, CellStyle, GridLines, Shape, ShapeGrid};
pub use text::{Shadow, halo_offsets};
