pub mod assets;
pub mod config;
pub mod drawing;
pub mod generator;
pub mod models;
pub mod pipeline;

pub use assets::{Asset, AssetSet, banner_set, placeholder_set};
pub use config::{FontPaths, GeneratorConfig};
pub use generator::{Generator, save_image};
pub use models::{Color, Direction, OutputFormat, TextPosition};
pub use pipeline::{Composition, Layer, RenderContext};
