mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from craftminer_art for tests
pub use craftminer_art::{
    FontPaths, Generator, GeneratorConfig, OutputFormat, banner_set, placeholder_set,
};
