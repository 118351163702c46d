use std::path::{Path, PathBuf};

use anyhow::Result;

pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// TrueType files tried before falling back to the built-in bitmap font
#[derive(Debug, Clone)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from(DEFAULT_BOLD_FONT),
            regular: PathBuf::from(DEFAULT_REGULAR_FONT),
        }
    }
}

/// Everything a generator run needs to know about its environment
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the finished images
    pub output_dir: PathBuf,
    pub fonts: FontPaths,
    /// Root directory for layer-by-layer dumps, if enabled
    pub debug_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            fonts: FontPaths::default(),
            debug_dir: None,
        }
    }

    pub fn with_fonts(mut self, fonts: FontPaths) -> Self {
        self.fonts = fonts;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug_dir = Some(output_dir);

        Ok(self)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Debug directory for one image, if debug mode is on
    pub fn debug_dir_for(&self, image_stem: &str) -> Option<PathBuf> {
        self.debug_dir.as_ref().map(|dir| dir.join(image_stem))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Path::new("images"))
    }
}
