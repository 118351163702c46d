use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::DynamicImage;
use log::{debug, info};

use crate::assets::{Asset, AssetSet};
use crate::config::GeneratorConfig;
use crate::drawing::mask::flatten;
use crate::models::OutputFormat;
use crate::pipeline::RenderContext;

/// Write `image` to `path`, flattening alpha for formats without it.
/// Parent directories are created as needed.
pub fn save_image(image: DynamicImage, path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let image = if image.color().has_alpha() && !format.supports_alpha() {
        DynamicImage::ImageRgb8(flatten(image))
    } else {
        image
    };

    image
        .save_with_format(path, format.image_format())
        .with_context(|| format!("Failed to save {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Renders asset sets into the configured output directory
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Render and save one asset, returning where it was written
    pub fn generate(&self, asset: &Asset) -> Result<PathBuf> {
        let context = RenderContext::for_image(&self.config, asset.stem());
        let (w, h) = asset.dimensions();
        debug!("Rendering {} ({}x{})", asset.file_name, w, h);

        let image = asset.composition.render(&context)?;
        let path = self.config.output_path(asset.file_name);
        save_image(image, &path, asset.format)?;
        Ok(path)
    }

    /// Render every asset of `set` in order, printing a status line per file
    pub fn run(&self, set: &AssetSet) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.config.output_dir.display()
            )
        })?;

        println!("{}", set.intro);

        let mut written = Vec::new();
        for asset in &set.assets {
            written.push(self.generate(asset)?);
            println!("{}", set.status_line(asset));
        }

        println!("{}", set.outro);
        Ok(written)
    }
}
