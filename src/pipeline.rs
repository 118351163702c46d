use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use image::DynamicImage;
use log::debug;

use crate::config::{FontPaths, GeneratorConfig};
use crate::drawing::gradient::Gradient;

/// Context available to all layers
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub fonts: FontPaths,
    /// Where intermediate buffers of the current image are dumped
    pub debug_dir: Option<PathBuf>,
}

impl RenderContext {
    pub fn new(fonts: FontPaths) -> Self {
        Self {
            fonts,
            debug_dir: None,
        }
    }

    /// Context for rendering the image stored as `image_stem`
    pub fn for_image(config: &GeneratorConfig, image_stem: &str) -> Self {
        Self {
            fonts: config.fonts.clone(),
            debug_dir: config.debug_dir_for(image_stem),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(FontPaths::default())
    }
}

/// Trait that all drawing layers must implement
pub trait Layer: Send + Sync {
    /// Draw onto `image` and hand it to the next layer
    fn apply(&self, image: DynamicImage, context: &RenderContext) -> Result<DynamicImage>;

    /// Human-readable name for this layer (used in logs and debug dumps)
    fn name(&self) -> &str;
}

/// Save an intermediate buffer as `<dir>/<NN>_<name>.png`
fn save_debug_output(dir: &Path, index: usize, name: &str, image: &DynamicImage) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let filename = format!("{:02}_{}.png", index, name.to_lowercase().replace(' ', "_"));
    image
        .save(dir.join(&filename))
        .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
    debug!("  Debug: saved {}/{}", dir.display(), filename);
    Ok(())
}

/// Gradient background followed by an ordered stack of layers
#[derive(Clone)]
pub struct Composition {
    pub width: u32,
    pub height: u32,
    pub background: Gradient,
    layers: Vec<Arc<dyn Layer>>,
}

impl Composition {
    pub fn new(width: u32, height: u32, background: Gradient) -> Self {
        Self {
            width,
            height,
            background,
            layers: Vec::new(),
        }
    }

    /// Add a layer on top of the existing ones
    pub fn add_layer_boxed(mut self, layer: Box<dyn Layer>) -> Self {
        self.layers.push(Arc::from(layer));
        self
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Render the background and every layer
    pub fn render(&self, context: &RenderContext) -> Result<DynamicImage> {
        self.render_partial(context, self.layers.len())
    }

    /// Render the background and only the first `num_layers` layers
    pub fn render_partial(&self, context: &RenderContext, num_layers: usize) -> Result<DynamicImage> {
        let mut image = DynamicImage::ImageRgb8(self.background.render(self.width, self.height));
        if let Some(dir) = &context.debug_dir {
            save_debug_output(dir, 0, "background", &image)?;
        }

        for (idx, layer) in self.layers.iter().take(num_layers).enumerate() {
            debug!("Applying layer {}: {}", idx + 1, layer.name());
            image = layer.apply(image, context)?;

            if let Some(dir) = &context.debug_dir {
                save_debug_output(dir, idx + 1, layer.name(), &image)?;
            }
        }

        Ok(image)
    }
}
