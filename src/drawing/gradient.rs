use image::RgbImage;

use crate::models::{Color, Direction};

/// Two-color banded linear gradient
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
    pub direction: Direction,
}

impl Gradient {
    pub fn new(from: impl Into<Color>, to: impl Into<Color>, direction: Direction) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
        }
    }

    /// Colors of every band along the gradient axis, `len` bands in total
    pub fn bands(&self, len: u32) -> Vec<Color> {
        (0..len)
            .map(|i| self.from.lerp(self.to, i as f64 / len as f64))
            .collect()
    }

    /// Render a `width` x `height` image. Each column (horizontal) or row
    /// (vertical) is a solid fill of one band color.
    pub fn render(&self, width: u32, height: u32) -> RgbImage {
        let mut img = RgbImage::new(width, height);
        let bands = match self.direction {
            Direction::Horizontal => self.bands(width),
            Direction::Vertical => self.bands(height),
        };

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let band = match self.direction {
                Direction::Horizontal => x,
                Direction::Vertical => y,
            };
            *pixel = bands[band as usize].to_rgb();
        }
        img
    }
}
