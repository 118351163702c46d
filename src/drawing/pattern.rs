use image::RgbImage;
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::models::Color;

/// How a grid cell's coordinates are folded into a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKey {
    /// `(i + j) % period`
    Sum,
    /// `(i * j) % period`
    Product,
}

impl CellKey {
    pub fn key(self, i: u32, j: u32, period: u32) -> u32 {
        match self {
            CellKey::Sum => (i + j) % period,
            CellKey::Product => (i as u64 * j as u64 % period as u64) as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Ellipse,
}

/// Fill and optional one-pixel outline of a cell's shape
#[derive(Debug, Clone, Copy)]
pub struct CellStyle {
    /// Key value this style is drawn for
    pub key: u32,
    pub fill: Color,
    pub outline: Option<Color>,
}

/// Periodic grid of small shapes
#[derive(Debug, Clone)]
pub struct ShapeGrid {
    /// Distance between neighbouring cell origins
    pub stride: u32,
    /// Shapes cover `(i, j)..=(i + size, j + size)`
    pub size: u32,
    pub shape: Shape,
    pub cell_key: CellKey,
    pub period: u32,
    pub styles: Vec<CellStyle>,
}

impl ShapeGrid {
    /// Style selected for cell `(i, j)`, if any
    pub fn style_at(&self, i: u32, j: u32) -> Option<&CellStyle> {
        let key = self.cell_key.key(i, j, self.period);
        self.styles.iter().find(|s| s.key == key)
    }

    /// Origins of every cell that receives a shape
    pub fn cells(&self, width: u32, height: u32) -> Vec<(u32, u32, CellStyle)> {
        let mut cells = Vec::new();
        for i in (0..width).step_by(self.stride as usize) {
            for j in (0..height).step_by(self.stride as usize) {
                if let Some(style) = self.style_at(i, j) {
                    cells.push((i, j, *style));
                }
            }
        }
        cells
    }

    pub fn paint(&self, img: &mut RgbImage) {
        let (width, height) = img.dimensions();
        let extent = self.size + 1;

        for (i, j, style) in self.cells(width, height) {
            let (x, y) = (i as i32, j as i32);
            match self.shape {
                Shape::Rectangle => {
                    let rect = Rect::at(x, y).of_size(extent, extent);
                    draw_filled_rect_mut(img, rect, style.fill.to_rgb());
                    if let Some(outline) = style.outline {
                        draw_hollow_rect_mut(img, rect, outline.to_rgb());
                    }
                }
                Shape::Ellipse => {
                    let radius = (self.size / 2) as i32;
                    let center = (x + radius, y + radius);
                    draw_filled_ellipse_mut(img, center, radius, radius, style.fill.to_rgb());
                    if let Some(outline) = style.outline {
                        draw_hollow_ellipse_mut(img, center, radius, radius, outline.to_rgb());
                    }
                }
            }
        }
    }
}

/// One-pixel lines every `spacing` pixels on both axes
#[derive(Debug, Clone, Copy)]
pub struct GridLines {
    pub spacing: u32,
    pub color: Color,
}

impl GridLines {
    pub fn paint(&self, img: &mut RgbImage) {
        let (width, height) = img.dimensions();
        let color = self.color.to_rgb();

        for x in (0..width).step_by(self.spacing as usize) {
            draw_line_segment_mut(img, (x as f32, 0.0), (x as f32, height as f32), color);
        }
        for y in (0..height).step_by(self.spacing as usize) {
            draw_line_segment_mut(img, (0.0, y as f32), (width as f32, y as f32), color);
        }
    }
}
