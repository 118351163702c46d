use image::{ImageBuffer, Pixel};

use crate::drawing::font::Typeface;

/// Drop shadow drawn beneath a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    None,
    /// Single copy shifted right and down by the given distance
    Offset(i32),
    /// A copy at every integer offset inside a disk of the given radius
    Halo(i32),
}

impl Shadow {
    /// Offsets at which shadow copies are drawn
    pub fn offsets(self) -> Vec<(i32, i32)> {
        match self {
            Shadow::None => Vec::new(),
            Shadow::Offset(d) => vec![(d, d)],
            Shadow::Halo(r) => halo_offsets(r),
        }
    }
}

/// Every `(dx, dy)` with `dx² + dy² <= radius²`, row-major from `(-r, -r)`
pub fn halo_offsets(radius: i32) -> Vec<(i32, i32)> {
    let mut offsets = Vec::new();
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Draw `text` at `(x, y)` over its shadow copies
pub fn draw_text_with_shadow<P>(
    img: &mut ImageBuffer<P, Vec<u8>>,
    face: &Typeface,
    text: &str,
    (x, y): (i32, i32),
    color: P,
    shadow: Shadow,
    shadow_color: P,
) where
    P: Pixel<Subpixel = u8>,
{
    for (dx, dy) in shadow.offsets() {
        face.draw(img, shadow_color, x + dx, y + dy, text);
    }
    face.draw(img, color, x, y, text);
}
