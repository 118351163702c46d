//! Font acquisition for text overlays.
//!
//! A face is loaded from disk every time a layer needs one; nothing is cached.
//! When the TrueType file cannot be read or parsed, the built-in 8x8 bitmap
//! glyphs are used instead at their one fixed size.

use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use anyhow::Context;
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{ImageBuffer, Pixel};
use imageproc::drawing::draw_text_mut;
use log::{debug, warn};

/// Ink extents of a text run, relative to the point it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Built-in bitmap glyph set of fixed 8x8 cells
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub const CELL: u32 = 8;

    pub fn glyph(&self, ch: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(ch)
    }

    /// Glyphs are whole cells, so the box is the row of cells
    pub fn text_box(&self, text: &str) -> TextBox {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return TextBox::default();
        }
        TextBox {
            left: 0,
            top: 0,
            width: chars * Self::CELL,
            height: Self::CELL,
        }
    }

    pub fn draw<P>(&self, img: &mut ImageBuffer<P, Vec<u8>>, color: P, x: i32, y: i32, text: &str)
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = img.dimensions();
        for (n, ch) in text.chars().enumerate() {
            let Some(rows) = self.glyph(ch) else {
                continue;
            };
            let origin_x = x + (n as u32 * Self::CELL) as i32;
            for (row, bits) in rows.iter().enumerate() {
                for bit in 0..8 {
                    if bits & (1u8 << bit) == 0 {
                        continue;
                    }
                    let px = origin_x + bit;
                    let py = y + row as i32;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        img.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

fn read_font(path: &Path) -> anyhow::Result<FontVec> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    FontVec::try_from_vec(bytes).with_context(|| format!("Failed to parse font {}", path.display()))
}

/// Outcome of trying to acquire a TrueType face
pub enum FontSource {
    Loaded(FontVec),
    Fallback(BitmapFont),
}

impl FontSource {
    /// Read and parse the font at `path`. Any failure yields the fallback.
    pub fn load(path: &Path) -> Self {
        match read_font(path) {
            Ok(font) => {
                debug!("Loaded font {}", path.display());
                FontSource::Loaded(font)
            }
            Err(e) => {
                warn!("{:#}; using built-in bitmap font", e);
                FontSource::Fallback(BitmapFont)
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontSource::Fallback(_))
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::Loaded(_) => f.write_str("Loaded"),
            FontSource::Fallback(_) => f.write_str("Fallback"),
        }
    }
}

/// A font source at a given size
#[derive(Debug)]
pub struct Typeface {
    pub source: FontSource,
    /// Em size in pixels; ignored by the bitmap fallback
    pub size: f32,
}

impl Typeface {
    pub fn load(path: &Path, size: f32) -> Self {
        Self {
            source: FontSource::load(path),
            size,
        }
    }

    pub fn fallback(size: f32) -> Self {
        Self {
            source: FontSource::Fallback(BitmapFont),
            size,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source.is_fallback()
    }

    /// Pixel scale whose em square is `size` pixels tall
    fn scale(font: &FontVec, size: f32) -> PxScale {
        match font.units_per_em() {
            Some(units) if units > 0.0 => PxScale::from(size * font.height_unscaled() / units),
            _ => PxScale::from(size),
        }
    }

    /// Union of the pixel bounds of every outlined glyph. Glyphs are laid
    /// out exactly as `draw_text_mut` places them: baseline at the ascent,
    /// caret advanced before kerning is applied.
    fn ink_box(font: &FontVec, scale: PxScale, text: &str) -> TextBox {
        let scaled = font.as_scaled(scale);
        let mut caret = 0f32;
        let mut last: Option<GlyphId> = None;
        let mut bounds: Option<(f32, f32, f32, f32)> = None;

        for c in text.chars() {
            let glyph_id = font.glyph_id(c);
            let glyph = glyph_id.with_scale_and_position(scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(glyph_id);
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            if let Some(last) = last {
                caret += scaled.kern(glyph_id, last);
            }
            last = Some(glyph_id);

            let bb = outlined.px_bounds();
            bounds = Some(match bounds {
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(bb.min.x),
                    y0.min(bb.min.y),
                    x1.max(bb.max.x),
                    y1.max(bb.max.y),
                ),
            });
        }

        match bounds {
            Some((x0, y0, x1, y1)) => TextBox {
                left: x0.round() as i32,
                top: y0.round() as i32,
                width: (x1 - x0).round() as u32,
                height: (y1 - y0).round() as u32,
            },
            None => TextBox::default(),
        }
    }

    /// Ink extents of `text` drawn at the origin
    pub fn text_box(&self, text: &str) -> TextBox {
        match &self.source {
            FontSource::Loaded(font) => Self::ink_box(font, Self::scale(font, self.size), text),
            FontSource::Fallback(bitmap) => bitmap.text_box(text),
        }
    }

    /// Width and height of the rendered text box
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        let tb = self.text_box(text);
        (tb.width, tb.height)
    }

    pub fn draw<P>(&self, img: &mut ImageBuffer<P, Vec<u8>>, color: P, x: i32, y: i32, text: &str)
    where
        P: Pixel<Subpixel = u8>,
    {
        match &self.source {
            FontSource::Loaded(font) => {
                draw_text_mut(img, color, x, y, Self::scale(font, self.size), font, text)
            }
            FontSource::Fallback(bitmap) => bitmap.draw(img, color, x, y, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_file_falls_back() {
        let face = Typeface::load(Path::new("/nonexistent/NoSuchFont-Bold.ttf"), 48.0);
        assert!(face.is_fallback());
        assert_eq!(face.text_size("EVENTS"), (48, 8));
    }

    #[test]
    fn garbage_file_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(FontSource::load(&path).is_fallback());
    }

    #[test]
    fn bitmap_font_draws_ink() {
        let mut img = RgbImage::new(40, 10);
        BitmapFont.draw(&mut img, Rgb([255, 255, 255]), 1, 1, "AB");
        assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
        // Nothing escapes the text box
        for (x, y, p) in img.enumerate_pixels() {
            if p.0 != [0, 0, 0] {
                assert!((1..17).contains(&x) && (1..9).contains(&y));
            }
        }
    }

    #[test]
    fn bitmap_font_clips_at_edges() {
        let mut img = RgbImage::new(4, 4);
        BitmapFont.draw(&mut img, Rgb([255, 0, 0]), -3, -3, "W");
        BitmapFont.draw(&mut img, Rgb([255, 0, 0]), 2, 2, "W");
    }

    #[test]
    fn empty_text_has_no_size() {
        assert_eq!(BitmapFont.text_box(""), TextBox::default());
    }

    /// Extents of every pixel differing from black
    fn drawn_extents(img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
        let mut extents: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in img.enumerate_pixels() {
            if p.0 == [0, 0, 0] {
                continue;
            }
            extents = Some(match extents {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        extents
    }

    #[test]
    fn truetype_box_matches_drawn_ink() {
        let path = Path::new(crate::config::DEFAULT_BOLD_FONT);
        if !path.exists() {
            eprintln!("skipping: {} not installed", path.display());
            return;
        }
        let face = Typeface::load(path, 48.0);
        assert!(!face.is_fallback());

        for text in ["play.craftminer.com", "Typography", "CRAFTMINER"] {
            let tb = face.text_box(text);
            let mut img = RgbImage::new(800, 200);
            face.draw(&mut img, Rgb([255, 255, 255]), 40, 40, text);
            let (x0, y0, x1, y1) = drawn_extents(&img).unwrap();

            // Edge pixels of a glyph's bounds may receive zero coverage
            let near = |a: i64, b: i64, slack: i64| (a - b).abs() <= slack;
            assert!(near(x0 as i64, 40 + tb.left as i64, 1), "{text}: left {x0} vs {tb:?}");
            assert!(near(y0 as i64, 40 + tb.top as i64, 1), "{text}: top {y0} vs {tb:?}");
            assert!(near((x1 - x0 + 1) as i64, tb.width as i64, 2), "{text}: width vs {tb:?}");
            assert!(near((y1 - y0 + 1) as i64, tb.height as i64, 2), "{text}: height vs {tb:?}");
        }

        // Descenders extend the box below the baseline
        assert!(face.text_box("play.craftminer.com").height > face.text_box("CRAFTMINER").height);
    }
}
