use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Pixel};
use log::debug;

use crate::config::FontPaths;
use crate::drawing::font::Typeface;
use crate::drawing::mask::{apply_alpha, circle_mask};
use crate::drawing::pattern::{GridLines, ShapeGrid};
use crate::drawing::text::{Shadow, draw_text_with_shadow};
use crate::models::{Color, TextPosition};
use crate::pipeline::{Layer, RenderContext};

/// Which of the configured font files a text layer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    Regular,
}

impl FontWeight {
    pub fn load(self, fonts: &FontPaths, size: f32) -> Typeface {
        match self {
            FontWeight::Bold => Typeface::load(&fonts.bold, size),
            FontWeight::Regular => Typeface::load(&fonts.regular, size),
        }
    }
}

/// Paint a periodic grid of shapes
pub struct ShapeGridLayer {
    pub grid: ShapeGrid,
}

impl Layer for ShapeGridLayer {
    fn apply(&self, image: DynamicImage, _context: &RenderContext) -> Result<DynamicImage> {
        let mut img = image.into_rgb8();
        self.grid.paint(&mut img);
        Ok(DynamicImage::ImageRgb8(img))
    }

    fn name(&self) -> &str {
        "Shape Grid"
    }
}

/// Paint horizontal and vertical guide lines
pub struct GridLinesLayer {
    pub lines: GridLines,
}

impl Layer for GridLinesLayer {
    fn apply(&self, image: DynamicImage, _context: &RenderContext) -> Result<DynamicImage> {
        let mut img = image.into_rgb8();
        self.lines.paint(&mut img);
        Ok(DynamicImage::ImageRgb8(img))
    }

    fn name(&self) -> &str {
        "Grid Lines"
    }
}

/// Cut the image down to the disk inscribed in it; the result carries alpha
pub struct CircleMaskLayer;

impl Layer for CircleMaskLayer {
    fn apply(&self, image: DynamicImage, _context: &RenderContext) -> Result<DynamicImage> {
        let img = image.into_rgb8();
        let mask = circle_mask(img.width(), img.height());
        Ok(DynamicImage::ImageRgba8(apply_alpha(&img, &mask)))
    }

    fn name(&self) -> &str {
        "Circle Mask"
    }
}

/// One text block anchored by a position tag
pub struct TextLayer {
    pub text: String,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub position: TextPosition,
    pub shadow: Shadow,
    pub shadow_color: Color,
    name: String,
}

impl TextLayer {
    pub fn new(text: impl Into<String>, size: f32, color: Color, position: TextPosition) -> Self {
        let text = text.into();
        Self {
            name: format!("Text {}", text),
            text,
            size,
            weight: FontWeight::Bold,
            color,
            position,
            shadow: Shadow::None,
            shadow_color: Color::BLACK,
        }
    }

    pub fn with_shadow(mut self, shadow: Shadow, shadow_color: Color) -> Self {
        self.shadow = shadow;
        self.shadow_color = shadow_color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    fn draw<P>(&self, img: &mut ImageBuffer<P, Vec<u8>>, face: &Typeface, paint: fn(Color) -> P)
    where
        P: Pixel<Subpixel = u8>,
    {
        let (text_width, text_height) = face.text_size(&self.text);
        let anchor = self
            .position
            .anchor(img.width(), img.height(), text_width, text_height);
        debug!(
            "'{}' measures {}x{}, anchored at {:?}",
            self.text, text_width, text_height, anchor
        );
        draw_text_with_shadow(
            img,
            face,
            &self.text,
            anchor,
            paint(self.color),
            self.shadow,
            paint(self.shadow_color),
        );
    }
}

impl Layer for TextLayer {
    fn apply(&self, image: DynamicImage, context: &RenderContext) -> Result<DynamicImage> {
        let face = self.weight.load(&context.fonts, self.size);

        Ok(match image {
            DynamicImage::ImageRgb8(mut img) => {
                self.draw(&mut img, &face, Color::to_rgb);
                DynamicImage::ImageRgb8(img)
            }
            other => {
                let mut img = other.into_rgba8();
                self.draw(&mut img, &face, Color::to_rgba);
                DynamicImage::ImageRgba8(img)
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The two-tone "CRAFT MINER" logo with its address line underneath
pub struct WordmarkLayer {
    pub first: String,
    pub second: String,
    pub subtitle: String,
}

impl WordmarkLayer {
    const TITLE_SIZE: f32 = 72.0;
    const SUBTITLE_SIZE: f32 = 24.0;
    const TITLE_Y: i32 = 50;
    const SUBTITLE_Y: i32 = 150;
    const SHADOW: Shadow = Shadow::Offset(3);

    /// Both faces come from disk, or both fall back
    fn faces(fonts: &FontPaths) -> (Typeface, Typeface) {
        let title = FontWeight::Bold.load(fonts, Self::TITLE_SIZE);
        let subtitle = FontWeight::Regular.load(fonts, Self::SUBTITLE_SIZE);
        if title.is_fallback() || subtitle.is_fallback() {
            (
                Typeface::fallback(Self::TITLE_SIZE),
                Typeface::fallback(Self::SUBTITLE_SIZE),
            )
        } else {
            (title, subtitle)
        }
    }

    /// Anchors of the first word, the second word and the subtitle
    pub fn anchors(width: u32, first_width: u32, subtitle_width: u32) -> [(i32, i32); 3] {
        let (w, first_w, sub_w) = (width as i32, first_width as i32, subtitle_width as i32);
        [
            ((w - first_w).div_euclid(4), Self::TITLE_Y),
            ((w + first_w).div_euclid(2) + 50, Self::TITLE_Y),
            ((w - sub_w).div_euclid(2), Self::SUBTITLE_Y),
        ]
    }
}

impl Layer for WordmarkLayer {
    fn apply(&self, image: DynamicImage, context: &RenderContext) -> Result<DynamicImage> {
        let mut img = image.into_rgb8();
        let (title, subtitle) = Self::faces(&context.fonts);

        let (first_width, _) = title.text_size(&self.first);
        let (subtitle_width, _) = subtitle.text_size(&self.subtitle);
        let [first_at, second_at, subtitle_at] =
            Self::anchors(img.width(), first_width, subtitle_width);

        let black = Color::BLACK.to_rgb();
        draw_text_with_shadow(
            &mut img,
            &title,
            &self.first,
            first_at,
            Color::new(255, 140, 0).to_rgb(),
            Self::SHADOW,
            black,
        );
        draw_text_with_shadow(
            &mut img,
            &title,
            &self.second,
            second_at,
            Color::WHITE.to_rgb(),
            Self::SHADOW,
            black,
        );
        draw_text_with_shadow(
            &mut img,
            &subtitle,
            &self.subtitle,
            subtitle_at,
            Color::from(0xB0B0B0).to_rgb(),
            Shadow::None,
            black,
        );

        Ok(DynamicImage::ImageRgb8(img))
    }

    fn name(&self) -> &str {
        "Wordmark"
    }
}
