use image::{ImageFormat, Rgb, Rgba};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`, truncating each channel.
    /// `ratio` is expected to lie in `0.0..=1.0`.
    pub fn lerp(self, other: Color, ratio: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - ratio) + b as f64 * ratio) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        Color { r, g, b }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color { r, g, b }
    }
}

/// Axis a gradient runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Color changes from left to right; every column is one band
    Horizontal,
    /// Color changes from top to bottom; every row is one band
    Vertical,
}

/// Where a text block is anchored on the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPosition {
    Center,
    Top,
    Bottom,
    CenterTop,
    CenterBottom,
}

impl TextPosition {
    /// Top-left anchor for a `text_width` x `text_height` box on a
    /// `width` x `height` image. Divisions floor toward negative infinity.
    pub fn anchor(self, width: u32, height: u32, text_width: u32, text_height: u32) -> (i32, i32) {
        let (w, h) = (width as i32, height as i32);
        let (tw, th) = (text_width as i32, text_height as i32);

        let x = (w - tw).div_euclid(2);
        let middle = (h - th).div_euclid(2);
        let y = match self {
            TextPosition::Center => middle,
            TextPosition::Top => 50,
            TextPosition::Bottom => h - th - 50,
            TextPosition::CenterTop => middle - 30,
            TextPosition::CenterBottom => middle + 30,
        };
        (x, y)
    }
}

/// Encoding used when an image is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// JPEG has no alpha channel
    pub fn supports_alpha(self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}
