//! The website's artwork: which images exist, how each one is layered, and
//! which file it ends up in.

use std::path::Path;

use crate::drawing::{
    CellKey, CellStyle, CircleMaskLayer, FontWeight, Gradient, GridLines, GridLinesLayer, Shadow,
    Shape, ShapeGrid, ShapeGridLayer, TextLayer, WordmarkLayer,
};
use crate::models::{Color, Direction, OutputFormat, TextPosition};
use crate::pipeline::Composition;

const ORANGE: Color = Color::new(255, 140, 0);
const DARK: Color = Color::new(26, 26, 26);

/// One output file and the composition that produces it
#[derive(Clone)]
pub struct Asset {
    pub file_name: &'static str,
    pub format: OutputFormat,
    pub composition: Composition,
}

impl Asset {
    pub fn new(file_name: &'static str, format: OutputFormat, composition: Composition) -> Self {
        Self {
            file_name,
            format,
            composition,
        }
    }

    /// File name without extension
    pub fn stem(&self) -> &str {
        Path::new(self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.file_name)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.composition.width, self.composition.height)
    }
}

/// A group of images generated together
#[derive(Clone)]
pub struct AssetSet {
    pub intro: &'static str,
    pub outro: &'static str,
    /// Append `(WxH)` to each status line
    pub show_dimensions: bool,
    pub assets: Vec<Asset>,
}

impl AssetSet {
    pub fn status_line(&self, asset: &Asset) -> String {
        if self.show_dimensions {
            let (w, h) = asset.dimensions();
            format!("✓ Created {} ({}x{})", asset.file_name, w, h)
        } else {
            format!("✓ Created {}", asset.file_name)
        }
    }
}

// Placeholder set: gradients run top to bottom.

fn placeholder_gradient(from: Color, to: Color) -> Gradient {
    Gradient::new(from, to, Direction::Vertical)
}

fn placeholder_title(text: &str) -> Box<TextLayer> {
    Box::new(
        TextLayer::new(text, 48.0, Color::WHITE, TextPosition::Center)
            .with_shadow(Shadow::Offset(2), Color::BLACK),
    )
}

pub fn news_banner() -> Composition {
    let blocks = ShapeGrid {
        stride: 50,
        size: 30,
        shape: Shape::Rectangle,
        cell_key: CellKey::Sum,
        period: 100,
        styles: vec![CellStyle {
            key: 0,
            fill: Color::new(34, 197, 94),
            outline: Some(Color::new(22, 163, 74)),
        }],
    };

    Composition::new(800, 400, placeholder_gradient(ORANGE, DARK))
        .add_layer_boxed(Box::new(ShapeGridLayer { grid: blocks }))
        .add_layer_boxed(placeholder_title("CRAFTMINER NEWS"))
}

pub fn events_banner() -> Composition {
    let stars = ShapeGrid {
        stride: 60,
        size: 20,
        shape: Shape::Ellipse,
        cell_key: CellKey::Product,
        period: 120,
        styles: vec![CellStyle {
            key: 0,
            fill: Color::new(251, 191, 36),
            outline: None,
        }],
    };

    Composition::new(800, 400, placeholder_gradient(Color::new(139, 92, 246), DARK))
        .add_layer_boxed(Box::new(ShapeGridLayer { grid: stars }))
        .add_layer_boxed(placeholder_title("EVENTS"))
}

pub fn update_banner() -> Composition {
    let lines = GridLines {
        spacing: 40,
        color: Color::new(96, 165, 250),
    };

    Composition::new(800, 400, placeholder_gradient(Color::new(59, 130, 246), DARK))
        .add_layer_boxed(Box::new(GridLinesLayer { lines }))
        .add_layer_boxed(placeholder_title("UPDATES"))
}

pub fn admin_avatar() -> Composition {
    Composition::new(80, 80, placeholder_gradient(ORANGE, Color::new(255, 69, 0)))
        .add_layer_boxed(Box::new(CircleMaskLayer))
        .add_layer_boxed(Box::new(TextLayer::new(
            "ADMIN",
            12.0,
            Color::WHITE,
            TextPosition::Center,
        )))
}

pub fn craftminer_logo() -> Composition {
    Composition::new(600, 200, placeholder_gradient(ORANGE, Color::WHITE)).add_layer_boxed(
        Box::new(WordmarkLayer {
            first: "CRAFT".to_string(),
            second: "MINER".to_string(),
            subtitle: "play.craftminer.com".to_string(),
        }),
    )
}

pub fn placeholder_set() -> AssetSet {
    AssetSet {
        intro: "Creating placeholder images...",
        outro: "\nAll placeholder images created successfully!",
        show_dimensions: false,
        assets: vec![
            Asset::new("news-banner.jpg", OutputFormat::Jpeg, news_banner()),
            Asset::new("events-banner.jpg", OutputFormat::Jpeg, events_banner()),
            Asset::new("update-banner.jpg", OutputFormat::Jpeg, update_banner()),
            Asset::new("admin-avatar.jpg", OutputFormat::Jpeg, admin_avatar()),
            Asset::new("craftminer-logo.png", OutputFormat::Png, craftminer_logo()),
        ],
    }
}

// Banner set: gradients run left to right, titles get a thick halo.

/// Orange and white blocks alternating along the diagonals
fn block_checker(stride: u32, size: u32) -> ShapeGrid {
    ShapeGrid {
        stride,
        size,
        shape: Shape::Rectangle,
        cell_key: CellKey::Sum,
        period: stride * 2,
        styles: vec![
            CellStyle {
                key: 0,
                fill: ORANGE,
                outline: Some(Color::new(200, 100, 0)),
            },
            CellStyle {
                key: stride,
                fill: Color::WHITE,
                outline: Some(Color::new(200, 200, 200)),
            },
        ],
    }
}

fn banner(width: u32, height: u32, stride: u32, block: u32, title: f32, address: f32) -> Composition {
    let halo = Shadow::Halo(3);

    Composition::new(width, height, Gradient::new(ORANGE, Color::WHITE, Direction::Horizontal))
        .add_layer_boxed(Box::new(ShapeGridLayer {
            grid: block_checker(stride, block),
        }))
        .add_layer_boxed(Box::new(
            TextLayer::new("CRAFTMINER", title, Color::from(0xFF8C00), TextPosition::CenterTop)
                .with_weight(FontWeight::Bold)
                .with_shadow(halo, Color::BLACK),
        ))
        .add_layer_boxed(Box::new(
            TextLayer::new(
                "play.craftminer.com",
                address,
                Color::from(0xB8860B),
                TextPosition::CenterBottom,
            )
            .with_shadow(halo, Color::BLACK),
        ))
}

pub fn craftminer_banner() -> Composition {
    banner(1920, 1080, 80, 30, 120.0, 48.0)
}

pub fn mini_banner() -> Composition {
    banner(800, 200, 40, 15, 48.0, 24.0)
}

pub fn banner_set() -> AssetSet {
    AssetSet {
        intro: "Creating new CraftMiner banner...",
        outro: "\nNew CraftMiner banner created successfully!",
        show_dimensions: true,
        assets: vec![
            Asset::new("craftminer-banner.png", OutputFormat::Png, craftminer_banner()),
            Asset::new("craftminer-banner-small.png", OutputFormat::Png, mini_banner()),
        ],
    }
}
