//! Text anchoring with a real TrueType face, and the banner halo shadow.
//!
//! Tests that need the system DejaVu fonts return early when they are not
//! installed.

mod common;

use common::*;
use craftminer_art::assets::mini_banner;
use craftminer_art::drawing::{FontWeight, Gradient, TextLayer};
use craftminer_art::{Color, Composition, Direction, RenderContext, TextPosition};

#[test]
fn test_truetype_text_is_anchored_by_its_ink_box() -> anyhow::Result<()> {
    let fonts = FontPaths::default();
    if !fonts.bold.exists() {
        eprintln!("skipping: {} not installed", fonts.bold.display());
        return Ok(());
    }

    let text = "play.craftminer.com";
    let black = Gradient::new(Color::BLACK, Color::BLACK, Direction::Horizontal);
    let composition = Composition::new(800, 200, black).add_layer_boxed(Box::new(
        TextLayer::new(text, 48.0, Color::WHITE, TextPosition::CenterBottom),
    ));
    let img = composition
        .render(&RenderContext::new(fonts.clone()))?
        .into_rgb8();

    let face = FontWeight::Bold.load(&fonts, 48.0);
    assert!(!face.is_fallback());
    let tb = face.text_box(text);
    let (x, y) = TextPosition::CenterBottom.anchor(800, 200, tb.width, tb.height);

    let (x0, y0, x1, y1) = ink_extents(&img).expect("text should leave ink");
    assert!((x0 as i32 - (x + tb.left)).abs() <= 1, "left {} vs {:?}", x0, tb);
    assert!((y0 as i32 - (y + tb.top)).abs() <= 1, "top {} vs {:?}", y0, tb);
    assert!(((x1 - x0 + 1) as i32 - tb.width as i32).abs() <= 2);
    assert!(((y1 - y0 + 1) as i32 - tb.height as i32).abs() <= 2);

    Ok(())
}

#[test]
fn test_banner_title_has_halo_on_every_side() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let context = RenderContext::new(missing_fonts(&temp_dir));
    let img = mini_banner().render(&context)?.into_rgb8();

    // Fallback "CRAFTMINER" is 80x8, anchored at (360, 66) on the 800x200 banner
    let black: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 == [0, 0, 0])
        .map(|(x, y, _)| (x, y))
        .collect();

    let title_rows = 63..=77;
    assert!(
        black
            .iter()
            .any(|&(x, y)| x < 360 && title_rows.contains(&y)),
        "no shadow left of the title"
    );
    assert!(
        black
            .iter()
            .any(|&(x, y)| y < 66 && (357..444).contains(&x)),
        "no shadow above the title"
    );
    // Halo never reaches beyond radius 3
    assert!(
        black
            .iter()
            .filter(|&&(_, y)| y < 100)
            .all(|&(x, y)| (357..444).contains(&x) && title_rows.contains(&y))
    );

    Ok(())
}
