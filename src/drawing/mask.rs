use image::{DynamicImage, GrayImage, Luma, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;

/// Opaque disk inscribed in a `width` x `height` box, transparent elsewhere
pub fn circle_mask(width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let center = ((width / 2) as i32, (height / 2) as i32);
    draw_filled_ellipse_mut(
        &mut mask,
        center,
        (width / 2) as i32,
        (height / 2) as i32,
        Luma([255]),
    );
    mask
}

/// Attach `mask` as the alpha channel of `img`
pub fn apply_alpha(img: &RgbImage, mask: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        let alpha = mask.get_pixel(x, y).0[0];
        image::Rgba([r, g, b, alpha])
    })
}

/// Drop the alpha channel, keeping the color under transparent pixels
pub fn flatten(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}
