use craftminer_art::{FontPaths, GeneratorConfig};
use tempfile::TempDir;

/// Creates a GeneratorConfig writing into a fresh temporary directory.
/// Returns both the config and the temp directory (which must be kept alive).
pub fn create_test_config() -> (GeneratorConfig, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::new(dir.path().join("images"));
    (config, dir)
}

/// Font paths inside `dir` that are guaranteed not to exist
pub fn missing_fonts(dir: &TempDir) -> FontPaths {
    FontPaths {
        bold: dir.path().join("fonts/NoSuchFont-Bold.ttf"),
        regular: dir.path().join("fonts/NoSuchFont.ttf"),
    }
}

/// Names of the files directly inside `dir`, sorted
pub fn list_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read output directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub const PLACEHOLDER_FILES: [(&str, (u32, u32)); 5] = [
    ("news-banner.jpg", (800, 400)),
    ("events-banner.jpg", (800, 400)),
    ("update-banner.jpg", (800, 400)),
    ("admin-avatar.jpg", (80, 80)),
    ("craftminer-logo.png", (600, 200)),
];

pub const BANNER_FILES: [(&str, (u32, u32)); 2] = [
    ("craftminer-banner.png", (1920, 1080)),
    ("craftminer-banner-small.png", (800, 200)),
];

/// Bounds `(x0, y0, x1, y1)` of every pixel that is not pure black
pub fn ink_extents(img: &image::RgbImage) -> Option<(u32, u32, u32, u32)> {
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
