//! End-to-end tests for the placeholder image set.

mod common;

use common::*;

#[test]
fn test_generates_exactly_five_files() -> anyhow::Result<()> {
    let (config, _temp_dir) = create_test_config();
    let output_dir = config.output_dir.clone();

    let written = Generator::new(config).run(&placeholder_set())?;
    assert_eq!(written.len(), 5);

    let mut expected: Vec<String> = PLACEHOLDER_FILES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    expected.sort();
    assert_eq!(list_files(&output_dir), expected);

    Ok(())
}

#[test]
fn test_placeholder_dimensions() -> anyhow::Result<()> {
    let (config, _temp_dir) = create_test_config();
    let output_dir = config.output_dir.clone();
    Generator::new(config).run(&placeholder_set())?;

    for (name, dims) in PLACEHOLDER_FILES {
        let actual = image::image_dimensions(output_dir.join(name))?;
        assert_eq!(actual, dims, "{} has wrong dimensions", name);
    }

    Ok(())
}

#[test]
fn test_avatar_is_saved_as_opaque_jpeg() -> anyhow::Result<()> {
    let (config, _temp_dir) = create_test_config();
    let path = Generator::new(config).generate(&placeholder_set().assets[3])?;

    let format = image::ImageFormat::from_path(&path)?;
    assert_eq!(format, image::ImageFormat::Jpeg);

    let avatar = image::open(&path)?;
    assert!(!avatar.color().has_alpha());
    assert_eq!((avatar.width(), avatar.height()), (80, 80));

    Ok(())
}

#[test]
fn test_logo_keeps_gradient_corners() -> anyhow::Result<()> {
    let (config, _temp_dir) = create_test_config();
    let path = Generator::new(config).generate(&placeholder_set().assets[4])?;

    let logo = image::open(&path)?.into_rgb8();
    // Vertical gradient from orange: the top-left corner is untouched by text
    assert_eq!(logo.get_pixel(0, 0).0, [255, 140, 0]);
    assert_eq!(logo.get_pixel(599, 0).0, [255, 140, 0]);

    Ok(())
}

#[test]
fn test_output_directory_is_created() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let nested = dir.path().join("site").join("images");
    assert!(!nested.exists());

    let config = GeneratorConfig::new(&nested);
    Generator::new(config).generate(&placeholder_set().assets[0])?;

    assert!(nested.join("news-banner.jpg").is_file());
    Ok(())
}
