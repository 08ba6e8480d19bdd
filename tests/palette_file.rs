use std::fs;

use folio_accent::color::Color;
use folio_accent::palette::{DEFAULT_BACKGROUND, Palette};
use folio_accent::renderer::render_swatch;
use folio_accent::renderer::swatch::{CELL_WIDTH, ROW_HEIGHT};
use folio_accent::Error;

const PALETTE: &str = r##"
background = "rgb(255, 255, 255)"

[[entry]]
name = "Helix"
color = "#6B4EFF"

[[entry]]
name = "Slate"
color = "808080"
"##;

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.toml");
    fs::write(&path, PALETTE).unwrap();

    let palette = Palette::load(&path).unwrap();
    assert_eq!(palette.background, Color::rgb(255, 255, 255));

    let accents = palette.accents().unwrap();
    let lines: Vec<String> = accents
        .iter()
        .map(|a| format!("{}: {}", a.name, a.accent))
        .collect();
    assert_eq!(
        lines,
        ["Helix: rgba(226, 255, 78, 0.2)", "Slate: rgba(128, 128, 128, 0.2)"]
    );
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Palette::load(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("nope.toml"), "{err}");
}

#[test]
fn malformed_entry_fails_without_fallback() {
    let palette = Palette::from_toml_str(
        r##"
[[entry]]
name = "Broken"
color = "#12"
"##,
    )
    .unwrap();
    let err = palette.accents().unwrap_err();
    assert_eq!(err.to_string(), "palette entry 'Broken': invalid hex length: 2 digits");
}

#[test]
fn swatch_png_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("swatch.png");

    let palette = Palette::default();
    let accents = palette.accents().unwrap();
    render_swatch(&accents, DEFAULT_BACKGROUND)
        .unwrap()
        .save_png(&out)
        .unwrap();

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (CELL_WIDTH * 3, ROW_HEIGHT * accents.len() as u32));

    let base = accents[0].base;
    assert_eq!(img.get_pixel(0, 0).0, [base.r, base.g, base.b, 255]);
    let bg = DEFAULT_BACKGROUND;
    assert_eq!(img.get_pixel(CELL_WIDTH, 0).0, [bg.r, bg.g, bg.b, 255]);

    let hover = accents[0].accent.to_color().over_srgb_fast(bg);
    assert_eq!(img.get_pixel(CELL_WIDTH * 2, 0).0, hover.into_rgba());
}
