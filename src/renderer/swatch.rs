//! Palette preview: one row per entry with three cells,
//! base color | card background | accent over background.

use crate::color::model::Color;
use crate::error::{Error, Result};
use crate::palette::PaletteAccent;
use crate::renderer::frame::Frame;

pub const CELL_WIDTH: u32 = 48;
pub const ROW_HEIGHT: u32 = 32;
const CELLS: u32 = 3;

/// Pixel height for `rows` entries, failing if it doesn't fit a u32.
pub fn swatch_height(rows: usize) -> Result<u32> {
    u32::try_from(rows)
        .ok()
        .and_then(|r| r.checked_mul(ROW_HEIGHT))
        .ok_or(Error::SwatchTooLarge(rows))
}

pub fn render_swatch(accents: &[PaletteAccent], background: Color) -> Result<Frame> {
    let height = swatch_height(accents.len())?;
    let mut frame = Frame::new(CELL_WIDTH * CELLS, height);

    // every row offset is below `height`, so these products can't overflow
    for (y, entry) in (0..height).step_by(ROW_HEIGHT as usize).zip(accents) {
        frame.fill_rect(0, y, CELL_WIDTH, ROW_HEIGHT, entry.base.with_alpha(255));
        // background under both the plain and the hover cell
        frame.fill_rect(CELL_WIDTH, y, CELL_WIDTH * 2, ROW_HEIGHT, background);
        // hover state, as the browser would paint it
        frame.blend_rect(
            CELL_WIDTH * 2,
            y,
            CELL_WIDTH,
            ROW_HEIGHT,
            entry.accent.to_color(),
        );
    }

    tracing::debug!(
        rows = accents.len(),
        width = frame.width(),
        height = frame.height(),
        "rendered swatch"
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::complementary_accent;

    fn entry(name: &str, base: Color) -> PaletteAccent {
        PaletteAccent {
            name: name.to_string(),
            base,
            accent: complementary_accent(base),
        }
    }

    #[test]
    fn layout_matches_entries() {
        let accents = [
            entry("red", Color::rgb(255, 0, 0)),
            entry("green", Color::rgb(0, 255, 0)),
        ];
        let bg = Color::rgb(0, 0, 0);
        let frame = render_swatch(&accents, bg).unwrap();

        assert_eq!(frame.width(), CELL_WIDTH * 3);
        assert_eq!(frame.height(), ROW_HEIGHT * 2);

        assert_eq!(frame.get_pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(frame.get_pixel(CELL_WIDTH, 0), Some(bg));
        // cyan at 20% over black
        assert_eq!(frame.get_pixel(CELL_WIDTH * 2, 0), Some(Color::rgb(0, 51, 51)));

        let second = ROW_HEIGHT + 1;
        assert_eq!(frame.get_pixel(1, second), Some(Color::rgb(0, 255, 0)));
        assert_eq!(
            frame.get_pixel(CELL_WIDTH * 3 - 1, second),
            Some(Color::rgb(51, 0, 51))
        );
    }

    #[test]
    fn empty_palette_renders_nothing() {
        let frame = render_swatch(&[], Color::default()).unwrap();
        assert_eq!(frame.height(), 0);
        assert!(frame.as_slice().is_empty());
    }

    #[test]
    fn height_overflow_is_an_error() {
        assert_eq!(swatch_height(3).unwrap(), ROW_HEIGHT * 3);
        let rows = (u32::MAX / ROW_HEIGHT) as usize + 1;
        assert!(matches!(swatch_height(rows), Err(Error::SwatchTooLarge(n)) if n == rows));
        assert!(matches!(swatch_height(usize::MAX), Err(Error::SwatchTooLarge(_))));
    }
}
