//! Complementary hover accents.
//!
//! A project card's accent is its palette color with the hue turned 180°,
//! painted at 20% opacity. Saturation and lightness are kept, so grays map
//! to themselves.

use std::fmt;

use crate::color::hsl::Hsl;
use crate::color::model::Color;
use crate::color::parse::{ColorParseError, parse_hex6};
use crate::traits::float::Float;

/// Opacity every accent is painted with.
pub const ACCENT_ALPHA: f32 = 0.2;

/// An opaque color plus a fractional alpha, printed as CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accent {
    pub color: Color,
    pub alpha: f32,
}

impl Accent {
    /// Fold the fractional alpha into the color's 8 bit alpha channel.
    #[must_use]
    pub fn to_color(self) -> Color {
        self.color.with_alpha(self.alpha.clamp01().to_channel())
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

/// Hue-rotate a color by 180°. Alpha passes through untouched.
///
/// The math runs in `f64` so results match browser JavaScript exactly.
#[must_use]
pub fn complementary(color: Color) -> Color {
    let hsl: Hsl<f64> = color.into_hsl();
    Color::from_hsl(hsl.complement()).with_alpha(color.a)
}

#[must_use]
pub fn complementary_accent(color: Color) -> Accent {
    Accent {
        color: complementary(color).with_alpha(255),
        alpha: ACCENT_ALPHA,
    }
}

/// `"#6B4EFF"` -> `"rgba(226, 255, 78, 0.2)"`.
///
/// Input must be exactly six hex digits, optionally behind a `#`.
pub fn complementary_color(hex: &str) -> Result<String, ColorParseError> {
    let color = parse_hex6(hex)?;
    let accent = complementary_accent(color);
    tracing::trace!(input = hex, %accent, "computed complementary accent");
    Ok(accent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_goes_cyan() {
        assert_eq!(
            complementary_color("#FF0000").as_deref(),
            Ok("rgba(0, 255, 255, 0.2)")
        );
    }

    #[test]
    fn green_goes_magenta() {
        assert_eq!(
            complementary_color("#00FF00").as_deref(),
            Ok("rgba(255, 0, 255, 0.2)")
        );
    }

    #[test]
    fn blue_goes_yellow() {
        assert_eq!(
            complementary_color("0000ff").as_deref(),
            Ok("rgba(255, 255, 0, 0.2)")
        );
    }

    #[test]
    fn known_palette_color() {
        // h ≈ 250.0°, s = 1, l ≈ 0.653 -> h ≈ 70.0°
        assert_eq!(
            complementary_color("#6B4EFF").as_deref(),
            Ok("rgba(226, 255, 78, 0.2)")
        );
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(complementary_color("#6B4EFF"), complementary_color("6B4EFF"));
        assert_eq!(complementary_color("#6b4eff"), complementary_color("6B4EFF"));
    }

    #[test]
    fn grays_are_fixed_points() {
        for v in [0u8, 1, 17, 128, 200, 254, 255] {
            let hex = format!("{v:02x}{v:02x}{v:02x}");
            assert_eq!(
                complementary_color(&hex),
                Ok(format!("rgba({v}, {v}, {v}, 0.2)"))
            );
        }
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(complementary_color("").is_err());
        assert!(complementary_color("#fff").is_err());
        assert!(complementary_color("zzzzzz").is_err());
        assert!(complementary_color("#12345G").is_err());
    }

    #[test]
    fn opaque_complement_keeps_alpha() {
        let c = Color::rgba(255, 0, 0, 9);
        assert_eq!(complementary(c), Color::rgba(0, 255, 255, 9));
    }

    #[test]
    fn accent_folds_alpha() {
        let accent = complementary_accent(Color::rgb(255, 0, 0));
        assert_eq!(accent.to_color(), Color::rgba(0, 255, 255, 51));
    }
}
