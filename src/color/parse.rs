use thiserror::Error;

use crate::color::model::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length: {0} digits")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
    #[error("invalid rgb()/rgba() function")]
    InvalidFunc,
    #[error("component out of range")]
    OutOfRange,
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode hex digits into one value per digit, reporting the first bad char.
fn nibbles(hex: &str) -> Result<Vec<u8>, ColorParseError> {
    hex.chars()
        .map(|c| {
            u8::try_from(c)
                .ok()
                .and_then(nibble)
                .ok_or(ColorParseError::InvalidHex(c))
        })
        .collect()
}

/// Parse exactly six hex digits, with or without one leading `#`.
///
/// This is the strict form used for accent colors: no whitespace trimming,
/// no shorthand, no alpha.
pub fn parse_hex6(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.is_empty() {
        return Err(Empty);
    }
    let count = hex.chars().count();
    if count != 6 {
        return Err(InvalidLength(count));
    }

    let n = nibbles(hex)?;
    Ok(Color::rgb(
        n[0] << 4 | n[1],
        n[2] << 4 | n[3],
        n[4] << 4 | n[5],
    ))
}

/// Parse a hex color from a string.
///
/// The allowed formats are:
/// * #RGB
/// * #RGBA
/// * #RRGGBB
/// * #RRGGBBAA
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let count = hex.chars().count();
    if !matches!(count, 3 | 4 | 6 | 8) {
        return Err(InvalidLength(count));
    }
    let n = nibbles(hex)?;

    let rgba = match n.len() {
        // #RGB / #RGBA
        3 => [n[0] * 17, n[1] * 17, n[2] * 17, 255],
        4 => [n[0] * 17, n[1] * 17, n[2] * 17, n[3] * 17],
        // #RRGGBB / #RRGGBBAA
        6 => [n[0] << 4 | n[1], n[2] << 4 | n[3], n[4] << 4 | n[5], 255],
        _ => [
            n[0] << 4 | n[1],
            n[2] << 4 | n[3],
            n[4] << 4 | n[5],
            n[6] << 4 | n[7],
        ],
    };

    Ok(Color::from_rgba(rgba))
}

fn channel(token: &str) -> Result<u8, ColorParseError> {
    token
        .parse::<u16>()
        .ok()
        .filter(|&v| v <= 255)
        .map(|v| v as u8)
        .ok_or(ColorParseError::OutOfRange)
}

// CSS <alpha-value>: a number in 0..=1 (so `1` is opaque) or a percentage
fn alpha(token: &str) -> Result<u8, ColorParseError> {
    let f = match token.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().ok().map(|p| p / 100.0),
        None => token.parse::<f32>().ok(),
    };
    let f = f
        .filter(|f| (0.0..=1.0).contains(f))
        .ok_or(ColorParseError::OutOfRange)?;
    Ok((f * 255.0 + 0.5).floor() as u8)
}

/// Parse the arguments of a CSS rgb()/rgba() function.
///
/// The allowed styles are:
/// rgb(r,g,b)
/// rgba(r,g,b,a)
fn parse_css_rgb(args: &str, with_alpha: bool) -> Result<Color, ColorParseError> {
    let nums: Vec<&str> = args.split(',').map(|t| t.trim()).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if nums.len() != expected {
        return Err(ColorParseError::InvalidFunc);
    }

    let r = channel(nums[0])?;
    let g = channel(nums[1])?;
    let b = channel(nums[2])?;
    let a = if with_alpha { alpha(nums[3])? } else { 255 };

    Ok(Color::rgba(r, g, b, a))
}

/// Parse a configuration color: `#`-prefixed hex (3/4/6/8 digits) or
/// `rgb(r,g,b)` / `rgba(r,g,b,a)`.
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }

    if let Some(rest) = s.strip_prefix('#') {
        return parse_hex(rest.trim());
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .and_then(|x| x.strip_suffix(')'))
    {
        return parse_css_rgb(args, true);
    }
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_rgb(args, false);
    }

    Err(InvalidFunc)
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
