use std::fmt::{self};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// stores sRGB under the hood, straight (not premultiplied) alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    // Porter-Duff "over" in sRGB space, matching how browsers paint `rgba()` backgrounds.
    // https://keithp.com/~keithp/porterduff/p253-porter.pdf
    #[must_use]
    #[inline]
    pub fn over_srgb_fast(self, mut dst: Color) -> Color {
        let sa = self.a as f32 / 255.0;
        if sa <= 0.0 {
            return dst;
        }
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let blend = |sc: u8, dc: u8| -> u8 {
            let sc = sc as f32 / 255.0;
            let dc = dc as f32 / 255.0;
            let out = (sc * sa + dc * da * (1.0 - sa)) / out_a.max(1e-6);
            (out * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
        };

        let r = blend(self.r, dst.r);
        let g = blend(self.g, dst.g);
        let b = blend(self.b, dst.b);
        let a = (out_a * 255.0 + 0.5).floor() as u8;

        dst.r = r;
        dst.g = g;
        dst.b = b;
        dst.a = a;
        dst
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    #[must_use]
    #[inline]
    pub fn into_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    #[inline]
    pub fn into_hex8(self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // default to RGBA hex for lossless stringification
        write!(f, "#{}", self.into_hex8())
    }
}

// config files carry colors as strings, so serde goes through the parser
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.a == 255 {
            serializer.serialize_str(&format!("#{}", self.into_hex6()))
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn hex_and_display() {
        let c = Color::rgba(0x6b, 0x4e, 0xff, 0x33);
        assert_eq!(c.into_hex6(), "6b4eff");
        assert_eq!(c.into_hex8(), "6b4eff33");
        assert_eq!(c.to_string(), "#6b4eff33");
    }

    #[test]
    fn over_with_transparent_source_keeps_dst() {
        let dst = Color::rgb(10, 20, 30);
        assert_eq!(Color::rgba(255, 0, 0, 0).over_srgb_fast(dst), dst);
    }

    #[test]
    fn over_with_opaque_source_replaces_dst() {
        let src = Color::rgb(200, 100, 50);
        assert_eq!(src.over_srgb_fast(Color::rgb(1, 2, 3)), src);
    }

    #[test]
    fn over_translucent_on_opaque() {
        // 51/255 = 0.2
        let out = Color::rgba(255, 255, 255, 51).over_srgb_fast(Color::rgb(0, 0, 0));
        assert_eq!(out, Color::rgb(51, 51, 51));
    }

    #[test]
    fn conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::from_rgb([1, 2, 3]));
        assert_eq!(Color::from_rgba([1, 2, 3, 4]).into_rgba(), [1, 2, 3, 4]);
        assert_eq!(Color::rgba(9, 8, 7, 6).into_rgb(), [9, 8, 7]);
        assert_eq!(Color::rgb(9, 8, 7).with_alpha(0).a, 0);
    }
}
