use crate::color::model::Color;
use crate::traits::float::Float;

/// Hue/saturation/lightness triple.
///
/// `h` is in degrees, `s` and `l` are fractions in `0.0..=1.0`
/// (not percentages, unlike CSS `hsl()`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl<T> {
    pub h: T,
    pub s: T,
    pub l: T,
}

impl<T: Float> Hsl<T> {
    /// Build an HSL value, wrapping the hue into `0..360` and clamping `s`/`l`.
    /// A non-finite hue is treated as 0.
    pub fn new(h: T, s: T, l: T) -> Self {
        let h = if h.is_finite() { wrap_hue(h) } else { T::ZERO };
        Self {
            h,
            s: s.clamp01(),
            l: l.clamp01(),
        }
    }

    /// RGB -> HSL with the usual max/min/delta method.
    // solution from https://www.rapidtables.com/convert/color/rgb-to-hsl.html
    pub fn from_color(color: Color) -> Self {
        let r_prime = T::from_channel(color.r);
        let g_prime = T::from_channel(color.g);
        let b_prime = T::from_channel(color.b);

        let c_max = r_prime.max(g_prime).max(b_prime);
        let c_min = r_prime.min(g_prime).min(b_prime);
        let delta = c_max.sub(c_min);

        let sixty = T::from_f64(60.0);
        let h = if delta == T::ZERO {
            T::ZERO
        } else {
            let sector = if r_prime == c_max {
                g_prime.sub(b_prime).div(delta).rem(T::from_f64(6.0))
            } else if g_prime == c_max {
                b_prime.sub(r_prime).div(delta).add(T::from_f64(2.0))
            } else {
                r_prime.sub(g_prime).div(delta).add(T::from_f64(4.0))
            };
            let h = sector.mul(sixty);
            if h < T::ZERO {
                h.add(T::from_f64(360.0))
            } else {
                h
            }
        };

        let two = T::from_f64(2.0);
        let l = c_max.add(c_min).div(two);

        let s = if delta == T::ZERO {
            T::ZERO
        } else {
            delta.div(T::ONE.sub(two.mul(l).sub(T::ONE).abs()))
        };

        Self { h, s, l }
    }

    /// HSL -> RGB with the chroma/sextant method. Alpha comes out opaque.
    // solution from https://www.rapidtables.com/convert/color/hsl-to-rgb.html
    pub fn into_color(self) -> Color {
        let Self { h, s, l } = self;
        let two = T::from_f64(2.0);
        let sixty = T::from_f64(60.0);

        let c = T::ONE.sub(two.mul(l).sub(T::ONE).abs()).mul(s);
        let x = c.mul(T::ONE.sub(h.div(sixty).rem(two).sub(T::ONE).abs()));
        let m = l.sub(c.div(two));

        let z = T::ZERO;
        let (r_prime, g_prime, b_prime) = if h < sixty {
            (c, x, z)
        } else if h < T::from_f64(120.0) {
            (x, c, z)
        } else if h < T::from_f64(180.0) {
            (z, c, x)
        } else if h < T::from_f64(240.0) {
            (z, x, c)
        } else if h < T::from_f64(300.0) {
            (x, z, c)
        } else {
            (c, z, x) // 300.0..360.0
        };

        Color::rgb(
            r_prime.add(m).to_channel(),
            g_prime.add(m).to_channel(),
            b_prime.add(m).to_channel(),
        )
    }

    /// Rotate the hue, keeping saturation and lightness.
    #[must_use]
    pub fn rotate_hue(self, degrees: T) -> Self {
        Self {
            h: wrap_hue(self.h.add(degrees)),
            ..self
        }
    }

    /// The hue on the opposite side of the color wheel.
    #[must_use]
    pub fn complement(self) -> Self {
        self.rotate_hue(T::from_f64(180.0))
    }
}

// `%` keeps the sign of the dividend, so negatives need a second pass.
fn wrap_hue<T: Float>(h: T) -> T {
    let full = T::from_f64(360.0);
    let h = h.rem(full);
    if h < T::ZERO { h.add(full) } else { h }
}

impl Color {
    #[must_use]
    #[inline]
    pub fn into_hsl<T: Float>(self) -> Hsl<T> {
        Hsl::from_color(self)
    }

    /// Convert back from HSL, keeping this crate's straight alpha convention (opaque).
    #[must_use]
    #[inline]
    pub fn from_hsl<T: Float>(hsl: Hsl<T>) -> Self {
        hsl.into_color()
    }
}
