//! Color-space conversions and hex strings.

use rgb::{RGB, RGB8};
use crate::{metric::norm, Error, Result, RGBColor};

/// A color in the CIE L\*a\*b\* color space with a D65 reference white.
///
/// Colors are converted from sRGB: the sRGB transfer function is
/// removed, the linear components are mapped to CIE XYZ and XYZ to
/// L\*a\*b\*.  Euclidean distance in this space (ΔE\*76) approximates
/// perceived color difference much better than distance in RGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness, in the range 0. to 100. for colors in gamut.
    pub l: f64,
    /// Green (negative) to red (positive) axis.
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

// D65 white point, normalized to Y = 1.
const XN: f64 = 0.95047;
const YN: f64 = 1.;
const ZN: f64 = 1.08883;

/// Undo the sRGB transfer function.  Negative inputs are mirrored so
/// the function is defined (and odd) on the whole real line.
#[inline]
fn srgb_to_linear(u: f64) -> f64 {
    let v = u.abs();
    let l = if v <= 0.04045 { v / 12.92 }
            else { ((v + 0.055) / 1.055).powf(2.4) };
    l.copysign(u)
}

#[inline]
fn linear_to_srgb(l: f64) -> f64 {
    let v = l.abs();
    let u = if v <= 0.0031308 { 12.92 * v }
            else { 1.055 * v.powf(1. / 2.4) - 0.055 };
    u.copysign(l)
}

impl Lab {
    /// Convert an sRGB color (components nominally in \[0, 1\]) to
    /// L\*a\*b\*.  Components outside \[0, 1\] are converted as they
    /// are, without clamping.
    ///
    /// ```
    /// use rgb::RGB;
    /// use colormap_match::Lab;
    /// let white = Lab::from_rgb(RGB { r: 1., g: 1., b: 1. });
    /// assert!((white.l - 100.).abs() < 1e-3);
    /// ```
    pub fn from_rgb(c: RGB<f64>) -> Lab {
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);
        let x = (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / XN;
        let y = (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / YN;
        let z = (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / ZN;
        let fx = if x > EPS { x.cbrt() } else { C1 * x + C2 };
        let fy = if y > EPS { y.cbrt() } else { C1 * y + C2 };
        let fz = if z > EPS { z.cbrt() } else { C1 * z + C2 };
        Lab { l: 116. * fy - 16., a: 500. * (fx - fy), b: 200. * (fy - fz) }
    }

    /// Convert back to sRGB.  The result is not clamped: colors outside
    /// the sRGB gamut give components outside \[0, 1\].
    pub fn to_rgb(&self) -> RGB<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        let x = XN * if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let y = YN * if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let z = ZN * if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
        RGB { r: linear_to_srgb(r), g: linear_to_srgb(g), b: linear_to_srgb(b) }
    }

    /// Euclidean distance to `other` (CIE ΔE\*76).
    #[inline]
    pub fn delta_e(&self, other: &Lab) -> f64 {
        norm(self.l - other.l, self.a - other.a, self.b - other.b)
    }
}

/// Format a color as `#rrggbb`.
///
/// ```
/// use rgb::RGB;
/// assert_eq!(colormap_match::to_hex(&RGB { r: 1., g: 0.5, b: 0. }), "#ff8000");
/// ```
pub fn to_hex<C: RGBColor>(c: &C) -> String {
    let c = RGB8::from_rgb(c.to_rgb());
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Parse `#rrggbb`, `rrggbb` or the short form `#rgb`.
pub fn from_hex(s: &str) -> Result<RGB8> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::ParseColor(s.to_string()))
    }
    let digit = |i: usize| -> Result<u8> {
        u8::from_str_radix(&hex[i .. i + 1], 16)
            .map_err(|_| Error::ParseColor(s.to_string()))
    };
    match hex.len() {
        6 => Ok(RGB8 { r: 16 * digit(0)? + digit(1)?,
                       g: 16 * digit(2)? + digit(3)?,
                       b: 16 * digit(4)? + digit(5)? }),
        3 => Ok(RGB8 { r: 17 * digit(0)?, g: 17 * digit(1)?,
                       b: 17 * digit(2)? }),
        _ => Err(Error::ParseColor(s.to_string())),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: RGB<f64>, b: RGB<f64>, tol: f64) -> bool {
        (a.r - b.r).abs() <= tol && (a.g - b.g).abs() <= tol
            && (a.b - b.b).abs() <= tol
    }

    #[test]
    fn black_and_white() {
        let black = Lab::from_rgb(RGB { r: 0., g: 0., b: 0. });
        assert!(black.l.abs() < 1e-9 && black.a.abs() < 1e-9
                && black.b.abs() < 1e-9, "{black:?}");
        let white = Lab::from_rgb(RGB { r: 1., g: 1., b: 1. });
        assert!((white.l - 100.).abs() < 1e-3, "{white:?}");
        assert!(white.a.abs() < 1e-2 && white.b.abs() < 1e-2, "{white:?}");
    }

    #[test]
    fn known_red() {
        // sRGB red is L* = 53.24, a* = 80.09, b* = 67.20 (D65).
        let red = Lab::from_rgb(RGB { r: 1., g: 0., b: 0. });
        assert!((red.l - 53.24).abs() < 0.01, "{red:?}");
        assert!((red.a - 80.09).abs() < 0.01, "{red:?}");
        assert!((red.b - 67.20).abs() < 0.01, "{red:?}");
    }

    #[test]
    fn matches_palette_crate() {
        use palette::{white_point::D65, IntoColor, Lab as PaletteLab, Srgb};
        let steps = (0 ..= 10).map(|k| k as f64 / 10.);
        for r in steps.clone() {
            for g in steps.clone() {
                for b in steps.clone() {
                    let ours = Lab::from_rgb(RGB { r, g, b });
                    let theirs: PaletteLab<D65, f64> =
                        Srgb::new(r, g, b).into_linear().into_color();
                    let d = ours.delta_e(&Lab { l: theirs.l, a: theirs.a,
                                                b: theirs.b });
                    assert!(d < 1e-4, "({r}, {g}, {b}): {ours:?} {theirs:?}");
                }
            }
        }
    }

    #[test]
    fn round_trip() {
        for c in [RGB { r: 0., g: 0., b: 0. }, RGB { r: 1., g: 1., b: 1. },
                  RGB { r: 0.2, g: 0.7, b: 0.1 },
                  RGB { r: 0.01, g: 0.002, b: 0.03 },
                  RGB { r: 0.5, g: 0.5, b: 0.5 }] {
            let back = Lab::from_rgb(c).to_rgb();
            assert!(close(c, back, 1e-5), "{c:?} → {back:?}");
        }
    }

    #[test]
    fn out_of_gamut_passes_through() {
        let c = RGB { r: 1.05, g: -0.03, b: 0.5 };
        let lab = Lab::from_rgb(c);
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
        let back = lab.to_rgb();
        assert!(close(c, back, 1e-5), "{c:?} → {back:?}");
        assert!(back.r > 1. && back.g < 0.);
    }

    #[test]
    fn transfer_function_is_odd() {
        for u in [0.01, 0.3, 1.2] {
            assert_eq!(srgb_to_linear(-u), -srgb_to_linear(u));
            assert!((linear_to_srgb(srgb_to_linear(u)) - u).abs() < 1e-12);
        }
    }

    #[test]
    fn hex() {
        assert_eq!(from_hex("#4393c3"), Ok(RGB8::new(67, 147, 195)));
        assert_eq!(from_hex("4393C3"), Ok(RGB8::new(67, 147, 195)));
        assert_eq!(from_hex("#f0a"), Ok(RGB8::new(255, 0, 170)));
        assert_eq!(to_hex(&RGB8::new(67, 147, 195)), "#4393c3");
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "+f+f+f"] {
            assert_eq!(from_hex(bad), Err(Error::ParseColor(bad.to_string())));
        }
    }
}
