//! Named colormaps and color cycles, and matching of a palette against
//! a reference palette.
//!
//! - [`lookup`], [`colormap`], [`colorcycle`] and [`names`] give access
//!   to the catalog: the ColorBrewer schemes, monocolor maps, the TU/e
//!   colors and the `tue` and `xterm` color cycles.
//! - [`match_palette`] (or [`MatchOptions`]) finds, for every color of
//!   a palette, the closest color of a reference palette under a
//!   [`Metric`].
//! - [`Lab`] converts colors to and from CIE L\*a\*b\*.
//!
//! Colors are exchanged through the [`RGBColor`] trait which is
//! implemented for the usual pixel types of the [`rgb`] crate.
//!
//! # Example
//!
//! Render the Brewer "Reds" scheme with the colors of a 256-color
//! terminal:
//!
//! ```
//! use rgb::RGB8;
//! use colormap_match::{colorcycle, colormap, match_palette, remap, Metric};
//!
//! let reds: Vec<RGB8> = colormap("Reds", 32)?;
//! let xterm: Vec<RGB8> = colorcycle("xterm")?;
//! let idx = match_palette(&reds, &xterm, Metric::Perceptual, false)?;
//! let reds_as_xterm = remap(&idx, &xterm)?;
//! assert_eq!(reds_as_xterm.len(), 32);
//! # Ok::<(), colormap_match::Error>(())
//! ```

use rgb::{RGB, RGB8, RGB16, RGBA8};

mod catalog;
mod color;
mod error;
mod interp;
mod matcher;
mod metric;
mod palettes;

pub use catalog::{colorcycle, colormap, lookup, names, Colormap, PaletteFind};
pub use color::{from_hex, to_hex, Lab};
pub use error::{Error, InvalidArgument, Result};
pub use interp::resample;
pub use matcher::{match_palette, remap, MatchOptions, MatchResult};
pub use metric::{distance, Metric, Weights};
pub use palettes::ty::Category;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values
    /// of `t` outside that interval are clamped.
    fn rgb(&self, t: f64) -> Color;

    /// Return `n` colors uniformly sampled on \[0, 1\], both bounds
    /// included (a single sample is taken at `0.`).
    fn samples(&self, n: usize) -> Vec<Color> {
        match n {
            0 => vec![],
            1 => vec![self.rgb(0.)],
            _ => { let dt = 1. / (n - 1) as f64;
                   (0 .. n).map(|i| self.rgb(i as f64 * dt)).collect() }
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
///
/// Internally all computations are carried out on `RGB<f64>` with
/// components in \[0, 1\].  Integer encodings are scaled on the way in
/// and rounded (and clamped) on the way out.
pub trait RGBColor: Copy {
    /// Return the red, green and blue components of the color
    /// (nominally in \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (nominally in \[0, 1\]).
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Find catalog entries with at least `len` colors.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use colormap_match::{Category, RGBColor};
    /// let n = RGB8::palettes(11).category(Category::Diverging).find().count();
    /// assert_eq!(n, 8);
    /// ```
    fn palettes(len: usize) -> PaletteFind<Self> { PaletteFind::new(len) }
}

/// Scale `x` ∈ \[0, 1\] to an integer encoding with maximum `max`.
#[inline]
fn quantize(x: f64, max: f64) -> f64 { (x * max).round().clamp(0., max) }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for [f64; 3] {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { RGB { r: self[0], g: self[1], b: self[2] } }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { [c.r, c.g, c.b] }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: quantize(c.r, 255.) as u8, g: quantize(c.g, 255.) as u8,
               b: quantize(c.b, 255.) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB16 { r: quantize(c.r, 65535.) as u16,
                g: quantize(c.g, 65535.) as u16,
                b: quantize(c.b, 65535.) as u16 }
    }
}

/// The alpha channel is ignored by all computations; colors created
/// by the crate are opaque.
impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let RGB8 { r, g, b } = RGB8::from_rgb(c);
        RGBA8 { r, g, b, a: 255 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_round_trip() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            let c = RGB8::new(v, 255 - v, v / 2);
            assert_eq!(RGB8::from_rgb(c.to_rgb()), c);
        }
    }

    #[test]
    fn out_of_range_is_clamped_on_output() {
        let c = RGB8::from_rgb(RGB { r: -0.2, g: 1.3, b: 0.5 });
        assert_eq!(c, RGB8::new(0, 255, 128));
    }

    #[test]
    fn rgba_is_opaque() {
        let c = RGBA8::from_rgb(RGB { r: 1., g: 0., b: 0. });
        assert_eq!(c, RGBA8::new(255, 0, 0, 255));
    }

    #[test]
    fn samples_cover_bounds() {
        let reds = lookup::<RGB8>("Reds").unwrap();
        let s = reds.samples(5);
        assert_eq!(s.len(), 5);
        assert_eq!(s[0], reds.colors()[0]);
        assert_eq!(s[4], *reds.colors().last().unwrap());
        assert!(reds.samples(0).is_empty());
    }
}
