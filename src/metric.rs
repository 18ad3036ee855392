//! Distances between two colors.

use rgb::RGB;
use crate::{InvalidArgument, Lab, Result, RGBColor};

/// Per-channel weights of [`Metric::Weighted`].
///
/// All weights are finite and strictly positive, which keeps the
/// weighted distance zero only between identical colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights { r: f64, g: f64, b: f64 }

impl Weights {
    /// Weights of the red, green and blue squared differences.
    ///
    /// ```
    /// use colormap_match::{InvalidArgument, Weights};
    /// assert!(Weights::new(2., 4., 3.).is_ok());
    /// assert_eq!(Weights::new(1., 0., 1.),
    ///            Err(InvalidArgument::NonPositiveWeight.into()));
    /// ```
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        let valid = |w: f64| w.is_finite() && w > 0.;
        if valid(r) && valid(g) && valid(b) { Ok(Weights { r, g, b }) }
        else { Err(InvalidArgument::NonPositiveWeight.into()) }
    }

    /// Weight of the red channel.
    pub fn r(&self) -> f64 { self.r }
    /// Weight of the green channel.
    pub fn g(&self) -> f64 { self.g }
    /// Weight of the blue channel.
    pub fn b(&self) -> f64 { self.b }
}

/// How the dissimilarity of two colors is measured.
///
/// Every metric is symmetric, non-negative and zero only between
/// identical colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Metric {
    /// Euclidean distance of the RGB components (in \[0, 1\]).
    #[default]
    Euclidean,
    /// The “redmean” approximation: a Euclidean RGB distance (on a
    /// 0–255 scale) whose red and blue weights depend on the mean red
    /// level of both colors.  Cheap and noticeably closer to perception
    /// than [`Metric::Euclidean`].
    FastPerceptual,
    /// Euclidean distance in CIE L\*a\*b\* (ΔE\*76).  Colors closer
    /// than the `f64` resolution of L\*a\*b\* measure 0 apart.
    Perceptual,
    /// Euclidean RGB distance with user-chosen channel weights.
    Weighted(Weights),
}

impl Metric {
    /// Distance between `a` and `b`, both RGB colors with components
    /// nominally in \[0, 1\].
    pub fn distance(self, a: RGB<f64>, b: RGB<f64>) -> f64 {
        match self {
            Metric::Euclidean => norm(a.r - b.r, a.g - b.g, a.b - b.b),
            Metric::FastPerceptual => {
                let rmean = 127.5 * (a.r + b.r);
                let wr = (2. + rmean / 256.).sqrt();
                let wb = (2. + (255. - rmean) / 256.).sqrt();
                norm(255. * wr * (a.r - b.r), 510. * (a.g - b.g),
                     255. * wb * (a.b - b.b))
            }
            Metric::Perceptual => Lab::from_rgb(a).delta_e(&Lab::from_rgb(b)),
            Metric::Weighted(w) => {
                norm(w.r.sqrt() * (a.r - b.r), w.g.sqrt() * (a.g - b.g),
                     w.b.sqrt() * (a.b - b.b))
            }
        }
    }
}

/// Euclidean norm of `(x, y, z)`.  Uses `hypot` so that tiny non-zero
/// differences do not vanish when squared.
#[inline]
pub(crate) fn norm(x: f64, y: f64, z: f64) -> f64 { x.hypot(y).hypot(z) }

/// Distance between two colors of any [`RGBColor`] encoding.
///
/// ```
/// use rgb::RGB8;
/// use colormap_match::{distance, Metric};
/// let red = RGB8::new(255, 0, 0);
/// let blue = RGB8::new(0, 0, 255);
/// assert_eq!(distance(&red, &red, Metric::Perceptual), 0.);
/// let d = distance(&red, &blue, Metric::Euclidean);
/// assert!((d - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn distance<A: RGBColor, B: RGBColor>(a: &A, b: &B, metric: Metric) -> f64 {
    metric.distance(a.to_rgb(), b.to_rgb())
}
