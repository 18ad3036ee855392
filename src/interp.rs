use rgb::RGB;
use crate::{InvalidArgument, Result, RGBColor};

/// The table segment holding the fractional position `s` ∈ \[0, n - 1\]
/// in a table of `n ≥ 1` entries: the index of its first entry and the
/// offset within it.
pub(crate) fn bracket(n: usize, s: f64) -> (usize, f64) {
    if n == 1 { return (0, 0.) }
    let i = (s.floor().max(0.) as usize).min(n - 2);
    (i, s - i as f64)
}

/// `(1 - f) c0 + f c1`, channel by channel.
#[inline]
pub(crate) fn mix(c0: RGB<f64>, c1: RGB<f64>, f: f64) -> RGB<f64> {
    RGB { r: (1. - f) * c0.r + f * c1.r,
          g: (1. - f) * c0.g + f * c1.g,
          b: (1. - f) * c0.b + f * c1.b }
}

/// Linear interpolation between `colors` at the fractional position
/// `s` ∈ \[0, len - 1\].  Integer positions return the entries exactly.
pub(crate) fn lerp(colors: &[RGB<f64>], s: f64) -> RGB<f64> {
    let (i, f) = bracket(colors.len(), s);
    mix(colors[i], colors[(i + 1).min(colors.len() - 1)], f)
}

/// Resample `colors` to `n` colors by linear interpolation of each
/// channel.
///
/// The entries of `colors` are placed uniformly on \[0, 1\] and
/// sampled at `n` uniformly spaced points, both ends included, so the
/// first and last colors are always kept.  Asking for as many colors
/// as there are returns them unchanged; a single color is repeated.
///
/// ```
/// use colormap_match::resample;
/// let grey = resample(&[[0., 0., 0.], [1., 1., 1.]], 3)?;
/// assert_eq!(grey, vec![[0., 0., 0.], [0.5, 0.5, 0.5], [1., 1., 1.]]);
/// # Ok::<(), colormap_match::Error>(())
/// ```
pub fn resample<C: RGBColor>(colors: &[C], n: usize) -> Result<Vec<C>> {
    if colors.is_empty() { return Err(InvalidArgument::EmptyPalette.into()) }
    if n == 0 { return Err(InvalidArgument::ZeroLength.into()) }
    if n == colors.len() { return Ok(colors.to_vec()) }
    let rgb: Vec<_> = colors.iter().map(|c| c.to_rgb()).collect();
    let last = (rgb.len() - 1) as f64;
    let resampled = if n == 1 { vec![C::from_rgb(rgb[0])] } else {
        let denom = (n - 1) as f64;
        (0 .. n).map(|j| C::from_rgb(lerp(&rgb, j as f64 * last / denom)))
            .collect()
    };
    Ok(resampled)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::Error;

    #[test]
    fn keeps_endpoints() {
        let blues = [RGB8::new(247, 251, 255), RGB8::new(107, 174, 214),
                     RGB8::new(8, 48, 107)];
        for n in [2, 5, 256] {
            let r = resample(&blues, n).unwrap();
            assert_eq!(r.len(), n);
            assert_eq!(r[0], blues[0]);
            assert_eq!(r[n - 1], blues[2]);
        }
    }

    #[test]
    fn same_length_is_identity() {
        let c = [[0.1, 0.2, 0.3], [0.9, 0.8, 0.7]];
        assert_eq!(resample(&c, 2).unwrap(), c.to_vec());
    }

    #[test]
    fn midpoints() {
        let c = [[0., 0., 0.], [1., 0.5, 0.], [0., 0., 1.]];
        let r = resample(&c, 5).unwrap();
        assert_eq!(r, vec![[0., 0., 0.], [0.5, 0.25, 0.], [1., 0.5, 0.],
                           [0.5, 0.25, 0.5], [0., 0., 1.]]);
    }

    #[test]
    fn downsample_and_single() {
        let c = [[0., 0., 0.], [0.25, 0.25, 0.25], [0.5, 0.5, 0.5],
                 [0.75, 0.75, 0.75], [1., 1., 1.]];
        assert_eq!(resample(&c, 3).unwrap(),
                   vec![[0., 0., 0.], [0.5, 0.5, 0.5], [1., 1., 1.]]);
        assert_eq!(resample(&c, 1).unwrap(), vec![[0., 0., 0.]]);
        assert_eq!(resample(&[[0.3, 0.2, 0.1]], 4).unwrap(),
                   vec![[0.3, 0.2, 0.1]; 4]);
    }

    #[test]
    fn invalid() {
        let empty: [RGB8; 0] = [];
        assert_eq!(resample(&empty, 3),
                   Err(Error::InvalidArgument(InvalidArgument::EmptyPalette)));
        assert_eq!(resample(&[RGB8::new(0, 0, 0)], 0),
                   Err(Error::InvalidArgument(InvalidArgument::ZeroLength)));
    }
}
