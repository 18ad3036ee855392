//! Matching of a palette against a reference palette.

use tracing::{debug, trace};
use crate::{InvalidArgument, Metric, Result, RGBColor};

/// For every color of the source palette, the index of the reference
/// color it is matched with.
pub type MatchResult = Vec<usize>;

/// Options of a palette match.  Created by [`MatchOptions::new`].
///
/// ```
/// use colormap_match::{MatchOptions, Metric};
/// let source = [[1., 0., 0.], [0.9, 0., 0.]];
/// let reference = [[1., 0., 0.], [0., 0., 0.]];
/// let idx = MatchOptions::new().metric(Metric::Perceptual).exclusive(true)
///     .run(&source, &reference)?;
/// assert_eq!(idx, vec![0, 1]);
/// # Ok::<(), colormap_match::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MatchOptions {
    metric: Metric,
    exclusive: bool,
}

impl MatchOptions {
    /// Euclidean RGB distance, reference colors may be shared.
    pub fn new() -> Self { Self::default() }

    /// Set the distance used to compare colors.
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// When `true`, each reference color is used by at most one source
    /// color.
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Match `source` against `reference`.  See [`match_palette`].
    pub fn run<S, R>(&self, source: &[S], reference: &[R]) -> Result<MatchResult>
    where S: RGBColor, R: RGBColor {
        match_palette(source, reference, self.metric, self.exclusive)
    }
}

/// Return, for each color of `source`, the index of the closest color
/// of `reference` under `metric`.
///
/// By default (`exclusive == false`) every source color is matched
/// independently and reference colors may be used any number of times.
/// Among equally close reference colors, the one with the smallest
/// index is chosen.
///
/// With `exclusive == true` each reference color is claimed by at most
/// one source color, so all returned indices are distinct.  The
/// assignment is greedy: the closest (source, reference) pair among the
/// colors still free is fixed first, ties going to the smaller source
/// index and then to the smaller reference index, and so on until all
/// source colors are assigned.  This is fast and deterministic but does
/// not minimize the total distance the way an optimal bipartite
/// assignment (e.g. the Hungarian algorithm) would.
///
/// # Errors
///
/// [`InvalidArgument::EmptyReference`] if `reference` is empty and, in
/// exclusive mode, [`InvalidArgument::InsufficientReference`] if
/// `reference` has fewer colors than `source`.  Inputs are checked
/// before any distance is computed.
///
/// # Example
///
/// ```
/// use colormap_match::{match_palette, Metric};
/// let source = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
/// let reference = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.], [1., 1., 1.]];
/// let idx = match_palette(&source, &reference, Metric::Euclidean, false)?;
/// assert_eq!(idx, vec![0, 1, 2]);
/// # Ok::<(), colormap_match::Error>(())
/// ```
pub fn match_palette<S, R>(source: &[S], reference: &[R], metric: Metric,
                           exclusive: bool) -> Result<MatchResult>
where S: RGBColor, R: RGBColor {
    if reference.is_empty() {
        return Err(InvalidArgument::EmptyReference.into())
    }
    if exclusive && reference.len() < source.len() {
        return Err(InvalidArgument::InsufficientReference {
            colors: source.len(), available: reference.len() }.into())
    }
    debug!(source = source.len(), reference = reference.len(), ?metric,
           exclusive, "matching palettes");
    let reference: Vec<_> = reference.iter().map(|c| c.to_rgb()).collect();
    if exclusive {
        Ok(greedy_exclusive(source, &reference, metric))
    } else {
        Ok(source.iter().map(|s| {
            let s = s.to_rgb();
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (j, &r) in reference.iter().enumerate() {
                let d = metric.distance(s, r);
                // Strict comparison: the first minimum is kept.
                if d < best_dist {
                    best = j;
                    best_dist = d;
                }
            }
            best
        }).collect())
    }
}

fn greedy_exclusive<S: RGBColor>(source: &[S], reference: &[rgb::RGB<f64>],
                                 metric: Metric) -> MatchResult {
    let mut pairs = Vec::with_capacity(source.len() * reference.len());
    for (i, s) in source.iter().enumerate() {
        let s = s.to_rgb();
        for (j, &r) in reference.iter().enumerate() {
            pairs.push((metric.distance(s, r), i, j));
        }
    }
    pairs.sort_unstable_by(|a, b| {
        a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2))
    });
    let mut assigned = vec![None; source.len()];
    let mut claimed = vec![false; reference.len()];
    let mut remaining = source.len();
    for (d, i, j) in pairs {
        if remaining == 0 { break }
        if assigned[i].is_some() || claimed[j] { continue }
        trace!(source = i, reference = j, distance = d, "assigned");
        assigned[i] = Some(j);
        claimed[j] = true;
        remaining -= 1;
    }
    // Every source color is assigned since reference.len() ≥ source.len().
    assigned.into_iter().flatten().collect()
}

/// Apply a match: return `reference[indices[i]]` for every `i`.
///
/// # Errors
///
/// [`InvalidArgument::IndexOutOfRange`] if an index does not designate
/// a color of `reference`.
pub fn remap<C: RGBColor>(indices: &[usize], reference: &[C]) -> Result<Vec<C>> {
    indices.iter().map(|&index| {
        reference.get(index).copied().ok_or_else(|| {
            InvalidArgument::IndexOutOfRange { index, len: reference.len() }
                .into()
        })
    }).collect()
}
