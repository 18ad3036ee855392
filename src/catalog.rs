//! Lookup of the named colormaps and color cycles.

use std::collections::HashMap;
use std::marker::PhantomData;
use lazy_static::lazy_static;
use rgb::RGB;
use tracing::debug;
use crate::palettes::{ty::PaletteData, ALL_PALETTES};
use crate::{interp, Category, ColorRange, Error, Result, RGBColor};

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static PaletteData> =
        ALL_PALETTES.iter().map(|p| (p.name, p)).collect();
}

/// A colormap or color cycle of the catalog, possibly reversed.
///
/// Created by [`lookup`] or [`PaletteFind::find`].
#[derive(Clone, Copy)]
pub struct Colormap<Color> {
    palette: &'static PaletteData,
    reversed: bool,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Colormap<Color> {
    fn new(palette: &'static PaletteData, reversed: bool) -> Self {
        Self { palette, reversed, color: PhantomData }
    }

    /// The catalog name, with a `_r` suffix if reversed.
    pub fn name(&self) -> String {
        if self.reversed { format!("{}_r", self.palette.name) }
        else { self.palette.name.to_string() }
    }

    /// Says whether the colormap is qualitative, sequential,...
    pub fn category(&self) -> Category { self.palette.category }

    /// Returns the number of colors in the table (at least 1).
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Always `false`: catalog tables have at least one color.
    pub fn is_empty(&self) -> bool { self.palette.rgb.is_empty() }

    /// Says whether the colors are listed in reverse order.
    pub fn is_reversed(&self) -> bool { self.reversed }

    /// The same colors in the opposite order.
    pub fn reversed(self) -> Self { Self::new(self.palette, !self.reversed) }

    /// Returns the colors of the table.
    pub fn colors(&self) -> Vec<Color> {
        let colors = self.palette.rgb.iter().map(|c| Color::from_rgb(c.to_rgb()));
        if self.reversed { colors.rev().collect() } else { colors.collect() }
    }

    /// Returns `n` colors interpolated from the table.  See
    /// [`resample`](crate::resample).
    pub fn resample(&self, n: usize) -> Result<Vec<Color>> {
        let rgb: Vec<RGB<f64>> = self.colors().iter().map(|c| c.to_rgb()).collect();
        Ok(interp::resample(&rgb, n)?.into_iter().map(Color::from_rgb).collect())
    }
}

impl<Color: RGBColor> ColorRange<Color> for Colormap<Color> {
    /// Piecewise linear interpolation between the colors of the table.
    fn rgb(&self, t: f64) -> Color {
        let table = &self.palette.rgb;
        let last = table.len() - 1;
        let t = t.clamp(0., 1.);
        let t = if self.reversed { 1. - t } else { t };
        let (i, f) = interp::bracket(table.len(), t * last as f64);
        let c0 = table[i].to_rgb();
        let c1 = table[(i + 1).min(last)].to_rgb();
        Color::from_rgb(interp::mix(c0, c1, f))
    }
}

/// Return the catalog entry `name`.  Appending `_r` to a name gives
/// the entry in reverse order.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use colormap_match::{lookup, Category};
/// let greys = lookup::<RGB8>("Greys_r")?;
/// assert_eq!(greys.category(), Category::Sequential);
/// assert_eq!(greys.colors(), vec![RGB8::new(255, 255, 255), RGB8::new(0, 0, 0)]);
/// # Ok::<(), colormap_match::Error>(())
/// ```
pub fn lookup<Color: RGBColor>(name: &str) -> Result<Colormap<Color>> {
    if let Some(&p) = BY_NAME.get(name) {
        return Ok(Colormap::new(p, false))
    }
    if let Some(&p) = name.strip_suffix("_r").and_then(|n| BY_NAME.get(n)) {
        return Ok(Colormap::new(p, true))
    }
    debug!(name, "not in the catalog");
    Err(Error::NotFound(name.to_string()))
}

/// Return the colormap `name` (any category but [`Category::Cycle`])
/// interpolated to `n` colors.
pub fn colormap<Color: RGBColor>(name: &str, n: usize) -> Result<Vec<Color>> {
    let cmap = lookup::<Color>(name)?;
    if cmap.category() == Category::Cycle {
        debug!(name, "color cycles are not colormaps");
        return Err(Error::NotFound(name.to_string()))
    }
    cmap.resample(n)
}

/// Return the colors of the color cycle `name` (`"tue"`, `"xterm"` or
/// their reversed `_r` variants).  Cycles are never interpolated.
pub fn colorcycle<Color: RGBColor>(name: &str) -> Result<Vec<Color>> {
    let cycle = lookup::<Color>(name)?;
    if cycle.category() != Category::Cycle {
        debug!(name, "not a color cycle");
        return Err(Error::NotFound(name.to_string()))
    }
    Ok(cycle.colors())
}

/// Names of the catalog entries of `category`, in catalog order.
/// Reversed variants (`_r`) are not listed.
pub fn names(category: Category) -> Vec<&'static str> {
    ALL_PALETTES.iter().filter(|p| p.category == category)
        .map(|p| p.name).collect()
}


/// Set criteria to find matching catalog entries.
///
/// Created by [`RGBColor::palettes`].
#[derive(Clone)]
pub struct PaletteFind<Color> {
    len: usize,
    categories: Vec<Category>,
    color: PhantomData<Color>,
}

impl<Color> PaletteFind<Color>
where Color: RGBColor {
    pub(crate) fn new(len: usize) -> Self {
        Self { len, categories: vec![], color: PhantomData }
    }

    /// Find entries of this category.  Use several times to specify
    /// more than one [`Category`].  All categories are searched if
    /// none is given.
    pub fn category(mut self, c: Category) -> Self {
        self.categories.push(c);
        self
    }

    /// Return the entries with at least `len` colors (and belonging to
    /// one of the requested categories), in catalog order.
    pub fn find(self) -> impl Iterator<Item = Colormap<Color>> {
        let categories = { if self.categories.is_empty() { Category::ALL.to_vec() }
                           else { self.categories } };
        let len = self.len;
        ALL_PALETTES.iter()
            .filter(move |p| p.rgb.len() >= len
                    && categories.contains(&p.category))
            .map(|p| Colormap::new(p, false))
    }
}
