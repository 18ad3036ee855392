use rgb::RGB8;

/// A named color table of the catalog.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) category: Category,
    pub(crate) rgb: Vec<RGB8>, // Invariant: length ≥ 1
}

impl PaletteData {
    pub(crate) fn new(name: &'static str, category: Category,
                      rgb: &[RGB8]) -> Self {
        debug_assert!(!rgb.is_empty(), "{name}: empty color table");
        PaletteData { name, category, rgb: rgb.to_vec() }
    }
}

/// Kind of catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes, and hues are used to
    /// create the primary visual differences between classes.
    Qualitative,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Sequential,
    /// Diverging color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    Diverging,
    /// A single color (possibly repeated), including the TU/e
    /// corporate colors.
    Monocolor,
    /// An ordered set of distinct colors meant to be used one after
    /// the other (e.g. for successive plotted series).  Cycles are
    /// never interpolated.
    Cycle,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Qualitative, Category::Sequential, Category::Diverging,
        Category::Monocolor, Category::Cycle];
}
