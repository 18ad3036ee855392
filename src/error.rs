use thiserror::Error;

/// Errors reported by this crate.
///
/// All of them are caused by the arguments of the call; none is
/// transient and retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("no colormap or color cycle named \"{0}\"")]
    NotFound(String),

    #[error("\"{0}\" is not a hex color (expected #rrggbb or #rgb)")]
    ParseColor(String),
}

/// The constraint an argument failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("the reference palette is empty")]
    EmptyReference,

    // Not named `source`: thiserror would take it for the error cause.
    #[error("exclusive matching of {colors} colors needs at least as many \
             reference colors, got {available}")]
    InsufficientReference { colors: usize, available: usize },

    #[error("metric weights must be finite and strictly positive")]
    NonPositiveWeight,

    #[error("the palette is empty")]
    EmptyPalette,

    #[error("cannot resample a palette to zero colors")]
    ZeroLength,

    #[error("index {index} is out of range for a palette of {len} colors")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
