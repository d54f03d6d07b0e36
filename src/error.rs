use thiserror::Error;

/// Errors raised by the palette engine and color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("{what} index {index} is out of bounds (len {len})")]
    InvalidArgument {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),
    #[error("a palette holds 1 to 8 colors, got {0}")]
    InvalidSize(usize),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
