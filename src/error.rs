use thiserror::Error;

/// Why a single path token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unrecognized command marker")]
    UnknownCommand,
    #[error("expected 2 comma-separated components, found {0}")]
    ComponentCount(usize),
    #[error("invalid number")]
    InvalidNumber,
    #[error("coordinate is not finite")]
    NonFinite,
}

/// A boundary path contained a token that is neither a command marker nor a
/// coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path token {token:?} at position {index}: {kind}")]
pub struct ParseError {
    /// The offending token, verbatim
    pub token: String,
    /// 0-based index of the token in the whitespace-split path
    pub index: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(token: &str, index: usize, kind: ParseErrorKind) -> Self {
        Self {
            token: token.to_string(),
            index,
            kind,
        }
    }
}

/// The boundary yields no meaningful center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateBoundaryError {
    /// Every point coincides, or there are fewer than two points
    #[error("degenerate boundary: {points} point(s) with zero perimeter")]
    ZeroPerimeter { points: usize },
    /// Coordinates are finite but the weighted sums exceed the f64 range
    #[error("degenerate boundary: {points} point(s) overflow f64 accumulation")]
    Overflow { points: usize },
}

impl DegenerateBoundaryError {
    pub fn points(&self) -> usize {
        match *self {
            Self::ZeroPerimeter { points } | Self::Overflow { points } => points,
        }
    }
}

/// Any failure computing the center of one boundary path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Degenerate(#[from] DegenerateBoundaryError),
}
