//! boundary-centers - Estimate region centers from SVG boundary paths

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod output;
pub mod path;
pub mod svg;

pub use error::{BoundaryError, DegenerateBoundaryError, ParseError, ParseErrorKind};
pub use geometry::{Centroid, boundary_center, estimate_centroid};
pub use path::parse_boundary;
