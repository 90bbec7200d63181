use super::token::{Token, Tokens};
use crate::domain::PointSequence;
use crate::error::ParseError;

/// Parse a boundary path into its ordered point sequence
///
/// Command markers are dropped and every sub-path is appended to the same
/// sequence, so a multi-ring boundary yields one concatenated ring. Callers
/// that need per-ring points must split on move-to markers first.
///
/// # Errors
/// Returns the first [`ParseError`]; no partial sequence is produced.
pub fn parse_boundary(path: &str) -> Result<PointSequence, ParseError> {
    let mut points = Vec::new();

    for token in Tokens::new(path) {
        if let Token::Coordinate(coord) = token? {
            points.push(coord);
        }
    }

    Ok(PointSequence::new(points))
}
