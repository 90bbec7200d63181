use crate::domain::PointSequence;
use crate::error::{BoundaryError, DegenerateBoundaryError};
use crate::path::parse_boundary;
use serde::Serialize;

/// Perimeter-weighted center estimate of a boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// Estimate the center of a closed boundary
///
/// Averages the midpoint of every consecutive edge weighted by the edge's
/// length, normalized by total perimeter:
///
/// ```text
/// cx = sum(0.5 * (x[i] + x[i+1]) * len[i]) / sum(len[i])
/// cy = sum(0.5 * (y[i] + y[i+1]) * len[i]) / sum(len[i])
/// ```
///
/// This approximates the area centroid for densely sampled outlines. It is
/// invariant under reversal of the sequence but depends on consecutive points
/// being neighbours along the boundary. The caller supplies the closing edge
/// (first point repeated at the end); none is added here.
///
/// # Errors
/// [`DegenerateBoundaryError::ZeroPerimeter`] when the perimeter is zero,
/// which includes sequences of fewer than two points.
/// [`DegenerateBoundaryError::Overflow`] when an edge length or weighted sum
/// leaves the finite f64 range, so a NaN or infinite center is never returned.
pub fn estimate_centroid(points: &PointSequence) -> Result<Centroid, DegenerateBoundaryError> {
    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut perimeter = 0.0_f64;

    for line in points.as_line_string().lines() {
        let edge_length = line.dx().hypot(line.dy());
        sum_x += 0.5 * (line.start.x + line.end.x) * edge_length;
        sum_y += 0.5 * (line.start.y + line.end.y) * edge_length;
        perimeter += edge_length;
    }

    if perimeter == 0.0 {
        return Err(DegenerateBoundaryError::ZeroPerimeter {
            points: points.len(),
        });
    }

    let centroid = Centroid {
        x: sum_x / perimeter,
        y: sum_y / perimeter,
    };
    if !perimeter.is_finite() || !centroid.x.is_finite() || !centroid.y.is_finite() {
        return Err(DegenerateBoundaryError::Overflow {
            points: points.len(),
        });
    }

    Ok(centroid)
}

/// Parse a boundary path and estimate its center in one call
pub fn boundary_center(path: &str) -> Result<Centroid, BoundaryError> {
    let points = parse_boundary(path)?;
    Ok(estimate_centroid(&points)?)
}
