use geo::{Coord, LineString};

/// Ordered boundary points in the path's native coordinate space
///
/// Traversal order is preserved exactly as encountered in the source path.
/// Disjoint sub-paths are concatenated into one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence(LineString<f64>);

impl PointSequence {
    pub fn new(points: Vec<Coord<f64>>) -> Self {
        Self(LineString::new(points))
    }

    pub fn from_pairs(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| geo::coord! { x: x, y: y }).collect())
    }

    pub fn len(&self) -> usize {
        self.0.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.0.is_empty()
    }

    pub fn points(&self) -> &[Coord<f64>] {
        &self.0.0
    }

    pub fn first(&self) -> Option<Coord<f64>> {
        self.0.0.first().copied()
    }

    /// True when the first and last points coincide
    pub fn is_closed(&self) -> bool {
        self.len() >= 2 && self.0.is_closed()
    }

    /// The same points in reverse traversal order
    pub fn reversed(&self) -> Self {
        let mut points = self.0.0.clone();
        points.reverse();
        Self::new(points)
    }

    /// Sum of the euclidean lengths of all consecutive edges
    pub fn perimeter(&self) -> f64 {
        self.0.lines().map(|line| line.dx().hypot(line.dy())).sum()
    }

    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.0
    }

    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.0.0.iter().map(|c| (c.x, c.y)).collect()
    }
}
