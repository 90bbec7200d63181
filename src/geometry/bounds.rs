use crate::domain::PointSequence;
use serde::Serialize;

/// Axis-aligned bounding box in the path's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a point sequence, `None` when it is empty
    pub fn from_points(points: &PointSequence) -> Option<Self> {
        let first = points.first()?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        bounds.expand(points);
        Some(bounds)
    }

    /// Grow bounds to include another set of points
    pub fn expand(&mut self, points: &PointSequence) {
        for c in points.points() {
            self.min_x = self.min_x.min(c.x);
            self.max_x = self.max_x.max(c.x);
            self.min_y = self.min_y.min(c.y);
            self.max_y = self.max_y.max(c.y);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
