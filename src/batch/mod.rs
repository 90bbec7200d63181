use crate::domain::Region;
use crate::error::BoundaryError;
use crate::geometry::{Bounds, Centroid, estimate_centroid};
use crate::path::parse_boundary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// What to do when one region's boundary cannot be processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure, record it and continue with the next region
    #[default]
    Skip,
    /// Stop at the first failing region
    Abort,
}

/// Center of one successfully processed region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCenter {
    pub id: String,
    #[serde(flatten)]
    pub centroid: Centroid,
    /// Number of boundary points the center was computed from
    pub points: usize,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionFailure {
    pub id: String,
    pub error: BoundaryError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub centers: Vec<RegionCenter>,
    pub failures: Vec<RegionFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.centers.len() + self.failures.len()
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("region {id}: {source}")]
    Region {
        id: String,
        #[source]
        source: BoundaryError,
    },
}

/// Compute the center of a single region
pub fn compute_center(region: &Region) -> Result<RegionCenter, BoundaryError> {
    let points = parse_boundary(&region.boundary)?;
    if !points.is_closed() {
        debug!(id = %region.id, points = points.len(), "boundary is not closed");
    }
    let centroid = estimate_centroid(&points)?;

    Ok(RegionCenter {
        id: region.id.clone(),
        centroid,
        points: points.len(),
        bounds: Bounds::from_points(&points),
    })
}

/// Compute centers for every region, in input order
///
/// Each region is independent. Under [`FailurePolicy::Skip`] failures are
/// collected in the report; under [`FailurePolicy::Abort`] the first failure
/// is returned as an error.
pub fn compute_centers(regions: &[Region], policy: FailurePolicy) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();

    for region in regions {
        match compute_center(region) {
            Ok(center) => {
                debug!(
                    id = %center.id,
                    x = center.centroid.x,
                    y = center.centroid.y,
                    points = center.points,
                    "computed center"
                );
                report.centers.push(center);
            }
            Err(error) => match policy {
                FailurePolicy::Abort => {
                    return Err(BatchError::Region {
                        id: region.id.clone(),
                        source: error,
                    });
                }
                FailurePolicy::Skip => {
                    warn!(id = %region.id, %error, "skipping region");
                    report.failures.push(RegionFailure {
                        id: region.id.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok(report)
}
