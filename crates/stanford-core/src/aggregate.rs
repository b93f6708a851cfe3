// File: crates/stanford-core/src/aggregate.rs
// Summary: Weighted per-region epoch counting and percentage aggregation.

use crate::axis::Axis;
use crate::geometry::point_in_polygon;
use crate::percent::{PercentConfig, format_percentage};
use crate::region::{Region, RegionError};

/// One scatter sample: horizontal error, protection level, and the
/// number of measurement epochs sharing that error pair. The weight is
/// required; totals are always sums of weights, never raw point counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epoch {
    pub x: f64,
    pub y: f64,
    pub epochs: u64,
}

impl Epoch {
    pub const fn new(x: f64, y: f64, epochs: u64) -> Self {
        Self { x, y, epochs }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionStats {
    pub count: u64,
    pub percentage: String,
}

/// Denominator for one aggregation pass: the summed weight of every
/// sample, regardless of region membership.
pub fn total_epochs(data: &[Epoch]) -> u64 {
    data.iter().map(|e| e.epochs).sum()
}

/// Summed weight of the samples inside `polygon`.
pub fn epochs_in_region(data: &[Epoch], polygon: &[(f64, f64)]) -> u64 {
    data.iter()
        .filter(|e| point_in_polygon(polygon, e.x, e.y))
        .map(|e| e.epochs)
        .sum()
}

/// Score every region against one snapshot of the dataset and axes.
///
/// Results come back in region order and share a single denominator
/// computed up front. Regions are independent: overlapping regions each
/// count a shared sample, and nothing enforces a partition. Each region
/// is re-resolved here so symbolic vertices track the current ranges.
/// O(samples x regions x vertices-per-region).
pub fn aggregate_regions(
    data: &[Epoch],
    regions: &[Region],
    x_axis: &Axis,
    y_axis: &Axis,
    cfg: &PercentConfig,
) -> Result<Vec<RegionStats>, RegionError> {
    let total = total_epochs(data);
    let mut out = Vec::with_capacity(regions.len());
    for region in regions {
        let polygon = region.resolve(x_axis, y_axis)?;
        let count = epochs_in_region(data, &polygon);
        out.push(RegionStats { count, percentage: format_percentage(count, total, cfg) });
    }
    Ok(out)
}
