// File: crates/stanford-core/src/plugin.rs
// Summary: Overlay trait and the Stanford region overlay with injected label formatting.

use crate::aggregate::{RegionStats, aggregate_regions};
use crate::chart::Chart;
use crate::percent::PercentConfig;
use crate::region::{Region, RegionError};

/// Overlay computes per-region statistics from a chart snapshot.
/// Rendering of the result stays on the host side.
pub trait Overlay {
    fn id(&self) -> &'static str;
    fn compute(&self, chart: &Chart) -> Result<Vec<RegionStats>, RegionError>;
}

/// Label text strategy injected by the host. The core supplies the
/// region and its stats; the host decides how the label reads.
pub trait LabelFormat {
    fn format(&self, region: &Region, stats: &RegionStats) -> String;
}

/// "{name}:\n{count} ({percentage}%)" -- the conventional diagram label.
pub struct DefaultLabelFormat;

impl LabelFormat for DefaultLabelFormat {
    fn format(&self, region: &Region, stats: &RegionStats) -> String {
        format!("{}:\n{} ({}%)", region.name, stats.count, stats.percentage)
    }
}

/// Region overlay: one aggregation pass over the snapshot per compute.
pub struct RegionOverlay {
    pub regions: Vec<Region>,
    pub percent: PercentConfig,
}

impl RegionOverlay {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions, percent: PercentConfig::default() }
    }

    pub fn with_percent(mut self, percent: PercentConfig) -> Self {
        self.percent = percent;
        self
    }

    /// Rendered label per region, in region order.
    pub fn labels(&self, chart: &Chart, fmt: &dyn LabelFormat) -> Result<Vec<String>, RegionError> {
        let stats = self.compute(chart)?;
        Ok(self
            .regions
            .iter()
            .zip(&stats)
            .map(|(region, s)| fmt.format(region, s))
            .collect())
    }
}

impl Overlay for RegionOverlay {
    fn id(&self) -> &'static str {
        "stanford_regions"
    }

    fn compute(&self, chart: &Chart) -> Result<Vec<RegionStats>, RegionError> {
        aggregate_regions(&chart.data, &self.regions, &chart.x_axis, &chart.y_axis, &self.percent)
    }
}
