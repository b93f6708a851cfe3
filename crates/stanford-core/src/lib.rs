// File: crates/stanford-core/src/lib.rs
// Summary: Core library entry point; exports the region geometry and aggregation API.

pub mod axis;
pub mod geometry;
pub mod region;
pub mod percent;
pub mod aggregate;
pub mod chart;
pub mod plugin;

pub use axis::Axis;
pub use geometry::point_in_polygon;
pub use region::{Coord, Region, RegionError, Vertex, stanford_regions};
pub use percent::{PercentConfig, RoundingMethod, format_percentage};
pub use aggregate::{Epoch, RegionStats, aggregate_regions, epochs_in_region, total_epochs};
pub use chart::Chart;
pub use plugin::{DefaultLabelFormat, LabelFormat, Overlay, RegionOverlay};
