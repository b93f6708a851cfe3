// File: crates/stanford-core/src/chart.rs
// Summary: Chart snapshot (dataset + axes) handed to overlays by the host.

use crate::aggregate::Epoch;
use crate::axis::Axis;

/// The host-side snapshot an overlay evaluates against. The core never
/// reads live chart state; it sees whatever dataset and ranges the host
/// captured for this draw.
pub struct Chart {
    pub data: Vec<Epoch>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_data(data: Vec<Epoch>) -> Self {
        let mut chart = Self::new();
        chart.data = data;
        chart
    }

    pub fn add_epoch(&mut self, epoch: Epoch) {
        self.data.push(epoch);
    }

    /// Grow the axes to cover the dataset, keeping the authored minimum
    /// when it already sits below the data. `margin_frac` widens the
    /// top end by a fraction of the span; degenerate spans are widened
    /// to keep the range usable.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut x_min = f64::INFINITY;
        let mut y_min = f64::INFINITY;
        for e in &self.data {
            x_min = x_min.min(e.x);
            x_max = x_max.max(e.x);
            y_min = y_min.min(e.y);
            y_max = y_max.max(e.y);
        }
        if !x_max.is_finite() || !y_max.is_finite() {
            return;
        }
        self.x_axis.min = self.x_axis.min.min(x_min);
        self.y_axis.min = self.y_axis.min.min(y_min);
        let mut x_span = x_max - self.x_axis.min;
        let mut y_span = y_max - self.y_axis.min;
        if x_span.abs() < 1e-9 { x_span = 1.0; }
        if y_span.abs() < 1e-9 { y_span = 1.0; }
        self.x_axis.max = self.x_axis.max.max(x_max + x_span * margin_frac);
        self.y_axis.max = self.y_axis.max.max(y_max + y_span * margin_frac);
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
