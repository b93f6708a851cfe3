// File: crates/stanford-core/src/region.rs
// Summary: Region definitions with symbolic axis-max vertices and their resolution.

use thiserror::Error;

use crate::axis::Axis;

#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("axis '{axis}' has no finite maximum to resolve a symbolic vertex")]
    UnresolvedVertex { axis: String },
}

/// One coordinate of a region vertex: a literal data-space value, or
/// the current maximum of the matching axis. Only the maximum end is
/// symbolic; minimums are authored as literals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coord {
    Value(f64),
    Max,
}

impl Coord {
    fn resolve(self, axis: &Axis) -> Result<f64, RegionError> {
        match self {
            Coord::Value(v) => Ok(v),
            Coord::Max => {
                if axis.max.is_finite() {
                    Ok(axis.max)
                } else {
                    Err(RegionError::UnresolvedVertex { axis: axis.label.clone() })
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: Coord,
    pub y: Coord,
}

impl Vertex {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Literal vertex shorthand.
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x: Coord::Value(x), y: Coord::Value(y) }
    }
}

/// A labeled polygon over the error plane. Vertices are authored
/// counter-clockwise; at least 3 are expected (unchecked precondition,
/// regions are author-supplied configuration).
#[derive(Clone, Debug)]
pub struct Region {
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl Region {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        Self { name: name.into(), vertices }
    }

    /// Resolve symbolic vertices against the current axis ranges.
    ///
    /// Ranges may move between draws (zoom, resize, autoscale), so this
    /// runs on every aggregation pass; nothing is cached.
    pub fn resolve(&self, x_axis: &Axis, y_axis: &Axis) -> Result<Vec<(f64, f64)>, RegionError> {
        self.vertices
            .iter()
            .map(|v| Ok((v.x.resolve(x_axis)?, v.y.resolve(y_axis)?)))
            .collect()
    }
}

/// The five classic Stanford diagram regions for a given alarm limit.
///
/// Outer bounds are symbolic so the set follows the live axis range:
/// with `alarm_limit` = 40 this reproduces the canonical Normal / MI /
/// HMI / Unavailable layout.
pub fn stanford_regions(alarm_limit: f64) -> Vec<Region> {
    let al = alarm_limit;
    vec![
        Region::new(
            "Normal Operations",
            vec![Vertex::at(0.0, 0.0), Vertex::at(al, al), Vertex::at(0.0, al)],
        ),
        Region::new(
            "MI",
            vec![Vertex::at(0.0, 0.0), Vertex::at(al, 0.0), Vertex::at(al, al)],
        ),
        Region::new(
            "HMI",
            vec![
                Vertex::at(al, 0.0),
                Vertex::new(Coord::Max, Coord::Value(0.0)),
                Vertex::new(Coord::Max, Coord::Value(al)),
                Vertex::at(al, al),
            ],
        ),
        Region::new(
            "Unavailable Epochs",
            vec![
                Vertex::at(0.0, al),
                Vertex::at(al, al),
                Vertex::new(Coord::Max, Coord::Max),
                Vertex::new(Coord::Value(0.0), Coord::Max),
            ],
        ),
        Region::new(
            "MI",
            vec![
                Vertex::at(al, al),
                Vertex::new(Coord::Max, Coord::Value(al)),
                Vertex::new(Coord::Max, Coord::Max),
            ],
        ),
    ]
}
