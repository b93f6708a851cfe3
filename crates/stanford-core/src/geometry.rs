// File: crates/stanford-core/src/geometry.rs
// Summary: Ray-casting point-in-polygon test over data-space coordinates.

/// Parity test: cast a ray from `(x, y)` toward +x and toggle on every
/// edge crossing; an odd number of crossings means inside.
///
/// An edge `(vi, vj)` counts as crossed when `y` lies in the half-open
/// vertical interval of the edge (`vi.y <= y` holds for exactly one
/// endpoint, which also skips horizontal edges) and the edge's x at
/// that height is to the right of the query point. The half-open
/// interval keeps the result deterministic for points on a vertex or
/// edge, but such points may land on either side of a shared border.
///
/// Precondition: `polygon` describes a simple (non-self-intersecting)
/// shape with at least 3 effective vertices; degenerate input yields an
/// unspecified but deterministic result.
pub fn point_in_polygon(polygon: &[(f64, f64)], x: f64, y: f64) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = match n.checked_sub(1) {
        Some(j) => j,
        None => return false,
    };
    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi <= y) != (yj <= y) {
            // x of the edge at height y, by linear interpolation
            let x_at = xi + (y - yi) / (yj - yi) * (xj - xi);
            if x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
