// File: crates/stanford-core/src/percent.rs
// Summary: Percentage formatting with configurable rounding method and precision.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMethod {
    /// Half-up at the configured decimal place.
    Round,
    /// Toward positive infinity at the configured decimal place.
    Ceil,
    /// Toward negative infinity at the configured decimal place.
    Floor,
}

#[derive(Clone, Copy, Debug)]
pub struct PercentConfig {
    pub decimal_places: usize,
    pub rounding_method: RoundingMethod,
}

impl Default for PercentConfig {
    fn default() -> Self {
        Self { decimal_places: 1, rounding_method: RoundingMethod::Round }
    }
}

/// Render `count` out of `total` as a percentage string with exactly
/// `decimal_places` fractional digits.
///
/// A zero count or zero total short-circuits to "0.0…" padded to the
/// configured precision; division by zero never reaches the caller.
pub fn format_percentage(count: u64, total: u64, cfg: &PercentConfig) -> String {
    let dp = cfg.decimal_places;
    if count == 0 || total == 0 {
        return format!("{:.*}", dp, 0.0);
    }
    let raw = (count as f64 * 100.0) / total as f64;
    let factor = 10f64.powi(dp as i32);
    let scaled = raw * factor;
    let rounded = match cfg.rounding_method {
        RoundingMethod::Round => scaled.round(),
        RoundingMethod::Ceil => scaled.ceil(),
        RoundingMethod::Floor => scaled.floor(),
    };
    format!("{:.*}", dp, rounded / factor)
}
