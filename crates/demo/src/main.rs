// File: crates/demo/src/main.rs
// Summary: Demo loads a GNSS epoch CSV (or synthesizes one) and prints labeled
// per-region counts and percentages for the classic Stanford regions.

use anyhow::{Context, Result};
use stanford_core::{
    Chart, DefaultLabelFormat, Epoch, Overlay, RegionOverlay, stanford_regions, total_epochs,
};
use std::path::Path;

const ALARM_LIMIT: f64 = 40.0;

fn main() -> Result<()> {
    let epochs = match std::env::args().nth(1) {
        Some(raw) => {
            let path = Path::new(&raw);
            println!("Using input file: {}", path.display());
            load_epoch_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using synthetic epochs.");
            synthetic_epochs(500)
        }
    };

    if epochs.is_empty() {
        anyhow::bail!("no epochs loaded -- check headers/delimiter.");
    }
    println!("Loaded {} samples, {} epochs total", epochs.len(), total_epochs(&epochs));

    let mut chart = Chart::with_data(epochs);
    chart.autoscale_axes(0.05);
    println!(
        "Axis ranges: {} [{:.1}, {:.1}]  {} [{:.1}, {:.1}]",
        chart.x_axis.label, chart.x_axis.min, chart.x_axis.max,
        chart.y_axis.label, chart.y_axis.min, chart.y_axis.max,
    );

    let overlay = RegionOverlay::new(stanford_regions(ALARM_LIMIT));
    let stats = overlay.compute(&chart)?;
    let labels = overlay.labels(&chart, &DefaultLabelFormat)?;

    println!();
    for (label, s) in labels.iter().zip(&stats) {
        // labels are multi-line; print one region per block
        println!("{}", label);
        println!("  (count={}, percentage={}%)", s.count, s.percentage);
    }

    Ok(())
}

/// Load an epoch CSV with `hpe,hpl,epochs` columns (header names are
/// matched case-insensitively). Malformed rows are skipped.
fn load_epoch_csv(path: &Path) -> Result<Vec<Epoch>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .with_context(|| format!("missing column '{name}'"))
    };
    let i_hpe = find("hpe")?;
    let i_hpl = find("hpl")?;
    let i_epochs = find("epochs")?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let get = |i: usize| record.get(i).map(str::trim);
        let x = get(i_hpe).and_then(|s| s.parse::<f64>().ok());
        let y = get(i_hpl).and_then(|s| s.parse::<f64>().ok());
        let w = get(i_epochs).and_then(|s| s.parse::<u64>().ok());
        if let (Some(x), Some(y), Some(w)) = (x, y, w) {
            out.push(Epoch::new(x, y, w));
        }
    }
    Ok(out)
}

/// Deterministic synthetic dataset spread over the error plane, with
/// most mass in the normal-operations wedge.
fn synthetic_epochs(n: usize) -> Vec<Epoch> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        let hpe = (t * 0.173).sin().abs() * 30.0;
        let spread = (t * 0.091).cos().abs() * 20.0;
        let hpl = hpe + 2.0 + spread;
        let weight = 1 + (i as u64 % 20);
        out.push(Epoch::new(hpe, hpl, weight));
    }
    out
}
