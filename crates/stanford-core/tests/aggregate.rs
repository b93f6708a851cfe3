// File: crates/stanford-core/tests/aggregate.rs
// Purpose: Validate weighted region counting and the shared-denominator pass.

use stanford_core::{
    Axis, Coord, Epoch, PercentConfig, Region, Vertex, aggregate_regions, epochs_in_region,
    stanford_regions, total_epochs,
};

// Five weighted samples, 95 epochs in total.
fn sample_epochs() -> Vec<Epoch> {
    vec![
        Epoch::new(25.0, 25.0, 30),
        Epoch::new(35.0, 33.0, 35),
        Epoch::new(65.0, 3.0, 10),
        Epoch::new(5.0, 73.0, 10),
        Epoch::new(85.0, 83.0, 10),
    ]
}

fn full_box() -> Region {
    Region::new(
        "full",
        vec![
            Vertex::at(0.0, 0.0),
            Vertex::new(Coord::Max, Coord::Value(0.0)),
            Vertex::new(Coord::Max, Coord::Max),
            Vertex::new(Coord::Value(0.0), Coord::Max),
        ],
    )
}

#[test]
fn total_is_the_sum_of_weights() {
    assert_eq!(total_epochs(&sample_epochs()), 95);
    assert_eq!(total_epochs(&[]), 0);
}

#[test]
fn empty_sub_box_counts_nothing() {
    let data = sample_epochs();
    let region = Region::new(
        "empty",
        vec![Vertex::at(0.0, 0.0), Vertex::at(20.0, 0.0), Vertex::at(20.0, 20.0), Vertex::at(0.0, 20.0)],
    );
    let x = Axis::new("x", 0.0, 100.0);
    let y = Axis::new("y", 0.0, 100.0);

    let stats = aggregate_regions(&data, &[region], &x, &y, &PercentConfig::default()).unwrap();
    assert_eq!(stats[0].count, 0);
    assert_eq!(stats[0].percentage, "0.0");
}

#[test]
fn full_bounding_box_counts_everything() {
    let data = sample_epochs();
    let x = Axis::new("x", 0.0, 100.0);
    let y = Axis::new("y", 0.0, 100.0);

    let stats = aggregate_regions(&data, &[full_box()], &x, &y, &PercentConfig::default()).unwrap();
    assert_eq!(stats[0].count, 95);
    assert_eq!(stats[0].percentage, "100.0");
}

#[test]
fn partition_counts_sum_to_total() {
    // One interior sample per Stanford region; no sample sits on a
    // shared border, so the five counts must partition the total.
    let data = vec![
        Epoch::new(10.0, 20.0, 5),  // Normal Operations
        Epoch::new(20.0, 10.0, 7),  // MI (lower)
        Epoch::new(50.0, 10.0, 3),  // HMI
        Epoch::new(10.0, 50.0, 11), // Unavailable Epochs
        Epoch::new(55.0, 45.0, 2),  // MI (upper)
    ];
    let x = Axis::new("x", 0.0, 60.0);
    let y = Axis::new("y", 0.0, 60.0);
    let regions = stanford_regions(40.0);

    let stats = aggregate_regions(&data, &regions, &x, &y, &PercentConfig::default()).unwrap();
    assert_eq!(stats.len(), regions.len());
    let summed: u64 = stats.iter().map(|s| s.count).sum();
    assert_eq!(summed, total_epochs(&data));

    assert_eq!(stats[0].count, 5);
    assert_eq!(stats[1].count, 7);
    assert_eq!(stats[2].count, 3);
    assert_eq!(stats[3].count, 11);
    assert_eq!(stats[4].count, 2);
}

#[test]
fn overlapping_regions_each_count_shared_samples() {
    let data = vec![Epoch::new(5.0, 5.0, 4), Epoch::new(30.0, 30.0, 6)];
    let x = Axis::new("x", 0.0, 60.0);
    let y = Axis::new("y", 0.0, 60.0);
    // Two identical boxes: nothing enforces mutual exclusivity.
    let regions = vec![full_box(), full_box()];

    let stats = aggregate_regions(&data, &regions, &x, &y, &PercentConfig::default()).unwrap();
    assert_eq!(stats[0].count, 10);
    assert_eq!(stats[1].count, 10);
    assert_eq!(stats[0].percentage, "100.0");
    assert_eq!(stats[1].percentage, "100.0");
}

#[test]
fn unresolvable_region_fails_the_pass() {
    let data = sample_epochs();
    let x = Axis::new("x", 0.0, f64::NAN);
    let y = Axis::new("y", 0.0, 100.0);
    assert!(aggregate_regions(&data, &[full_box()], &x, &y, &PercentConfig::default()).is_err());
}

#[test]
fn membership_primitive_weighs_matches() {
    let data = sample_epochs();
    let polygon = [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 40.0)];
    // Only the two low-error samples fall inside: 30 + 35.
    assert_eq!(epochs_in_region(&data, &polygon), 65);
}
