//! Invariant checks for the labeler and filter on random walks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trendlabel::{
    Direction, LabelConfig, filter, filter_direction, label, label_direction, label_series,
    segments,
};

fn random_walk(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut level = 100.0_f64;
    (0..n)
        .map(|_| {
            level += rng.gen_range(-1.0_f64..1.0);
            level
        })
        .collect()
}

fn random_labels(seed: u64, n: usize) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut labels = Vec::with_capacity(n);
    let mut current = Direction::Flat;
    for _ in 0..n {
        // long runs so the filter sees more than single points
        if rng.gen_range(0..8) == 0 {
            current = match rng.gen_range(0..3) {
                0 => Direction::Down,
                1 => Direction::Flat,
                _ => Direction::Up,
            };
        }
        labels.push(current);
    }
    labels
}

#[test]
fn test_label_preserves_length() {
    for seed in 0..20 {
        for n in [0, 1, 2, 7, 50, 500] {
            let y = random_walk(seed, n);
            let labels = label(&y, 2.0, 15).unwrap();
            assert_eq!(labels.len(), y.len());
            assert_eq!(label_direction(&y, 2.0, 15).unwrap().len(), y.len());
        }
    }
}

#[test]
fn test_label_segments_partition_series() {
    for seed in 0..20 {
        let y = random_walk(seed, 400);
        let labels = label(&y, 1.5, 10).unwrap();
        let segs = segments(&labels);

        let mut expected_start = 0;
        for pair in segs.windows(2) {
            assert_ne!(pair[0].direction, pair[1].direction);
        }
        for seg in &segs {
            assert_eq!(seg.start, expected_start);
            assert!(labels[seg.start..=seg.end].iter().all(|&d| d == seg.direction));
            expected_start = seg.end + 1;
        }
        assert_eq!(expected_start, labels.len());
    }
}

#[test]
fn test_large_excursion_is_all_flat() {
    let y = random_walk(7, 300);
    let high = y.iter().cloned().fold(f64::MIN, f64::max);
    let low = y.iter().cloned().fold(f64::MAX, f64::min);
    let range = high - low;
    let labels = label(&y, range + 1.0, 10).unwrap();
    assert!(labels.iter().all(|d| d.is_flat()));
}

#[test]
fn test_filter_never_creates_labels() {
    for seed in 0..20 {
        let y = random_walk(seed, 300);
        let dir = random_labels(seed + 100, 300);
        let out = filter(&y, &dir, 1.0).unwrap();

        assert_eq!(out.len(), dir.len());
        for (before, after) in dir.iter().zip(&out) {
            assert!(after.is_flat() || after == before);
        }
    }
}

#[test]
fn test_filter_huge_excursion_clears_all() {
    let y = random_walk(3, 300);
    let dir = label(&y, 1.0, 10).unwrap();

    // a run fully below the threshold becomes flat
    let out = filter(&y, &dir, 1e9).unwrap();
    assert!(out.iter().all(|d| d.is_flat()));
}

#[test]
fn test_host_filter_matches_typed_filter() {
    let y = random_walk(11, 200);
    let dir = label(&y, 1.0, 10).unwrap();
    let host_dir: Vec<f64> = dir.iter().map(|d| d.as_f64()).collect();

    let typed: Vec<f64> = filter(&y, &dir, 1.5)
        .unwrap()
        .iter()
        .map(|d| d.as_f64())
        .collect();
    let host = filter_direction(&y, &host_dir, 1.5).unwrap();
    assert_eq!(typed, host);
}

#[test]
fn test_label_series_end_to_end() {
    let config = LabelConfig::from_toml_str("excursion = 1.5\ninactive = 10\n").unwrap();
    let y = random_walk(5, 250);

    let labels = label_series(&y, &config).unwrap();
    let unfiltered = label(&y, 1.5, 10).unwrap();
    assert_eq!(labels.len(), y.len());
    for (raw, kept) in unfiltered.iter().zip(&labels) {
        assert!(kept.is_flat() || kept == raw);
    }
}

#[test]
fn test_sawtooth_alternates_direction() {
    let y: Vec<f64> = (0..40)
        .map(|i| {
            if (i / 5) % 2 == 0 {
                (i % 5) as f64
            } else {
                (5 - i % 5) as f64
            }
        })
        .collect();
    let labels = label(&y, 3.0, 20).unwrap();

    assert!(labels.contains(&Direction::Up));
    assert!(labels.contains(&Direction::Down));
}
