//! Accumulation scenarios across stamps, bulk insertion and cancellation.

use std::cell::Cell;

use heatstamp_core::{CancelToken, Error, HeatGrid, NeverCancel, Stamp};

/// Deterministic scatter of `n` points over a `w x h` area (plus some outside it).
fn scatter(n: usize, w: i32, h: i32) -> Vec<(i32, i32)> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let x = (state % (w as u64 + 8)) as i32 - 4;
            let y = ((state >> 32) % (h as u64 + 8)) as i32 - 4;
            (x, y)
        })
        .collect()
}

fn cells_max(grid: &HeatGrid) -> f32 {
    grid.iter().fold(0.0, f32::max)
}

#[test]
fn cancellation_after_500_of_1000_points() {
    let stamp = Stamp::generate_radial(3).unwrap();
    let points = scatter(1000, 64, 48);
    let polls = Cell::new(0usize);
    let cancel = || {
        let n = polls.get();
        polls.set(n + 1);
        n >= 500
    };

    let mut grid = HeatGrid::new(64, 48);
    let err = grid
        .add_points_with_stamp(&points, &stamp, &cancel)
        .unwrap_err();
    assert!(err.is_cancelled());
    assert!(matches!(err, Error::Cancelled { completed: 500 }));

    let mut expected = HeatGrid::new(64, 48);
    for &(x, y) in &points[..500] {
        expected.add_point_with_stamp(x, y, &stamp);
    }
    assert_eq!(grid, expected);
    assert_eq!(grid.max(), expected.max());
}

#[test]
fn pre_cancelled_token_applies_nothing() {
    let token = CancelToken::new();
    token.cancel();
    let mut grid = HeatGrid::new(8, 8);
    let err = grid.add_points(&[(1, 1), (2, 2)], &token).unwrap_err();
    assert!(matches!(err, Error::Cancelled { completed: 0 }));
    assert_eq!(grid, HeatGrid::new(8, 8));
}

#[test]
fn running_max_invariant_over_long_sequence() {
    let stamps = [
        Stamp::generate_radial(1).unwrap(),
        Stamp::generate_radial(5).unwrap(),
        Stamp::generate_nonlinear(4, |t| (1.0 - t).max(0.0).powi(2)).unwrap(),
        Stamp::load(2, 3, &[0.5, 1.0, 2.0, 0.0, 0.25, 0.75]).unwrap(),
    ];
    let mut grid = HeatGrid::new(40, 30);
    for (i, &(x, y)) in scatter(400, 40, 30).iter().enumerate() {
        match i % 3 {
            0 => grid.add_point(x, y),
            1 => grid.add_point_with_stamp(x, y, &stamps[i % stamps.len()]),
            _ => grid.add_weighted_point_with_stamp(x, y, 0.5 + (i % 4) as f32, &stamps[i % stamps.len()]),
        }
        assert_eq!(grid.max(), cells_max(&grid), "after mutation {i}");
    }
}

#[test]
fn bulk_variants_match_single_point_calls() {
    let stamp = Stamp::generate_radial(2).unwrap();
    let points = scatter(200, 20, 20);

    let mut bulk = HeatGrid::new(20, 20);
    bulk.add_points(&points, &NeverCancel).unwrap();
    bulk.add_points_with_stamp(&points, &stamp, &NeverCancel).unwrap();
    bulk.add_weighted_points_with_stamp(&points, 1.5, &stamp, &NeverCancel)
        .unwrap();

    let mut single = HeatGrid::new(20, 20);
    for &(x, y) in &points {
        single.add_point(x, y);
    }
    for &(x, y) in &points {
        single.add_point_with_stamp(x, y, &stamp);
    }
    for &(x, y) in &points {
        single.add_weighted_point_with_stamp(x, y, 1.5, &stamp);
    }

    assert_eq!(bulk, single);
}

#[test]
fn stamp_shared_across_grids() {
    let stamp = Stamp::generate_radial(4).unwrap();
    let mut a = HeatGrid::new(10, 10);
    let mut b = HeatGrid::new(30, 5);
    a.add_point_with_stamp(5, 5, &stamp);
    b.add_point_with_stamp(5, 2, &stamp);
    assert_eq!(a.max(), 1.0);
    assert_eq!(b.max(), 1.0);
    assert_eq!(stamp, Stamp::generate_radial(4).unwrap());
}

#[test]
fn stamps_built_concurrently_keep_their_falloff() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let level = i as f32 * 0.1;
                (level, Stamp::generate_nonlinear(3, move |_| level).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (level, stamp) = handle.join().unwrap();
        assert_eq!(stamp.shape(), (7, 7));
        // a constant falloff covers the whole square, corners included
        assert!(stamp.weights().iter().all(|&w| w == level));
    }
}
