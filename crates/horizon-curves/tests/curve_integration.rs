//! Integration test: curves built from the same Treasury zero rates.
//!
//! Market Data: November 28, 2025 (zero rates, percent, annual compounding)
//!
//! | Tenor | Zero    |
//! |-------|---------|
//! | 3M    | 3.806%  |
//! | 6M    | 3.774%  |
//! | 1Y    | 3.591%  |
//! | 2Y    | 3.502%  |
//! | 5Y    | 3.603%  |
//! | 10Y   | 4.018%  |
//! | 30Y   | 4.667%  |

use std::sync::Arc;
use std::thread;

use horizon_curves::{interpolate_rate, CurvePoint, ParallelBump, ScenarioBump, ZeroCurve};

fn treasury_points() -> Vec<CurvePoint> {
    vec![
        CurvePoint::new(0.25, 3.806),
        CurvePoint::new(0.5, 3.774),
        CurvePoint::new(1.0, 3.591),
        CurvePoint::new(2.0, 3.502),
        CurvePoint::new(5.0, 3.603),
        CurvePoint::new(10.0, 4.018),
        CurvePoint::new(30.0, 4.667),
    ]
}

#[test]
fn test_value_equal_instances_interpolate_identically() {
    // Two independently allocated curves with identical contents
    let a = ZeroCurve::new(treasury_points()).unwrap();
    let b = ZeroCurve::new(treasury_points()).unwrap();

    // Interleave lookups so any shared state would be exercised
    for i in 0..=400 {
        let t = f64::from(i) * 0.1;
        let ra = a.rate_at(t).unwrap();
        let rb = b.rate_at(t).unwrap();
        assert_eq!(ra, rb, "curves disagree at {t}");
        assert_eq!(ra, interpolate_rate(&treasury_points(), t).unwrap());
    }
}

#[test]
fn test_modified_instance_does_not_leak_into_original() {
    let base = ZeroCurve::new(treasury_points()).unwrap();
    let before = base.rate_at(7.0).unwrap();

    let mut points = treasury_points();
    points[5].rate = 5.0;
    let other = ZeroCurve::new(points).unwrap();

    assert!(other.rate_at(7.0).unwrap() > before);
    assert_eq!(base.rate_at(7.0).unwrap(), before);
}

#[test]
fn test_shared_across_threads() {
    let curve = Arc::new(ZeroCurve::new(treasury_points()).unwrap());
    let expected: Vec<f64> = (0..50)
        .map(|i| curve.rate_at(f64::from(i) * 0.6).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let curve = Arc::clone(&curve);
            thread::spawn(move || {
                (0..50)
                    .map(|i| curve.rate_at(f64::from(i) * 0.6).unwrap())
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_curve_stays_within_pillars_on_hump() {
    // 3M -> 2Y falls, 2Y -> 30Y rises; no segment may leave its pillar range
    let curve = ZeroCurve::new(treasury_points()).unwrap();
    let points = curve.points();

    for w in points.windows(2) {
        let lo = w[0].rate.min(w[1].rate);
        let hi = w[0].rate.max(w[1].rate);
        for step in 1..10 {
            let t = w[0].tenor + (w[1].tenor - w[0].tenor) * f64::from(step) / 10.0;
            let r = curve.rate_at(t).unwrap();
            assert!(r >= lo - 1e-12 && r <= hi + 1e-12, "overshoot at {t}: {r}");
        }
    }
}

#[test]
fn test_parallel_scenario_matches_parallel_bump() {
    let base = ZeroCurve::new(treasury_points()).unwrap();
    let via_bump = ParallelBump::new(-35.0).apply(&base).unwrap();
    let via_scenario = ScenarioBump::parallel(-35.0).apply(&base).unwrap();

    for i in 0..=60 {
        let t = f64::from(i) * 0.5;
        assert_eq!(via_bump.rate_at(t).unwrap(), via_scenario.rate_at(t).unwrap());
    }
}
