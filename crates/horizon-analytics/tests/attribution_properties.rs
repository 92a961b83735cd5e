//! Property-based tests for return attribution invariants.
//!
//! These tests verify identities that hold for any bond, curve pair and horizon:
//! - Rolldown + duration + shape = price return
//! - Price + coupon + reinvestment = total return
//! - An unchanged curve produces no duration or shape effect
//! - A pure parallel move produces no shape effect

use proptest::prelude::*;

use horizon_analytics::prelude::*;
use horizon_bonds::{BondParameters, Frequency};
use horizon_curves::{CurvePoint, ScenarioBump, ZeroCurve};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const TENORS: [f64; 6] = [0.25, 1.0, 2.0, 5.0, 10.0, 30.0];

fn curve() -> impl Strategy<Value = ZeroCurve> {
    prop::collection::vec(0.5f64..8.0, TENORS.len()).prop_map(|rates| {
        let points: Vec<CurvePoint> = TENORS
            .iter()
            .zip(rates)
            .map(|(&tenor, rate)| CurvePoint::new(tenor, rate))
            .collect();
        ZeroCurve::new(points).unwrap()
    })
}

fn bond() -> impl Strategy<Value = BondParameters> {
    (
        0.0f64..9.0,
        0.5f64..30.0,
        prop_oneof![
            Just(Frequency::Annual),
            Just(Frequency::SemiAnnual),
            Just(Frequency::Quarterly),
        ],
    )
        .prop_map(|(coupon, maturity, frequency)| BondParameters::new(coupon, maturity, frequency))
}

fn scenario() -> impl Strategy<Value = ScenarioBump> {
    prop_oneof![
        (-150.0f64..150.0).prop_map(ScenarioBump::parallel),
        (0.0f64..100.0, 0.0f64..100.0, 1.0f64..10.0)
            .prop_map(|(s, l, p)| ScenarioBump::steepener(s, l, p)),
        (0.0f64..100.0, 0.0f64..100.0, 1.0f64..10.0)
            .prop_map(|(s, l, p)| ScenarioBump::flattener(s, l, p)),
    ]
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_price_legs_telescope(
        bond in bond(),
        start in curve(),
        end in curve(),
        horizon in 0.0f64..5.0,
    ) {
        let result = compute_total_return(&bond, &start, &end, horizon).unwrap();

        prop_assert!((result.decomposed_price_return() - result.price_return).abs() < 1e-9);
        prop_assert!((result.components_total() - result.total_return).abs() < 1e-9);
    }

    #[test]
    fn prop_scenario_legs_telescope(
        bond in bond(),
        start in curve(),
        bump in scenario(),
        horizon in 0.0f64..3.0,
    ) {
        let end = bump.apply(&start).unwrap();
        let result = compute_total_return(&bond, &start, &end, horizon).unwrap();

        prop_assert!((result.decomposed_price_return() - result.price_return).abs() < 1e-9);
    }

    #[test]
    fn prop_unchanged_curve_is_pure_rolldown(
        bond in bond(),
        curve in curve(),
        horizon in 0.0f64..5.0,
    ) {
        let result = compute_total_return(&bond, &curve, &curve, horizon).unwrap();

        prop_assert!(result.duration_return.abs() < 1e-12);
        prop_assert!(result.shape_return.abs() < 1e-12);
    }

    #[test]
    fn prop_parallel_move_has_negligible_shape(
        bond in bond(),
        curve in curve(),
        shift_bps in -150.0f64..150.0,
        horizon in 0.0f64..3.0,
    ) {
        let end = ScenarioBump::parallel(shift_bps).apply(&curve).unwrap();
        let result = compute_total_return(&bond, &curve, &end, horizon).unwrap();

        prop_assert!(result.shape_return.abs() < 1e-8);
    }

    #[test]
    fn prop_coupon_income_bounded_by_horizon(
        bond in bond(),
        curve in curve(),
        horizon in 0.0f64..10.0,
    ) {
        let result = compute_total_return(&bond, &curve, &curve, horizon).unwrap();
        let per_year = bond.coupon_rate / 100.0 * bond.face_value;
        // A short first period can pull one extra coupon inside the horizon
        let span = horizon.min(bond.maturity_years) + bond.frequency.period_length();

        prop_assert!(result.coupon_income >= 0.0);
        prop_assert!(result.coupon_income <= per_year * span + 1e-9);
        prop_assert!(result.reinvestment_income >= 0.0);
    }
}
