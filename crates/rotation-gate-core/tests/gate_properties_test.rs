//! Property tests for the rotation gate invariants

use proptest::prelude::*;
use rotation_gate_core::{compute, GainClass, GateError};

fn entropy() -> impl Strategy<Value = f64> {
    1e-6f64..1e6
}

fn kappa() -> impl Strategy<Value = f64> {
    0.0f64..100.0
}

proptest! {
    #[test]
    fn theta_is_never_negative(h_before in entropy(), h_after in entropy(), k in kappa()) {
        let result = compute(h_before, h_after, k).unwrap();
        prop_assert!(result.theta() >= 0.0);
        prop_assert_eq!(result.kappa(), k);
    }

    #[test]
    fn regression_or_tie_is_vetoed(h_before in entropy(), factor in 1.0f64..100.0, k in kappa()) {
        let h_after = h_before * factor;
        let result = compute(h_before, h_after, k).unwrap();
        prop_assert!(result.vetoed());
        prop_assert_eq!(result.theta(), 0.0);
        prop_assert_ne!(result.class(), GainClass::Gain);
    }

    #[test]
    fn improvement_is_reinforced(h_before in entropy(), factor in 0.01f64..0.99, k in 0.001f64..100.0) {
        let result = compute(h_before, h_before * factor, k).unwrap();
        prop_assert!(!result.vetoed());
        prop_assert!(result.theta() > 0.0);
        prop_assert_eq!(result.class(), GainClass::Gain);
    }

    #[test]
    fn theta_is_linear_in_kappa(h_before in entropy(), factor in 0.01f64..0.99, k in 0.001f64..50.0) {
        let h_after = h_before * factor;
        let single = compute(h_before, h_after, k).unwrap();
        let double = compute(h_before, h_after, 2.0 * k).unwrap();
        prop_assert_eq!(double.theta(), 2.0 * single.theta());
        prop_assert_eq!(double.delta_a(), single.delta_a());
    }

    #[test]
    fn lower_after_entropy_increases_gain(
        h_before in entropy(),
        h_after in entropy(),
        shrink in 0.01f64..0.9,
        k in 0.01f64..100.0,
    ) {
        let wide = compute(h_before, h_after, k).unwrap();
        let narrow = compute(h_before, h_after * shrink, k).unwrap();
        prop_assert!(narrow.delta_a() > wide.delta_a());
        if wide.delta_a() > 0.0 {
            prop_assert!(narrow.theta() > wide.theta());
        }
    }

    #[test]
    fn non_positive_entropy_is_rejected(bad in -1e6f64..=0.0, good in entropy()) {
        prop_assert!(
            matches!(compute(bad, good, 1.0), Err(GateError::InvalidMeasurement { name: "h_before", .. })),
            "h_before = {} was accepted", bad
        );
        prop_assert!(
            matches!(compute(good, bad, 1.0), Err(GateError::InvalidMeasurement { name: "h_after", .. })),
            "h_after = {} was accepted", bad
        );
    }

    #[test]
    fn negative_kappa_is_rejected(h_before in entropy(), h_after in entropy(), k in -100.0f64..-1e-9) {
        prop_assert!(matches!(compute(h_before, h_after, k), Err(GateError::InvalidScale(_))));
    }
}
