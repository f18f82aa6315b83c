use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutExpo,
];

#[test]
fn curves_pin_endpoints() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn curves_clamp_outside_unit_interval() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn curves_are_non_decreasing() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn curves_are_continuous_at_segment_ends() {
    for ease in ALL {
        assert!(ease.apply(1e-12).abs() < 1e-9, "{ease:?} near 0");
        assert!((ease.apply(1.0 - 1e-12) - 1.0).abs() < 1e-9, "{ease:?} near 1");
        assert!(
            (ease.apply(0.5 - 1e-12) - ease.apply(0.5 + 1e-12)).abs() < 1e-9,
            "{ease:?} at the midpoint"
        );
    }
}

#[test]
fn out_expo_settles_into_one() {
    let near = Ease::OutExpo.apply(1.0 - 1e-12);
    assert!(near <= 1.0 && 1.0 - near < 1e-9);
    assert!(Ease::OutExpo.apply(0.5) > 0.95);
}

#[test]
fn serde_uses_snake_case() {
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
