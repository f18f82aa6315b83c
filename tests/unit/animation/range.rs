use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn endpoints_are_exact_for_single_segment() {
    let r = InterpolationRange::linear(0.0, 1.0, 1.0, 0.8).unwrap();
    assert_eq!(r.sample(0.0), 1.0);
    assert_eq!(r.sample(1.0), 0.8);
    assert!(approx(r.sample(0.5), 0.9));
}

#[test]
fn holds_outside_breakpoints() {
    let r = InterpolationRange::linear(0.25, 0.75, 10.0, 20.0).unwrap();
    assert_eq!(r.sample(-5.0), 10.0);
    assert_eq!(r.sample(0.1), 10.0);
    assert_eq!(r.sample(0.9), 20.0);
    assert_eq!(r.sample(42.0), 20.0);
}

#[test]
fn nan_progress_maps_to_first_output() {
    let r = InterpolationRange::linear(0.0, 1.0, 3.0, 7.0).unwrap();
    assert_eq!(r.sample(f64::NAN), 3.0);
}

#[test]
fn multi_segment_is_continuous_at_breakpoints() {
    let r = InterpolationRange::new(vec![0.0, 0.5, 1.0], vec![0.0, 100.0, 50.0]).unwrap();
    let eps = 1e-9;
    assert!(approx(r.sample(0.5 - eps), 100.0));
    assert_eq!(r.sample(0.5), 100.0);
    assert!(approx(r.sample(0.5 + eps), 100.0));
    assert!(approx(r.sample(0.75), 75.0));
}

#[test]
fn monotonic_in_direction_of_outputs() {
    let down = InterpolationRange::linear(0.0, 1.0, 1.0, 0.6).unwrap();
    let up = InterpolationRange::linear(0.0, 1.0, 0.0, 1.0)
        .unwrap()
        .with_ease(Ease::InOutCubic);
    let mut prev_down = down.sample(0.0);
    let mut prev_up = up.sample(0.0);
    for i in 1..=200 {
        let p = f64::from(i) / 200.0;
        let d = down.sample(p);
        let u = up.sample(p);
        assert!(d <= prev_down, "decreasing range went up at {p}");
        assert!(u >= prev_up, "increasing range went down at {p}");
        prev_down = d;
        prev_up = u;
    }
}

#[test]
fn repeated_breakpoint_steps_to_later_output() {
    let r = InterpolationRange::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 5.0, 6.0]).unwrap();
    assert!(approx(r.sample(0.25), 0.5));
    assert_eq!(r.sample(0.5), 5.0);
    assert!(approx(r.sample(0.75), 5.5));
}

#[test]
fn single_breakpoint_is_constant() {
    let r = InterpolationRange::constant(0.3);
    for p in [-1.0, 0.0, 0.5, 1.0, 9.0] {
        assert_eq!(r.sample(p), 0.3);
    }
}

#[test]
fn construction_rejects_malformed_ranges() {
    assert!(InterpolationRange::new(vec![], vec![]).is_err());
    assert!(InterpolationRange::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(InterpolationRange::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
    assert!(InterpolationRange::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).is_err());
    assert!(InterpolationRange::new(vec![0.0, 1.0], vec![0.0, f64::INFINITY]).is_err());
}

#[test]
fn deserialization_enforces_invariants() {
    let ok: InterpolationRange =
        serde_json::from_str(r#"{"input":[0,1],"output":[1,0.8],"ease":"out_quad"}"#).unwrap();
    assert_eq!(ok.ease(), Ease::OutQuad);
    assert_eq!(ok.end_output(), 0.8);

    let bad = serde_json::from_str::<InterpolationRange>(r#"{"input":[1,0],"output":[1,0.8]}"#);
    assert!(bad.is_err());
}

#[test]
fn output_bounds_cover_all_outputs() {
    let r = InterpolationRange::new(vec![0.0, 0.5, 1.0], vec![2.0, -1.0, 4.0]).unwrap();
    assert_eq!(r.output_bounds(), (-1.0, 4.0));
}
