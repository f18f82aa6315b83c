use super::*;

#[test]
fn layers_zoom_to_their_own_factor() {
    let z = ZoomParallaxConfig::default();
    assert!(z.validate().is_ok());
    let r = z.element_ranges(5).unwrap().scale.unwrap();
    assert_eq!(r.sample(0.0), 1.0);
    assert_eq!(r.sample(1.0), 8.0);
    assert_eq!(r.sample(0.5), 4.5);
}

#[test]
fn extra_layers_reuse_last_scale() {
    let z = ZoomParallaxConfig {
        scales: vec![2.0, 3.0],
        ..ZoomParallaxConfig::default()
    };
    assert_eq!(z.scale_for(1), 3.0);
    assert_eq!(z.scale_for(9), 3.0);
}

#[test]
fn rejects_empty_or_negative_scales() {
    let empty = ZoomParallaxConfig {
        scales: vec![],
        ..ZoomParallaxConfig::default()
    };
    assert!(empty.validate().is_err());
    let negative = ZoomParallaxConfig {
        scales: vec![1.0, -2.0],
        ..ZoomParallaxConfig::default()
    };
    assert!(negative.validate().is_err());
}
