use super::*;
use crate::animation::length::LengthContext;

#[test]
fn slides_up_and_fades_in() {
    let r = RevealConfig::default().element_ranges().unwrap();
    let ctx = LengthContext {
        viewport_height: 800.0,
        element_height: 200.0,
    };
    let resolved = r.resolve(ctx).unwrap();
    let start = crate::mapping::mapper::map(0.0, &resolved);
    let end = crate::mapping::mapper::map(1.0, &resolved);
    assert_eq!(start.translate.y, 50.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(end.translate.y, 0.0);
    assert_eq!(end.opacity, 1.0);

    let mid = crate::mapping::mapper::map(0.5, &resolved);
    assert!(mid.opacity > 0.5, "out-cubic front-loads the fade");
}

#[test]
fn relative_offsets_follow_the_viewport() {
    let cfg = RevealConfig {
        from_offset_y: Length::Vh(10.0),
        ..RevealConfig::default()
    };
    let r = cfg.element_ranges().unwrap();
    let resolved = r
        .resolve(LengthContext {
            viewport_height: 600.0,
            element_height: 0.0,
        })
        .unwrap();
    assert_eq!(crate::mapping::mapper::map(0.0, &resolved).translate.y, 60.0);
}

#[test]
fn rejects_out_of_range_opacity() {
    let cfg = RevealConfig {
        from_opacity: 2.0,
        ..RevealConfig::default()
    };
    assert!(cfg.validate().is_err());
}
