use super::*;
use crate::foundation::core::Vec2;

fn receded() -> ElementTransform {
    ElementTransform {
        translate: Vec2::new(0.0, -10.0),
        scale: 0.8,
        rotation_deg: -3.0,
        opacity: 0.5,
    }
}

#[test]
fn offset_is_index_times_step() {
    let p = DeckPolicy {
        pixel_step: 25.0,
        ..DeckPolicy::default()
    };
    assert_eq!(p.stack_offset(0), 0.0);
    assert_eq!(p.stack_offset(3), 75.0);
}

#[test]
fn last_element_keeps_identity_plus_offset() {
    let p = DeckPolicy {
        pixel_step: 25.0,
        last_element_is_exempt: true,
    };
    let t = p.apply(4, 5, receded());
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.opacity, 1.0);
    assert_eq!(t.rotation_deg, 0.0);
    assert_eq!(t.translate, Vec2::new(0.0, 100.0));

    let earlier = p.apply(3, 5, receded());
    assert_eq!(earlier.scale, 0.8);
    assert_eq!(earlier.translate, Vec2::new(0.0, 65.0));
}

#[test]
fn exemption_can_be_turned_off() {
    let p = DeckPolicy {
        pixel_step: 0.0,
        last_element_is_exempt: false,
    };
    assert!(!p.is_exempt(4, 5));
    assert_eq!(p.apply(4, 5, receded()).scale, 0.8);
}

#[test]
fn fewer_than_two_elements_render_identity() {
    let p = DeckPolicy {
        pixel_step: 25.0,
        last_element_is_exempt: false,
    };
    assert!(p.apply(0, 1, receded()).is_identity());
    assert!(!p.is_exempt(0, 0));
}
