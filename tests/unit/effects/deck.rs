use super::*;

#[test]
fn defaults_match_card_stack() {
    let d = DeckConfig::default();
    assert!(d.validate().is_ok());
    assert_eq!(d.policy().stack_offset(3), 75.0);
    assert!(d.policy().last_element_is_exempt);
    assert_eq!(d.offset(), ScrollOffset::ENTER);
}

#[test]
fn contained_cards_share_unit_arc() {
    let d = DeckConfig::default();
    let r = d.element_ranges(3, 5).unwrap();
    let scale = r.scale.unwrap();
    assert_eq!(scale.inputs(), &[0.0, 1.0]);
    assert_eq!(scale.sample(0.0), 1.0);
    assert_eq!(scale.sample(1.0), 0.8);
    assert!(r.opacity.is_none());
    assert!(r.rotation.is_none());
}

#[test]
fn global_cards_consume_later_slices() {
    let d = DeckConfig {
        mode: ProgressMode::Global,
        scale_step: Some(0.05),
        ..DeckConfig::default()
    };
    assert_eq!(d.offset(), ScrollOffset::CONTAIN);

    let first = d.element_ranges(0, 4).unwrap().scale.unwrap();
    let third = d.element_ranges(2, 4).unwrap().scale.unwrap();
    assert_eq!(first.inputs(), &[0.0, 1.0]);
    assert_eq!(third.inputs(), &[0.5, 1.0]);
    assert!((first.end_output() - 0.8).abs() < 1e-12);
    assert!((third.end_output() - 0.9).abs() < 1e-12);
    assert_eq!(third.sample(0.4), 1.0);
}

#[test]
fn optional_fade_and_tilt() {
    let d = DeckConfig {
        target_opacity: 0.3,
        rotation_deg: -4.0,
        ..DeckConfig::default()
    };
    let r = d.element_ranges(0, 2).unwrap();
    assert_eq!(r.opacity.unwrap().end_output(), 0.3);
    assert_eq!(r.rotation.unwrap().end_output(), -4.0);
}

#[test]
fn validation_rejects_bad_values() {
    for bad in [
        DeckConfig {
            target_scale: -1.0,
            ..DeckConfig::default()
        },
        DeckConfig {
            target_opacity: 1.5,
            ..DeckConfig::default()
        },
        DeckConfig {
            pixel_step: f64::NAN,
            ..DeckConfig::default()
        },
        DeckConfig {
            scale_step: Some(-0.1),
            ..DeckConfig::default()
        },
    ] {
        assert!(bad.validate().is_err(), "{bad:?}");
    }
}
