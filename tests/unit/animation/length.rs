use super::*;

const CTX: LengthContext = LengthContext {
    viewport_height: 800.0,
    element_height: 400.0,
};

#[test]
fn parses_units() {
    assert_eq!("25px".parse::<Length>().unwrap(), Length::Px(25.0));
    assert_eq!("-5vh".parse::<Length>().unwrap(), Length::Vh(-5.0));
    assert_eq!("100%".parse::<Length>().unwrap(), Length::Percent(100.0));
    assert_eq!(" 12 ".parse::<Length>().unwrap(), Length::Px(12.0));
    assert!("abc".parse::<Length>().is_err());
    assert!("infpx".parse::<Length>().is_err());
}

#[test]
fn resolves_against_layout() {
    assert_eq!(Length::Px(25.0).resolve(CTX), 25.0);
    assert_eq!(Length::Vh(-5.0).resolve(CTX), -40.0);
    assert_eq!(Length::Percent(50.0).resolve(CTX), 200.0);
}

#[test]
fn serde_accepts_numbers_and_strings() {
    let ls: Vec<Length> = serde_json::from_str(r#"[10, "10vh", "50%"]"#).unwrap();
    assert_eq!(
        ls,
        vec![Length::Px(10.0), Length::Vh(10.0), Length::Percent(50.0)]
    );
    assert_eq!(serde_json::to_string(&Length::Vh(10.0)).unwrap(), "\"10vh\"");
}

#[test]
fn range_resolves_per_layout() {
    let r = LengthRange::linear(0.0, 1.0, Length::ZERO, Length::Percent(100.0)).unwrap();
    assert!(!r.is_absolute());

    let small = r.resolve(CTX).unwrap();
    assert_eq!(small.end_output(), 400.0);

    let tall = r
        .resolve(LengthContext {
            element_height: 1200.0,
            ..CTX
        })
        .unwrap();
    assert_eq!(tall.end_output(), 1200.0);
    assert_eq!(tall.sample(0.5), 600.0);
}

#[test]
fn pixel_ranges_round_trip_through_length_ranges() {
    let px = InterpolationRange::linear(0.0, 1.0, 0.0, 30.0).unwrap();
    let lr = LengthRange::from(px.clone());
    assert!(lr.is_absolute());
    assert_eq!(lr.resolve(CTX).unwrap(), px);
}
