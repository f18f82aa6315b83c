use super::*;
use crate::foundation::core::Viewport;

fn metrics(scroll_y: f64, height: f64) -> ViewportMetrics {
    ViewportMetrics {
        scroll_y,
        viewport: Viewport {
            width: 1280.0,
            height,
        },
    }
}

const EL: ElementGeometry = ElementGeometry {
    top: 2000.0,
    height: 500.0,
};

#[test]
fn contained_progress_clamps_to_unit_interval() {
    let p = |y| compute_progress(ProgressMode::Contained, ScrollOffset::ENTER, EL, metrics(y, 800.0));
    assert_eq!(p(0.0), Some(0.0));
    assert_eq!(p(1200.0), Some(0.0));
    assert_eq!(p(1600.0), Some(0.5));
    assert_eq!(p(2000.0), Some(1.0));
    assert_eq!(p(9000.0), Some(1.0));
}

#[test]
fn global_progress_is_unbounded() {
    let p = |y| compute_progress(ProgressMode::Global, ScrollOffset::ENTER, EL, metrics(y, 800.0));
    assert_eq!(p(800.0), Some(-0.5));
    assert_eq!(p(2400.0), Some(1.5));
}

#[test]
fn unmeasurable_geometry_yields_none() {
    let flat = ElementGeometry::new(2000.0, 0.0);
    assert_eq!(
        compute_progress(ProgressMode::Contained, ScrollOffset::ENTER, flat, metrics(0.0, 800.0)),
        None
    );
    assert_eq!(
        compute_progress(ProgressMode::Contained, ScrollOffset::ENTER, EL, metrics(f64::NAN, 800.0)),
        None
    );
    assert_eq!(
        compute_progress(ProgressMode::Contained, ScrollOffset::ENTER, EL, metrics(0.0, 0.0)),
        None
    );
}

#[test]
fn zero_width_span_steps() {
    let off = ScrollOffset::parse("start start", "start start").unwrap();
    let p = |y| compute_progress(ProgressMode::Contained, off, EL, metrics(y, 800.0));
    assert_eq!(p(1999.0), Some(0.0));
    assert_eq!(p(2000.0), Some(1.0));
}

#[test]
fn source_retains_last_good_value() {
    let mut src = ProgressSource::new(ProgressMode::Contained, ScrollOffset::ENTER);
    assert_eq!(src.value(), 0.0);
    assert!(!src.has_measurement());

    assert_eq!(src.update(None, metrics(1600.0, 800.0)), ProgressUpdate::Retained);
    assert_eq!(src.value(), 0.0);

    assert_eq!(src.update(Some(EL), metrics(1600.0, 800.0)), ProgressUpdate::Changed);
    assert_eq!(src.value(), 0.5);
    assert_eq!(src.phase(), Phase::Active);

    assert_eq!(
        src.update(Some(EL), metrics(f64::NAN, 800.0)),
        ProgressUpdate::Retained
    );
    assert_eq!(src.value(), 0.5);

    assert_eq!(src.update(Some(EL), metrics(1600.0, 800.0)), ProgressUpdate::Unchanged);
}

#[test]
fn resize_then_restore_returns_same_progress() {
    let mut src = ProgressSource::new(ProgressMode::Global, ScrollOffset::ENTER);
    src.update(Some(EL), metrics(1500.0, 800.0));
    let before = src.value();
    src.update(Some(EL), metrics(1500.0, 430.0));
    assert_ne!(src.value(), before);
    src.update(Some(EL), metrics(1500.0, 800.0));
    assert!((src.value() - before).abs() < 1e-12);
}

#[test]
fn phases_follow_progress() {
    assert_eq!(Phase::of(0.0), Phase::Before);
    assert_eq!(Phase::of(-2.0), Phase::Before);
    assert_eq!(Phase::of(0.3), Phase::Active);
    assert_eq!(Phase::of(1.0), Phase::After);
}
