use super::*;
use crate::sensor::simulated::SimulatedViewport;

const CONTAINER: AnchorId = AnchorId(100);

fn vp(height: f64) -> Viewport {
    Viewport {
        width: 1280.0,
        height,
    }
}

fn setup() -> (SimulatedViewport, LayoutObserver) {
    let sim = SimulatedViewport::new(vp(800.0));
    sim.place(CONTAINER, ElementGeometry::new(500.0, 3000.0));
    sim.place(AnchorId(0), ElementGeometry::new(500.0, 400.0));
    sim.place(AnchorId(1), ElementGeometry::new(900.0, 400.0));
    let obs = LayoutObserver::new(CONTAINER, vec![AnchorId(0), AnchorId(1)]);
    (sim, obs)
}

#[test]
fn measures_extent_and_elements() {
    let (sim, mut obs) = setup();
    assert_eq!(obs.remeasure(&sim), LayoutStatus::Updated);
    let snap = obs.snapshot().unwrap();
    assert_eq!(snap.scroll_extent, 2200.0);
    assert_eq!(snap.element(1), Some(ElementGeometry::new(900.0, 400.0)));
    assert_eq!(obs.generation(), 1);
}

#[test]
fn repeated_remeasure_is_stable() {
    let (sim, mut obs) = setup();
    obs.remeasure(&sim);
    let first = obs.snapshot().cloned();
    assert_eq!(obs.remeasure(&sim), LayoutStatus::Unchanged);
    assert_eq!(obs.snapshot().cloned(), first);
    assert_eq!(obs.generation(), 1);
}

#[test]
fn zero_height_container_keeps_previous_snapshot() {
    let (sim, mut obs) = setup();
    assert_eq!(
        LayoutObserver::new(CONTAINER, vec![]).remeasure(&SimulatedViewport::new(vp(800.0))),
        LayoutStatus::Stale(LayoutRejection::Container)
    );

    obs.remeasure(&sim);
    sim.place(CONTAINER, ElementGeometry::new(500.0, 0.0));
    assert_eq!(
        obs.remeasure(&sim),
        LayoutStatus::Stale(LayoutRejection::Container)
    );
    assert_eq!(obs.snapshot().unwrap().container.height, 3000.0);
}

#[test]
fn nan_element_read_keeps_last_good_geometry() {
    let (sim, mut obs) = setup();
    obs.remeasure(&sim);
    sim.place(AnchorId(1), ElementGeometry::new(f64::NAN, 400.0));
    sim.place(CONTAINER, ElementGeometry::new(500.0, 3200.0));
    assert_eq!(obs.remeasure(&sim), LayoutStatus::Updated);
    let snap = obs.snapshot().unwrap();
    assert_eq!(snap.element(1), Some(ElementGeometry::new(900.0, 400.0)));
    assert_eq!(snap.container.height, 3200.0);
}

#[test]
fn content_growth_is_picked_up() {
    let (sim, mut obs) = setup();
    obs.remeasure(&sim);
    sim.set_geometry(AnchorId(0), ElementGeometry::new(500.0, 650.0));
    assert_eq!(obs.remeasure(&sim), LayoutStatus::Updated);
    assert_eq!(obs.snapshot().unwrap().length_context(0).element_height, 650.0);
}

#[test]
fn unmeasured_element_resolves_percentages_to_zero() {
    let sim = SimulatedViewport::new(vp(800.0));
    sim.place(CONTAINER, ElementGeometry::new(0.0, 2000.0));
    let mut obs = LayoutObserver::new(CONTAINER, vec![AnchorId(7)]);
    obs.remeasure(&sim);
    let snap = obs.snapshot().unwrap();
    assert_eq!(snap.element(0), None);
    assert_eq!(snap.length_context(0).element_height, 0.0);
    assert_eq!(snap.length_context(0).viewport_height, 800.0);
}

#[test]
fn bad_viewport_is_rejected() {
    let (sim, mut obs) = setup();
    sim.resize(vp(0.0));
    assert_eq!(
        obs.remeasure(&sim),
        LayoutStatus::Stale(LayoutRejection::Viewport)
    );
    assert!(obs.snapshot().is_none());
}
