use crate::{
    animation::length::LengthContext,
    foundation::core::{AnchorId, ElementGeometry, Viewport},
    sensor::viewport::ViewportSensor,
};

/// Geometry the engine resolves ranges and progress against.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub container: ElementGeometry,
    /// Per tracked element; `None` until the element has been measured once.
    pub elements: Vec<Option<ElementGeometry>>,
    /// How far the container can scroll past the viewport (`>= 0`).
    pub scroll_extent: f64,
}

impl LayoutSnapshot {
    pub fn element(&self, index: usize) -> Option<ElementGeometry> {
        self.elements.get(index).copied().flatten()
    }

    /// Measurements for resolving lengths of element `index`. An unmeasured element has no
    /// height yet, so its percentages resolve to 0 until it loads.
    pub fn length_context(&self, index: usize) -> LengthContext {
        LengthContext {
            viewport_height: self.viewport.height,
            element_height: self.element(index).map_or(0.0, |g| g.height),
        }
    }

    pub fn container_context(&self) -> LengthContext {
        LengthContext {
            viewport_height: self.viewport.height,
            element_height: self.container.height,
        }
    }
}

/// Why a remeasure was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutRejection {
    Viewport,
    /// Container missing, zero-height or non-finite.
    Container,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutStatus {
    Updated,
    Unchanged,
    /// Measurement rejected; the previous snapshot (if any) stays current.
    Stale(LayoutRejection),
}

/// Remeasures container and element geometry on demand.
///
/// `remeasure` is a pure read of the sensor; calling it repeatedly is safe. Bad reads never
/// replace good ones: a rejected container keeps the whole previous snapshot, and an
/// unmeasurable element keeps its own previous geometry.
#[derive(Clone, Debug)]
pub struct LayoutObserver {
    container: AnchorId,
    anchors: Vec<AnchorId>,
    current: Option<LayoutSnapshot>,
    generation: u64,
}

impl LayoutObserver {
    pub fn new(container: AnchorId, anchors: Vec<AnchorId>) -> Self {
        Self {
            container,
            anchors,
            current: None,
            generation: 0,
        }
    }

    pub fn container(&self) -> AnchorId {
        self.container
    }

    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.current.as_ref()
    }

    /// Bumped every time an accepted measurement differs from the previous one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn remeasure(&mut self, sensor: &dyn ViewportSensor) -> LayoutStatus {
        let viewport = sensor.metrics().viewport;
        if !viewport.is_measurable() {
            tracing::warn!(?viewport, "viewport not measurable; keeping previous layout");
            return LayoutStatus::Stale(LayoutRejection::Viewport);
        }
        let container = match sensor.geometry(self.container) {
            Some(g) if g.is_measurable() => g,
            other => {
                tracing::warn!(
                    anchor = self.container.0,
                    geometry = ?other,
                    "container not measurable; keeping previous layout"
                );
                return LayoutStatus::Stale(LayoutRejection::Container);
            }
        };

        let elements = self
            .anchors
            .iter()
            .enumerate()
            .map(|(i, &anchor)| match sensor.geometry(anchor) {
                Some(g) if g.is_measurable() => Some(g),
                _ => self.current.as_ref().and_then(|s| s.element(i)),
            })
            .collect();

        let next = LayoutSnapshot {
            viewport,
            container,
            elements,
            scroll_extent: (container.height - viewport.height).max(0.0),
        };

        if self.current.as_ref() == Some(&next) {
            return LayoutStatus::Unchanged;
        }
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            container_height = container.height,
            scroll_extent = next.scroll_extent,
            "layout remeasured"
        );
        self.current = Some(next);
        LayoutStatus::Updated
    }

    /// Forget the current snapshot, e.g. after unmount.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/observer.rs"]
mod tests;
