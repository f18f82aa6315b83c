use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::{
    foundation::core::{AnchorId, ElementGeometry, Viewport, ViewportMetrics},
    sensor::viewport::{ListenerId, SensorEvent, SensorListener, ViewportSensor},
};

type SharedListener = Rc<RefCell<SensorListener>>;

/// Deterministic in-memory [`ViewportSensor`].
///
/// Drives scenes from tests and from the `scrollfx simulate` command: the caller sets scroll
/// position, viewport size and node geometry, and every change is broadcast to listeners
/// synchronously.
#[derive(Default)]
pub struct SimulatedViewport {
    metrics: Cell<Option<ViewportMetrics>>,
    nodes: RefCell<BTreeMap<AnchorId, ElementGeometry>>,
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
    next_id: Cell<u64>,
    dispatched: Cell<u64>,
}

impl SimulatedViewport {
    pub fn new(viewport: Viewport) -> Self {
        let sim = Self::default();
        sim.metrics.set(Some(ViewportMetrics {
            scroll_y: 0.0,
            viewport,
        }));
        sim
    }

    pub fn shared(viewport: Viewport) -> Rc<Self> {
        Rc::new(Self::new(viewport))
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        let mut m = self.metrics();
        m.scroll_y = scroll_y;
        self.metrics.set(Some(m));
        self.dispatch(SensorEvent::Scroll);
    }

    pub fn resize(&self, viewport: Viewport) {
        let mut m = self.metrics();
        m.viewport = viewport;
        self.metrics.set(Some(m));
        self.dispatch(SensorEvent::Resize);
    }

    /// Mount or re-measure a node.
    pub fn set_geometry(&self, anchor: AnchorId, geometry: ElementGeometry) {
        self.nodes.borrow_mut().insert(anchor, geometry);
        self.dispatch(SensorEvent::ContentChanged(anchor));
    }

    /// Place nodes without notifying listeners, as a host does before the first mount.
    pub fn place(&self, anchor: AnchorId, geometry: ElementGeometry) {
        self.nodes.borrow_mut().insert(anchor, geometry);
    }

    pub fn remove_node(&self, anchor: AnchorId) {
        if self.nodes.borrow_mut().remove(&anchor).is_some() {
            self.dispatch(SensorEvent::ContentChanged(anchor));
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Total events delivered to listeners so far.
    pub fn dispatched_events(&self) -> u64 {
        self.dispatched.get()
    }

    fn dispatch(&self, event: SensorEvent) {
        // Snapshot so listeners may (un)subscribe while being notified.
        let listeners: Vec<SharedListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for l in listeners {
            (*l.borrow_mut())(event);
            self.dispatched.set(self.dispatched.get() + 1);
        }
    }
}

impl ViewportSensor for SimulatedViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.metrics.get().unwrap_or(ViewportMetrics {
            scroll_y: 0.0,
            viewport: Viewport {
                width: 0.0,
                height: 0.0,
            },
        })
    }

    fn geometry(&self, anchor: AnchorId) -> Option<ElementGeometry> {
        self.nodes.borrow().get(&anchor).copied()
    }

    fn subscribe(&self, listener: SensorListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

impl std::fmt::Debug for SimulatedViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedViewport")
            .field("metrics", &self.metrics.get())
            .field("nodes", &self.nodes.borrow().len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sensor/simulated.rs"]
mod tests;
