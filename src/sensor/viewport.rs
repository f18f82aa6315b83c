//! Injected view of the host's scroll and layout state.
//!
//! The engine never reads window size or scroll offset from global state. Everything comes
//! through a [`ViewportSensor`], which keeps the core deterministic and lets tests drive it with
//! [`SimulatedViewport`](crate::SimulatedViewport).

use std::{fmt, rc::Rc};

use crate::foundation::core::{AnchorId, ElementGeometry, ViewportMetrics};

/// Change notification delivered to sensor listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorEvent {
    Scroll,
    Resize,
    /// A node's geometry changed without a resize, e.g. an image finished loading.
    ContentChanged(AnchorId),
}

impl SensorEvent {
    /// Whether the event can change geometry (as opposed to only the scroll offset).
    pub fn affects_layout(self) -> bool {
        !matches!(self, Self::Scroll)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

pub type SensorListener = Box<dyn FnMut(SensorEvent)>;

/// Source of scroll position and node geometry.
///
/// Implementations are single-threaded and use interior mutability; listeners are invoked on
/// the same thread that reports the change.
pub trait ViewportSensor {
    /// Current scroll offset and viewport size.
    fn metrics(&self) -> ViewportMetrics;

    /// Document-space geometry of `anchor`, or `None` when it is not mounted.
    fn geometry(&self, anchor: AnchorId) -> Option<ElementGeometry>;

    fn subscribe(&self, listener: SensorListener) -> ListenerId;

    /// Returns `false` when `id` was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

/// Listener registration that is torn down when dropped.
pub struct Subscription {
    sensor: Rc<dyn ViewportSensor>,
    id: ListenerId,
}

impl Subscription {
    pub fn new(sensor: Rc<dyn ViewportSensor>, listener: SensorListener) -> Self {
        let id = sensor.subscribe(listener);
        Self { sensor, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn sensor(&self) -> &Rc<dyn ViewportSensor> {
        &self.sensor
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.sensor.unsubscribe(self.id) {
            tracing::debug!(id = self.id.0, "listener already removed from sensor");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
