use std::{cell::Cell, collections::BTreeSet, rc::Rc};

use crate::{
    foundation::{
        core::{AnchorId, ElementTransform, ViewportMetrics},
        error::{ScrollError, ScrollResult},
    },
    layout::observer::{LayoutObserver, LayoutStatus},
    mapping::{mapper::RangeMapper, mapper::TransformRanges, policy::DeckPolicy},
    progress::{
        offset::ScrollOffset,
        source::{Phase, ProgressMode, ProgressSource, ProgressUpdate},
    },
    render::applier::TransformApplier,
    sensor::viewport::{SensorEvent, Subscription, ViewportSensor},
};

/// Host capability flag for animated vs. static rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    /// Render the sequence as a plain list: identity transforms, no stack offsets.
    Reduced,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneOptions {
    pub mode: ProgressMode,
    pub offset: ScrollOffset,
    pub deck: Option<DeckPolicy>,
    pub motion: MotionPreference,
}

/// One item handed to a scene by the host.
#[derive(Clone, Debug)]
pub struct SceneItem<C> {
    pub content: C,
    pub anchor: AnchorId,
    pub ranges: TransformRanges,
}

/// An item as tracked by a mounted scene. Index and anchor never change.
#[derive(Debug)]
pub struct TrackedElement<C> {
    index: usize,
    content: C,
    anchor: AnchorId,
    mapper: RangeMapper,
    progress: ProgressSource,
    applied: Option<ElementTransform>,
}

impl<C> TrackedElement<C> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn anchor(&self) -> AnchorId {
        self.anchor
    }

    /// Last transform written to the anchor.
    pub fn applied(&self) -> Option<&ElementTransform> {
        self.applied.as_ref()
    }
}

/// Per-element state exposed to the host after a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementSnapshot {
    pub index: usize,
    pub anchor: AnchorId,
    pub progress: f64,
    pub phase: Phase,
    pub transform: ElementTransform,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Invalidation {
    scroll: bool,
    layout: bool,
    events: u32,
}

impl Invalidation {
    fn is_dirty(self) -> bool {
        self.scroll || self.layout
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Whether any computation ran this frame.
    pub recomputed: bool,
    /// Sensor events folded into this frame.
    pub coalesced_events: u32,
    pub layout: Option<LayoutStatus>,
    pub progress: f64,
    /// Elements whose transform was written.
    pub writes: usize,
}

impl FrameReport {
    fn idle(progress: f64) -> Self {
        Self {
            recomputed: false,
            coalesced_events: 0,
            layout: None,
            progress,
            writes: 0,
        }
    }
}

#[derive(Debug)]
struct Mount {
    // Dropping the subscription deregisters the listener.
    subscription: Subscription,
}

/// Scroll-driven transform engine for one container and its ordered elements.
///
/// Sensor listeners only mark the scene dirty. The host calls [`ScrollScene::frame`] once per
/// animation frame, and at most one recomputation runs per call using the latest geometry, so
/// bursts of scroll events collapse into a single update.
#[derive(Debug)]
pub struct ScrollScene<C> {
    options: SceneOptions,
    elements: Vec<TrackedElement<C>>,
    container: ProgressSource,
    layout: LayoutObserver,
    dirty: Rc<Cell<Invalidation>>,
    mount: Option<Mount>,
}

impl<C> ScrollScene<C> {
    pub fn new(
        container: AnchorId,
        items: Vec<SceneItem<C>>,
        options: SceneOptions,
    ) -> ScrollResult<Self> {
        let mut seen = BTreeSet::new();
        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !seen.insert(item.anchor) {
                return Err(ScrollError::validation(format!(
                    "anchor {} is tracked twice",
                    item.anchor.0
                )));
            }
            let mapper = RangeMapper::new(index, item.ranges).map_err(|e| {
                ScrollError::validation(format!("element {index}: {e}"))
            })?;
            elements.push(TrackedElement {
                index,
                content: item.content,
                anchor: item.anchor,
                mapper,
                progress: ProgressSource::new(ProgressMode::Contained, options.offset),
                applied: None,
            });
        }
        let anchors = elements.iter().map(|e| e.anchor).collect();
        Ok(Self {
            options,
            elements,
            container: ProgressSource::new(options.mode, options.offset),
            layout: LayoutObserver::new(container, anchors),
            dirty: Rc::new(Cell::new(Invalidation::default())),
            mount: None,
        })
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn elements(&self) -> &[TrackedElement<C>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Container progress, for auxiliary UI such as a progress bar.
    pub fn progress(&self) -> f64 {
        self.container.value()
    }

    pub fn layout(&self) -> &LayoutObserver {
        &self.layout
    }

    /// Start observing `sensor`. Remounting replaces (and tears down) the previous listener.
    ///
    /// Anchors released by an earlier [`ScrollScene::unmount`] are attached again on the next
    /// frame.
    pub fn mount(&mut self, sensor: Rc<dyn ViewportSensor>) {
        let dirty = Rc::clone(&self.dirty);
        let listener = Box::new(move |event: SensorEvent| {
            let mut inv = dirty.get();
            inv.scroll = true;
            inv.layout |= event.affects_layout();
            inv.events = inv.events.saturating_add(1);
            dirty.set(inv);
        });
        let subscription = Subscription::new(sensor, listener);
        tracing::debug!(
            listener = subscription.id().0,
            elements = self.elements.len(),
            "scene mounted"
        );
        self.mount = Some(Mount { subscription });
        self.invalidate_layout();
    }

    /// Stop observing and release every anchor. Later frames neither read geometry nor write.
    pub fn unmount(&mut self, applier: &mut dyn TransformApplier) {
        let Some(mount) = self.mount.take() else {
            return;
        };
        drop(mount);
        for el in &mut self.elements {
            applier.detach(el.anchor);
            el.applied = None;
        }
        self.layout.reset();
        self.dirty.set(Invalidation::default());
        tracing::debug!(elements = self.elements.len(), "scene unmounted");
    }

    /// Force a remeasure on the next frame (e.g. after web fonts load).
    pub fn invalidate_layout(&self) {
        let mut inv = self.dirty.get();
        inv.scroll = true;
        inv.layout = true;
        self.dirty.set(inv);
    }

    pub fn set_motion_preference(&mut self, motion: MotionPreference) {
        if self.options.motion != motion {
            self.options.motion = motion;
            let mut inv = self.dirty.get();
            inv.scroll = true;
            self.dirty.set(inv);
        }
    }

    /// Recompute and apply at most once, if anything changed since the last frame.
    #[tracing::instrument(skip_all, fields(elements = self.elements.len()))]
    pub fn frame(&mut self, applier: &mut dyn TransformApplier) -> FrameReport {
        let Some(mount) = &self.mount else {
            return FrameReport::idle(self.container.value());
        };
        let inv = self.dirty.replace(Invalidation::default());
        if !inv.is_dirty() {
            return FrameReport::idle(self.container.value());
        }
        let sensor = Rc::clone(mount.subscription.sensor());

        let layout = if inv.layout {
            let status = self.layout.remeasure(sensor.as_ref());
            if status == LayoutStatus::Updated {
                self.resolve_ranges();
            }
            Some(status)
        } else {
            None
        };

        self.update_progress(sensor.metrics());
        let writes = self.apply_transforms(applier);

        tracing::debug!(
            coalesced = inv.events,
            progress = self.container.value(),
            writes,
            "frame recomputed"
        );
        FrameReport {
            recomputed: true,
            coalesced_events: inv.events,
            layout,
            progress: self.container.value(),
            writes,
        }
    }

    /// Per-element state as of the last frame.
    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        self.elements
            .iter()
            .map(|el| {
                let progress = self.element_progress(el);
                ElementSnapshot {
                    index: el.index,
                    anchor: el.anchor,
                    progress,
                    phase: Phase::of(progress),
                    transform: self.compute_transform(el),
                }
            })
            .collect()
    }

    fn resolve_ranges(&mut self) {
        let Some(snap) = self.layout.snapshot() else {
            return;
        };
        for el in &mut self.elements {
            el.mapper.resolve(snap.length_context(el.index));
        }
    }

    fn update_progress(&mut self, live: ViewportMetrics) {
        let Some(snap) = self.layout.snapshot() else {
            return;
        };
        // Geometry comes from the last accepted layout; only the scroll offset is live.
        let metrics = ViewportMetrics {
            scroll_y: live.scroll_y,
            viewport: snap.viewport,
        };
        if self.container.update(Some(snap.container), metrics) == ProgressUpdate::Retained {
            tracing::warn!("scroll offset not measurable; keeping previous progress");
        }
        if self.options.mode == ProgressMode::Contained {
            for el in &mut self.elements {
                el.progress.update(snap.element(el.index), metrics);
            }
        }
    }

    fn element_progress(&self, el: &TrackedElement<C>) -> f64 {
        match self.options.mode {
            ProgressMode::Global => self.container.value(),
            ProgressMode::Contained => el.progress.value(),
        }
    }

    fn compute_transform(&self, el: &TrackedElement<C>) -> ElementTransform {
        if self.options.motion == MotionPreference::Reduced {
            return ElementTransform::IDENTITY;
        }
        let computed = el.mapper.sample(self.element_progress(el));
        match &self.options.deck {
            Some(deck) => deck.apply(el.index, self.elements.len(), computed),
            None => computed,
        }
    }

    fn apply_transforms(&mut self, applier: &mut dyn TransformApplier) -> usize {
        let next: Vec<ElementTransform> = self
            .elements
            .iter()
            .map(|el| self.compute_transform(el))
            .collect();
        let mut writes = 0;
        for (el, t) in self.elements.iter_mut().zip(next) {
            if el.applied == Some(t) {
                continue;
            }
            if el.applied.is_none() {
                applier.attach(el.anchor);
            }
            if !applier.apply(el.anchor, &t) {
                continue;
            }
            el.applied = Some(t);
            writes += 1;
        }
        writes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/engine.rs"]
mod tests;
