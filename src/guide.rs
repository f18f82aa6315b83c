//! # Scrollfx guide
//!
//! This module is a standalone walkthrough of how a scroll offset becomes a transform on screen.
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ViewportSensor`](crate::ViewportSensor): the host boundary. Reports
//!   [`ViewportMetrics`](crate::ViewportMetrics), per-node
//!   [`ElementGeometry`](crate::ElementGeometry), and notifies listeners of
//!   [`SensorEvent`](crate::SensorEvent)s
//! - [`LayoutObserver`](crate::LayoutObserver): keeps the last accepted
//!   [`LayoutSnapshot`](crate::LayoutSnapshot)
//! - [`ProgressSource`](crate::ProgressSource): scroll offset to progress, per
//!   [`ProgressMode`](crate::ProgressMode) and [`ScrollOffset`](crate::ScrollOffset)
//! - [`RangeMapper`](crate::RangeMapper): progress to an
//!   [`ElementTransform`](crate::ElementTransform)
//! - [`DeckPolicy`](crate::DeckPolicy): stack offsets and the last-element exemption
//! - [`TransformApplier`](crate::TransformApplier): writes transforms to nodes
//!
//! [`ScrollScene`](crate::ScrollScene) wires these together.
//!
//! ---
//!
//! ## Progress
//!
//! A [`ScrollOffset`](crate::ScrollOffset) names the two scroll positions where progress is 0
//! and 1. Each end is an [`Intersection`](crate::Intersection): a point on the element meeting a
//! point on the viewport, both as fractions of their heights. `"0 1"` reads "element top meets
//! viewport bottom".
//!
//! - `ProgressMode::Contained`: each element gets its own progress, clamped to `[0, 1]`
//! - `ProgressMode::Global`: one progress over the container, shared by every element and not
//!   clamped, so ranges may describe overscroll
//!
//! Progress is derived from the scroll offset alone. The same offset always gives the same
//! progress and the same transforms, whatever the scroll history.
//!
//! ---
//!
//! ## Ranges
//!
//! An [`InterpolationRange`](crate::InterpolationRange) maps progress breakpoints to outputs.
//! Breakpoints must be non-decreasing; outside them the output holds at the end value. A
//! repeated breakpoint is a step.
//!
//! Translations accept [`Length`](crate::Length)s (`"40px"`, `"-10vh"`, `"100%"`). Relative
//! lengths are resolved against the latest layout, so they follow viewport resizes and content
//! that grows after images load.
//!
//! ---
//!
//! ## Frames
//!
//! Sensor listeners never compute. They mark the scene dirty, and
//! [`ScrollScene::frame`](crate::ScrollScene::frame) recomputes once per call using the latest
//! geometry. Call it once per animation frame:
//!
//! ```rust
//! use scrollfx::{
//!     AnchorId, DeckPolicy, ElementGeometry, InterpolationRange, SceneItem, SceneOptions,
//!     ScrollScene, SimulatedViewport, StyleTable, TransformRanges, Viewport,
//! };
//!
//! # fn main() -> scrollfx::ScrollResult<()> {
//! let sensor = SimulatedViewport::shared(Viewport::new(1280.0, 800.0)?);
//! sensor.place(AnchorId(0), ElementGeometry::new(0.0, 2400.0));
//! let recede = InterpolationRange::linear(0.0, 1.0, 1.0, 0.8)?;
//! let items: Vec<_> = (0..3u64)
//!     .map(|i| {
//!         sensor.place(AnchorId(i + 1), ElementGeometry::new(i as f64 * 800.0, 700.0));
//!         SceneItem {
//!             content: format!("card {i}"),
//!             anchor: AnchorId(i + 1),
//!             ranges: TransformRanges {
//!                 scale: Some(recede.clone()),
//!                 ..TransformRanges::default()
//!             },
//!         }
//!     })
//!     .collect();
//!
//! let options = SceneOptions {
//!     deck: Some(DeckPolicy { pixel_step: 25.0, last_element_is_exempt: true }),
//!     ..SceneOptions::default()
//! };
//! let mut scene = ScrollScene::new(AnchorId(0), items, options)?;
//! let mut styles = StyleTable::new();
//! scene.mount(sensor.clone());
//!
//! for y in [100.0, 200.0, 300.0] {
//!     sensor.scroll_to(y);
//! }
//! let report = scene.frame(&mut styles);
//! assert_eq!(report.coalesced_events, 3);
//!
//! scene.unmount(&mut styles);
//! assert_eq!(sensor.listener_count(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Unmeasurable geometry
//!
//! Hidden containers, zero-height elements and non-finite reads are common while a page is
//! still loading. The engine never turns them into NaN transforms:
//!
//! - a rejected viewport or container read keeps the previous snapshot
//!   ([`LayoutStatus::Stale`](crate::LayoutStatus::Stale))
//! - an unmeasurable element keeps its previous geometry, or stays at progress 0 if it never had
//!   one
//!
//! ---
//!
//! ## Scene files
//!
//! [`SceneConfig`](crate::SceneConfig) is the JSON form of a scene plus the page geometry to
//! simulate it against. An `effect` preset ([`EffectPreset`](crate::EffectPreset)) fills in mode,
//! offset, deck policy and per-item ranges; explicit fields override it. The `scrollfx` binary
//! validates scene files and prints the transforms a scroll sweep produces.
