//! Scrollfx turns scroll position into per-element visual transforms.
//!
//! A [`ScrollScene`] tracks one container and its ordered elements:
//!
//! - A [`ViewportSensor`] reports scroll offset, viewport size and node geometry
//! - A [`LayoutObserver`] snapshots that geometry and rejects unmeasurable reads
//! - A [`ProgressSource`] turns the scroll offset into a progress value
//! - A [`RangeMapper`] maps progress onto scale, translation, opacity and rotation
//! - A [`TransformApplier`] writes the result to the host's nodes
//!
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// Ready-made scroll effects.
pub mod effects;
pub mod guide;
pub(crate) mod layout;
pub(crate) mod mapping;
pub(crate) mod progress;
pub(crate) mod render;
/// Scene engine and its serializable configuration.
pub mod scene;
pub(crate) mod sensor;

pub use crate::foundation::core::{
    Affine, AnchorId, ElementGeometry, ElementTransform, Vec2, Viewport, ViewportMetrics,
};
pub use crate::foundation::error::{ScrollError, ScrollResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::length::{Length, LengthContext, LengthRange};
pub use crate::animation::range::InterpolationRange;
pub use crate::effects::EffectPreset;
pub use crate::effects::deck::DeckConfig;
pub use crate::effects::parallax::ZoomParallaxConfig;
pub use crate::effects::reveal::RevealConfig;
pub use crate::effects::timeline::{BeamState, TimelineConfig};
pub use crate::layout::observer::{LayoutObserver, LayoutRejection, LayoutSnapshot, LayoutStatus};
pub use crate::mapping::mapper::{RangeMapper, ResolvedRanges, TransformRanges, map};
pub use crate::mapping::policy::DeckPolicy;
pub use crate::progress::offset::{Intersection, ScrollOffset};
pub use crate::progress::source::{
    Phase, ProgressMode, ProgressSource, ProgressUpdate, compute_progress,
};
pub use crate::render::applier::{StyleDecl, StyleTable, TransformApplier};
pub use crate::scene::engine::{
    ElementSnapshot, FrameReport, MotionPreference, SceneItem, SceneOptions, ScrollScene,
    TrackedElement,
};
pub use crate::scene::model::{ItemConfig, LayoutConfig, SceneConfig, SceneContent};
pub use crate::sensor::simulated::SimulatedViewport;
pub use crate::sensor::viewport::{
    ListenerId, SensorEvent, SensorListener, Subscription, ViewportSensor,
};
