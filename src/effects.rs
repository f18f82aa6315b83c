pub mod deck;
pub mod parallax;
pub mod reveal;
pub mod timeline;

use crate::{
    foundation::error::ScrollResult,
    mapping::mapper::TransformRanges,
    progress::source::ProgressMode,
    scene::engine::{MotionPreference, SceneOptions},
};

/// Ready-made scroll effects, selectable from a scene file by `kind`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectPreset {
    Deck(deck::DeckConfig),
    Timeline(timeline::TimelineConfig),
    ZoomParallax(parallax::ZoomParallaxConfig),
    Reveal(reveal::RevealConfig),
}

impl EffectPreset {
    pub fn validate(&self) -> ScrollResult<()> {
        match self {
            Self::Deck(d) => d.validate(),
            Self::Timeline(t) => t.validate(),
            Self::ZoomParallax(z) => z.validate(),
            Self::Reveal(r) => r.validate(),
        }
    }

    pub fn scene_options(&self, motion: MotionPreference) -> SceneOptions {
        let (mode, offset, deck) = match self {
            Self::Deck(d) => (d.mode, d.offset(), Some(d.policy())),
            Self::Timeline(t) => (ProgressMode::Contained, t.offset, None),
            Self::ZoomParallax(_) => (
                parallax::ZoomParallaxConfig::MODE,
                parallax::ZoomParallaxConfig::OFFSET,
                None,
            ),
            Self::Reveal(r) => (ProgressMode::Contained, r.offset, None),
        };
        SceneOptions {
            mode,
            offset,
            deck,
            motion,
        }
    }

    /// Ranges for element `index` of `count`. Timeline entries are pinned by the host and get
    /// none.
    pub fn element_ranges(&self, index: usize, count: usize) -> ScrollResult<TransformRanges> {
        match self {
            Self::Deck(d) => d.element_ranges(index, count),
            Self::Timeline(_) => Ok(TransformRanges::default()),
            Self::ZoomParallax(z) => z.element_ranges(index),
            Self::Reveal(r) => r.element_ranges(),
        }
    }
}
