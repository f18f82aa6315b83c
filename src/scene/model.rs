use std::{collections::BTreeSet, rc::Rc};

use crate::{
    effects::{EffectPreset, timeline::TimelineConfig},
    foundation::{
        core::{AnchorId, ElementGeometry, Viewport},
        error::{ScrollError, ScrollResult},
    },
    mapping::{mapper::TransformRanges, policy::DeckPolicy},
    progress::{offset::ScrollOffset, source::ProgressMode},
    scene::engine::{MotionPreference, SceneItem, SceneOptions, ScrollScene},
    sensor::simulated::SimulatedViewport,
};

/// Serializable description of a scene plus the page geometry to simulate it against.
///
/// An `effect` preset supplies mode, offset, deck policy and per-item ranges; any of `mode`,
/// `offset`, `deck` or an item's `ranges` given explicitly take precedence over it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub name: String,
    pub layout: LayoutConfig,
    #[serde(default)]
    pub motion: MotionPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ProgressMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<ScrollOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<DeckPolicy>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub viewport: Viewport,
    pub container: ElementGeometry,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    pub id: String,
    /// Opaque payload carried through untouched.
    #[serde(default)]
    pub content: serde_json::Value,
    pub geometry: ElementGeometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<TransformRanges>,
}

/// Item carried by scenes built from a [`SceneConfig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneContent {
    pub id: String,
    pub content: serde_json::Value,
}

impl SceneConfig {
    pub const CONTAINER: AnchorId = AnchorId(0);

    pub fn item_anchor(index: usize) -> AnchorId {
        AnchorId(index as u64 + 1)
    }

    pub fn from_json(s: &str) -> ScrollResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ScrollResult<()> {
        if !self.layout.viewport.is_measurable() {
            return Err(ScrollError::validation(
                "layout.viewport must be finite and non-empty",
            ));
        }
        if !self.layout.container.is_measurable() {
            return Err(ScrollError::validation(
                "layout.container must have a finite top and positive height",
            ));
        }
        if let Some(effect) = &self.effect {
            effect.validate()?;
        }
        if let Some(deck) = &self.deck
            && !deck.pixel_step.is_finite()
        {
            return Err(ScrollError::validation("deck.pixel_step must be finite"));
        }

        let mut ids = BTreeSet::new();
        for (i, item) in self.items.iter().enumerate() {
            if !ids.insert(item.id.as_str()) {
                return Err(ScrollError::validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            // Zero height is allowed: content that has not loaded yet.
            let g = item.geometry;
            if !(g.top.is_finite() && g.height.is_finite() && g.height >= 0.0) {
                return Err(ScrollError::validation(format!(
                    "item '{}' geometry must be finite with height >= 0",
                    item.id
                )));
            }
            self.item_ranges(i)?.validate().map_err(|e| {
                ScrollError::validation(format!("item '{}': {e}", item.id))
            })?;
        }
        Ok(())
    }

    pub fn options(&self) -> SceneOptions {
        let mut opts = match &self.effect {
            Some(effect) => effect.scene_options(self.motion),
            None => SceneOptions {
                motion: self.motion,
                ..SceneOptions::default()
            },
        };
        if let Some(mode) = self.mode {
            opts.mode = mode;
        }
        if let Some(offset) = self.offset {
            opts.offset = offset;
        }
        if self.deck.is_some() {
            opts.deck = self.deck;
        }
        opts
    }

    pub fn item_ranges(&self, index: usize) -> ScrollResult<TransformRanges> {
        let explicit = self.items.get(index).and_then(|i| i.ranges.clone());
        match (explicit, &self.effect) {
            (Some(r), _) => Ok(r),
            (None, Some(effect)) => effect.element_ranges(index, self.items.len()),
            (None, None) => Ok(TransformRanges::default()),
        }
    }

    pub fn timeline(&self) -> Option<&TimelineConfig> {
        match &self.effect {
            Some(EffectPreset::Timeline(t)) => Some(t),
            _ => None,
        }
    }

    pub fn build_scene(&self) -> ScrollResult<ScrollScene<SceneContent>> {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Ok(SceneItem {
                    content: SceneContent {
                        id: item.id.clone(),
                        content: item.content.clone(),
                    },
                    anchor: Self::item_anchor(i),
                    ranges: self.item_ranges(i)?,
                })
            })
            .collect::<ScrollResult<Vec<_>>>()?;
        ScrollScene::new(Self::CONTAINER, items, self.options())
    }

    /// Sensor pre-populated with this scene's geometry, scrolled to the top.
    pub fn simulated_viewport(&self) -> Rc<SimulatedViewport> {
        let sim = SimulatedViewport::shared(self.layout.viewport);
        sim.place(Self::CONTAINER, self.layout.container);
        for (i, item) in self.items.iter().enumerate() {
            sim.place(Self::item_anchor(i), item.geometry);
        }
        sim
    }

    /// Largest useful scroll offset: the container's bottom edge at the viewport bottom.
    pub fn max_scroll(&self) -> f64 {
        (self.layout.container.bottom() - self.layout.viewport.height).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
