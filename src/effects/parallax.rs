use crate::{
    animation::{ease::Ease, range::InterpolationRange},
    foundation::error::{ScrollError, ScrollResult},
    mapping::mapper::TransformRanges,
    progress::{offset::ScrollOffset, source::ProgressMode},
};

/// Zoom parallax: layers pinned inside a tall container, each zooming from 1 to its own
/// factor over the container's whole traversal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomParallaxConfig {
    pub scales: Vec<f64>,
    pub ease: Ease,
}

impl Default for ZoomParallaxConfig {
    fn default() -> Self {
        Self {
            scales: vec![4.0, 5.0, 6.0, 5.0, 6.0, 8.0, 9.0],
            ease: Ease::Linear,
        }
    }
}

impl ZoomParallaxConfig {
    pub const MODE: ProgressMode = ProgressMode::Global;
    pub const OFFSET: ScrollOffset = ScrollOffset::CONTAIN;

    pub fn validate(&self) -> ScrollResult<()> {
        if self.scales.is_empty() {
            return Err(ScrollError::validation("zoom parallax needs at least one scale"));
        }
        if let Some(bad) = self.scales.iter().find(|s| !(s.is_finite() && **s >= 0.0)) {
            return Err(ScrollError::validation(format!(
                "zoom parallax scale {bad} must be >= 0"
            )));
        }
        Ok(())
    }

    /// Layers beyond the configured scales reuse the last one.
    pub fn scale_for(&self, index: usize) -> f64 {
        self.scales
            .get(index)
            .or(self.scales.last())
            .copied()
            .unwrap_or(1.0)
    }

    pub fn element_ranges(&self, index: usize) -> ScrollResult<TransformRanges> {
        Ok(TransformRanges {
            scale: Some(
                InterpolationRange::linear(0.0, 1.0, 1.0, self.scale_for(index))?
                    .with_ease(self.ease),
            ),
            ..TransformRanges::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/parallax.rs"]
mod tests;
