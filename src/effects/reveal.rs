use crate::{
    animation::{
        ease::Ease,
        length::{Length, LengthRange},
        range::InterpolationRange,
    },
    foundation::error::{ScrollError, ScrollResult},
    mapping::mapper::TransformRanges,
    progress::offset::{Intersection, ScrollOffset},
};

/// Slide-up-and-fade reveal for a section entering the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub offset: ScrollOffset,
    pub from_offset_y: Length,
    pub from_opacity: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            // Element top at the viewport bottom, until it reaches the middle.
            offset: ScrollOffset {
                start: Intersection::new(0.0, 1.0),
                end: Intersection::new(0.0, 0.5),
            },
            from_offset_y: Length::Px(50.0),
            from_opacity: 0.0,
            ease: Ease::OutCubic,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> ScrollResult<()> {
        if !(0.0..=1.0).contains(&self.from_opacity) {
            return Err(ScrollError::validation(
                "reveal from_opacity must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    pub fn element_ranges(&self) -> ScrollResult<TransformRanges> {
        Ok(TransformRanges {
            translate_y: Some(
                LengthRange::linear(0.0, 1.0, self.from_offset_y, Length::ZERO)?
                    .with_ease(self.ease),
            ),
            opacity: Some(
                InterpolationRange::linear(0.0, 1.0, self.from_opacity, 1.0)?.with_ease(self.ease),
            ),
            ..TransformRanges::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reveal.rs"]
mod tests;
