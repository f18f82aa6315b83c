use crate::{
    animation::range::InterpolationRange,
    foundation::error::{ScrollError, ScrollResult},
    mapping::{mapper::TransformRanges, policy::DeckPolicy},
    progress::{offset::ScrollOffset, source::ProgressMode},
};

/// Stacked project cards.
///
/// Each card sits `index * pixel_step` below the previous one and recedes (scales down, and
/// optionally fades and tilts) as scrolling continues, while the last card stays untouched.
///
/// - Contained: each card runs its own `[0, 1]` arc as it travels to the top of the viewport.
/// - Global: one progress over the whole deck container; card `i` of `n` starts receding at
///   `i / n`, so cards further down start later.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    pub pixel_step: f64,
    pub target_scale: f64,
    /// When set, card `i` of `n` recedes to `1 - (n - i) * scale_step` instead of
    /// `target_scale`, so cards buried deeper end up smaller.
    pub scale_step: Option<f64>,
    pub target_opacity: f64,
    pub rotation_deg: f64,
    pub mode: ProgressMode,
    pub last_element_is_exempt: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            pixel_step: 25.0,
            target_scale: 0.8,
            scale_step: None,
            target_opacity: 1.0,
            rotation_deg: 0.0,
            mode: ProgressMode::Contained,
            last_element_is_exempt: true,
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> ScrollResult<()> {
        if !self.pixel_step.is_finite() {
            return Err(ScrollError::validation("deck pixel_step must be finite"));
        }
        if !(self.target_scale.is_finite() && self.target_scale >= 0.0) {
            return Err(ScrollError::validation("deck target_scale must be >= 0"));
        }
        if let Some(step) = self.scale_step
            && !(step.is_finite() && step >= 0.0)
        {
            return Err(ScrollError::validation("deck scale_step must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.target_opacity) {
            return Err(ScrollError::validation(
                "deck target_opacity must lie in [0, 1]",
            ));
        }
        if !self.rotation_deg.is_finite() {
            return Err(ScrollError::validation("deck rotation_deg must be finite"));
        }
        Ok(())
    }

    pub fn policy(&self) -> DeckPolicy {
        DeckPolicy {
            pixel_step: self.pixel_step,
            last_element_is_exempt: self.last_element_is_exempt,
        }
    }

    pub fn offset(&self) -> ScrollOffset {
        match self.mode {
            ProgressMode::Contained => ScrollOffset::ENTER,
            ProgressMode::Global => ScrollOffset::CONTAIN,
        }
    }

    pub fn target_scale_for(&self, index: usize, count: usize) -> f64 {
        match self.scale_step {
            Some(step) => (1.0 - count.saturating_sub(index) as f64 * step).max(0.0),
            None => self.target_scale,
        }
    }

    pub fn element_ranges(&self, index: usize, count: usize) -> ScrollResult<TransformRanges> {
        let start = match self.mode {
            ProgressMode::Contained => 0.0,
            ProgressMode::Global if count > 0 => index as f64 / count as f64,
            ProgressMode::Global => 0.0,
        };
        let arc = |from: f64, to: f64| InterpolationRange::linear(start, 1.0, from, to);

        let mut ranges = TransformRanges {
            scale: Some(arc(1.0, self.target_scale_for(index, count))?),
            ..TransformRanges::default()
        };
        if self.target_opacity != 1.0 {
            ranges.opacity = Some(arc(1.0, self.target_opacity)?);
        }
        if self.rotation_deg != 0.0 {
            ranges.rotation = Some(arc(0.0, self.rotation_deg)?);
        }
        Ok(ranges)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/deck.rs"]
mod tests;
