use crate::{
    animation::{
        length::{Length, LengthRange},
        range::InterpolationRange,
    },
    foundation::error::{ScrollError, ScrollResult},
    layout::observer::LayoutSnapshot,
    progress::offset::{Intersection, ScrollOffset},
};

/// Sticky timeline with a beam that grows down the container as it is scrolled.
///
/// Timeline entries are pinned by the host; the engine only drives the beam. Its length is a
/// layout-relative output (a share of the measured container height), so it tracks content
/// that grows after images load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub offset: ScrollOffset,
    /// Beam length at progress 0 and 1, relative to the container.
    pub beam: LengthRange,
    /// Progress by which the beam is fully opaque.
    pub fade_in_until: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            offset: ScrollOffset {
                start: Intersection::new(0.0, 0.1),
                end: Intersection::new(1.0, 0.5),
            },
            beam: LengthRange::unit(Length::ZERO, Length::Percent(100.0)),
            fade_in_until: 0.1,
        }
    }
}

/// Beam geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BeamState {
    pub height: f64,
    pub opacity: f64,
}

impl TimelineConfig {
    pub fn validate(&self) -> ScrollResult<()> {
        if !(self.fade_in_until.is_finite() && self.fade_in_until >= 0.0) {
            return Err(ScrollError::validation(
                "timeline fade_in_until must be >= 0",
            ));
        }
        Ok(())
    }

    /// Beam state at `progress`. Without a layout the beam is collapsed and hidden.
    pub fn beam_state(&self, progress: f64, layout: Option<&LayoutSnapshot>) -> BeamState {
        let Some(layout) = layout else {
            return BeamState {
                height: 0.0,
                opacity: 0.0,
            };
        };
        let height = self
            .beam
            .resolve(layout.container_context())
            .map_or(0.0, |r| r.sample(progress).max(0.0));
        let opacity = if self.fade_in_until == 0.0 {
            if progress > 0.0 { 1.0 } else { 0.0 }
        } else {
            InterpolationRange::linear(0.0, self.fade_in_until, 0.0, 1.0)
                .map_or(1.0, |r| r.sample(progress))
        };
        BeamState { height, opacity }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/timeline.rs"]
mod tests;
