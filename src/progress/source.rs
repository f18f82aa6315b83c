use crate::{
    foundation::core::{ElementGeometry, ViewportMetrics},
    progress::offset::ScrollOffset,
};

/// How a progress value is bound to scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMode {
    /// Bound to one element's own traversal, clamped to `[0, 1]`.
    #[default]
    Contained,
    /// One unclamped value from a tall shared container; consumers slice it with their own
    /// ranges.
    Global,
}

/// Where an element sits in its scroll interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Before,
    Active,
    After,
}

impl Phase {
    pub fn of(progress: f64) -> Self {
        if progress <= 0.0 {
            Self::Before
        } else if progress >= 1.0 {
            Self::After
        } else {
            Self::Active
        }
    }
}

/// Progress for `el` at the sampled scroll position, or `None` when the geometry cannot be
/// measured (not laid out, zero height, zero viewport, non-finite reads).
pub fn compute_progress(
    mode: ProgressMode,
    offset: ScrollOffset,
    el: ElementGeometry,
    metrics: ViewportMetrics,
) -> Option<f64> {
    if !el.is_measurable() || !metrics.is_measurable() {
        return None;
    }
    let (s0, s1) = offset.span(el, metrics.viewport);
    let y = metrics.scroll_y;
    let raw = if s1 == s0 {
        if y >= s0 { 1.0 } else { 0.0 }
    } else {
        (y - s0) / (s1 - s0)
    };
    if !raw.is_finite() {
        return None;
    }
    Some(match mode {
        ProgressMode::Contained => raw.clamp(0.0, 1.0),
        ProgressMode::Global => raw,
    })
}

/// Outcome of feeding one measurement into a [`ProgressSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressUpdate {
    Changed,
    Unchanged,
    /// Measurement rejected; the previous value is kept.
    Retained,
}

/// Live progress scalar with last-known-good retention.
///
/// Starts at 0. A rejected measurement never moves the value, so a transient bad read during a
/// resize cannot flash elements into a degenerate state.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    mode: ProgressMode,
    offset: ScrollOffset,
    value: f64,
    measured: bool,
}

impl ProgressSource {
    pub fn new(mode: ProgressMode, offset: ScrollOffset) -> Self {
        Self {
            mode,
            offset,
            value: 0.0,
            measured: false,
        }
    }

    pub fn mode(&self) -> ProgressMode {
        self.mode
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether at least one measurement has been accepted.
    pub fn has_measurement(&self) -> bool {
        self.measured
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.value)
    }

    pub fn update(&mut self, el: Option<ElementGeometry>, metrics: ViewportMetrics) -> ProgressUpdate {
        let Some(p) = el.and_then(|el| compute_progress(self.mode, self.offset, el, metrics))
        else {
            return ProgressUpdate::Retained;
        };
        self.measured = true;
        if p == self.value {
            return ProgressUpdate::Unchanged;
        }
        self.value = p;
        ProgressUpdate::Changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/source.rs"]
mod tests;
