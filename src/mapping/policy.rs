use crate::foundation::core::ElementTransform;

/// Stacking rules shared by every element of a deck.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckPolicy {
    /// Static vertical bias per index, in px. Element `i` sits `i * pixel_step` lower.
    pub pixel_step: f64,
    /// Keep the final element of the sequence unscaled, opaque and unrotated at every progress
    /// value, so the top card of the deck stays fully visible while earlier ones recede.
    pub last_element_is_exempt: bool,
}

impl Default for DeckPolicy {
    fn default() -> Self {
        Self {
            pixel_step: 0.0,
            last_element_is_exempt: true,
        }
    }
}

impl DeckPolicy {
    pub fn stack_offset(&self, index: usize) -> f64 {
        index as f64 * self.pixel_step
    }

    pub fn is_exempt(&self, index: usize, count: usize) -> bool {
        self.last_element_is_exempt && count > 0 && index == count - 1
    }

    /// Combine the progress-driven transform with the deck rules.
    ///
    /// With fewer than two elements no stacking is possible and the result is the identity.
    /// An exempt element drops every progress-driven property but keeps its stack offset.
    pub fn apply(&self, index: usize, count: usize, computed: ElementTransform) -> ElementTransform {
        if count < 2 {
            return ElementTransform::IDENTITY;
        }
        let base = if self.is_exempt(index, count) {
            ElementTransform::IDENTITY
        } else {
            computed
        };
        base.with_offset_y(self.stack_offset(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/policy.rs"]
mod tests;
