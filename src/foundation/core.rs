use crate::foundation::error::{ScrollError, ScrollResult};

pub use kurbo::{Affine, Vec2};

/// Opaque handle to a rendered node owned by the host view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AnchorId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollResult<Self> {
        let vp = Self { width, height };
        if !vp.is_measurable() {
            return Err(ScrollError::validation(format!(
                "viewport must be finite and non-empty, got {width}x{height}"
            )));
        }
        Ok(vp)
    }

    pub fn is_measurable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Vertical extent of a node in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

impl ElementGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// A node with a finite position and a positive height. Zero-height nodes have not been
    /// laid out yet.
    pub fn is_measurable(self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height > 0.0
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Scroll position plus viewport size, as read from the host in one sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub viewport: Viewport,
}

impl ViewportMetrics {
    pub fn is_measurable(self) -> bool {
        self.scroll_y.is_finite() && self.viewport.is_measurable()
    }
}

/// Visual state written to one element: composite-only properties.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementTransform {
    pub translate: Vec2, // px
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: f64, // 0..=1
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ElementTransform {
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
        rotation_deg: 0.0,
        opacity: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn with_offset_y(mut self, dy: f64) -> Self {
        self.translate.y += dy;
        self
    }

    /// Affine about the element origin.
    ///
    /// Canonical order: `T(translate) * R(rotation) * S(scale)`, which matches how browsers
    /// compose `translate(..) rotate(..) scale(..)`.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }

    /// CSS `transform` value. Only compositor-friendly functions are emitted so that writing it
    /// never reflows siblings.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
            fmt_num(self.translate.x),
            fmt_num(self.translate.y),
            fmt_num(self.scale),
            fmt_num(self.rotation_deg),
        )
    }
}

pub(crate) fn fmt_num(v: f64) -> String {
    // Round away float noise so repeated writes of the same state produce the same text.
    let r = (v * 1e4).round() / 1e4;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
