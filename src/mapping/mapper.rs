use crate::{
    animation::{
        length::{LengthContext, LengthRange},
        range::InterpolationRange,
    },
    foundation::{
        core::{ElementTransform, Vec2},
        error::{ScrollError, ScrollResult},
    },
};

/// Per-property ranges for one element, as configured.
///
/// Every property is optional and independent: a missing range leaves that property at its
/// identity value. Translations may use layout-relative [`Length`](crate::Length)s.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformRanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<InterpolationRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<LengthRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<LengthRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<InterpolationRange>,
    /// Degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<InterpolationRange>,
}

impl TransformRanges {
    pub fn is_empty(&self) -> bool {
        self.scale.is_none()
            && self.translate_x.is_none()
            && self.translate_y.is_none()
            && self.opacity.is_none()
            && self.rotation.is_none()
    }

    /// Property-level checks on top of the per-range invariants.
    pub fn validate(&self) -> ScrollResult<()> {
        if let Some(op) = &self.opacity {
            let (lo, hi) = op.output_bounds();
            if lo < 0.0 || hi > 1.0 {
                return Err(ScrollError::range(format!(
                    "opacity outputs must lie in [0, 1], got [{lo}, {hi}]"
                )));
            }
        }
        if let Some(scale) = &self.scale {
            let (lo, _) = scale.output_bounds();
            if lo < 0.0 {
                return Err(ScrollError::range(format!(
                    "scale outputs must be >= 0, got {lo}"
                )));
            }
        }
        Ok(())
    }

    /// Pixel ranges for the given measurements.
    pub fn resolve(&self, ctx: LengthContext) -> ScrollResult<ResolvedRanges> {
        Ok(ResolvedRanges {
            scale: self.scale.clone(),
            translate_x: self.translate_x.as_ref().map(|r| r.resolve(ctx)).transpose()?,
            translate_y: self.translate_y.as_ref().map(|r| r.resolve(ctx)).transpose()?,
            opacity: self.opacity.clone(),
            rotation: self.rotation.clone(),
        })
    }

    fn is_layout_dependent(&self) -> bool {
        let rel = |r: &Option<LengthRange>| r.as_ref().is_some_and(|r| !r.is_absolute());
        rel(&self.translate_x) || rel(&self.translate_y)
    }
}

/// [`TransformRanges`] with every length resolved to pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedRanges {
    pub scale: Option<InterpolationRange>,
    pub translate_x: Option<InterpolationRange>,
    pub translate_y: Option<InterpolationRange>,
    pub opacity: Option<InterpolationRange>,
    pub rotation: Option<InterpolationRange>,
}

/// Map one progress value through every configured property.
pub fn map(progress: f64, ranges: &ResolvedRanges) -> ElementTransform {
    let at = |r: &Option<InterpolationRange>, identity: f64| {
        r.as_ref().map_or(identity, |r| r.sample(progress))
    };
    ElementTransform {
        translate: Vec2::new(at(&ranges.translate_x, 0.0), at(&ranges.translate_y, 0.0)),
        scale: at(&ranges.scale, 1.0),
        rotation_deg: at(&ranges.rotation, 0.0),
        opacity: at(&ranges.opacity, 1.0).clamp(0.0, 1.0),
    }
}

/// Owns the ranges of exactly one element and the pixel resolution currently in effect.
#[derive(Clone, Debug)]
pub struct RangeMapper {
    index: usize,
    ranges: TransformRanges,
    resolved: ResolvedRanges,
    resolved_for: Option<LengthContext>,
}

impl RangeMapper {
    pub fn new(index: usize, ranges: TransformRanges) -> ScrollResult<Self> {
        ranges.validate()?;
        let unmeasured = LengthContext {
            viewport_height: 0.0,
            element_height: 0.0,
        };
        let resolved = ranges.resolve(unmeasured)?;
        Ok(Self {
            index,
            ranges,
            resolved,
            resolved_for: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ranges(&self) -> &TransformRanges {
        &self.ranges
    }

    pub fn resolved(&self) -> &ResolvedRanges {
        &self.resolved
    }

    /// Re-resolve layout-relative lengths. Returns whether the resolution changed.
    ///
    /// A failed resolution keeps the previous pixel ranges.
    pub fn resolve(&mut self, ctx: LengthContext) -> bool {
        if !self.ranges.is_layout_dependent() || self.resolved_for == Some(ctx) {
            return false;
        }
        match self.ranges.resolve(ctx) {
            Ok(resolved) => {
                self.resolved = resolved;
                self.resolved_for = Some(ctx);
                true
            }
            Err(err) => {
                tracing::warn!(index = self.index, %err, "keeping previous range resolution");
                false
            }
        }
    }

    pub fn sample(&self, progress: f64) -> ElementTransform {
        map(progress, &self.resolved)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/mapper.rs"]
mod tests;
