//! Layout-relative lengths.
//!
//! Offsets in scroll effects are often written relative to the viewport (`-5vh`) or to the
//! element (`100%`). They only become pixels once a layout has been measured, so ranges holding
//! them are resolved again after every remeasure.

use std::{fmt, str::FromStr};

use crate::{
    animation::{
        ease::Ease,
        range::{InterpolationRange, validate_breakpoints},
    },
    foundation::error::{ScrollError, ScrollResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LengthDef", into = "String")]
pub enum Length {
    Px(f64),
    /// Percent of the viewport height.
    Vh(f64),
    /// Percent of the element's own height.
    Percent(f64),
}

/// Measurements a [`Length`] is resolved against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthContext {
    pub viewport_height: f64,
    pub element_height: f64,
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);

    pub fn resolve(self, ctx: LengthContext) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Vh(v) => v * ctx.viewport_height / 100.0,
            Self::Percent(v) => v * ctx.element_height / 100.0,
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Vh(v) | Self::Percent(v) => v,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Vh(v) => write!(f, "{v}vh"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for Length {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let s = s.trim();
        let (num, ctor): (&str, fn(f64) -> Self) = if let Some(n) = s.strip_suffix("px") {
            (n, Self::Px)
        } else if let Some(n) = s.strip_suffix("vh") {
            (n, Self::Vh)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else {
            (s, Self::Px)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| ScrollError::range(format!("invalid length '{s}'")))?;
        if !v.is_finite() {
            return Err(ScrollError::range(format!("length '{s}' must be finite")));
        }
        Ok(ctor(v))
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LengthDef {
    Px(f64),
    Text(String),
}

impl TryFrom<LengthDef> for Length {
    type Error = ScrollError;

    fn try_from(def: LengthDef) -> ScrollResult<Self> {
        match def {
            LengthDef::Px(v) if v.is_finite() => Ok(Self::Px(v)),
            LengthDef::Px(v) => Err(ScrollError::range(format!("length {v} must be finite"))),
            LengthDef::Text(s) => s.parse(),
        }
    }
}

impl From<Length> for String {
    fn from(l: Length) -> Self {
        l.to_string()
    }
}

/// Interpolation range whose outputs are [`Length`]s.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LengthRangeDef", into = "LengthRangeDef")]
pub struct LengthRange {
    input: Vec<f64>,
    output: Vec<Length>,
    ease: Ease,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct LengthRangeDef {
    input: Vec<f64>,
    output: Vec<Length>,
    #[serde(default)]
    ease: Ease,
}

impl TryFrom<LengthRangeDef> for LengthRange {
    type Error = ScrollError;

    fn try_from(def: LengthRangeDef) -> ScrollResult<Self> {
        Ok(Self::new(def.input, def.output)?.with_ease(def.ease))
    }
}

impl From<LengthRange> for LengthRangeDef {
    fn from(r: LengthRange) -> Self {
        Self {
            input: r.input,
            output: r.output,
            ease: r.ease,
        }
    }
}

impl LengthRange {
    pub fn new(input: Vec<f64>, output: Vec<Length>) -> ScrollResult<Self> {
        validate_breakpoints(&input, &output)?;
        if output.iter().any(|l| !l.value().is_finite()) {
            return Err(ScrollError::range("range outputs must be finite"));
        }
        Ok(Self {
            input,
            output,
            ease: Ease::Linear,
        })
    }

    pub fn linear(p0: f64, p1: f64, from: Length, to: Length) -> ScrollResult<Self> {
        Self::new(vec![p0, p1], vec![from, to])
    }

    /// `[0, 1] -> [from, to]`. Non-finite lengths are caught when the range is resolved.
    pub fn unit(from: Length, to: Length) -> Self {
        Self {
            input: vec![0.0, 1.0],
            output: vec![from, to],
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// True when no output depends on layout, i.e. resolving is a no-op across remeasures.
    pub fn is_absolute(&self) -> bool {
        self.output.iter().all(|l| matches!(l, Length::Px(_)))
    }

    /// Pixel range for the given measurements.
    pub fn resolve(&self, ctx: LengthContext) -> ScrollResult<InterpolationRange> {
        let output = self.output.iter().map(|l| l.resolve(ctx)).collect();
        Ok(InterpolationRange::new(self.input.clone(), output)
            .map_err(|e| ScrollError::layout(format!("resolving length range: {e}")))?
            .with_ease(self.ease))
    }
}

impl From<InterpolationRange> for LengthRange {
    fn from(r: InterpolationRange) -> Self {
        Self {
            input: r.inputs().to_vec(),
            output: r.outputs().iter().copied().map(Length::Px).collect(),
            ease: r.ease(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/length.rs"]
mod tests;
