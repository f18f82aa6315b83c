use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollError, ScrollResult},
};

/// Piecewise mapping from progress breakpoints to output values.
///
/// Invariants (checked on construction and deserialization):
/// - at least one breakpoint
/// - `input.len() == output.len()`
/// - every value is finite
/// - breakpoints are non-decreasing
///
/// Outside `[first, last]` breakpoint the output is held at the nearest end value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RangeDef", into = "RangeDef")]
pub struct InterpolationRange {
    input: Vec<f64>,
    output: Vec<f64>,
    ease: Ease,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct RangeDef {
    input: Vec<f64>,
    output: Vec<f64>,
    #[serde(default)]
    ease: Ease,
}

impl TryFrom<RangeDef> for InterpolationRange {
    type Error = ScrollError;

    fn try_from(def: RangeDef) -> ScrollResult<Self> {
        Ok(Self::new(def.input, def.output)?.with_ease(def.ease))
    }
}

impl From<InterpolationRange> for RangeDef {
    fn from(r: InterpolationRange) -> Self {
        Self {
            input: r.input,
            output: r.output,
            ease: r.ease,
        }
    }
}

impl InterpolationRange {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> ScrollResult<Self> {
        validate_breakpoints(&input, &output)?;
        if output.iter().any(|v| !v.is_finite()) {
            return Err(ScrollError::range("range outputs must be finite"));
        }
        Ok(Self {
            input,
            output,
            ease: Ease::Linear,
        })
    }

    /// Single segment `[p0, p1] -> [v0, v1]`.
    pub fn linear(p0: f64, p1: f64, v0: f64, v1: f64) -> ScrollResult<Self> {
        Self::new(vec![p0, p1], vec![v0, v1])
    }

    /// Range whose output never changes.
    pub fn constant(value: f64) -> Self {
        Self {
            input: vec![0.0],
            output: vec![value],
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn inputs(&self) -> &[f64] {
        &self.input
    }

    pub fn outputs(&self) -> &[f64] {
        &self.output
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn start_output(&self) -> f64 {
        self.output[0]
    }

    pub fn end_output(&self) -> f64 {
        self.output[self.output.len() - 1]
    }

    /// Smallest and largest output values.
    pub fn output_bounds(&self) -> (f64, f64) {
        self.output
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Map `progress` to an output value.
    ///
    /// At or before the first breakpoint the first output is returned; at or after the last
    /// breakpoint, the last output. Inside, the two bracketing breakpoints are interpolated. A
    /// repeated breakpoint acts as a step: the later of its outputs is used past it.
    /// NaN progress maps to the first output.
    pub fn sample(&self, progress: f64) -> f64 {
        let last = self.input.len() - 1;
        if progress.is_nan() || progress <= self.input[0] {
            return self.output[0];
        }
        if progress >= self.input[last] {
            return self.output[last];
        }

        // `idx` is the first breakpoint strictly greater than `progress`, so `1 <= idx <= last`
        // and the bracketing segment has non-zero width.
        let idx = self.input.partition_point(|&b| b <= progress);
        let (p0, p1) = (self.input[idx - 1], self.input[idx]);
        let (v0, v1) = (self.output[idx - 1], self.output[idx]);

        let t = self.ease.apply((progress - p0) / (p1 - p0));
        v0 + (v1 - v0) * t
    }

    /// Same breakpoints with every output transformed by `f`.
    pub fn map_outputs(&self, f: impl Fn(f64) -> f64) -> ScrollResult<Self> {
        let output = self.output.iter().map(|&v| f(v)).collect();
        Ok(Self::new(self.input.clone(), output)?.with_ease(self.ease))
    }
}

pub(crate) fn validate_breakpoints<T>(input: &[f64], output: &[T]) -> ScrollResult<()> {
    if input.is_empty() {
        return Err(ScrollError::range("range needs at least one breakpoint"));
    }
    if input.len() != output.len() {
        return Err(ScrollError::range(format!(
            "range has {} breakpoints but {} outputs",
            input.len(),
            output.len()
        )));
    }
    if input.iter().any(|p| !p.is_finite()) {
        return Err(ScrollError::range("range breakpoints must be finite"));
    }
    if !input.windows(2).all(|w| w[0] <= w[1]) {
        return Err(ScrollError::range("range breakpoints must be non-decreasing"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/range.rs"]
mod tests;
