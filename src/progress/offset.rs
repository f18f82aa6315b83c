use std::{fmt, str::FromStr};

use crate::foundation::{
    core::{ElementGeometry, Viewport},
    error::{ScrollError, ScrollResult},
};

/// One anchor pair: "this edge of the target meets that edge of the viewport".
///
/// Both edges are fractions: `0` is the top (`start`), `0.5` the middle (`center`), `1` the
/// bottom (`end`). Written as `"<target> <viewport>"`, e.g. `"start end"` or `"0 0.1"`.
/// Percentages (`"10%"`) are accepted as fractions too.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Intersection {
    pub target: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    /// Scroll offset at which the intersection holds for `el`.
    pub fn scroll_at(self, el: ElementGeometry, vp: Viewport) -> f64 {
        el.top + self.target * el.height - self.viewport * vp.height
    }
}

fn parse_edge(tok: &str) -> ScrollResult<f64> {
    let v = match tok {
        "start" => 0.0,
        "center" => 0.5,
        "end" => 1.0,
        _ => {
            let (num, div) = match tok.strip_suffix('%') {
                Some(n) => (n, 100.0),
                None => (tok, 1.0),
            };
            let v: f64 = num
                .parse()
                .map_err(|_| ScrollError::range(format!("invalid offset edge '{tok}'")))?;
            v / div
        }
    };
    if !v.is_finite() {
        return Err(ScrollError::range(format!("offset edge '{tok}' must be finite")));
    }
    Ok(v)
}

impl FromStr for Intersection {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let mut toks = s.split_whitespace();
        let (Some(target), Some(viewport), None) = (toks.next(), toks.next(), toks.next()) else {
            return Err(ScrollError::range(format!(
                "offset '{s}' must have exactly two edges"
            )));
        };
        Ok(Self::new(parse_edge(target)?, parse_edge(viewport)?))
    }
}

impl TryFrom<String> for Intersection {
    type Error = ScrollError;

    fn try_from(s: String) -> ScrollResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.viewport)
    }
}

impl From<Intersection> for String {
    fn from(i: Intersection) -> Self {
        i.to_string()
    }
}

/// Start and end anchors delimiting one scroll interaction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// Target top enters at the viewport bottom, leaves at the viewport top.
    pub const ENTER: Self = Self {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(0.0, 0.0),
    };

    /// Whole traversal of a tall pinned container: top meets top, bottom meets bottom.
    pub const CONTAIN: Self = Self {
        start: Intersection::new(0.0, 0.0),
        end: Intersection::new(1.0, 1.0),
    };

    /// Target top at the viewport top until the target bottom leaves it. Used for card decks
    /// whose container scrolls past entirely.
    pub const TRAVERSE: Self = Self {
        start: Intersection::new(0.0, 0.0),
        end: Intersection::new(1.0, 0.0),
    };

    pub fn parse(start: &str, end: &str) -> ScrollResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Scroll offsets at which progress is 0 and 1.
    pub fn span(self, el: ElementGeometry, vp: Viewport) -> (f64, f64) {
        (self.start.scroll_at(el, vp), self.end.scroll_at(el, vp))
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::ENTER
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/offset.rs"]
mod tests;
