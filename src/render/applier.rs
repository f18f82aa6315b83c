use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{AnchorId, ElementTransform, fmt_num};

/// Sink for computed element transforms.
///
/// Implementations write composite-only state (transform and opacity) so applying never
/// reflows siblings. Applying the same transform twice must leave the same visual state:
/// values are overwritten, never accumulated.
pub trait TransformApplier {
    /// Returns `false` when the write was refused and the node's state is unchanged.
    fn apply(&mut self, anchor: AnchorId, transform: &ElementTransform) -> bool;

    /// A scene is about to (re)start writing to `anchor`.
    fn attach(&mut self, _anchor: AnchorId) {}

    /// The element behind `anchor` was unmounted; no further writes will target it until it is
    /// attached again.
    fn detach(&mut self, _anchor: AnchorId) {}
}

/// Style declaration for one node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StyleDecl {
    pub transform: String,
    pub opacity: f64,
}

impl From<&ElementTransform> for StyleDecl {
    fn from(t: &ElementTransform) -> Self {
        Self {
            transform: t.css_transform(),
            opacity: t.opacity,
        }
    }
}

impl StyleDecl {
    pub fn css_text(&self) -> String {
        format!(
            "transform: {}; opacity: {};",
            self.transform,
            fmt_num(self.opacity)
        )
    }
}

/// In-memory applier holding the latest style per node.
///
/// Writes that do not change a node's state are skipped, and writes to detached nodes are
/// refused and counted.
#[derive(Debug, Default)]
pub struct StyleTable {
    current: BTreeMap<AnchorId, (ElementTransform, StyleDecl)>,
    detached: BTreeSet<AnchorId>,
    writes: u64,
    refused: u64,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, anchor: AnchorId) -> Option<&StyleDecl> {
        self.current.get(&anchor).map(|(_, s)| s)
    }

    pub fn transform(&self, anchor: AnchorId) -> Option<&ElementTransform> {
        self.current.get(&anchor).map(|(t, _)| t)
    }

    /// Writes that changed a node's state.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Writes that targeted a detached node.
    pub fn refused_writes(&self) -> u64 {
        self.refused
    }

    pub fn is_detached(&self, anchor: AnchorId) -> bool {
        self.detached.contains(&anchor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnchorId, &StyleDecl)> {
        self.current.iter().map(|(a, (_, s))| (*a, s))
    }
}

impl TransformApplier for StyleTable {
    fn apply(&mut self, anchor: AnchorId, transform: &ElementTransform) -> bool {
        if self.detached.contains(&anchor) {
            tracing::warn!(anchor = anchor.0, "refusing write to detached node");
            self.refused += 1;
            return false;
        }
        if self
            .current
            .get(&anchor)
            .is_some_and(|(prev, _)| prev == transform)
        {
            return true;
        }
        self.current
            .insert(anchor, (*transform, StyleDecl::from(transform)));
        self.writes += 1;
        true
    }

    fn attach(&mut self, anchor: AnchorId) {
        self.detached.remove(&anchor);
    }

    fn detach(&mut self, anchor: AnchorId) {
        self.current.remove(&anchor);
        self.detached.insert(anchor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/applier.rs"]
mod tests;
