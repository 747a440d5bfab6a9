//! Skip filter: excludes configured widget ids (and their subtrees) from the
//! report.

use crate::widget::{Widget, WidgetId};

/// Immutable set of widget ids to exclude from a scan.
///
/// Kept as a sorted, deduplicated vector; membership is a binary search since
/// the predicate runs once per visited node plus once per last-kept-child
/// scan over large trees.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    ids: Vec<WidgetId>,
}

impl SkipSet {
    pub fn new(ids: impl IntoIterator<Item = WidgetId>) -> Self {
        let mut ids: Vec<WidgetId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Whether `widget` (and therefore its whole subtree) is excluded.
    ///
    /// A widget without an identifier is never excluded.
    pub fn should_skip(&self, widget: &dyn Widget) -> bool {
        widget.id().map(|id| self.contains(id)).unwrap_or(false)
    }
}
