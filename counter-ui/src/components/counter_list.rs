//! Ordered list of counters, identified by position

use crate::components::{ClickTotal, Counter};
use crate::core::{next_widget_id, BoxedWidget, Context, Widget, WidgetId};
use crate::render::NodeKind;
use std::sync::{Arc, RwLock};

/// Click totals keyed by position in the list.
///
/// Position IS identity: shrinking the list discards the highest cells,
/// and growing it back appends fresh zero cells, so a counter removed and
/// re-added at the same position starts over. Cells at surviving
/// positions are untouched by a resize.
#[derive(Clone)]
pub struct ClickTotals {
    cells: Arc<RwLock<Vec<ClickTotal>>>,
}

impl ClickTotals {
    pub fn new() -> Self {
        Self {
            cells: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resize the registry to exactly `count` cells
    pub fn sync(&self, count: usize) {
        let mut cells = self.cells.write().unwrap();
        if cells.len() > count {
            cells.truncate(count);
        }
        while cells.len() < count {
            cells.push(ClickTotal::new());
        }
    }

    /// Shared handles to every cell, in position order
    pub fn snapshot(&self) -> Vec<ClickTotal> {
        self.cells.read().unwrap().clone()
    }

    /// Current totals, in position order
    pub fn values(&self) -> Vec<i64> {
        self.cells.read().unwrap().iter().map(ClickTotal::get).collect()
    }
}

impl Default for ClickTotals {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces one `Counter` per position 0..count
pub struct CounterList {
    id: WidgetId,
    count: usize,
    totals: ClickTotals,
}

impl CounterList {
    pub fn new(count: usize, totals: ClickTotals) -> Self {
        Self {
            id: next_widget_id(),
            count,
            totals,
        }
    }
}

impl Widget for CounterList {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Column
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        // Tolerates count = 0 by producing an empty sequence
        self.totals.sync(self.count);
        self.totals
            .snapshot()
            .into_iter()
            .enumerate()
            .map(|(position, cell)| Box::new(Counter::new(position, cell)) as BoxedWidget)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    #[test]
    fn test_sync_grows_with_fresh_cells() {
        let totals = ClickTotals::new();
        totals.sync(3);
        assert_eq!(totals.values(), vec![0, 0, 0]);
    }

    #[test]
    fn test_sync_preserves_surviving_positions() {
        let totals = ClickTotals::new();
        totals.sync(3);
        totals.snapshot()[1].increment();
        totals.sync(4);
        assert_eq!(totals.values(), vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_shrink_then_regrow_loses_state() {
        let totals = ClickTotals::new();
        totals.sync(3);
        totals.snapshot()[2].increment();
        totals.sync(2);
        assert_eq!(totals.values(), vec![0, 0]);
        totals.sync(3);
        assert_eq!(totals.values(), vec![0, 0, 0]);
    }

    #[test]
    fn test_sync_to_zero_empties() {
        let totals = ClickTotals::new();
        totals.sync(2);
        totals.sync(0);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_builds_one_counter_per_position() {
        let app = App::new("list").root(CounterList::new(3, ClickTotals::new()));
        let scene = app.scene();
        assert_eq!(scene.texts(), vec!["Counter: 0"; 3]);
        assert_eq!(scene.buttons().len(), 6);
    }

    #[test]
    fn test_zero_count_builds_empty() {
        let app = App::new("list").root(CounterList::new(0, ClickTotals::new()));
        assert!(app.scene().texts().is_empty());
    }
}
