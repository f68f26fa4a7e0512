//! Root component: owns the counter count

use crate::components::{ClickTotals, CounterList, Header};
use crate::core::{next_widget_id, BoxedWidget, Context, State, Widget, WidgetId};
use crate::render::NodeKind;

/// Number of counters shown on startup
pub const DEFAULT_COUNT: usize = 4;

/// Title shown in the header
pub const TITLE: &str = "Counters";

fn increase_count(count: &State<usize>) {
    count.update(|c| *c += 1);
}

fn decrease_count(count: &State<usize>) {
    // Never below one
    count.update(|c| {
        if *c > 1 {
            *c -= 1;
        }
    });
}

/// Top of the demo tree: header plus counter list.
///
/// The count flows down into `CounterList` on every build; click totals
/// never flow back up.
pub struct CounterApp {
    id: WidgetId,
    count: State<usize>,
    totals: ClickTotals,
}

impl CounterApp {
    pub fn new() -> Self {
        Self::with_count(DEFAULT_COUNT)
    }

    /// Start with a specific number of counters (floored at 1)
    pub fn with_count(count: usize) -> Self {
        Self {
            id: next_widget_id(),
            count: State::new(count.max(1)),
            totals: ClickTotals::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Add a counter to the list. No upper bound.
    pub fn increase(&self) {
        increase_count(&self.count);
    }

    /// Remove the last counter, unless only one is left
    pub fn decrease(&self) {
        decrease_count(&self.count);
    }
}

impl Default for CounterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CounterApp {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Column
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        let increase = self.count.clone();
        let decrease = self.count.clone();
        vec![
            Box::new(Header::new(
                TITLE,
                move || increase_count(&increase),
                move || decrease_count(&decrease),
            )),
            Box::new(CounterList::new(self.count.get(), self.totals.clone())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    fn harness(count: usize) -> App {
        App::new(TITLE).root(CounterApp::with_count(count))
    }

    /// Click the nth button with the given label, in document order
    fn click_labeled(app: &mut App, label: &str, nth: usize) {
        let scene = app.scene();
        let (target, _) = scene
            .buttons()
            .into_iter()
            .filter(|(_, l)| *l == label)
            .nth(nth)
            .unwrap();
        app.click(target).unwrap();
    }

    fn displays(app: &App) -> Vec<String> {
        app.scene().texts().into_iter().map(str::to_string).collect()
    }

    #[test]
    fn test_count_operations() {
        let app = CounterApp::new();
        assert_eq!(app.count(), DEFAULT_COUNT);
        app.increase();
        assert_eq!(app.count(), DEFAULT_COUNT + 1);
        app.decrease();
        assert_eq!(app.count(), DEFAULT_COUNT);
    }

    #[test]
    fn test_decrease_is_noop_at_one() {
        let app = CounterApp::with_count(1);
        app.decrease();
        assert_eq!(app.count(), 1);
        app.decrease();
        assert_eq!(app.count(), 1);
    }

    #[test]
    fn test_with_count_floors_at_one() {
        assert_eq!(CounterApp::with_count(0).count(), 1);
    }

    #[test]
    fn test_header_rendered() {
        let app = harness(1);
        let scene = app.scene();
        assert_eq!(scene.headings(), vec![TITLE]);
        let labels: Vec<&str> = scene.buttons().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["+", "-", "Plus", "Minus"]);
    }

    #[test]
    fn test_plus_twice_appends_fresh_counters() {
        let mut app = harness(4);
        click_labeled(&mut app, "+", 0);
        click_labeled(&mut app, "+", 0);
        assert_eq!(displays(&app), vec!["Counter: 0"; 6]);
    }

    #[test]
    fn test_minus_at_one_keeps_one_counter() {
        let mut app = harness(1);
        click_labeled(&mut app, "-", 0);
        assert_eq!(displays(&app), vec!["Counter: 0"]);
    }

    #[test]
    fn test_clicks_only_affect_their_own_unit() {
        let mut app = harness(3);
        for _ in 0..3 {
            click_labeled(&mut app, "Plus", 1);
        }
        assert_eq!(
            displays(&app),
            vec!["Counter: 0", "Counter: 3", "Counter: 0"]
        );
    }

    #[test]
    fn test_minus_discards_highest_position() {
        let mut app = harness(3);
        click_labeled(&mut app, "Plus", 2);
        assert_eq!(
            displays(&app),
            vec!["Counter: 0", "Counter: 0", "Counter: 1"]
        );

        click_labeled(&mut app, "-", 0);
        assert_eq!(displays(&app), vec!["Counter: 0", "Counter: 0"]);

        // Regrowing recreates position 2 with a fresh total
        click_labeled(&mut app, "+", 0);
        assert_eq!(displays(&app), vec!["Counter: 0"; 3]);
    }

    #[test]
    fn test_surviving_positions_keep_totals_across_resize() {
        let mut app = harness(2);
        click_labeled(&mut app, "Plus", 0);
        click_labeled(&mut app, "Minus", 1);
        click_labeled(&mut app, "+", 0);
        assert_eq!(
            displays(&app),
            vec!["Counter: 1", "Counter: -1", "Counter: 0"]
        );
    }

    #[test]
    fn test_interleaved_clicks_sum_per_unit() {
        let mut app = harness(2);
        click_labeled(&mut app, "Plus", 0);
        click_labeled(&mut app, "Minus", 1);
        click_labeled(&mut app, "Plus", 0);
        click_labeled(&mut app, "Plus", 1);
        click_labeled(&mut app, "Minus", 0);
        assert_eq!(displays(&app), vec!["Counter: 1", "Counter: 0"]);
    }
}
