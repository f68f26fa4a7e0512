//! A single click counter

use crate::core::{next_widget_id, BoxedWidget, Context, State, Widget, WidgetId};
use crate::render::NodeKind;
use crate::widgets::{Button, Text};

/// Running net click value of one counter. Cloning shares the cell, so
/// callbacks handed to buttons mutate the same total the display reads.
#[derive(Clone)]
pub struct ClickTotal(State<i64>);

impl ClickTotal {
    pub fn new() -> Self {
        Self(State::new(0))
    }

    pub fn get(&self) -> i64 {
        self.0.get()
    }

    /// Add one click. Always succeeds, no upper bound.
    pub fn increment(&self) {
        self.0.update(|v| *v += 1);
    }

    /// Remove one click. Negative totals are valid.
    pub fn decrement(&self) {
        self.0.update(|v| *v -= 1);
    }
}

impl Default for ClickTotal {
    fn default() -> Self {
        Self::new()
    }
}

/// One independent counter: shows its total, offers Plus and Minus
pub struct Counter {
    id: WidgetId,
    position: usize,
    total: ClickTotal,
}

impl Counter {
    pub fn new(position: usize, total: ClickTotal) -> Self {
        Self {
            id: next_widget_id(),
            position,
            total,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> i64 {
        self.total.get()
    }
}

impl Widget for Counter {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Column
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        let plus = self.total.clone();
        let minus = self.total.clone();
        vec![
            Box::new(Text::new(format!("Counter: {}", self.total.get()))),
            Box::new(Button::new("Plus").on_click(move || plus.increment())),
            Box::new(Button::new("Minus").on_click(move || minus.decrement())),
        ]
    }
}
