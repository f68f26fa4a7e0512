//! Global header: title plus list-level controls

use crate::core::{next_widget_id, BoxedWidget, Context, Widget, WidgetId};
use crate::render::NodeKind;
use crate::widgets::{Button, Heading, OnClick};
use std::sync::Arc;

/// Header bar with "+" and "-" controls.
///
/// Takes its two callbacks explicitly; it never reads or owns the count.
pub struct Header {
    id: WidgetId,
    title: String,
    on_increase: OnClick,
    on_decrease: OnClick,
}

impl Header {
    pub fn new<F, G>(title: impl Into<String>, on_increase: F, on_decrease: G) -> Self
    where
        F: Fn() + Send + Sync + 'static,
        G: Fn() + Send + Sync + 'static,
    {
        Self {
            id: next_widget_id(),
            title: title.into(),
            on_increase: Arc::new(on_increase),
            on_decrease: Arc::new(on_decrease),
        }
    }
}

impl Widget for Header {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Row
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        let increase = Arc::clone(&self.on_increase);
        let decrease = Arc::clone(&self.on_decrease);
        vec![
            Box::new(Heading::new(self.title.clone())),
            Box::new(Button::new("+").on_click(move || increase())),
            Box::new(Button::new("-").on_click(move || decrease())),
        ]
    }
}
