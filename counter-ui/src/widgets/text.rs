//! Text widgets

use crate::core::{next_widget_id, BoxedWidget, Context, Widget, WidgetId};
use crate::render::NodeKind;

/// Text display widget
pub struct Text {
    id: WidgetId,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for Text {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Text(self.content.clone())
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        Vec::new() // Text has no children
    }
}

/// Top-level heading
pub struct Heading {
    id: WidgetId,
    content: String,
}

impl Heading {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            content: content.into(),
        }
    }
}

impl Widget for Heading {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Heading(self.content.clone())
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        Vec::new()
    }
}
