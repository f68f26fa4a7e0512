//! Container widgets (Column, Row)

use crate::core::{next_widget_id, BoxedWidget, Context, Widget, WidgetId};
use crate::render::NodeKind;

/// Vertical layout container
pub struct Column {
    id: WidgetId,
    children: Vec<BoxedWidget>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: next_widget_id(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<BoxedWidget>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Column
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        // Containers hand their stored children to the element tree;
        // parents reconstruct them on every rebuild.
        std::mem::take(&mut self.children)
    }
}

/// Horizontal layout container
pub struct Row {
    id: WidgetId,
    children: Vec<BoxedWidget>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            id: next_widget_id(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<BoxedWidget>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Row
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        std::mem::take(&mut self.children)
    }
}
