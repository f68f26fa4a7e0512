//! Build context for widgets

use crate::core::WidgetId;
use std::collections::HashMap;

/// Context passed to widgets during build and event handling
pub struct Context {
    /// Widget tree for lookups
    widget_tree: HashMap<WidgetId, WidgetInfo>,
    /// Widgets that need rebuild
    dirty_widgets: Vec<WidgetId>,
}

#[derive(Debug, Clone)]
pub struct WidgetInfo {
    pub id: WidgetId,
    pub parent_id: Option<WidgetId>,
    pub children: Vec<WidgetId>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            widget_tree: HashMap::new(),
            dirty_widgets: Vec::new(),
        }
    }

    /// Mark a widget as needing rebuild
    pub fn mark_dirty(&mut self, id: WidgetId) {
        if !self.dirty_widgets.contains(&id) {
            self.dirty_widgets.push(id);
        }
    }

    /// Get dirty widgets and clear the list
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        std::mem::take(&mut self.dirty_widgets)
    }

    /// Register a widget in the tree
    pub fn register_widget(&mut self, id: WidgetId, parent_id: Option<WidgetId>) {
        self.widget_tree.insert(
            id,
            WidgetInfo {
                id,
                parent_id,
                children: Vec::new(),
            },
        );

        if let Some(pid) = parent_id {
            if let Some(parent) = self.widget_tree.get_mut(&pid) {
                parent.children.push(id);
            }
        }
    }

    /// Look up a registered widget
    pub fn widget_info(&self, id: WidgetId) -> Option<&WidgetInfo> {
        self.widget_tree.get(&id)
    }

    /// Drop the registry before a full rebuild
    pub fn clear_tree(&mut self) {
        self.widget_tree.clear();
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
