//! Widget trait and core widget types

use crate::core::{Context, Event};
use crate::render::NodeKind;

/// Unique identifier for widgets
pub type WidgetId = u64;

/// Core trait that all UI components implement
pub trait Widget: Send + Sync {
    /// Returns the widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Declarative description of this widget for the scene tree
    fn node(&self) -> NodeKind;

    /// Build the widget tree - returns child widgets
    fn build(&mut self, ctx: &mut Context) -> Vec<Box<dyn Widget>>;

    /// Handle events (clicks, etc.)
    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        let _ = (event, ctx);
        false // Not handled by default
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

/// Helper to generate unique widget IDs
pub fn next_widget_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
