//! Button widget

use crate::core::{next_widget_id, BoxedWidget, Context, Event, Widget, WidgetId};
use crate::render::NodeKind;
use std::sync::Arc;

/// Callback type for button clicks
pub type OnClick = Arc<dyn Fn() + Send + Sync>;

/// Standard button widget
pub struct Button {
    id: WidgetId,
    label: String,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            label: label.into(),
            on_click: None,
        }
    }

    pub fn on_click<F: Fn() + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> NodeKind {
        NodeKind::Button(self.label.clone())
    }

    fn build(&mut self, _ctx: &mut Context) -> Vec<BoxedWidget> {
        Vec::new()
    }

    fn on_event(&mut self, event: &Event, _ctx: &mut Context) -> bool {
        match event {
            // Buttons activate on release
            Event::MouseUp { .. } => {
                if let Some(ref handler) = self.on_click {
                    handler();
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MouseButton;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fires_on_release_only() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_in = Arc::clone(&clicks);
        let mut button = Button::new("Plus").on_click(move || {
            clicks_in.fetch_add(1, Ordering::SeqCst);
        });

        let mut ctx = Context::new();
        let down = Event::MouseDown {
            button: MouseButton::Left,
        };
        let up = Event::MouseUp {
            button: MouseButton::Left,
        };

        assert!(!button.on_event(&down, &mut ctx));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        assert!(button.on_event(&up, &mut ctx));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_without_handler_is_unhandled() {
        let mut button = Button::new("Plus");
        let mut ctx = Context::new();
        let up = Event::MouseUp {
            button: MouseButton::Left,
        };
        assert!(!button.on_event(&up, &mut ctx));
    }
}
