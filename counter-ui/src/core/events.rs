//! Event system for Counter UI

/// Discrete input events delivered on the UI loop
#[derive(Debug, Clone)]
pub enum Event {
    MouseDown { button: MouseButton },
    MouseUp { button: MouseButton },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
