//! Counter UI - a counter list demo on a small retained-widget toolkit
//!
//! The toolkit half (`core`, `widgets`, `render`, `app`) is a minimal
//! widget tree with reactive state cells and a declarative scene boundary;
//! the `components` half is the demo itself: a header that grows and
//! shrinks a list of independent click counters.

pub mod app;
pub mod components;
pub mod core;
pub mod render;
pub mod widgets;

pub use app::App;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::App;
    pub use crate::components::*;
    pub use crate::core::{Context, Event, State, UiError, Widget};
    pub use crate::render::{Renderer, Scene, TextRenderer};
    pub use crate::widgets::*;
}
