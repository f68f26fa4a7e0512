//! Core types and traits for Counter UI

mod context;
mod error;
mod events;
mod state;
mod widget;

pub use context::*;
pub use error::*;
pub use events::*;
pub use state::*;
pub use widget::*;
