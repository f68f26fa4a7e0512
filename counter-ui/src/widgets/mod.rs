//! Built-in widgets for Counter UI

mod button;
mod container;
mod text;

pub use button::*;
pub use container::*;
pub use text::*;
