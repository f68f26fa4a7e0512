//! Demo application components

mod app;
mod counter;
mod counter_list;
mod header;

pub use app::*;
pub use counter::*;
pub use counter_list::*;
pub use header::*;
