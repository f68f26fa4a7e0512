//! Error types for the UI runtime

use crate::core::WidgetId;
use thiserror::Error;

/// Errors surfaced by the app runtime and renderers
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no widget with id {0} in the current frame")]
    UnknownWidget(WidgetId),

    #[error("renderer output failed: {0}")]
    Render(#[from] std::io::Error),

    #[error("scene serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
