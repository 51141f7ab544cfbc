use tessella_layout::LayoutError;
use tessella_render_core::RenderError;
use tessella_source::SourceError;
use tessella_style::StyleParseError;
use tessella_timeline::TimelineError;
use thiserror::Error;

/// The error type for building and rendering figures and timelines.
#[derive(Error, Debug)]
pub enum TessellaError {
    #[error("Invalid subfigure {option}: {source}")]
    Layout {
        /// The option holding the layout, e.g. `layout` or `layout-sm`.
        option: String,
        #[source]
        source: LayoutError,
    },

    #[error("Invalid subfigure content: {0}")]
    Content(String),

    #[error("Invalid option: {0}")]
    Option(#[from] StyleParseError),

    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("Event data error: {0}")]
    Source(#[from] SourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
