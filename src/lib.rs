//! Tessella: grid-layout subfigures and templated timelines.
//!
//! The workspace crates hold the pure building blocks; this crate wires them
//! together:
//! - [`SubfigureBuilder`] validates images against grid layouts and produces
//!   a [`Figure`]
//! - [`TimelineBuilder`] reads event data and templates and produces a
//!   [`Timeline`]
//! - [`RenderTarget`] selects the HTML, LaTeX, man or text renderer
//!
//! ```ignore
//! use tessella::{RenderTarget, SubfigureBuilder};
//!
//! let figure = SubfigureBuilder::new()
//!     .with_image("a.png", Some("First"))
//!     .with_image("b.png", Some("Second"))
//!     .with_layout("AB")
//!     .build()?;
//! let html = RenderTarget::Html.renderer().render_figure(&figure)?;
//! ```

pub mod error;
pub mod subfigure;
pub mod timeline;

pub use error::TessellaError;
pub use subfigure::SubfigureBuilder;
pub use timeline::TimelineBuilder;

pub use tessella_dtime as dtime;
pub use tessella_layout as layout;
pub use tessella_render_core::{
    Breakpoint, Figure, FigureItem, FigureOptions, RenderTarget, Renderer, Timeline,
};
pub use tessella_source::EventFormat;
pub use tessella_style::{Align, CaptionPlacement, ListStyle};
pub use tessella_timeline::{TimelineError, TimelineOptions};
