//! Rendering of figures and timelines.
//!
//! This crate holds the format-agnostic descriptions produced by the figure
//! and timeline builders, and one renderer per output target:
//! - [`Figure`] and [`Timeline`], the intermediate representation
//! - the [`Renderer`] trait and [`RenderTarget`] selector
//! - HTML, LaTeX, man and plain-text backends
//! - escaping helpers shared by the backends

mod error;
mod html;
mod ir;
mod latex;
mod plain;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use html::{HtmlRenderer, grid_stylesheet, layout_class};
pub use ir::{Breakpoint, Figure, FigureItem, FigureOptions, Timeline};
pub use latex::LatexRenderer;
pub use plain::{ManRenderer, TextRenderer};
pub use traits::{RenderTarget, Renderer};
