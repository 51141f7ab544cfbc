//! Grid-area layouts for subfigures.
//!
//! A layout is either a column count (`"3"`) or a template string such as
//! `"AAB|AAC"`, where rows are separated by `|`, every non-whitespace
//! character is one cell, and `.` marks an empty cell. Areas are labelled
//! `A`, `B`, ... in item order and must each cover one filled rectangle.

mod error;
pub mod grid;
mod parser;
pub mod progression;
pub mod validate;

pub use self::error::LayoutError;
pub use self::grid::{Cell, Layout, area_label, area_labels, MAX_AREAS};
pub use self::parser::{generate_layout, MAX_COLUMNS};
pub use self::progression::{flatten_progression, FlattenedRun, Progression, TOTAL_WIDTH_FRACTION};
pub use self::validate::validate_layout;

/// Generates a layout from `spec` and validates it against `items` images.
pub fn parse_layout(spec: &str, items: usize) -> Result<Layout, LayoutError> {
    let layout = generate_layout(spec, items)?;
    validate_layout(&layout, items)?;
    log::debug!("Parsed layout '{}' for {} items: {}", spec.trim(), items, layout);
    Ok(layout)
}
