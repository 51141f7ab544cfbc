//! Grid primitives: cells, rows and area labels.
use crate::error::LayoutError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of single-letter area labels (`A`-`Z`).
pub const MAX_AREAS: usize = 26;

/// Returns the area label for the item at `index`, if one exists.
pub fn area_label(index: usize) -> Option<char> {
    (index < MAX_AREAS).then(|| (b'A' + index as u8) as char)
}

/// Returns the labels `A..` for `items` items.
pub fn area_labels(items: usize) -> Result<Vec<char>, LayoutError> {
    if items > MAX_AREAS {
        return Err(LayoutError::TooManyItems(items));
    }
    Ok((0..items).filter_map(area_label).collect())
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A cell belonging to a named area.
    Area(char),
    /// The `.` placeholder.
    Empty,
}

impl Cell {
    pub const EMPTY_MARKER: char = '.';

    pub fn from_char(c: char) -> Self {
        if c == Self::EMPTY_MARKER {
            Cell::Empty
        } else {
            Cell::Area(c)
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Cell::Area(label) => *label,
            Cell::Empty => Self::EMPTY_MARKER,
        }
    }

    pub fn label(&self) -> Option<char> {
        match self {
            Cell::Area(label) => Some(*label),
            Cell::Empty => None,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

/// A rectangular grid of area cells, stored row-major.
///
/// A `Layout` is only guaranteed to be rectangular and complete once it has
/// passed [`crate::validate_layout`]; [`crate::parse_layout`] does both steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Layout {
    rows: Vec<Vec<Cell>>,
}

impl Layout {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count of the first row; all rows match after validation.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Rows as plain strings, e.g. `["AAB", "C.."]`.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::as_char).collect())
            .collect()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row_strings().join("|"))
    }
}
