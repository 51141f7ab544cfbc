//! A `nom`-based parser for layout specifications.
use crate::error::LayoutError;
use crate::grid::{Cell, Layout, MAX_AREAS, area_labels};
use nom::{
    IResult, Parser,
    character::complete::{char, multispace0, satisfy},
    combinator::map,
    multi::{many0, separated_list1},
    sequence::{preceded, terminated},
};

const ROW_DELIMITER: char = '|';

/// The widest integer layout accepted; matches the number of area labels.
pub const MAX_COLUMNS: usize = MAX_AREAS;

/// Generates an (unvalidated) layout from a specification string.
///
/// An integer spec `N` yields `N` columns with areas filled row-major and the
/// last row padded with `.` cells, like `grid-template-columns: repeat(N, 1fr)`.
/// Anything else is read as a template string.
pub fn generate_layout(spec: &str, items: usize) -> Result<Layout, LayoutError> {
    match spec.trim().parse::<i64>() {
        Ok(columns) => column_layout(columns, items),
        Err(_) => Ok(template_layout(spec)),
    }
}

fn column_layout(columns: i64, items: usize) -> Result<Layout, LayoutError> {
    if columns <= 0 {
        return Err(LayoutError::InvalidColumns(columns));
    }
    let columns = usize::try_from(columns)
        .ok()
        .filter(|&columns| columns <= MAX_COLUMNS)
        .ok_or(LayoutError::TooManyColumns(columns))?;
    let labels = area_labels(items)?;

    let rows = labels
        .chunks(columns)
        .map(|chunk| {
            let mut row: Vec<Cell> = chunk.iter().copied().map(Cell::Area).collect();
            row.resize(columns, Cell::Empty);
            row
        })
        .collect();
    Ok(Layout::from_rows(rows))
}

fn template_layout(spec: &str) -> Layout {
    // `rows` accepts any input: every character is either a delimiter,
    // whitespace, or a cell.
    let rows = match rows(spec) {
        Ok((_, rows)) => rows,
        Err(_) => vec![Vec::new()],
    };
    Layout::from_rows(rows)
}

// --- Combinators ---

fn cell(input: &str) -> IResult<&str, Cell> {
    preceded(
        multispace0,
        map(
            satisfy(|c| c != ROW_DELIMITER && !c.is_whitespace()),
            Cell::from_char,
        ),
    )
    .parse(input)
}

fn row(input: &str) -> IResult<&str, Vec<Cell>> {
    terminated(many0(cell), multispace0).parse(input)
}

fn rows(input: &str) -> IResult<&str, Vec<Vec<Cell>>> {
    separated_list1(char(ROW_DELIMITER), row).parse(input)
}
