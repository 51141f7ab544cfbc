//! Layout validation, following the rules of CSS `grid-template-areas`:
//! areas are named `A`-`Z` in item order and each must form a single
//! filled-in rectangle.
use crate::error::LayoutError;
use crate::grid::{Layout, area_labels};
use std::collections::{BTreeMap, BTreeSet};

/// Validates `layout` for `items` items.
///
/// Checks run in order: empty layout, empty rows and ragged rows, the set of
/// area labels, then area shapes. The first failing category is returned,
/// listing every offending label within it.
pub fn validate_layout(layout: &Layout, items: usize) -> Result<(), LayoutError> {
    let areas = collect_areas(layout)?;

    let expected: BTreeSet<char> = area_labels(items)?.into_iter().collect();
    let used: BTreeSet<char> = areas.keys().copied().collect();
    let missing: Vec<char> = expected.difference(&used).copied().collect();
    let extra: Vec<char> = used.difference(&expected).copied().collect();
    if !missing.is_empty() || !extra.is_empty() {
        return Err(LayoutError::AreaMismatch { missing, extra });
    }

    let broken: Vec<char> = areas
        .iter()
        .filter(|(_, cells)| !is_filled_rectangle(cells))
        .map(|(label, _)| *label)
        .collect();
    if !broken.is_empty() {
        return Err(LayoutError::NotRectangular { areas: broken });
    }

    Ok(())
}

/// Maps every area label to the `(row, column)` cells it occupies.
fn collect_areas(layout: &Layout) -> Result<BTreeMap<char, BTreeSet<(usize, usize)>>, LayoutError> {
    let rows = layout.rows();
    let Some(first) = rows.first() else {
        return Err(LayoutError::Empty);
    };
    let expected = first.len();

    let mut areas: BTreeMap<char, BTreeSet<(usize, usize)>> = BTreeMap::new();
    for (row_index, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(LayoutError::EmptyRow { row: row_index });
        }
        if row.len() != expected {
            return Err(LayoutError::RowLengthMismatch {
                row: row_index,
                found: row.len(),
                expected,
            });
        }
        for (column_index, cell) in row.iter().enumerate() {
            if let Some(label) = cell.label() {
                areas.entry(label).or_default().insert((row_index, column_index));
            }
        }
    }
    Ok(areas)
}

/// A cell set is a filled rectangle iff it covers its own bounding box.
fn is_filled_rectangle(cells: &BTreeSet<(usize, usize)>) -> bool {
    if cells.len() <= 1 {
        return true;
    }
    let (mut row_min, mut col_min) = (usize::MAX, usize::MAX);
    let (mut row_max, mut col_max) = (0, 0);
    for &(row, col) in cells {
        row_min = row_min.min(row);
        row_max = row_max.max(row);
        col_min = col_min.min(col);
        col_max = col_max.max(col);
    }
    (row_max - row_min + 1) * (col_max - col_min + 1) == cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_layout;
    use crate::grid::Cell;

    fn check(spec: &str, items: usize) -> Result<(), LayoutError> {
        validate_layout(&generate_layout(spec, items).unwrap(), items)
    }

    #[test]
    fn test_accepts_rectangles() {
        assert_eq!(check("AAB|AAC", 3), Ok(()));
        assert_eq!(check("AB|CC|CC", 3), Ok(()));
        assert_eq!(check("A.|.B", 2), Ok(()));
        assert_eq!(check("3", 7), Ok(()));
    }

    #[test]
    fn test_rejects_empty_layout() {
        assert_eq!(validate_layout(&Layout::from_rows(vec![]), 1), Err(LayoutError::Empty));
    }

    #[test]
    fn test_rejects_empty_row() {
        assert_eq!(check("AB||C", 3), Err(LayoutError::EmptyRow { row: 1 }));
        assert_eq!(check("", 1), Err(LayoutError::EmptyRow { row: 0 }));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            check("AB|C", 3),
            Err(LayoutError::RowLengthMismatch { row: 1, found: 1, expected: 2 })
        );
    }

    #[test]
    fn test_reports_missing_and_extra_together() {
        assert_eq!(
            check("AXY", 3),
            Err(LayoutError::AreaMismatch {
                missing: vec!['B', 'C'],
                extra: vec!['X', 'Y'],
            })
        );
        assert_eq!(
            check("ab", 2),
            Err(LayoutError::AreaMismatch {
                missing: vec!['A', 'B'],
                extra: vec!['a', 'b'],
            })
        );
    }

    #[test]
    fn test_rejects_l_shapes_and_disjoint_areas() {
        assert_eq!(
            check("AA|AB", 2),
            Err(LayoutError::NotRectangular { areas: vec!['A'] })
        );
        assert_eq!(
            check("ABA|CBC", 3),
            Err(LayoutError::NotRectangular { areas: vec!['A', 'C'] })
        );
    }

    #[test]
    fn test_rejects_holes() {
        assert_eq!(
            check("AAA|ABA|AAA", 2),
            Err(LayoutError::NotRectangular { areas: vec!['A'] })
        );
    }

    #[test]
    fn test_single_cell_area_is_rectangular() {
        let layout = Layout::from_rows(vec![vec![Cell::Area('A')]]);
        assert_eq!(validate_layout(&layout, 1), Ok(()));
    }
}
