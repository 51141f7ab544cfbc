//! Flattening of "progression" layouts for row-based renderers.
//!
//! A progression is a layout whose areas appear in strict alphabetical,
//! row-major order, each as a horizontal run that never spans rows. Such a
//! layout can be emitted as a flat sequence of fixed-width boxes with row
//! breaks, e.g. LaTeX `subfigure` environments.
use crate::grid::{Cell, Layout, area_label};
use serde::Serialize;

/// Fraction of the line width shared out between runs; the remainder absorbs
/// renderer rounding so that a full row never overflows.
pub const TOTAL_WIDTH_FRACTION: f64 = 0.99;

/// A horizontal run of cells belonging to one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedRun {
    pub label: char,
    /// Number of columns covered by the run.
    pub span: usize,
    /// A row break follows this run.
    pub new_row: bool,
    #[serde(skip)]
    row: usize,
}

/// The flattened form of a progression layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progression {
    runs: Vec<FlattenedRun>,
    columns: usize,
}

impl Progression {
    pub fn runs(&self) -> &[FlattenedRun] {
        &self.runs
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Width of a single column, as a fraction of the line width.
    pub fn column_width(&self) -> f64 {
        round3(TOTAL_WIDTH_FRACTION / self.columns as f64)
    }

    /// Width of `run`, as a fraction of the line width.
    pub fn run_width(&self, run: &FlattenedRun) -> f64 {
        round3(self.column_width() * run.span as f64)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Flattens a validated layout into runs, or returns `None` if the layout is
/// not a progression and needs a two-dimensional rendering strategy.
pub fn flatten_progression(layout: &Layout) -> Option<Progression> {
    let mut runs: Vec<FlattenedRun> = Vec::new();
    let mut next_index = 0;

    for (row_index, row) in layout.rows().iter().enumerate() {
        for cell in row {
            let Cell::Area(label) = *cell else {
                continue;
            };
            let current = runs
                .last_mut()
                .filter(|run| run.row == row_index && run.label == label);
            if let Some(run) = current {
                run.span += 1;
            } else if area_label(next_index) == Some(label) {
                runs.push(FlattenedRun { label, span: 1, new_row: false, row: row_index });
                next_index += 1;
            } else {
                log::debug!("Layout '{}' is not a progression at area '{}'", layout, label);
                return None;
            }
        }
        if let Some(run) = runs.last_mut() {
            run.new_row = true;
        }
    }

    let last = runs.last_mut()?;
    last.new_row = false;

    Some(Progression {
        runs,
        columns: layout.column_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_layout;

    fn flatten(spec: &str, items: usize) -> Option<Progression> {
        flatten_progression(&parse_layout(spec, items).unwrap())
    }

    fn summary(progression: &Progression) -> Vec<(char, usize, bool)> {
        progression
            .runs()
            .iter()
            .map(|run| (run.label, run.span, run.new_row))
            .collect()
    }

    #[test]
    fn test_single_row_has_no_breaks() {
        let progression = flatten("ABCD", 4).unwrap();
        assert_eq!(
            summary(&progression),
            vec![('A', 1, false), ('B', 1, false), ('C', 1, false), ('D', 1, false)]
        );
    }

    #[test]
    fn test_row_breaks_follow_last_run_of_each_row() {
        let progression = flatten("AAB|C..", 3).unwrap();
        assert_eq!(
            summary(&progression),
            vec![('A', 2, false), ('B', 1, true), ('C', 1, false)]
        );
    }

    #[test]
    fn test_integer_layout_is_progression() {
        let progression = flatten("3", 5).unwrap();
        assert_eq!(
            summary(&progression),
            vec![('A', 1, false), ('B', 1, false), ('C', 1, true), ('D', 1, false), ('E', 1, false)]
        );
    }

    #[test]
    fn test_row_spanning_area_is_not_progression() {
        assert!(flatten("AB|AC", 3).is_none());
    }

    #[test]
    fn test_out_of_order_areas_are_not_progression() {
        assert!(flatten("BA", 2).is_none());
        assert!(flatten("AC|BD", 4).is_none());
    }

    #[test]
    fn test_leading_empty_row_is_skipped() {
        let progression = flatten("..|AB", 2).unwrap();
        assert_eq!(summary(&progression), vec![('A', 1, false), ('B', 1, false)]);
    }

    #[test]
    fn test_run_widths() {
        let progression = flatten("AAB|C..", 3).unwrap();
        assert_eq!(progression.column_width(), 0.33);
        let widths: Vec<f64> = progression
            .runs()
            .iter()
            .map(|run| progression.run_width(run))
            .collect();
        assert_eq!(widths, vec![0.66, 0.33, 0.33]);

        let single = flatten("1", 1).unwrap();
        assert_eq!(single.run_width(&single.runs()[0]), 0.99);
    }
}
