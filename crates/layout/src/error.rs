use thiserror::Error;

/// Errors raised while generating or validating a grid layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("empty")]
    Empty,

    #[error("empty row {row}")]
    EmptyRow { row: usize },

    #[error("row length mismatch: row {row} has {found} columns, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("{}", describe_mismatch(.missing, .extra))]
    AreaMismatch { missing: Vec<char>, extra: Vec<char> },

    #[error("{} not a single rectangle", describe_areas("area", "areas", .areas))]
    NotRectangular { areas: Vec<char> },

    #[error("column count must be a positive integer, got {0}")]
    InvalidColumns(i64),

    #[error("column count {0} exceeds the maximum of 26")]
    TooManyColumns(i64),

    #[error("{0} items exceed the available area labels A-Z")]
    TooManyItems(usize),
}

fn join_labels(labels: &[char]) -> String {
    labels
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_areas(one: &str, many: &str, labels: &[char]) -> String {
    let verb = if labels.len() == 1 { "is" } else { "are" };
    let noun = if labels.len() == 1 { one } else { many };
    format!("{} {} {}", noun, join_labels(labels), verb)
}

fn describe_mismatch(missing: &[char], extra: &[char]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing areas {}", join_labels(missing)));
    }
    if !extra.is_empty() {
        parts.push(format!("invalid areas {}", join_labels(extra)));
    }
    parts.join("; ")
}
