use tessella_dtime::DateTimeError;
use tessella_source::SourceError;
use tessella_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Error parsing data: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data must be a list")]
    NotAList,

    #[error("Data must not be empty")]
    EmptyData,

    #[error("item {index}: each data item must be a mapping")]
    NotAMapping { index: usize },

    #[error("item {index}: each data item must contain 'start' key")]
    MissingStart { index: usize },

    #[error("item {index}: '{field}' must be a string, found {found}")]
    FieldType {
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("item {index}: error parsing '{field}' value: {source}")]
    InvalidField {
        index: usize,
        field: &'static str,
        #[source]
        source: DateTimeError,
    },

    #[error("Template cannot be empty")]
    EmptyTemplate,

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("item {index}: template rendering failed: {source}")]
    Render {
        index: usize,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("Invalid option: {0}")]
    Option(#[from] StyleParseError),
}
