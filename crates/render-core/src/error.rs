use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Figure has no default layout")]
    MissingLayout,
    #[error("Figure item {index} has area '{area}', which is not in the layout")]
    UnknownArea { index: usize, area: char },
    #[error("Image path '{0}' contains characters LaTeX cannot take in a file name")]
    UnsafePath(String),
    #[error("Unknown render target: '{0}' (expected html, latex, man or text)")]
    UnknownTarget(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
