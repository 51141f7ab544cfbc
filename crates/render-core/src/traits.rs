use crate::error::RenderError;
use crate::html::HtmlRenderer;
use crate::ir::{Figure, Timeline};
use crate::latex::LatexRenderer;
use crate::plain::{ManRenderer, TextRenderer};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// A backend turning figures and timelines into one output format.
pub trait Renderer {
    fn render_figure(&self, figure: &Figure) -> Result<String, RenderError>;

    fn render_timeline(&self, timeline: &Timeline) -> Result<String, RenderError>;

    fn write_figure(&self, figure: &Figure, writer: &mut dyn Write) -> Result<(), RenderError> {
        writer.write_all(self.render_figure(figure)?.as_bytes())?;
        Ok(())
    }

    fn write_timeline(&self, timeline: &Timeline, writer: &mut dyn Write) -> Result<(), RenderError> {
        writer.write_all(self.render_timeline(timeline)?.as_bytes())?;
        Ok(())
    }
}

/// The output formats a figure or timeline can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderTarget {
    #[default]
    Html,
    Latex,
    Man,
    Text,
}

impl RenderTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderTarget::Html => "html",
            RenderTarget::Latex => "latex",
            RenderTarget::Man => "man",
            RenderTarget::Text => "text",
        }
    }

    /// The default renderer for this target.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            RenderTarget::Html => Box::new(HtmlRenderer::default()),
            RenderTarget::Latex => Box::new(LatexRenderer),
            RenderTarget::Man => Box::new(ManRenderer),
            RenderTarget::Text => Box::new(TextRenderer),
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderTarget {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(RenderTarget::Html),
            "latex" => Ok(RenderTarget::Latex),
            "man" => Ok(RenderTarget::Man),
            "text" => Ok(RenderTarget::Text),
            other => Err(RenderError::UnknownTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Timeline;

    #[test]
    fn test_parse_targets() {
        assert_eq!("HTML".parse::<RenderTarget>().unwrap(), RenderTarget::Html);
        assert_eq!("man".parse::<RenderTarget>().unwrap(), RenderTarget::Man);
        assert!(matches!(
            "pdf".parse::<RenderTarget>(),
            Err(RenderError::UnknownTarget(name)) if name == "pdf"
        ));
    }

    #[test]
    fn test_write_timeline_to_writer() {
        let timeline = Timeline { items: vec!["Launch".to_string()], ..Default::default() };
        let mut out = Vec::new();
        RenderTarget::Text.renderer().write_timeline(&timeline, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. Launch\n");
    }
}
