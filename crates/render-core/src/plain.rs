//! Man page and plain-text output. Grids have no equivalent here, so images
//! are listed in area order.
use crate::error::RenderError;
use crate::ir::{Figure, FigureItem, Timeline};
use crate::traits::Renderer;
use crate::utils::escape_man;
use std::fmt::Write;

fn image_placeholder(item: &FigureItem) -> String {
    let text = item.alt.as_deref().filter(|alt| !alt.is_empty()).unwrap_or(item.uri.as_str());
    format!("[image: {}]", text)
}

fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim_end).filter(|line| !line.trim().is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_figure(&self, figure: &Figure) -> Result<String, RenderError> {
        let mut out = String::new();
        for item in &figure.items {
            writeln!(out, "{}", image_placeholder(item))?;
        }
        if let Some(caption) = &figure.caption {
            writeln!(out, "\n{}", caption)?;
        }
        Ok(out)
    }

    fn render_timeline(&self, timeline: &Timeline) -> Result<String, RenderError> {
        let mut out = String::new();
        for (index, content) in timeline.items.iter().enumerate() {
            let marker = format!("{}. ", index + 1);
            let indent = " ".repeat(marker.len());
            for (line_no, line) in content_lines(content).enumerate() {
                let prefix = if line_no == 0 { marker.as_str() } else { indent.as_str() };
                writeln!(out, "{}{}", prefix, line)?;
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManRenderer;

impl Renderer for ManRenderer {
    fn render_figure(&self, figure: &Figure) -> Result<String, RenderError> {
        let mut out = String::from(".sp\n");
        for (index, item) in figure.items.iter().enumerate() {
            if index > 0 {
                out.push_str(".br\n");
            }
            writeln!(out, "{}", escape_man(&image_placeholder(item)))?;
        }
        if let Some(caption) = &figure.caption {
            writeln!(out, ".sp\n{}", escape_man(caption))?;
        }
        Ok(out)
    }

    fn render_timeline(&self, timeline: &Timeline) -> Result<String, RenderError> {
        let mut out = String::new();
        for (index, content) in timeline.items.iter().enumerate() {
            writeln!(out, ".IP {}. 4", index + 1)?;
            for line in content_lines(content) {
                writeln!(out, "{}", escape_man(line.trim_start()))?;
            }
        }
        Ok(out)
    }
}
