//! HTML output: CSS grid figures and ordered-list timelines.
use crate::error::RenderError;
use crate::ir::{Breakpoint, Figure, Timeline};
use crate::traits::Renderer;
use crate::utils::{element_id, escape_html};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::Write;
use tessella_layout::{Cell, Layout};
use tessella_style::CaptionPlacement;

const GRID_CLASS: &str = "sphinx-subfigure-grid";
const AREA_CLASS: &str = "sphinx-subfigure-area";
const AREA_STYLE: &str =
    "display: flex; flex-direction: column; justify-content: center; align-items: center;";

/// The CSS class carrying `layout` at `breakpoint`, e.g. `ss-layout-default-AAB_Cdd`.
pub fn layout_class(breakpoint: Breakpoint, layout: &Layout) -> String {
    let rows = layout
        .row_strings()
        .iter()
        .map(|row| row.replace(Cell::EMPTY_MARKER, "d"))
        .join("_");
    format!("ss-layout-{}-{}", breakpoint, rows)
}

fn template_areas(layout: &Layout) -> String {
    layout
        .rows()
        .iter()
        .map(|row| format!("'{}'", row.iter().map(Cell::as_char).join(" ")))
        .join(" ")
}

/// A `<style>` block declaring `grid-template-areas` for every layout used by
/// `figures`, with responsive layouts wrapped in their media queries.
/// Returns an empty string when there is nothing to declare.
pub fn grid_stylesheet(figures: &[&Figure]) -> String {
    let mut by_size: BTreeMap<Breakpoint, BTreeMap<String, &Layout>> = BTreeMap::new();
    for figure in figures {
        for (breakpoint, layout) in &figure.layouts {
            by_size
                .entry(*breakpoint)
                .or_default()
                .insert(layout_class(*breakpoint, layout), layout);
        }
    }
    if by_size.is_empty() {
        return String::new();
    }

    let mut lines = vec!["<style>".to_string()];
    for (breakpoint, classes) in by_size {
        let query = breakpoint.media_query();
        if let Some(query) = query {
            lines.push(format!("@media {} {{", query));
        }
        for (class, layout) in classes {
            lines.push(format!("  .{} {{ grid-template-areas: {}; }}", class, template_areas(layout)));
        }
        if query.is_some() {
            lines.push("}".to_string());
        }
    }
    lines.push("</style>".to_string());
    lines.join("\n") + "\n"
}

fn class_attr<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    escape_html(&classes.into_iter().filter(|c| !c.is_empty()).join(" "))
}

/// Renders figures as CSS grids and timelines as ordered lists.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Prefix each figure with its own `<style>` block. Disable when the
    /// page collects styles with [`grid_stylesheet`] instead.
    pub embed_stylesheet: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self { embed_stylesheet: true }
    }
}

impl HtmlRenderer {
    pub fn without_stylesheet() -> Self {
        Self { embed_stylesheet: false }
    }
}

impl Renderer for HtmlRenderer {
    fn render_figure(&self, figure: &Figure) -> Result<String, RenderError> {
        let default_layout = figure.default_layout().ok_or(RenderError::MissingLayout)?;
        for (index, item) in figure.items.iter().enumerate() {
            let placed = default_layout.rows().iter().flatten().any(|cell| cell.label() == Some(item.area));
            if !placed {
                return Err(RenderError::UnknownArea { index, area: item.area });
            }
        }

        let options = &figure.options;
        let mut out = String::new();
        if self.embed_stylesheet {
            out.push_str(&grid_stylesheet(&[figure]));
        }

        let align = options.align.map(|align| format!("align-{}", align.as_str()));
        let figure_classes = std::iter::once("sphinx-subfigure")
            .chain(options.classes.iter().map(String::as_str))
            .chain(align.as_deref());
        write!(out, "<figure class=\"{}\"", class_attr(figure_classes))?;
        if let Some(name) = &options.name {
            write!(out, " id=\"{}\"", escape_html(&element_id(name)))?;
        }
        if let Some(width) = &options.width {
            write!(out, " style=\"width: {}\"", width.to_css())?;
        }
        out.push_str(">\n");

        let layout_classes: Vec<String> = figure
            .layouts
            .iter()
            .map(|(breakpoint, layout)| layout_class(*breakpoint, layout))
            .collect();
        let grid_classes = std::iter::once(GRID_CLASS)
            .chain(layout_classes.iter().map(String::as_str))
            .chain(options.grid_classes.iter().map(String::as_str));
        let mut grid_style = "display: grid;".to_string();
        if let Some(gap) = &options.gap {
            let gap = gap.to_css();
            write!(grid_style, " gap: {}; grid-gap: {};", gap, gap)?;
        }
        writeln!(out, "<div class=\"{}\" style=\"{}\">", class_attr(grid_classes), grid_style)?;

        let area_classes = class_attr(
            std::iter::once(AREA_CLASS).chain(options.area_classes.iter().map(String::as_str)),
        );
        for item in &figure.items {
            writeln!(
                out,
                "<div class=\"{}\" style=\"{} grid-area: {};\">",
                area_classes, AREA_STYLE, item.area
            )?;
            let subcaption = figure.subcaption(item);
            if let Some((CaptionPlacement::Above, text)) = subcaption {
                writeln!(out, "<span class=\"caption\">{}</span>", escape_html(text))?;
            }
            writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\" />",
                escape_html(&item.uri),
                escape_html(item.alt.as_deref().unwrap_or_default())
            )?;
            if let Some((CaptionPlacement::Below, text)) = subcaption {
                writeln!(out, "<span class=\"caption\">{}</span>", escape_html(text))?;
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");

        if let Some(caption) = &figure.caption {
            writeln!(out, "<figcaption>\n<p>{}</p>\n</figcaption>", escape_html(caption))?;
        }
        out.push_str("</figure>\n");
        Ok(out)
    }

    fn render_timeline(&self, timeline: &Timeline) -> Result<String, RenderError> {
        let mut out = String::new();
        let properties = timeline.custom_properties();
        if properties.is_empty() {
            out.push_str("<div class=\"docutils\">\n");
        } else {
            let style = properties
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .join(";");
            writeln!(out, "<div class=\"docutils\" style=\"{}\">", escape_html(&style))?;
        }

        let style_class = format!("timeline-{}", timeline.style.as_str());
        let list_classes = std::iter::once(style_class.as_str())
            .chain(timeline.classes.iter().map(String::as_str));
        writeln!(out, "<ol class=\"{}\">", class_attr(list_classes))?;

        let item_classes = class_attr(
            std::iter::once("timeline").chain(timeline.item_classes.iter().map(String::as_str)),
        );
        for content in &timeline.items {
            writeln!(out, "<li class=\"{}\">", item_classes)?;
            out.push_str("<div class=\"tl-item\">\n<div class=\"tl-item-content\">\n");
            out.push_str(content.trim_end());
            out.push_str("\n</div>\n</div>\n</li>\n");
        }
        out.push_str("</ol>\n</div>\n");
        Ok(out)
    }
}
