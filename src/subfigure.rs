//! Subfigures: images arranged on a grid of named areas.
use crate::error::TessellaError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tessella_layout::{LayoutError, area_label, parse_layout};
use tessella_render_core::{Breakpoint, Figure, FigureItem, FigureOptions};
use tessella_style::{Align, CaptionPlacement, Length, class_option};

/// Markdown image syntax: `![alt](uri)`.
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<uri>[^)\s]+)\)").expect("valid image regex"));

/// A paragraph break: a line that is empty or holds only whitespace.
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

const DEFAULT_LAYOUT: &str = "1";

/// Builds a [`Figure`] from images, an optional caption and grid layouts.
#[derive(Debug, Clone, Default)]
pub struct SubfigureBuilder {
    items: Vec<(String, Option<String>)>,
    caption: Option<String>,
    layouts: BTreeMap<Breakpoint, String>,
    options: FigureOptions,
}

impl SubfigureBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Reads figure content: paragraphs of Markdown images, plus at most one
    /// paragraph of plain text which becomes the caption.
    pub fn from_content(content: &str) -> Result<Self, TessellaError> {
        let mut builder = Self::new();
        let paragraphs = BLANK_LINE
            .split(content)
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty());

        for (index, paragraph) in paragraphs.enumerate() {
            let images: Vec<_> = IMAGE.captures_iter(paragraph).collect();
            if images.is_empty() {
                if builder.caption.is_some() {
                    return Err(TessellaError::Content("multiple captions".to_string()));
                }
                let caption = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
                builder.caption = Some(caption);
                continue;
            }
            let leftover = IMAGE.replace_all(paragraph, "");
            if !leftover.trim().is_empty() {
                return Err(TessellaError::Content(format!(
                    "must contain only images and a single caption, item {} is neither",
                    index + 1
                )));
            }
            for caps in images {
                let alt = Some(caps["alt"].to_string()).filter(|alt| !alt.is_empty());
                builder.items.push((caps["uri"].to_string(), alt));
            }
        }
        Ok(builder)
    }

    pub fn with_image(mut self, uri: &str, alt: Option<&str>) -> Self {
        self.items.push((uri.to_string(), alt.map(str::to_string)));
        self
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Sets the default layout: a column count or an area template.
    pub fn with_layout(self, spec: &str) -> Self {
        self.with_breakpoint_layout(Breakpoint::Default, spec)
    }

    /// Sets the layout used at a responsive breakpoint.
    pub fn with_breakpoint_layout(mut self, breakpoint: Breakpoint, spec: &str) -> Self {
        self.layouts.insert(breakpoint, spec.to_string());
        self
    }

    pub fn with_options(mut self, options: FigureOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_subcaptions(mut self, placement: CaptionPlacement) -> Self {
        self.options.subcaptions = Some(placement);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.options.align = Some(align);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.options.name = Some(name.to_string());
        self
    }

    /// Sets the figure width, e.g. `80%` or `400px`.
    pub fn with_width(mut self, width: &str) -> Result<Self, TessellaError> {
        self.options.width = Some(Length::parse(width)?);
        Ok(self)
    }

    /// Sets the spacing between grid areas.
    pub fn with_gap(mut self, gap: &str) -> Result<Self, TessellaError> {
        self.options.gap = Some(Length::parse(gap)?);
        Ok(self)
    }

    /// Adds classes to the figure; names are normalized to CSS identifiers.
    pub fn with_classes(mut self, classes: &str) -> Result<Self, TessellaError> {
        self.options.classes.extend(class_option(classes)?);
        Ok(self)
    }

    pub fn with_grid_classes(mut self, classes: &str) -> Result<Self, TessellaError> {
        self.options.grid_classes.extend(class_option(classes)?);
        Ok(self)
    }

    pub fn with_area_classes(mut self, classes: &str) -> Result<Self, TessellaError> {
        self.options.area_classes.extend(class_option(classes)?);
        Ok(self)
    }

    /// Validates every layout against the images and creates the figure.
    pub fn build(self) -> Result<Figure, TessellaError> {
        if self.items.is_empty() {
            return Err(TessellaError::Content("no images given".to_string()));
        }
        let count = self.items.len();

        let mut specs = self.layouts;
        specs.entry(Breakpoint::Default).or_insert_with(|| DEFAULT_LAYOUT.to_string());
        let layouts = specs
            .into_iter()
            .map(|(breakpoint, spec)| {
                parse_layout(&spec, count)
                    .map(|layout| (breakpoint, layout))
                    .map_err(|source| TessellaError::Layout { option: breakpoint.option_name(), source })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, (uri, alt))| {
                let area = area_label(index).ok_or(TessellaError::Layout {
                    option: Breakpoint::Default.option_name(),
                    source: LayoutError::TooManyItems(count),
                })?;
                Ok(FigureItem { area, uri, alt })
            })
            .collect::<Result<Vec<_>, TessellaError>>()?;

        log::debug!("Built subfigure with {} images and {} layouts", items.len(), layouts.len());
        Ok(Figure { items, caption: self.caption, layouts, options: self.options })
    }
}
