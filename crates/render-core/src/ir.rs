//! The intermediate representation consumed by every renderer.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tessella_layout::Layout;
use tessella_style::{Align, CaptionPlacement, Length, ListStyle};

/// Viewport size a layout applies to. `Default` always applies; the others
/// override it inside a media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Default,
    Sm,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Breakpoints that can be set in addition to the default layout.
    pub const RESPONSIVE: [Breakpoint; 4] =
        [Breakpoint::Sm, Breakpoint::Lg, Breakpoint::Xl, Breakpoint::Xxl];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Default => "default",
            Breakpoint::Sm => "sm",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// The option name users set this breakpoint's layout with.
    pub fn option_name(self) -> String {
        match self {
            Breakpoint::Default => "layout".to_string(),
            other => format!("layout-{}", other.as_str()),
        }
    }

    /// CSS media query condition, `None` for the default layout.
    pub fn media_query(self) -> Option<&'static str> {
        match self {
            Breakpoint::Default => None,
            Breakpoint::Sm => Some("(max-width: 576px)"),
            Breakpoint::Lg => Some("(min-width: 992px)"),
            Breakpoint::Xl => Some("(min-width: 1200px)"),
            Breakpoint::Xxl => Some("(min-width: 1400px)"),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Breakpoint::Default),
            "sm" => Ok(Breakpoint::Sm),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            "xxl" => Ok(Breakpoint::Xxl),
            other => Err(format!("unknown breakpoint '{}'", other)),
        }
    }
}

/// Presentation options of a figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FigureOptions {
    /// Show each image's alt text as a subcaption.
    pub subcaptions: Option<CaptionPlacement>,
    pub width: Option<Length>,
    pub align: Option<Align>,
    /// Spacing between grid areas.
    pub gap: Option<Length>,
    /// Reference name of the figure.
    pub name: Option<String>,
    #[serde(rename = "class")]
    pub classes: Vec<String>,
    #[serde(rename = "class-grid")]
    pub grid_classes: Vec<String>,
    #[serde(rename = "class-area")]
    pub area_classes: Vec<String>,
}

/// An image placed in a grid area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureItem {
    pub area: char,
    pub uri: String,
    pub alt: Option<String>,
}

/// A figure of images arranged on one or more grid layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub items: Vec<FigureItem>,
    pub caption: Option<String>,
    pub layouts: BTreeMap<Breakpoint, Layout>,
    pub options: FigureOptions,
}

impl Figure {
    pub fn default_layout(&self) -> Option<&Layout> {
        self.layouts.get(&Breakpoint::Default)
    }

    /// The subcaption of `item`, if subcaptions are enabled and it has alt text.
    pub fn subcaption<'a>(&self, item: &'a FigureItem) -> Option<(CaptionPlacement, &'a str)> {
        let placement = self.options.subcaptions?;
        let alt = item.alt.as_deref().filter(|alt| !alt.is_empty())?;
        Some((placement, alt))
    }
}

/// A rendered list of timeline events, newest first unless reversed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    /// Height of the timeline (`--tl-height`).
    pub height: Option<Length>,
    /// Width of each item (`--tl-item-width`).
    pub item_width: Option<Length>,
    pub style: ListStyle,
    /// Extra classes of the event list.
    pub classes: Vec<String>,
    /// Extra classes of each event.
    pub item_classes: Vec<String>,
    /// Template output of each event, in display order.
    pub items: Vec<String>,
}

impl Timeline {
    /// CSS custom properties set on the container, in declaration order.
    pub fn custom_properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = Vec::new();
        if let Some(height) = &self.height {
            properties.push(("--tl-height", height.to_css()));
        }
        if let Some(width) = &self.item_width {
            properties.push(("--tl-item-width", width.to_css()));
        }
        properties
    }
}
