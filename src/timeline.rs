//! Timelines built from inline content or event files.
use crate::error::TessellaError;
use std::path::{Path, PathBuf};
use tessella_render_core::Timeline;
use tessella_source::EventFormat;
use tessella_style::{Length, ListStyle, class_option};
use tessella_timeline::{TimelineInput, TimelineOptions, build_timeline};

/// Builds a [`Timeline`].
///
/// Without an events file, the content holds the event data, a line of
/// three or more dashes, then the template. With an events file, the whole
/// content is the template. A template file replaces either template.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    content: String,
    events_file: Option<PathBuf>,
    template_file: Option<PathBuf>,
    options: TimelineOptions,
}

fn existing_path(kind: &str, path: &Path) -> Result<PathBuf, TessellaError> {
    if !path.exists() {
        return Err(TessellaError::Config(format!("'{}' path does not exist: {}", kind, path.display())));
    }
    Ok(path.to_path_buf())
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn with_events_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TessellaError> {
        self.events_file = Some(existing_path("events", path.as_ref())?);
        Ok(self)
    }

    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TessellaError> {
        self.template_file = Some(existing_path("template", path.as_ref())?);
        Ok(self)
    }

    pub fn with_options(mut self, options: TimelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_events_format(mut self, format: EventFormat) -> Self {
        self.options.events_format = format;
        self
    }

    /// Shows at most `max_items` events; 0 shows all.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.options.max_items = max_items;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.options.reversed = reversed;
        self
    }

    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Sets the timeline height; percentages are rejected.
    pub fn with_height(mut self, height: &str) -> Result<Self, TessellaError> {
        self.options.height = Some(Length::parse_absolute(height)?);
        Ok(self)
    }

    pub fn with_item_width(mut self, width: &str) -> Result<Self, TessellaError> {
        self.options.width_item = Some(Length::parse(width)?);
        Ok(self)
    }

    pub fn with_classes(mut self, classes: &str) -> Result<Self, TessellaError> {
        self.options.classes.extend(class_option(classes)?);
        Ok(self)
    }

    pub fn with_item_classes(mut self, classes: &str) -> Result<Self, TessellaError> {
        self.options.item_classes.extend(class_option(classes)?);
        Ok(self)
    }

    /// Reads the events and template, then renders every event.
    pub fn build(self) -> Result<Timeline, TessellaError> {
        let format = self.options.events_format;
        let mut input = match &self.events_file {
            Some(path) => TimelineInput::from_events_file(path, format, &self.content)?,
            None => TimelineInput::from_inline(&self.content, format)?,
        };
        if let Some(path) = &self.template_file {
            input = input.with_template_file(path)?;
        }
        let timeline = build_timeline(&input, &self.options)?;
        log::debug!("Built timeline with {} events", timeline.items.len());
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "- start: 2021-02-03\n  name: Launch\n- start: 2021-06-01 14:30\n  duration: 2h\n  name: Review\n---\n{{e.name}}: {{dtrange}}";

    #[test]
    fn test_build_inline_timeline() {
        let timeline = TimelineBuilder::new().with_content(CONTENT).build().unwrap();
        assert_eq!(
            timeline.items,
            vec![
                "Review: Tue 1st Jun 2021, 02:30 PM - 04:30 PM (UTC)",
                "Launch: Wed 3rd Feb 2021",
            ]
        );
    }

    #[test]
    fn test_option_setters() {
        let builder = TimelineBuilder::new()
            .with_height("200")
            .unwrap()
            .with_item_width("30%")
            .unwrap()
            .with_item_classes("Card")
            .unwrap();
        assert_eq!(builder.options.height.unwrap().to_css(), "200px");
        assert_eq!(builder.options.item_classes, vec!["card"]);
        assert!(TimelineBuilder::new().with_height("50%").is_err());
    }

    #[test]
    fn test_missing_files_are_reported() {
        let err = TimelineBuilder::new().with_events_file("/no/such/events.yaml").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: 'events' path does not exist: /no/such/events.yaml");
    }

    #[test]
    fn test_inline_content_without_template() {
        let err = TimelineBuilder::new().with_content("- start: 2021-02-03").build().unwrap_err();
        assert!(matches!(err, TessellaError::Timeline(tessella_timeline::TimelineError::EmptyTemplate)));
    }
}
