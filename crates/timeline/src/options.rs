use crate::error::TimelineError;
use serde::Deserialize;
use tessella_source::EventFormat;
use tessella_style::{Length, LengthUnit, ListStyle, StyleParseError};

/// Options of a timeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TimelineOptions {
    /// Format of the event data.
    pub events_format: EventFormat,
    /// Maximum number of events shown; 0 shows all.
    pub max_items: usize,
    /// Show the oldest event first.
    pub reversed: bool,
    /// Height of the timeline; percentages are not allowed.
    pub height: Option<Length>,
    /// Width of each event.
    pub width_item: Option<Length>,
    pub style: ListStyle,
    #[serde(rename = "class")]
    pub classes: Vec<String>,
    #[serde(rename = "class-item")]
    pub item_classes: Vec<String>,
}

impl TimelineOptions {
    /// Checks constraints that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if let Some(height) = &self.height {
            if height.unit == LengthUnit::Percent {
                return Err(TimelineError::Option(StyleParseError::InvalidValue {
                    property: "height".to_string(),
                    value: height.to_string(),
                }));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_options() {
        let options: TimelineOptions = serde_json::from_str(
            r#"{"events-format": "csv", "max-items": 3, "reversed": true, "width-item": "40%", "class-item": ["card"]}"#,
        )
        .unwrap();
        assert_eq!(options.events_format, EventFormat::Csv);
        assert_eq!(options.max_items, 3);
        assert!(options.reversed);
        assert_eq!(options.width_item.unwrap().to_css(), "40%");
        assert_eq!(options.item_classes, vec!["card"]);
        assert_eq!(options.style, ListStyle::Default);
    }

    #[test]
    fn test_height_rejects_percentages() {
        let options = TimelineOptions {
            height: Some(Length::parse("50%").unwrap()),
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(TimelineError::Option(_))));
        let options = TimelineOptions {
            height: Some(Length::parse("300").unwrap()),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
}
