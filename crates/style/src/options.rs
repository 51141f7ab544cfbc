//! Keyword options shared by figures and timelines.
use crate::parsers::StyleParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn invalid(property: &str, value: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Horizontal alignment of a figure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(invalid("align", s)),
        }
    }
}

/// Where per-image captions are placed relative to the image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionPlacement {
    Above,
    Below,
}

impl FromStr for CaptionPlacement {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "above" => Ok(CaptionPlacement::Above),
            "below" => Ok(CaptionPlacement::Below),
            _ => Err(invalid("subcaptions", s)),
        }
    }
}

/// Built-in styling of an event list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    #[default]
    Default,
    None,
}

impl ListStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Default => "default",
            ListStyle::None => "none",
        }
    }
}

impl FromStr for ListStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ListStyle::Default),
            "none" => Ok(ListStyle::None),
            _ => Err(invalid("style", s)),
        }
    }
}

/// Splits a whitespace-separated class list and normalizes each name to a
/// valid CSS identifier: lowercase ASCII letters and digits joined by `-`.
pub fn class_option(input: &str) -> Result<Vec<String>, StyleParseError> {
    input
        .split_whitespace()
        .map(|raw| {
            let name = normalize_class(raw);
            if name.is_empty() {
                Err(invalid("class", raw))
            } else {
                Ok(name)
            }
        })
        .collect()
}

fn normalize_class(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    // Identifiers must start with a letter.
    words
        .join("-")
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("Center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("below".parse::<CaptionPlacement>().unwrap(), CaptionPlacement::Below);
        assert_eq!("none".parse::<ListStyle>().unwrap(), ListStyle::None);
        assert_eq!(
            "middle".parse::<Align>().unwrap_err(),
            StyleParseError::InvalidValue {
                property: "align".to_string(),
                value: "middle".to_string()
            }
        );
    }

    #[test]
    fn test_class_option_normalizes_names() {
        assert_eq!(
            class_option("Big  my_Figure 2col").unwrap(),
            vec!["big", "my-figure", "col"]
        );
        assert!(class_option("").unwrap().is_empty());
        assert!(class_option("%%").is_err());
    }
}
