//! CSS length values as accepted by figure and timeline options.
use crate::parsers::{StyleParseError, parse_length_value, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Em,
    Ex,
    Px,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Percent,
    /// A bare number.
    Unitless,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Px => "px",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Percent => "%",
            LengthUnit::Unitless => "",
        }
    }
}

/// A length such as `10px`, `2.5em`, `50%` or `12`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parses a length with a unit, a percentage, or a bare number.
    pub fn parse(input: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_length_value, input)
    }

    /// Like [`Length::parse`], but rejects percentages.
    pub fn parse_absolute(input: &str) -> Result<Self, StyleParseError> {
        let length = Self::parse(input)?;
        if length.unit == LengthUnit::Percent {
            return Err(StyleParseError::InvalidValue {
                property: "length".to_string(),
                value: input.trim().to_string(),
            });
        }
        Ok(length)
    }

    /// The value as a CSS declaration value; bare numbers are pixels.
    pub fn to_css(&self) -> String {
        match self.unit {
            LengthUnit::Unitless => format!("{}px", self.value),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LengthVisitor;
        impl<'de> de::Visitor<'de> for LengthVisitor {
            type Value = Length;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a length like '10px', '50%' or a number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Length, E>
            where
                E: de::Error,
            {
                Length::parse(value).map_err(E::custom)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, LengthUnit::Unitless))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, LengthUnit::Unitless))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, LengthUnit::Unitless))
            }
        }
        deserializer.deserialize_any(LengthVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Length::parse("10px").unwrap(), Length::new(10.0, LengthUnit::Px));
        assert_eq!(Length::parse(" 2.5em ").unwrap(), Length::new(2.5, LengthUnit::Em));
        assert_eq!(Length::parse("50%").unwrap(), Length::new(50.0, LengthUnit::Percent));
        assert_eq!(Length::parse("12").unwrap(), Length::new(12.0, LengthUnit::Unitless));
        assert_eq!(Length::parse(".5in").unwrap(), Length::new(0.5, LengthUnit::In));
        assert_eq!(Length::parse("3 PT").unwrap(), Length::new(3.0, LengthUnit::Pt));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Length::parse("wide").is_err());
        assert!(Length::parse("10 parsecs").is_err());
        assert!(Length::parse("").is_err());
    }

    #[test]
    fn test_absolute_rejects_percent() {
        assert!(Length::parse_absolute("50%").is_err());
        assert!(Length::parse_absolute("300px").is_ok());
    }

    #[test]
    fn test_display_and_css() {
        assert_eq!(Length::parse("50%").unwrap().to_string(), "50%");
        assert_eq!(Length::parse("1.5em").unwrap().to_css(), "1.5em");
        assert_eq!(Length::parse("12").unwrap().to_css(), "12px");
    }

    #[test]
    fn test_deserialize_from_string_or_number() {
        let from_str: Length = serde_json::from_str(r#""4px""#).unwrap();
        assert_eq!(from_str, Length::new(4.0, LengthUnit::Px));
        let from_num: Length = serde_json::from_str("8").unwrap();
        assert_eq!(from_num, Length::new(8.0, LengthUnit::Unitless));
    }
}
