//! Low-level nom parser functions for option values.
use crate::length::{Length, LengthUnit};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    character::complete::{char, space0},
    combinator::{map, map_res, opt, recognize, value},
    sequence::{pair, preceded},
};
use thiserror::Error;

/// Errors that can occur while parsing option values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()).parse(input)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Percent, tag("%")),
        value(LengthUnit::Em, tag_no_case("em")),
        value(LengthUnit::Ex, tag_no_case("ex")),
        value(LengthUnit::Px, tag_no_case("px")),
        value(LengthUnit::In, tag_no_case("in")),
        value(LengthUnit::Cm, tag_no_case("cm")),
        value(LengthUnit::Mm, tag_no_case("mm")),
        value(LengthUnit::Pt, tag_no_case("pt")),
        value(LengthUnit::Pc, tag_no_case("pc")),
    ))
    .parse(input)
}

/// Parses a number with an optional unit or `%` (e.g. "12px", "50%", "3").
pub fn parse_length_value(input: &str) -> IResult<&str, Length> {
    map(
        pair(parse_f32, opt(preceded(space0, parse_unit))),
        |(value, unit)| Length::new(value, unit.unwrap_or(LengthUnit::Unitless)),
    )
    .parse(input)
}

/// Runs a nom parser over the whole (trimmed) input.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: FnMut(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
