//! Low-level nom parser functions for configuration values.
//!
//! Lengths accept an optional unit suffix; a bare number is taken as points.

use crate::font::FontWeight;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map_res, opt, recognize, value};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use placemat_types::{POINTS_PER_INCH, POINTS_PER_MM};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f64> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(POINTS_PER_INCH, tag_no_case("in")),
        value(POINTS_PER_MM * 10.0, tag_no_case("cm")),
        value(POINTS_PER_MM, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "0.3in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f64> {
    let (input, number) = parse_f64(input)?;
    let (input, unit_multiplier) = opt(preceded(space0, parse_unit)).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
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

fn parse_weight_keyword(input: &str) -> IResult<&str, FontWeight> {
    alt((
        value(FontWeight::Regular, tag_no_case("regular")),
        value(FontWeight::Regular, tag_no_case("normal")),
        value(FontWeight::Bold, tag_no_case("bold")),
        value(FontWeight::Bold, tag_no_case("black")),
    ))
    .parse(input)
}

fn parse_weight_number(input: &str) -> IResult<&str, FontWeight> {
    map_res(digit1, |s: &str| {
        s.parse::<u16>().map(|n| FontWeight::from_bold(n >= 600))
    })
    .parse(input)
}

/// Parses a font weight keyword or CSS-style number (e.g., "bold", "400").
pub fn parse_weight(input: &str) -> IResult<&str, FontWeight> {
    alt((parse_weight_keyword, parse_weight_number)).parse(input)
}

/// Parses a font weight string (e.g., "bold", "400").
pub fn parse_font_weight(s: &str) -> Result<FontWeight, StyleParseError> {
    run_parser(parse_weight, s).map_err(|_| StyleParseError::InvalidValue {
        property: "font-weight".to_string(),
        value: s.to_string(),
    })
}
