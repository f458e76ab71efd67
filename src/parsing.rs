//! Parser for the `[x; y]` text form produced by `Display`.

use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::error::{context, ErrorKind, ParseError};
use nom::number::complete::recognize_float;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;
use nom_locate::LocatedSpan;

use crate::error::{Vector2Error, Vector2ParseError};
use crate::Vector2;

pub type Span<'a> = LocatedSpan<&'a str>;

/// Result type for the vector parsers.
pub type Resv<'a, T> = IResult<Span<'a>, T, Vector2ParseError<Span<'a>>>;

/// A float as `Display` writes it, including `NaN` and signed infinities.
fn component(input: Span) -> Resv<f64> {
	let non_finite = recognize(pair(
		opt(one_of("+-")),
		alt((tag_no_case("infinity"), tag_no_case("inf"), tag_no_case("nan"))),
	));

	preceded(
		multispace0,
		map_res(alt((recognize_float, non_finite)), |text: Span| {
			text.fragment().parse::<f64>()
		}),
	)(input)
}

fn token<'a>(c: char) -> impl FnMut(Span<'a>) -> Resv<'a, char> {
	preceded(multispace0, char(c))
}

/// Parses a `[x; y]` vector. Whitespace is allowed around every token.
pub fn vector2(input: Span) -> Resv<Vector2> {
	let (input, _) = context("'['", token('['))(input)?;
	let (input, x) = context("a number for x", component)(input)?;
	let (input, _) = context("';'", token(';'))(input)?;
	let (input, y) = context("a number for y", component)(input)?;
	let (input, _) = context("']'", token(']'))(input)?;

	Ok((input, Vector2::new(x, y)))
}

/// Parses a whole string as a single vector.
///
/// `name` is only used to label the source in error reports.
///
/// # Errors
///
/// This function will return an error if `source` isn't exactly one `[x; y]` vector,
/// optionally surrounded by whitespace.
pub fn parse_vector2(name: impl AsRef<str>, source: &str) -> Result<Vector2, Vector2Error> {
	let result = terminated(vector2, multispace0)(Span::new(source)).and_then(|(rest, vector)| {
		if rest.fragment().is_empty() {
			Ok(vector)
		} else {
			Err(nom::Err::Failure(Vector2ParseError::trailing_input(
				rest,
				rest.fragment().len(),
			)))
		}
	});

	result.map_err(|e| match e {
		nom::Err::Error(e) | nom::Err::Failure(e) => {
			Vector2Error::from_src_and_parse_error(name, source, e)
		}
		// complete parsers never ask for more input
		nom::Err::Incomplete(_) => Vector2Error::from_src_and_parse_error(
			name,
			source,
			Vector2ParseError::from_error_kind(Span::new(source), ErrorKind::Eof),
		),
	})
}

impl FromStr for Vector2 {
	type Err = Vector2Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_vector2("input", s)
	}
}
