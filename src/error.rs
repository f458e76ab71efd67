use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use nom::error::{ContextError, ErrorKind, FromExternalError, ParseError};
use thiserror::Error;

use crate::parsing::Span;

#[derive(Debug, Error, Diagnostic)]
#[error("{kind}")]
pub struct Vector2Error {
	/// Text that failed to parse.
	#[source_code]
	pub input: NamedSource,

	/// Offset in bytes of the error.
	#[label("{}", label.unwrap_or("here"))]
	pub span: SourceSpan,

	/// Label text for this span. Defaults to `"here"`.
	pub label: Option<&'static str>,

	/// Suggestion for fixing the input.
	#[help]
	pub help: Option<&'static str>,

	/// Specific error kind for this parser error.
	pub kind: Vector2ErrorKind,
}

impl Vector2Error {
	pub fn from_src_and_parse_error(
		name: impl AsRef<str>,
		source: &str,
		error: Vector2ParseError<Span<'_>>,
	) -> Self {
		Vector2Error {
			input: NamedSource::new(name, source.to_owned()),
			span: SourceSpan::new(
				SourceOffset::from(error.input.location_offset()),
				SourceOffset::from(error.len),
			),
			label: error.label,
			help: error.help,
			kind: if let Some(context) = error.context {
				Vector2ErrorKind::Context(context)
			} else {
				error.kind.unwrap_or(Vector2ErrorKind::Other)
			},
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq, Error, Diagnostic)]
pub enum Vector2ErrorKind {
	/// Something was left after the closing bracket.
	#[error("Unexpected input after the vector")]
	#[diagnostic(code(vector2::trailing_input))]
	TrailingInput,

	/// Generic parsing error. The given context string denotes the component
	/// that failed to parse.
	#[error("Expected {0}.")]
	#[diagnostic(code(vector2::context))]
	Context(&'static str),

	/// Generic unspecified error.
	#[error("An unspecified error occurred")]
	#[diagnostic(code(vector2::other))]
	Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector2ParseError<I> {
	pub input: I,
	pub len: usize,
	pub context: Option<&'static str>,
	pub label: Option<&'static str>,
	pub help: Option<&'static str>,
	pub kind: Option<Vector2ErrorKind>,
}

impl<I> Vector2ParseError<I> {
	pub fn trailing_input(input: I, len: usize) -> Self {
		Self {
			input,
			len,
			context: None,
			label: Some("after the closing bracket"),
			help: Some("a vector is written `[x; y]`, nothing may follow it"),
			kind: Some(Vector2ErrorKind::TrailingInput),
		}
	}
}

impl<I> ParseError<I> for Vector2ParseError<I> {
	fn from_error_kind(input: I, _kind: ErrorKind) -> Self {
		Self {
			input,
			len: 0,
			label: None,
			help: None,
			context: None,
			kind: None,
		}
	}

	fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
		other
	}
}

// Only reached through `map_res`, whose input was already recognized as a float.
impl<I, E> FromExternalError<I, E> for Vector2ParseError<I> {
	fn from_external_error(input: I, kind: ErrorKind, _e: E) -> Self {
		Self::from_error_kind(input, kind)
	}
}

impl<I> ContextError<I> for Vector2ParseError<I> {
	fn add_context(_input: I, ctx: &'static str, mut other: Self) -> Self {
		other.context = other.context.or(Some(ctx));
		other
	}
}
