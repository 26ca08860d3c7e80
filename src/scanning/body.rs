//! Combinator parser for a delimited placeholder body.
//!
//! The scanner hands over the text between the two markers, already known
//! to start with a digit. The body grammar is
//! `<digits:index>[('+'|'-')<digits:width>][':'<any:specifier>]` and must
//! consume the whole slice; anything else is a malformed reference.

use nom::branch::alt;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{eof, map_res, opt, rest};
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::error::TemplateError;

#[derive(Debug, PartialEq, Eq)]
pub(super) struct Body<'t> {
    pub index: usize,
    pub width: usize,
    pub right_align: bool,
    pub spec: &'t str,
}

/// Parse one body slice. `offset` is the slice's byte offset within the
/// template, used to report the position of the first offending byte.
pub(super) fn parse(input: &str, offset: usize) -> Result<Body<'_>, TemplateError> {
    match body(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(error)) | Err(nom::Err::Failure(error)) => {
            Err(TemplateError::InvalidReference {
                position: offset + (input.len() - error.input.len()),
            })
        }
        // Complete-input combinators never request more data.
        Err(nom::Err::Incomplete(_)) => Err(TemplateError::InvalidReference { position: offset }),
    }
}

fn body(input: &str) -> IResult<&str, Body<'_>> {
    let (remaining, index) = decimal(input)?;
    let (remaining, alignment) = opt((one_of("+-"), decimal)).parse(remaining)?;
    let (remaining, spec) = alt((
        preceded(char(':'), rest).map(Some),
        eof.map(|_| None),
    ))
    .parse(remaining)?;

    let (sign, width) = alignment.unwrap_or(('-', 0));
    Ok((
        remaining,
        Body {
            index,
            width,
            right_align: sign == '+',
            spec: spec.unwrap_or(""),
        },
    ))
}

fn decimal(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse).parse(input)
}
