//! Token parsers for CSS gradient text.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, one_of, space1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, terminated, tuple},
    IResult,
};
use smallvec::SmallVec;

/// Argument list of a single gradient function. Most gradients have a handful of stops.
pub type Arguments<'a> = SmallVec<[&'a str; 8]>;

/// Characters of a CSS function name (letters, digits, underscore, hyphen).
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse a number: optional sign, optional integer part, optional fraction (`-1`, `.5`, `+2.25`).
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
        )),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse an unsigned decimal amount as written in legacy `color-stop(0.5, ...)`.
pub fn amount(input: &str) -> IResult<&str, &str> {
    alt((recognize(tuple((digit0, char('.'), digit1))), digit1))(input)
}

/// Parse the leading integer of a stop token, the way positions are read (`"33.3"` is `33`).
pub fn leading_integer(input: &str) -> IResult<&str, f64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<f64>()
    })(input)
}

/// Parse a percentage (`50%`), returning the number before the sign.
pub fn percentage(input: &str) -> IResult<&str, f64> {
    terminated(number, char('%'))(input)
}

/// Parse a pixel length (`12px`), returning the number before the unit.
pub fn pixels(input: &str) -> IResult<&str, f64> {
    terminated(number, tag_no_case("px"))(input)
}

/// Parse the `to ` that precedes a destination side or corner.
pub fn to_keyword(input: &str) -> IResult<&str, &str> {
    terminated(tag_no_case("to"), space1)(input)
}

/// Parse two whitespace-separated items.
pub fn spaced_pair<'a, O1, O2, F, G>(
    first: F,
    second: G,
) -> impl FnMut(&'a str) -> IResult<&'a str, (O1, O2)>
where
    F: FnMut(&'a str) -> IResult<&'a str, O1>,
    G: FnMut(&'a str) -> IResult<&'a str, O2>,
{
    map(tuple((first, space1, second)), |(a, _, b)| (a, b))
}

/// Take everything up to the `)` that closes an already-consumed `(`.
///
/// Returns the enclosed text and leaves the closing parenthesis unconsumed.
pub fn balanced(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Ok((&input[i..], &input[..i])),
            ')' => depth -= 1,
            _ => {}
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Split an argument list on commas that are not inside parentheses, trimming each piece.
pub fn split_arguments(input: &str) -> Arguments<'_> {
    let mut args = Arguments::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(input[start..].trim());
    args
}

/// Byte offset of the last whitespace that is not inside parentheses.
pub fn last_top_level_space(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut last = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => last = Some(i),
            _ => {}
        }
    }
    last
}

/// Run `parser` and require that it consumes the whole (trimmed) input.
pub fn complete<'a, O, F>(mut parser: F, input: &'a str) -> Option<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    match parser(input.trim()) {
        Ok(("", value)) => Some(value),
        _ => None,
    }
}
