//! The obsolete `gradient(linear, <start>, <end>, <stops>...)` syntax.
//!
//! Stops are written as `from(C)`, `to(C)` and `color-stop(P, C)`. They are rewritten into
//! ordinary `<color> <percent>%` arguments so the linear path can handle them.

use std::borrow::Cow;

use lingrad_core::StopError;
use log::trace;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{map_res, opt, value},
    sequence::{pair, terminated},
    IResult,
};

use crate::lexer::{amount, balanced, complete};

/// Direction used for every legacy gradient.
///
/// The start and end points of the legacy syntax are ignored; legacy gradients always run
/// top to bottom.
pub const LEGACY_DIRECTION: &str = "to bottom";

/// Index of the first stop argument, after `linear`, the start point and the end point.
const FIRST_STOP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopFunction {
    From,
    To,
    ColorStop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount<'a> {
    text: &'a str,
    value: f64,
    percent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LegacyStop<'a> {
    function: StopFunction,
    amount: Option<Amount<'a>>,
    color: &'a str,
}

fn stop_function(input: &str) -> IResult<&str, StopFunction> {
    alt((
        value(StopFunction::ColorStop, tag_no_case("color-stop")),
        value(StopFunction::From, tag_no_case("from")),
        value(StopFunction::To, tag_no_case("to")),
    ))(input)
}

fn stop_amount(input: &str) -> IResult<&str, Amount<'_>> {
    map_res(
        terminated(pair(amount, opt(char('%'))), pair(char(','), multispace0)),
        |(text, percent): (&str, Option<char>)| {
            text.parse::<f64>().map(|value| Amount {
                text,
                value,
                percent: percent.is_some(),
            })
        },
    )(input)
}

/// Parse `from(C)`, `to(C)` or `color-stop(P, C)`. The amount is optional in the grammar.
fn legacy_stop(input: &str) -> IResult<&str, LegacyStop<'_>> {
    let (rest, function) = stop_function(input)?;
    let (rest, _) = char('(')(rest)?;
    let (rest, amount) = opt(stop_amount)(rest)?;
    let (rest, color) = balanced(rest)?;
    let (rest, _) = char(')')(rest)?;

    let color = color.trim();
    if color.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((
        rest,
        LegacyStop {
            function,
            amount,
            color,
        },
    ))
}

/// Rewrite one legacy stop into `<color> <percent>%`.
///
/// Arguments that are not legacy stops pass through. `color-stop(C)` without an amount has no
/// position to give `C`, so it is rejected; `index` is its argument index in the rewritten list.
pub fn rewrite_color_stop(arg: &str, index: usize) -> Result<Cow<'_, str>, StopError> {
    let Some(stop) = complete(legacy_stop, arg) else {
        return Ok(Cow::Borrowed(arg));
    };

    let rewritten = match (stop.function, stop.amount) {
        (StopFunction::From, _) => format!("{} 0%", stop.color),
        (StopFunction::To, _) => format!("{} 100%", stop.color),
        (StopFunction::ColorStop, Some(Amount { text, percent: true, .. })) => {
            format!("{} {}%", stop.color, text)
        }
        (StopFunction::ColorStop, Some(Amount { value, .. })) => {
            format!("{} {}%", stop.color, value * 100.0)
        }
        (StopFunction::ColorStop, None) => {
            return Err(StopError::MissingPosition {
                color: stop.color.to_string(),
                index,
            })
        }
    };

    trace!("rewrote legacy stop {arg:?} as {rewritten:?}");
    Ok(Cow::Owned(rewritten))
}

/// Rewrite every argument with [`rewrite_color_stop`]; `first_index` is the index of `args[0]`.
pub fn transform_obsolete_color_stops<'a, S: AsRef<str>>(
    args: &'a [S],
    first_index: usize,
) -> Result<Vec<Cow<'a, str>>, StopError> {
    args.iter()
        .enumerate()
        .map(|(offset, arg)| rewrite_color_stop(arg.as_ref(), first_index + offset))
        .collect()
}

/// Turn the arguments of `gradient(linear, ...)` into `linear-gradient` arguments.
pub fn linear_arguments<'a, S: AsRef<str>>(args: &'a [S]) -> Result<Vec<Cow<'a, str>>, StopError> {
    let stops = args.get(FIRST_STOP..).unwrap_or_default();

    let mut rewritten = Vec::with_capacity(stops.len() + 1);
    rewritten.push(Cow::Borrowed(LEGACY_DIRECTION));
    rewritten.extend(transform_obsolete_color_stops(stops, 1)?);
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_to() {
        assert_eq!(rewrite_color_stop("from(#fff)", 0).unwrap(), "#fff 0%");
        assert_eq!(rewrite_color_stop("to(#000)", 0).unwrap(), "#000 100%");
        assert_eq!(rewrite_color_stop("FROM(red)", 0).unwrap(), "red 0%");
    }

    #[test]
    fn test_color_stop_percent() {
        assert_eq!(rewrite_color_stop("color-stop(50%, red)", 0).unwrap(), "red 50%");
        assert_eq!(rewrite_color_stop("color-stop(12.5%,blue)", 0).unwrap(), "blue 12.5%");
    }

    #[test]
    fn test_color_stop_fraction() {
        assert_eq!(rewrite_color_stop("color-stop(0.25, red)", 0).unwrap(), "red 25%");
        assert_eq!(rewrite_color_stop("color-stop(1, red)", 0).unwrap(), "red 100%");
    }

    #[test]
    fn test_nested_colors() {
        assert_eq!(
            rewrite_color_stop("color-stop(0.5, rgba(0, 0, 0, 0.5))", 0).unwrap(),
            "rgba(0, 0, 0, 0.5) 50%"
        );
        assert_eq!(rewrite_color_stop("from(rgb(1, 2, 3))", 0).unwrap(), "rgb(1, 2, 3) 0%");
    }

    #[test]
    fn test_pass_through() {
        assert!(matches!(rewrite_color_stop("red 10%", 0).unwrap(), Cow::Borrowed("red 10%")));
        assert!(matches!(rewrite_color_stop("from()", 0).unwrap(), Cow::Borrowed("from()")));
        assert!(matches!(
            rewrite_color_stop("from(red) extra", 0).unwrap(),
            Cow::Borrowed("from(red) extra")
        ));
    }

    #[test]
    fn test_linear_arguments() {
        let args = [
            "linear",
            "left top",
            "left bottom",
            "from(#fff)",
            "color-stop(0.5, red)",
            "to(#000)",
        ];
        assert_eq!(
            linear_arguments(&args).unwrap(),
            vec!["to bottom", "#fff 0%", "red 50%", "#000 100%"]
        );
    }

    #[test]
    fn test_linear_arguments_without_stops() {
        assert_eq!(linear_arguments(&["linear"]).unwrap(), vec!["to bottom"]);
    }

    #[test]
    fn test_color_stop_without_amount_is_rejected() {
        assert_eq!(
            rewrite_color_stop("color-stop(green)", 2),
            Err(StopError::MissingPosition {
                color: "green".into(),
                index: 2
            })
        );

        let args = ["linear", "left top", "left bottom", "from(red)", "color-stop(rgb(0, 1, 2))"];
        assert_eq!(
            linear_arguments(&args),
            Err(StopError::MissingPosition {
                color: "rgb(0, 1, 2)".into(),
                index: 2
            })
        );
    }
}
