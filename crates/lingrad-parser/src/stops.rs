//! Color stops: splitting `<color> <position>` arguments and normalizing positions.

use lingrad_core::{ColorStop, StopError};

use crate::lexer::{complete, last_top_level_space, leading_integer, percentage, pixels};

/// Split an argument into its color and explicit stop token.
///
/// A stop is the last top-level word when it is a percentage, a `px` length or a bare `0`.
/// Commas and spaces inside `rgba(...)` and friends are never split.
pub fn split_color_stop(arg: &str) -> (&str, Option<&str>) {
    if let Some(space) = last_top_level_space(arg) {
        let token = arg[space..].trim();
        let color = arg[..space].trim_end();
        if !color.is_empty() && is_stop_token(token) {
            return (color, Some(token));
        }
    }
    (arg, None)
}

fn is_stop_token(token: &str) -> bool {
    token == "0" || complete(percentage, token).is_some() || complete(pixels, token).is_some()
}

/// Build color stops from `args[first..]`.
///
/// The first and last stops default to `0%` and `100%` when they have no explicit position.
/// Interior stops without one keep `stop: None`.
pub fn collect_color_stops<S: AsRef<str>>(args: &[S], first: usize) -> Vec<ColorStop> {
    let last = args.len().saturating_sub(1);

    args.iter()
        .enumerate()
        .skip(first)
        .map(|(i, arg)| {
            let (color, stop) = split_color_stop(arg.as_ref());
            let stop = match stop {
                Some(token) => Some(token.to_string()),
                None if i == first => Some("0%".to_string()),
                None if i == last => Some("100%".to_string()),
                None => None,
            };
            ColorStop::new(color, stop)
        })
        .collect()
}

/// Turn a stop token into a fraction: `"25%"` is `0.25`.
///
/// Only the leading integer is read, so `"33.3%"` is `0.33` and `"10px"` is `0.1`.
pub fn parse_position(token: &str, index: usize) -> Result<f64, StopError> {
    let digits = token.strip_suffix('%').unwrap_or(token).trim_start();
    match leading_integer(digits) {
        Ok((_, percent)) => Ok(percent / 100.0),
        Err(_) => Err(StopError::InvalidPosition {
            token: token.to_string(),
            index,
        }),
    }
}

/// Split color stops into index-aligned colors and locations.
///
/// `first_index` is the argument index of the first stop, used in error messages.
pub fn normalize_color_stops(
    stops: Vec<ColorStop>,
    first_index: usize,
) -> Result<(Vec<String>, Vec<f64>), StopError> {
    let mut colors = Vec::with_capacity(stops.len());
    let mut locations = Vec::with_capacity(stops.len());

    for (offset, ColorStop { color, stop }) in stops.into_iter().enumerate() {
        let index = first_index + offset;
        let Some(token) = stop else {
            return Err(StopError::MissingPosition { color, index });
        };
        locations.push(parse_position(&token, index)?);
        colors.push(color);
    }

    Ok((colors, locations))
}
