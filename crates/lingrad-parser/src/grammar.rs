//! Grammar rules for gradient functions.
//!
//! ```text
//! gradient    := <anything> function <anything>
//! function    := identifier "(" arguments ")"
//! arguments   := argument ("," argument)*     ; commas inside parentheses do not split
//! argument    := direction | color-stop
//! ```

use log::debug;
use nom::{character::complete::char, sequence::terminated};

use lingrad_core::{
    Bounds, GradientDescriptor, GradientError, SyntaxError, UnsupportedError, VendorPrefix,
};

use crate::direction::DirectionSyntax;
use crate::legacy;
use crate::lexer::*;
use crate::stops::{collect_color_stops, normalize_color_stops};

/// Options for parsing a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// Box the gradient line is fitted into. Must have a positive width and height.
    pub bounds: Bounds,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            bounds: Bounds::UNIT,
        }
    }
}

impl ParseOptions {
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

/// A parsed `name(arguments)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall<'a> {
    pub prefix: Option<VendorPrefix>,
    /// Function name without its vendor prefix.
    pub name: &'a str,
    pub args: Arguments<'a>,
}

impl FunctionCall<'_> {
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    fn first_arg_is(&self, value: &str) -> bool {
        self.args
            .first()
            .is_some_and(|arg| arg.eq_ignore_ascii_case(value))
    }
}

/// Which path a function call takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `linear-gradient(...)`
    Linear,
    /// `gradient(linear, ...)`
    LegacyLinear,
    /// `radial-gradient(...)` or `gradient(radial, ...)`
    Radial,
    Unknown,
}

impl Route {
    pub fn of(call: &FunctionCall<'_>) -> Route {
        if call.is("linear-gradient") {
            Route::Linear
        } else if call.is("gradient") && call.first_arg_is("linear") {
            Route::LegacyLinear
        } else if call.is("radial-gradient") || (call.is("gradient") && call.first_arg_is("radial"))
        {
            Route::Radial
        } else {
            Route::Unknown
        }
    }
}

/// Find the first `(` directly preceded by an identifier; return the name and the text after `(`.
///
/// Each identifier run is looked at once, from the `(` that ends it.
fn function_head(input: &str) -> Option<(&str, &str)> {
    let mut from = 0;
    for (open, _) in input.match_indices('(') {
        let before = input[from..open].trim_end_matches(is_identifier_char);
        let start = from + before.len();
        if start < open {
            return Some((&input[start..open], &input[open + 1..]));
        }
        from = open + 1;
    }
    None
}

/// Locate the first `identifier(` and return the name and the enclosed argument text.
fn function_call(input: &str) -> Result<(&str, &str), SyntaxError> {
    let (name, rest) = function_head(input).ok_or_else(|| SyntaxError::InvalidFunction {
        input: input.to_string(),
    })?;

    let (_, args) = terminated(balanced, char(')'))(rest).map_err(|_| {
        SyntaxError::UnbalancedParentheses {
            input: input.to_string(),
        }
    })?;

    Ok((name, args))
}

/// Parse the outer function call of a gradient string.
pub fn parse_function_call(input: &str) -> Result<FunctionCall<'_>, SyntaxError> {
    let (name, args) = function_call(input)?;
    let (prefix, name) = VendorPrefix::split(name);

    Ok(FunctionCall {
        prefix,
        name,
        args: split_arguments(args),
    })
}

/// Parse a gradient string into a descriptor fitted to `options.bounds`.
pub fn parse(input: &str, options: &ParseOptions) -> Result<GradientDescriptor, GradientError> {
    let call = parse_function_call(input)?;
    let route = Route::of(&call);
    debug!(
        "gradient {}{} routed to {:?}",
        call.prefix.map_or("", |p| p.as_str()),
        call.name,
        route
    );

    let prefixed = call.prefix.is_some();
    match route {
        Route::Linear => parse_linear(call.args.as_slice(), &options.bounds, prefixed),
        Route::LegacyLinear => {
            let args = legacy::linear_arguments(call.args.as_slice())?;
            parse_linear(args.as_slice(), &options.bounds, prefixed)
        }
        Route::Radial => Err(UnsupportedError::Radial.into()),
        Route::Unknown => Err(UnsupportedError::UnknownMethod {
            method: format!("{}{}", call.prefix.map_or("", |p| p.as_str()), call.name),
        }
        .into()),
    }
}

/// Parse the arguments of a linear gradient.
///
/// `prefixed` selects the vendor-prefixed angle convention, where `0deg` points East.
pub fn parse_linear<S: AsRef<str>>(
    args: &[S],
    bounds: &Bounds,
    prefixed: bool,
) -> Result<GradientDescriptor, GradientError> {
    if let Some(index) = args.iter().position(|arg| arg.as_ref().is_empty()) {
        return Err(SyntaxError::EmptyArgument { index }.into());
    }

    let syntax = args
        .first()
        .map_or(DirectionSyntax::Absent, |arg| DirectionSyntax::classify(arg.as_ref()));
    let direction = syntax.resolve(bounds, prefixed);
    debug!("direction {syntax:?} resolved to {direction:?}");

    let first = usize::from(syntax.consumes_argument());
    let (colors, locations) = normalize_color_stops(collect_color_stops(args, first), first)?;

    Ok(GradientDescriptor {
        colors,
        locations,
        start: direction.start(),
        end: direction.end(),
    })
}
