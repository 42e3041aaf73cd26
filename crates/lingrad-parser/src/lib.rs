//! Parser for CSS linear-gradient strings.
//!
//! Turns `linear-gradient(...)`, its vendor-prefixed forms and the legacy
//! `-webkit-gradient(linear, ...)` syntax into a [`GradientDescriptor`]: a start point, an end
//! point and index-aligned colors and locations, relative to a bounding box.
//!
//! Built on `nom` for the token grammar. Colors are passed through as written; validating them
//! is left to the renderer.

mod angle;
mod direction;
mod grammar;
mod legacy;
mod lexer;
mod stops;

pub use angle::{parse_angle, AngleUnit};
pub use direction::{calculate_direction, DirectionSyntax, Side, SideOrCorner};
pub use grammar::{parse, parse_function_call, parse_linear, FunctionCall, ParseOptions, Route};
pub use legacy::{rewrite_color_stop, transform_obsolete_color_stops};
pub use stops::{collect_color_stops, normalize_color_stops, parse_position, split_color_stop};

use lingrad_core::{GradientDescriptor, GradientError};

/// Parse a CSS gradient fitted to the unit square.
///
/// # Example
///
/// ```ignore
/// use lingrad_parser::parse_gradient_css;
///
/// let gradient = parse_gradient_css("linear-gradient(180deg, #ff008450 0%, #00cfff40 75%, #cc4cfa50 100%);")?;
/// assert_eq!(gradient.colors, ["#ff008450", "#00cfff40", "#cc4cfa50"]);
/// assert_eq!(gradient.locations, [0.0, 0.75, 1.0]);
/// ```
pub fn parse_gradient_css(text: &str) -> Result<GradientDescriptor, GradientError> {
    parse(text, &ParseOptions::default())
}

/// Parse a CSS gradient fitted to `options.bounds`.
pub fn parse_gradient_css_with(
    text: &str,
    options: &ParseOptions,
) -> Result<GradientDescriptor, GradientError> {
    parse(text, options)
}
