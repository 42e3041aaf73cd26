//! CSS angle tokens.

use std::f64::consts::PI;

use nom::{branch::alt, bytes::complete::tag_no_case, combinator::value, IResult};

use crate::lexer::{complete, number};

/// Units accepted in an angle token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    /// Convert a value in this unit to radians.
    pub fn to_radians(self, amount: f64) -> f64 {
        match self {
            AngleUnit::Deg => PI * amount / 180.0,
            AngleUnit::Grad => PI / 200.0 * amount,
            AngleUnit::Rad => amount,
            AngleUnit::Turn => PI * 2.0 * amount,
        }
    }
}

fn unit(input: &str) -> IResult<&str, AngleUnit> {
    alt((
        value(AngleUnit::Deg, tag_no_case("deg")),
        value(AngleUnit::Grad, tag_no_case("grad")),
        value(AngleUnit::Rad, tag_no_case("rad")),
        value(AngleUnit::Turn, tag_no_case("turn")),
    ))(input)
}

/// Parse an angle token such as `45deg` or `0.25turn` into radians.
pub fn angle(input: &str) -> IResult<&str, f64> {
    let (rest, amount) = number(input)?;
    let (rest, unit) = unit(rest)?;
    Ok((rest, unit.to_radians(amount)))
}

/// Parse a whole argument as an angle, or `None` if it is something else.
pub fn parse_angle(token: &str) -> Option<f64> {
    complete(angle, token)
}
