//! Gradient direction: classifying the first argument and fitting the gradient line to a box.
//!
//! Angles follow the CSS convention: `0` points up and values grow clockwise. The line always
//! passes through the center of the box and is long enough that the lines perpendicular to it
//! through its endpoints touch the box corners.

use std::f64::consts::{FRAC_PI_2, PI};

use lingrad_core::{Bounds, Direction};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::space1,
    combinator::{map, opt, value},
    sequence::{preceded, tuple},
    IResult,
};

use crate::angle::parse_angle;
use crate::lexer::{complete, percentage, spaced_pair, to_keyword};

/// One edge of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// A side or corner keyword such as `top`, `to right` or `left bottom`.
///
/// Without `to` the keyword names where the gradient starts, with `to` where it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideOrCorner {
    pub to: bool,
    pub first: Side,
    pub second: Option<Side>,
}

impl SideOrCorner {
    /// Angle of the gradient line for this keyword in the given box.
    ///
    /// Pairs that do not name a corner (`top bottom`, `left left`) fall back to straight down.
    pub fn angle(&self, bounds: &Bounds) -> f64 {
        let origin = |side: Side| if self.to { side.opposite() } else { side };
        let first = origin(self.first);

        let Some(second) = self.second.map(origin) else {
            return match first {
                Side::Bottom => 0.0,
                Side::Left => FRAC_PI_2,
                Side::Right => 3.0 * FRAC_PI_2,
                Side::Top => PI,
            };
        };

        let (vertical, horizontal) = match (first.is_vertical(), second.is_vertical()) {
            (true, false) => (first, second),
            (false, true) => (second, first),
            _ => return PI,
        };

        let corner = bounds.corner_angle();
        match (vertical, horizontal) {
            (Side::Top, Side::Right) => PI + corner,
            (Side::Top, Side::Left) => PI - corner,
            (Side::Bottom, Side::Left) => corner,
            (Side::Bottom, Side::Right) => 2.0 * PI - corner,
            _ => PI,
        }
    }
}

/// The shapes the first gradient argument can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectionSyntax {
    /// `to right`, `top left`, ...
    SideOrCorner(SideOrCorner),
    /// An angle token, already converted to radians.
    Angle(f64),
    /// `<left>% <top>%`
    PercentagePoint { left: f64, top: f64 },
    /// The first argument is a color stop; the gradient runs top to bottom.
    Absent,
}

impl DirectionSyntax {
    /// Classify a gradient's first argument. Keywords win over angles, angles over points.
    pub fn classify(arg: &str) -> DirectionSyntax {
        if let Some(keyword) = complete(side_or_corner, arg) {
            DirectionSyntax::SideOrCorner(keyword)
        } else if let Some(radians) = parse_angle(arg) {
            DirectionSyntax::Angle(radians)
        } else if let Some((left, top)) = complete(spaced_pair(percentage, percentage), arg) {
            DirectionSyntax::PercentagePoint { left, top }
        } else {
            DirectionSyntax::Absent
        }
    }

    /// Whether the argument was a direction, so color stops start at the next one.
    pub fn consumes_argument(&self) -> bool {
        !matches!(self, DirectionSyntax::Absent)
    }

    /// Angle of the gradient line in radians.
    ///
    /// Vendor-prefixed gradients measure explicit angles from East instead of North.
    pub fn radians(&self, bounds: &Bounds, prefixed: bool) -> f64 {
        match *self {
            DirectionSyntax::SideOrCorner(keyword) => keyword.angle(bounds),
            DirectionSyntax::Angle(radians) if prefixed => radians - FRAC_PI_2,
            DirectionSyntax::Angle(radians) => radians,
            DirectionSyntax::PercentagePoint { left, top } => {
                percentage_point_angle(left, top, bounds)
            }
            DirectionSyntax::Absent => PI,
        }
    }

    /// Fit the gradient line for this direction into `bounds`.
    pub fn resolve(&self, bounds: &Bounds, prefixed: bool) -> Direction {
        calculate_direction(self.radians(bounds, prefixed), bounds)
    }
}

fn side(input: &str) -> IResult<&str, Side> {
    alt((
        value(Side::Left, tag_no_case("left")),
        value(Side::Top, tag_no_case("top")),
        value(Side::Right, tag_no_case("right")),
        value(Side::Bottom, tag_no_case("bottom")),
    ))(input)
}

/// Parse `(to )?<side>( <side>)?`.
pub fn side_or_corner(input: &str) -> IResult<&str, SideOrCorner> {
    map(
        tuple((opt(to_keyword), side, opt(preceded(space1, side)))),
        |(to, first, second)| SideOrCorner {
            to: to.is_some(),
            first,
            second,
        },
    )(input)
}

fn percentage_point_angle(left: f64, top: f64, bounds: &Bounds) -> f64 {
    let ratio = (left / 100.0 * bounds.width) / (top / 100.0 * bounds.height);
    let ratio = if ratio.is_nan() { 1.0 } else { ratio };
    ratio.atan() + FRAC_PI_2
}

/// Place a gradient line at `radian` through the center of `bounds`.
pub fn calculate_direction(radian: f64, bounds: &Bounds) -> Direction {
    let (sin, cos) = radian.sin_cos();
    let line_length = (bounds.width * sin).abs() + (bounds.height * cos).abs();
    let half_line = line_length / 2.0;

    let center = bounds.center();
    let x0 = center.x + sin * half_line;
    let y0 = center.y - cos * half_line;

    Direction {
        x0,
        y0,
        x1: bounds.width - x0,
        y1: bounds.height - y0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_direction(dir: Direction, x0: f64, y0: f64, x1: f64, y1: f64) {
        assert_close(dir.x0, x0);
        assert_close(dir.y0, y0);
        assert_close(dir.x1, x1);
        assert_close(dir.y1, y1);
    }

    fn keyword_angle(text: &str, bounds: &Bounds) -> f64 {
        match DirectionSyntax::classify(text) {
            DirectionSyntax::SideOrCorner(keyword) => keyword.angle(bounds),
            other => panic!("{text:?} classified as {other:?}"),
        }
    }

    #[test]
    fn test_calculate_direction_cardinal() {
        let unit = Bounds::UNIT;
        assert_direction(calculate_direction(0.0, &unit), 0.5, 0.0, 0.5, 1.0);
        assert_direction(calculate_direction(FRAC_PI_2, &unit), 1.0, 0.5, 0.0, 0.5);
        assert_direction(calculate_direction(PI, &unit), 0.5, 1.0, 0.5, 0.0);
        assert_direction(calculate_direction(3.0 * FRAC_PI_2, &unit), 0.0, 0.5, 1.0, 0.5);
    }

    #[test]
    fn test_calculate_direction_diagonal_reaches_corners() {
        assert_direction(
            calculate_direction(FRAC_PI_4, &Bounds::UNIT),
            1.0,
            0.0,
            0.0,
            1.0,
        );
    }

    #[test]
    fn test_calculate_direction_wide_box() {
        let bounds = Bounds::new(200.0, 100.0);
        assert_direction(calculate_direction(FRAC_PI_2, &bounds), 200.0, 50.0, 0.0, 50.0);

        // sin = 1/sqrt(5), cos = 2/sqrt(5), half line = 200/sqrt(5)
        let dir = calculate_direction(bounds.corner_angle(), &bounds);
        assert_direction(dir, 140.0, -30.0, 60.0, 130.0);
    }

    #[test]
    fn test_classify_order() {
        assert!(matches!(
            DirectionSyntax::classify("to right"),
            DirectionSyntax::SideOrCorner(_)
        ));
        assert!(matches!(DirectionSyntax::classify("45deg"), DirectionSyntax::Angle(_)));
        assert_eq!(
            DirectionSyntax::classify("25% 75%"),
            DirectionSyntax::PercentagePoint {
                left: 25.0,
                top: 75.0
            }
        );
        assert_eq!(DirectionSyntax::classify("red"), DirectionSyntax::Absent);
        assert_eq!(DirectionSyntax::classify("red 10%"), DirectionSyntax::Absent);
        assert_eq!(DirectionSyntax::classify("to"), DirectionSyntax::Absent);
        assert_eq!(DirectionSyntax::classify("topmost"), DirectionSyntax::Absent);
        assert!(!DirectionSyntax::Absent.consumes_argument());
        assert!(DirectionSyntax::Angle(0.0).consumes_argument());
    }

    #[test]
    fn test_side_keywords() {
        let unit = Bounds::UNIT;
        assert_close(keyword_angle("bottom", &unit), 0.0);
        assert_close(keyword_angle("to top", &unit), 0.0);
        assert_close(keyword_angle("left", &unit), FRAC_PI_2);
        assert_close(keyword_angle("to right", &unit), FRAC_PI_2);
        assert_close(keyword_angle("right", &unit), 3.0 * FRAC_PI_2);
        assert_close(keyword_angle("to left", &unit), 3.0 * FRAC_PI_2);
        assert_close(keyword_angle("top", &unit), PI);
        assert_close(keyword_angle("to bottom", &unit), PI);
    }

    #[test]
    fn test_corner_keywords() {
        let bounds = Bounds::new(4.0, 3.0);
        let corner = bounds.corner_angle();

        for text in ["top right", "right top", "to bottom left", "to left bottom"] {
            assert_close(keyword_angle(text, &bounds), PI + corner);
        }
        for text in ["top left", "left top", "to bottom right", "to right bottom"] {
            assert_close(keyword_angle(text, &bounds), PI - corner);
        }
        for text in ["bottom left", "left bottom", "to top right", "to right top"] {
            assert_close(keyword_angle(text, &bounds), corner);
        }
        for text in ["bottom right", "right bottom", "to top left", "to left top"] {
            assert_close(keyword_angle(text, &bounds), 2.0 * PI - corner);
        }
    }

    #[test]
    fn test_keywords_ignore_case_and_spacing() {
        let unit = Bounds::UNIT;
        assert_close(keyword_angle("TO Right", &unit), FRAC_PI_2);
        assert_close(keyword_angle("to   top   left", &unit), 2.0 * PI - FRAC_PI_4);
    }

    #[test]
    fn test_non_corner_pairs_point_down() {
        let unit = Bounds::UNIT;
        assert_close(keyword_angle("top bottom", &unit), PI);
        assert_close(keyword_angle("to left right", &unit), PI);
        assert_close(keyword_angle("left left", &unit), PI);
    }

    #[test]
    fn test_percentage_point() {
        let unit = Bounds::UNIT;
        let syntax = DirectionSyntax::classify("50% 100%");
        assert_close(syntax.radians(&unit, false), 0.5f64.atan() + FRAC_PI_2);

        // Zero over zero falls back to a ratio of one.
        let origin = DirectionSyntax::classify("0% 0%");
        assert_close(origin.radians(&unit, false), 3.0 * FRAC_PI_4);

        // The box shape scales the ratio.
        let wide = Bounds::new(2.0, 1.0);
        assert_close(syntax.radians(&wide, false), 1.0f64.atan() + FRAC_PI_2);
    }

    #[test]
    fn test_prefix_rotates_angles_only() {
        let unit = Bounds::UNIT;
        let angle = DirectionSyntax::classify("90deg");
        assert_close(angle.radians(&unit, false), FRAC_PI_2);
        assert_close(angle.radians(&unit, true), 0.0);

        let keyword = DirectionSyntax::classify("to right");
        assert_close(keyword.radians(&unit, true), FRAC_PI_2);
        assert_close(DirectionSyntax::Absent.radians(&unit, true), PI);
    }

    #[test]
    fn test_resolve_default_points_down() {
        let dir = DirectionSyntax::Absent.resolve(&Bounds::UNIT, false);
        assert_direction(dir, 0.5, 1.0, 0.5, 0.0);
    }
}
