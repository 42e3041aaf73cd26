//! Core value types for gradient geometry.

use glam::DVec2;

/// The rectangle a gradient line is fitted into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// The unit square used by the default entry point.
    pub const UNIT: Bounds = Bounds { width: 1.0, height: 1.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the box.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Angle at the center between the horizontal axis and the top-right corner.
    pub fn corner_angle(&self) -> f64 {
        ((self.width * 0.5) / (self.diagonal() * 0.5)).acos()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Raw endpoints of a gradient line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Direction {
    pub fn start(&self) -> DVec2 {
        DVec2::new(self.x0, self.y0)
    }

    pub fn end(&self) -> DVec2 {
        DVec2::new(self.x1, self.y1)
    }

    /// Distance between the two endpoints.
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

/// A color paired with the stop token written next to it, if any.
///
/// `stop` holds the raw token (`"25%"`, `"10px"`, `"0"`), not a normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStop {
    pub color: String,
    pub stop: Option<String>,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, stop: Option<String>) -> Self {
        Self {
            color: color.into(),
            stop,
        }
    }
}

/// The parsed gradient, ready to hand to a renderer.
///
/// `colors` and `locations` are index-aligned. Locations are taken as written: they are
/// not sorted or clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientDescriptor {
    pub colors: Vec<String>,
    pub locations: Vec<f64>,
    pub start: DVec2,
    pub end: DVec2,
}

impl GradientDescriptor {
    /// Iterate `(color, location)` pairs in stop order.
    pub fn stops(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.colors
            .iter()
            .map(String::as_str)
            .zip(self.locations.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Vendor prefix on a gradient function name, e.g. `-webkit-linear-gradient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VendorPrefix {
    Webkit,
    Moz,
    O,
    Ms,
}

impl VendorPrefix {
    pub const ALL: [VendorPrefix; 4] = [
        VendorPrefix::Webkit,
        VendorPrefix::Moz,
        VendorPrefix::O,
        VendorPrefix::Ms,
    ];

    /// Split a function name into its vendor prefix and the bare name.
    pub fn split(name: &str) -> (Option<VendorPrefix>, &str) {
        for prefix in Self::ALL {
            let text = prefix.as_str();
            let head = name.get(..text.len());
            if name.len() > text.len() && head.is_some_and(|h| h.eq_ignore_ascii_case(text)) {
                return (Some(prefix), &name[text.len()..]);
            }
        }
        (None, name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorPrefix::Webkit => "-webkit-",
            VendorPrefix::Moz => "-moz-",
            VendorPrefix::O => "-o-",
            VendorPrefix::Ms => "-ms-",
        }
    }
}
