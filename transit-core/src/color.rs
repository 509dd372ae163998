//! Green-to-red color scale for map markers.
//!
//! The scale domain is recomputed for every response, so colors are only
//! comparable within one query result.

use std::fmt;

/// Guards the normalization against a zero-width domain.
const EPSILON: f64 = 1e-12;

/// An opaque RGB color, rendered as CSS `rgb(r,g,b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Color of the low end of the scale, also used for degenerate domains.
pub const LOW: Rgb = Rgb::new(0, 200, 0);

/// Interpolate `value` over `[min, max]`: green when low, red when high.
pub fn interpolate(value: f64, min: f64, max: f64) -> Rgb {
    if max <= min {
        return LOW;
    }
    let t = ((value - min) / (max - min + EPSILON)).clamp(0.0, 1.0);
    Rgb::new(
        (255.0 * t).round() as u8,
        (200.0 * (1.0 - t)).round() as u8,
        0,
    )
}

/// Observed `[min, max]` range of a result's primary metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Domain over `values`, with the minimum floored at 0 and the maximum
    /// raised to at least 1.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(
            ValueDomain { min: 0.0, max: 1.0 },
            |domain, value| ValueDomain {
                min: domain.min.min(value),
                max: domain.max.max(value),
            },
        )
    }

    pub fn color(&self, value: f64) -> Rgb {
        interpolate(value, self.min, self.max)
    }
}
