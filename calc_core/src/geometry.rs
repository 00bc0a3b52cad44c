//! # Member Geometry
//!
//! The engine never looks at a member's shape beyond its length, and never
//! builds geometry itself. Two narrow seams connect it to a modelling host:
//!
//! - [`MemberCurve`] - anything with a length in metres
//! - [`SectionSink`] - receives each accepted section so the host can
//!   build a solid along the member
//!
//! Both are trivial to stub in tests.

use serde::{Deserialize, Serialize};

/// A member centre line
pub trait MemberCurve {
    /// Length in metres
    fn length_m(&self) -> f64;
}

/// A bare span
impl MemberCurve for f64 {
    fn length_m(&self) -> f64 {
        *self
    }
}

/// Straight centre line between two points (metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StraightMember {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl StraightMember {
    pub fn new(start: [f64; 3], end: [f64; 3]) -> Self {
        Self { start, end }
    }
}

impl MemberCurve for StraightMember {
    fn length_m(&self) -> f64 {
        self.start
            .iter()
            .zip(self.end.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// How a member's length is given in problem files: either a scalar
/// `length_m` or a `start`/`end` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberAxis {
    Span { length_m: f64 },
    Line(StraightMember),
}

impl MemberCurve for MemberAxis {
    fn length_m(&self) -> f64 {
        match self {
            MemberAxis::Span { length_m } => *length_m,
            MemberAxis::Line(line) => line.length_m(),
        }
    }
}

/// Consumer of accepted sections
pub trait SectionSink {
    fn accept(&mut self, width_mm: f64, height_mm: f64, curve: &dyn MemberCurve);
}

impl<F> SectionSink for F
where
    F: FnMut(f64, f64, &dyn MemberCurve),
{
    fn accept(&mut self, width_mm: f64, height_mm: f64, curve: &dyn MemberCurve) {
        self(width_mm, height_mm, curve)
    }
}

/// Discards every section
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SectionSink for NullSink {
    fn accept(&mut self, _width_mm: f64, _height_mm: f64, _curve: &dyn MemberCurve) {}
}
