// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::{Add, Sub};

use crate::common::reverse_param;
use crate::{Curve, CurveParams, GapList, Point, Vec2};

/// A single line segment, traced from `p0` to `p1`.
///
/// A line has no gaps: although its ends are far apart, a line is usually
/// composed with something that picks up where it leaves off.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
    /// Reversal and sampling state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: CurveParams,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
            params: CurveParams::default(),
        }
    }

    /// The distance between the end points.
    #[inline]
    pub fn chord_length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// The midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

impl Curve for Line {
    #[inline]
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        *pt = self.p0.lerp(self.p1, u);
    }

    fn translate(&mut self, delta: Vec2) {
        self.p0 += delta;
        self.p1 += delta;
    }

    fn gaps(&self) -> GapList {
        GapList::new()
    }

    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut CurveParams {
        &mut self.params
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(mut self, v: Vec2) -> Line {
        self.translate(v);
        self
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(mut self, v: Vec2) -> Line {
        self.translate(-v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALMOST_ONE;

    #[test]
    fn trace_endpoints() {
        let line = Line::new((1.0, 1.0), (3.0, 5.0));
        assert_eq!(line.trace(0.0), Point::new(1.0, 1.0));
        assert_eq!(line.trace(0.5), Point::new(2.0, 3.0));
        assert_eq!(line.trace(0.5), line.midpoint());
    }

    #[test]
    fn reversed_starts_near_the_end() {
        let mut line = Line::new((0.0, 0.0), (10.0, 0.0));
        line.reverse();
        assert_eq!(line.trace(0.0), Point::new(10.0 * ALMOST_ONE, 0.0));
        assert_eq!(line.trace(0.5), Point::new(5.0, 0.0));
        assert!(line.trace(ALMOST_ONE).x < 1e-3);
    }

    #[test]
    fn translate_moves_both_ends() {
        let line = Line::new((0.0, 0.0), (1.0, 0.0)) + Vec2::new(2.0, 3.0);
        assert_eq!(line.p0, Point::new(2.0, 3.0));
        assert_eq!(line.p1, Point::new(3.0, 3.0));
        let back = line - Vec2::new(2.0, 3.0);
        assert_eq!(back.p0, Point::ORIGIN);
    }

    #[test]
    fn measured_length_approaches_chord() {
        let line = Line::new((0.0, 0.0), (6.0, 8.0));
        assert_eq!(line.chord_length(), 10.0);
        assert!((line.length() - line.chord_length()).abs() < 1e-3);
        assert_eq!(line.gap_count(), 0);
    }
}
