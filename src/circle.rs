// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle curve.

use core::f64::consts::TAU;

use crate::common::reverse_param;
use crate::{Curve, CurveParams, Ellipse, GapList, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle, traced counterclockwise (in y-up coordinates) from the point
/// at angle zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
    /// Reversal and sampling state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: CurveParams,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
            params: CurveParams::default(),
        }
    }

    /// The circumference, computed exactly.
    #[inline]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius.abs()
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl Curve for Circle {
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        *pt = self.center + self.radius * Vec2::from_angle(u * TAU);
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
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

impl From<Circle> for Ellipse {
    fn from(circle: Circle) -> Ellipse {
        let mut ellipse = Ellipse::new(circle.center, (circle.radius, circle.radius));
        ellipse.params = circle.params;
        ellipse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns() {
        let circle = Circle::new((1.0, 1.0), 2.0);
        assert!(circle.trace(0.0).is_near(Point::new(3.0, 1.0), 1e-12));
        assert!(circle.trace(0.25).is_near(Point::new(1.0, 3.0), 1e-12));
        assert!(circle.trace(0.5).is_near(Point::new(-1.0, 1.0), 1e-12));
    }

    #[test]
    fn closed_curve_has_no_gaps() {
        let circle = Circle::new((0.0, 0.0), 1.0);
        assert_eq!(circle.gap_count(), 0);
        assert!(!circle.is_gap_at(0.0));
    }

    #[test]
    fn reversed_runs_clockwise() {
        let mut circle = Circle::new((0.0, 0.0), 1.0);
        circle.reverse();
        assert!(circle.trace(0.25).is_near(Point::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn agrees_with_ellipse() {
        let circle = Circle::new((2.0, -1.0), 3.0);
        let ellipse = Ellipse::from(circle);
        for i in 0..20 {
            let u = i as f64 / 20.0;
            assert!(circle.trace(u).is_near(ellipse.trace(u), 1e-12));
        }
        assert!((circle.length() - circle.circumference()).abs() < 0.01);
    }
}
