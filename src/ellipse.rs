// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of axis-aligned ellipse curve.

use core::f64::consts::TAU;

use crate::common::reverse_param;
use crate::{Curve, CurveParams, GapList, Point, Vec2};

/// An axis-aligned ellipse.
///
/// Traced like a [`Circle`](crate::Circle) whose x and y coordinates are
/// scaled by `radii.x` and `radii.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// The center.
    pub center: Point,
    /// Half the width and half the height.
    pub radii: Vec2,
    /// Reversal and sampling state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: CurveParams,
}

impl Ellipse {
    /// Create a new ellipse with a given center and radii.
    #[inline]
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>) -> Ellipse {
        Ellipse {
            center: center.into(),
            radii: radii.into(),
            params: CurveParams::default(),
        }
    }

    /// The point on the ellipse at `angle` radians.
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        let dir = Vec2::from_angle(angle);
        self.center + Vec2::new(self.radii.x * dir.x, self.radii.y * dir.y)
    }
}

impl Curve for Ellipse {
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        *pt = self.point_at_angle(u * TAU);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        let ellipse = Ellipse::new((0.0, 0.0), (4.0, 1.0));
        assert!(ellipse.trace(0.0).is_near(Point::new(4.0, 0.0), 1e-12));
        assert!(ellipse.trace(0.25).is_near(Point::new(0.0, 1.0), 1e-12));
        assert!(ellipse.trace(0.75).is_near(Point::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn translate_moves_center() {
        let mut ellipse = Ellipse::new((0.0, 0.0), (2.0, 1.0));
        ellipse.translate(Vec2::new(-1.0, 5.0));
        assert!(ellipse.trace(0.0).is_near(Point::new(1.0, 5.0), 1e-12));
    }

    #[test]
    fn flat_ellipse_length() {
        // Degenerates to a segment traversed twice.
        let ellipse = Ellipse::new((0.0, 0.0), (1.0, 0.0)).with_sample_count(1000);
        assert!((ellipse.length() - 4.0).abs() < 1e-3);
    }
}
