// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ellipse arc.

use core::f64::consts::TAU;

use smallvec::smallvec;

use crate::common::reverse_param;
use crate::{Curve, CurveParams, Ellipse, GapList, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single elliptical arc.
///
/// Unless the arc sweeps a full turn, its two ends don't meet, so an arc
/// has a gap at `u = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The radii of the underlying axis-aligned ellipse.
    pub radii: Vec2,
    /// The start angle in radians.
    pub start_angle: f64,
    /// The angle between the start and end of the arc, in radians.
    ///
    /// Positive sweeps run counterclockwise in y-up coordinates.
    pub sweep_angle: f64,
    /// Reversal and sampling state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: CurveParams,
}

impl Arc {
    /// Create a new `Arc`.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        Self {
            center: center.into(),
            radii: radii.into(),
            start_angle,
            sweep_angle,
            params: CurveParams::default(),
        }
    }

    /// Whether the arc sweeps at least one full turn, joining its ends.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.sweep_angle.abs() >= TAU
    }

    /// The ellipse this arc lies on.
    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.radii)
    }
}

impl Curve for Arc {
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        *pt = self
            .ellipse()
            .point_at_angle(self.start_angle + self.sweep_angle * u);
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn gaps(&self) -> GapList {
        if self.is_closed() {
            GapList::new()
        } else {
            smallvec![0.0]
        }
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
    use alloc::vec::Vec;
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn half_circle() {
        let arc = Arc::new((0.0, 0.0), (1.0, 1.0), 0.0, PI);
        assert!(arc.trace(0.0).is_near(Point::new(1.0, 0.0), 1e-12));
        assert!(arc.trace(0.5).is_near(Point::new(0.0, 1.0), 1e-12));
        assert_eq!(arc.gaps().as_slice(), &[0.0]);
        assert!((arc.length() - PI).abs() < 1e-3);
    }

    #[test]
    fn full_turn_is_closed() {
        let arc = Arc::new((0.0, 0.0), (1.0, 2.0), FRAC_PI_2, -TAU);
        assert!(arc.is_closed());
        assert_eq!(arc.gap_count(), 0);
    }

    #[test]
    fn open_arc_does_not_wrap_when_drawn() {
        let arc = Arc::new((0.0, 0.0), (1.0, 1.0), 0.0, FRAC_PI_2);
        let mut shapes: Vec<Vec<Point>> = Vec::new();
        arc.draw_span(0.5, 0.5 - 1e-3, &mut shapes).unwrap();
        // Split at the wrap, and the gap at the origin is a run boundary.
        assert_eq!(shapes.len(), 2);
    }
}
