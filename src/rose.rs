// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flower-like curve.

use core::f64::consts::TAU;

use crate::common::{map_range, reverse_param};
use crate::{Curve, CurveParams, Ellipse, GapList, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A flower-like pattern made from two sinusoidal motions.
///
/// A point circles the center with frequency `freq1` while its distance
/// from the center swings between zero and the full radius with frequency
/// `freq2`. With integer frequencies the curve closes up and has no gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rose {
    /// The center.
    pub center: Point,
    /// Half the width and half the height.
    pub radii: Vec2,
    /// Turns around the center per traversal.
    pub freq1: f64,
    /// Radial oscillations per traversal.
    pub freq2: f64,
    /// Reversal and sampling state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: CurveParams,
}

impl Rose {
    /// Create a new rose.
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>, freq1: f64, freq2: f64) -> Rose {
        Rose {
            center: center.into(),
            radii: radii.into(),
            freq1,
            freq2,
            params: CurveParams::default(),
        }
    }

    /// A circular rose with three turns and five petals.
    pub fn with_radius(center: impl Into<Point>, radius: f64) -> Rose {
        Rose::new(center, (radius, radius), 3.0, 5.0)
    }
}

impl Curve for Rose {
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        let outer = Ellipse::new(self.center, self.radii).point_at_angle(u * TAU * self.freq1);
        let reach = map_range((u * TAU * self.freq2).sin(), -1.0, 1.0, 0.0, 1.0);
        *pt = self.center.lerp(outer, reach);
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
