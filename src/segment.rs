// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A window onto part of another curve.

use smallvec::smallvec;

use crate::common::remainder;
use crate::curve::reflect_gaps;
use crate::{Curve, CurveParams, GapList, Point, Vec2};

/// The part of a parent curve between the parameters `u1` and `u2`.
///
/// The segment's own parameter range `[0, 1)` maps linearly onto the
/// parent's `[u1, u2)`. If `u1 > u2` the window wraps past the parent's
/// parameter origin, so a segment of a closed curve can straddle its start.
///
/// The segment owns its parent. Changes made through
/// [`parent_mut`](Segment::parent_mut) are seen by subsequent traces; clone
/// the parent first if an independent copy is needed.
///
/// ```
/// use curvetrace::{Circle, Curve, Segment};
///
/// let circle = Circle::new((0.0, 0.0), 1.0);
/// let top = Segment::new(circle, 0.0, 0.5);
/// assert!(top.trace(0.5).is_near(circle.trace(0.25), 1e-12));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<C> {
    parent: C,
    u1: f64,
    u2: f64,
    params: CurveParams,
}

impl<C: Curve> Segment<C> {
    /// The window of `parent` from `u1` to `u2`.
    ///
    /// Both bounds are wrapped into `[0, 1)`. The segment starts out with
    /// the parent's sample count.
    pub fn new(parent: C, u1: f64, u2: f64) -> Self {
        let params = CurveParams::new(parent.sample_count());
        Segment {
            parent,
            u1: remainder(u1, 1.0),
            u2: remainder(u2, 1.0),
            params,
        }
    }

    /// The point of the parent where the segment starts.
    pub fn start_point(&self) -> Point {
        self.parent.trace(self.u1)
    }

    /// The point of the parent where the segment ends.
    pub fn end_point(&self) -> Point {
        self.parent.trace(self.u2)
    }
}

impl<C> Segment<C> {
    /// The parent parameter where the segment starts.
    #[inline]
    pub fn u1(&self) -> f64 {
        self.u1
    }

    /// The parent parameter where the segment ends.
    #[inline]
    pub fn u2(&self) -> f64 {
        self.u2
    }

    /// Move the start of the window, wrapping into `[0, 1)`.
    pub fn set_u1(&mut self, u1: f64) {
        self.u1 = remainder(u1, 1.0);
    }

    /// Move the end of the window, wrapping into `[0, 1)`.
    pub fn set_u2(&mut self, u2: f64) {
        self.u2 = remainder(u2, 1.0);
    }

    /// Slide the whole window along the parent by `du`.
    pub fn slide(&mut self, du: f64) {
        self.u1 = remainder(self.u1 + du, 1.0);
        self.u2 = remainder(self.u2 + du, 1.0);
    }

    /// The width of the window in the parent's parameter space.
    #[inline]
    pub fn span(&self) -> f64 {
        remainder(self.u2 - self.u1, 1.0)
    }

    /// The curve this segment is a window onto.
    pub fn parent(&self) -> &C {
        &self.parent
    }

    /// Mutable access to the parent curve.
    pub fn parent_mut(&mut self) -> &mut C {
        &mut self.parent
    }

    /// Give up the window and return the parent.
    pub fn into_parent(self) -> C {
        self.parent
    }
}

impl<C: Curve + Clone + 'static> Curve for Segment<C> {
    /// # Panics
    ///
    /// Panics if `u` is outside `[0, 1)`.
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        assert!(
            (0.0..1.0).contains(&u),
            "segment traced at {u}, outside [0, 1)"
        );
        let span = self.span();
        let v = if self.params.reversed {
            remainder(self.u2 - span * u, 1.0)
        } else {
            remainder(self.u1 + span * u, 1.0)
        };
        self.parent.trace_unit(pt, v);
    }

    /// Translate the parent's geometry.
    ///
    /// To move the window along the parent instead, use
    /// [`slide`](Segment::slide).
    fn translate(&mut self, delta: Vec2) {
        self.parent.translate(delta);
    }

    fn gaps(&self) -> GapList {
        if self.u1 == self.u2 {
            return smallvec![0.0];
        }
        let span = self.span();
        let mut gaps: GapList = self
            .parent
            .gaps()
            .iter()
            .map(|&g| remainder(g - self.u1, 1.0))
            .filter(|&d| 0.0 < d && d < span)
            .map(|d| d / span)
            .collect();
        gaps.sort_unstable_by(f64::total_cmp);
        if self.params.reversed {
            reflect_gaps(&mut gaps);
        }
        gaps
    }

    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut CurveParams {
        &mut self.params
    }
}
