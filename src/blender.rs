// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-wise interpolation between two curves.

use crate::common::{remainder, reverse_param};
use crate::{Curve, CurveParams, GapList, Point, Vec2};

/// A curve in between two others.
///
/// At every parameter `u`, the blender traces both children at `u` and
/// returns the point `blend_amt` of the way from `a`'s point to `b`'s.
///
/// A blender reports no gaps, even when its children have some. Sampling
/// therefore joins the blended curve straight across any jump of `a` or
/// `b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Blender<A, B> {
    a: A,
    b: B,
    blend_amt: f64,
    params: CurveParams,
}

impl<A, B> Blender<A, B> {
    /// Blend `a` and `b` by `blend_amt`, sampling with `sample_count`
    /// points.
    ///
    /// A `blend_amt` of 0 traces `a` exactly and 1 traces `b` exactly.
    pub fn new(a: A, b: B, blend_amt: f64, sample_count: u32) -> Self {
        Blender {
            a,
            b,
            blend_amt,
            params: CurveParams::new(sample_count),
        }
    }

    /// The interpolation amount.
    #[inline]
    pub fn blend_amt(&self) -> f64 {
        self.blend_amt
    }

    /// Set the interpolation amount.
    #[inline]
    pub fn set_blend_amt(&mut self, blend_amt: f64) {
        self.blend_amt = blend_amt;
    }

    /// Nudge the interpolation amount, wrapping into `[0, 1)`.
    pub fn add_to_blend_amt(&mut self, delta: f64) {
        self.blend_amt = remainder(self.blend_amt + delta, 1.0);
    }

    /// The curve seen at a blend amount of 0.
    pub fn a(&self) -> &A {
        &self.a
    }

    /// The curve seen at a blend amount of 1.
    pub fn b(&self) -> &B {
        &self.b
    }

    /// Mutable access to the first curve.
    pub fn a_mut(&mut self) -> &mut A {
        &mut self.a
    }

    /// Mutable access to the second curve.
    pub fn b_mut(&mut self) -> &mut B {
        &mut self.b
    }

    /// Take the blender apart.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> Curve for Blender<A, B>
where
    A: Curve + Clone + 'static,
    B: Curve + Clone + 'static,
{
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        let mut from = Point::ORIGIN;
        let mut to = Point::ORIGIN;
        self.a.trace_unit(&mut from, u);
        self.b.trace_unit(&mut to, u);
        *pt = from.lerp(to, self.blend_amt);
    }

    fn translate(&mut self, delta: Vec2) {
        self.a.translate(delta);
        self.b.translate(delta);
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
    use crate::{Circle, Composite, Line, DEFAULT_SAMPLE_COUNT};

    fn circle_and_line() -> (Circle, Line) {
        (
            Circle::new((0.0, 0.0), 2.0),
            Line::new((-3.0, 1.0), (7.0, -2.0)),
        )
    }

    #[test]
    fn extremes_trace_children_exactly() {
        let (circle, line) = circle_and_line();
        let at_a = Blender::new(circle, line, 0.0, DEFAULT_SAMPLE_COUNT);
        let at_b = Blender::new(circle, line, 1.0, DEFAULT_SAMPLE_COUNT);
        for i in 0..40 {
            let u = i as f64 / 40.0;
            assert_eq!(at_a.trace(u), circle.trace(u));
            assert_eq!(at_b.trace(u), line.trace(u));
        }
    }

    #[test]
    fn halfway() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0));
        let b = Line::new((0.0, 2.0), (1.0, 2.0));
        let mid = Blender::new(a, b, 0.5, 10);
        assert_eq!(mid.trace(0.5), Point::new(0.5, 1.0));
        assert_eq!(mid.sample_count(), 10);
    }

    #[test]
    fn blend_amt_wraps() {
        let (circle, line) = circle_and_line();
        let mut blender = Blender::new(circle, line, 0.75, DEFAULT_SAMPLE_COUNT);
        blender.add_to_blend_amt(0.5);
        assert_eq!(blender.blend_amt(), 0.25);
        blender.add_to_blend_amt(-0.5);
        assert_eq!(blender.blend_amt(), 0.75);
        blender.set_blend_amt(1.0);
        assert_eq!(blender.blend_amt(), 1.0);
    }

    #[test]
    fn reports_no_gaps() {
        let seams = Composite::new(
            Line::new((0.0, 0.0), (1.0, 0.0)),
            Line::new((5.0, 0.0), (6.0, 0.0)),
        );
        let blender = Blender::new(seams.clone(), seams, 0.5, DEFAULT_SAMPLE_COUNT);
        assert_eq!(blender.gap_count(), 0);
    }

    #[test]
    fn reversed_blend() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0));
        let b = Line::new((0.0, 2.0), (1.0, 2.0));
        let mut mid = Blender::new(a, b, 0.5, 10);
        mid.reverse();
        assert_eq!(mid.trace(0.25), Point::new(0.75, 1.0));
        mid.translate(Vec2::new(1.0, 1.0));
        assert_eq!(mid.a().p0, Point::new(1.0, 1.0));
        mid.b_mut().p0 = Point::ORIGIN;
        let (_, b) = mid.into_parts();
        assert_eq!(b.p0, Point::ORIGIN);
    }
}
