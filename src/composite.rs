// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concatenation of two curves.

use crate::common::reverse_param;
use crate::curve::reflect_gaps;
use crate::{Curve, CurveParams, GapList, Point, Vec2};

/// Two curves traced one after the other.
///
/// The first half of the parameter range, `[0, 0.5)`, traces `a` at twice
/// the speed, and `[0.5, 1)` traces `b`. The seam at `0.5` is always a gap,
/// since nothing guarantees that `b` starts where `a` ends.
///
/// Either child may itself be a `Composite`, so any number of curves can be
/// chained; use `Box<dyn Curve>` children to mix curve types at runtime.
///
/// ```
/// use curvetrace::{Composite, Curve, Line};
///
/// let a = Line::new((0.0, 0.0), (1.0, 1.0));
/// let b = Line::new((1.0, 1.0), (2.0, 2.0));
/// let both = Composite::new(a, b);
/// assert_eq!(both.gap(0), 0.5);
/// assert_eq!(both.gap_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Composite<A, B> {
    a: A,
    b: B,
    params: CurveParams,
}

impl<A: Curve, B: Curve> Composite<A, B> {
    /// Chain `a` and `b`.
    ///
    /// The composite's sample count is the sum of the children's, so each
    /// half is sampled about as densely as the child on its own.
    pub fn new(a: A, b: B) -> Self {
        let sample_count = a.sample_count().saturating_add(b.sample_count());
        Composite {
            a,
            b,
            params: CurveParams::new(sample_count),
        }
    }
}

impl<A, B> Composite<A, B> {
    /// The curve traced over `[0, 0.5)`.
    pub fn a(&self) -> &A {
        &self.a
    }

    /// The curve traced over `[0.5, 1)`.
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

    /// Take the composite apart.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> Curve for Composite<A, B>
where
    A: Curve + Clone + 'static,
    B: Curve + Clone + 'static,
{
    /// # Panics
    ///
    /// Panics if `u` is outside `[0, 1)`.
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        assert!(
            (0.0..1.0).contains(&u),
            "composite traced at {u}, outside [0, 1)"
        );
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        if u < 0.5 {
            self.a.trace_unit(pt, 2.0 * u);
        } else {
            self.b.trace_unit(pt, 2.0 * (u - 0.5));
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.a.translate(delta);
        self.b.translate(delta);
    }

    fn gaps(&self) -> GapList {
        let mut gaps: GapList = self.a.gaps().iter().map(|&g| 0.5 * g).collect();
        gaps.push(0.5);
        gaps.extend(
            self.b
                .gaps()
                .iter()
                .map(|&g| 0.5 + 0.5 * g)
                .filter(|&g| g > 0.5 && g < 1.0),
        );
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

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::*;
    use crate::{Arc, Circle, Line, Polyline, ALMOST_ONE, NO_GAP};

    fn two_lines() -> Composite<Line, Line> {
        Composite::new(
            Line::new((0.0, 0.0), (1.0, 1.0)),
            Line::new((1.0, 1.0), (2.0, 2.0)),
        )
    }

    #[test]
    fn routes_halves() {
        let both = two_lines();
        assert_eq!(both.trace(0.0), Point::new(0.0, 0.0));
        assert_eq!(both.trace(0.25), Point::new(0.5, 0.5));
        assert_eq!(both.trace(0.5), Point::new(1.0, 1.0));
        assert_eq!(both.trace(0.75), Point::new(1.5, 1.5));
    }

    #[test]
    fn seam_is_a_gap() {
        let both = Composite::new(
            Line::new((0.0, 0.0), (1.0, 0.0)),
            Line::new((10.0, 10.0), (11.0, 10.0)),
        );
        assert!(both.gap_count() >= 1);
        assert!(both.gaps().contains(&0.5));
        assert_eq!(two_lines().gap(0), 0.5);
        assert_eq!(two_lines().gap(1), NO_GAP);
    }

    #[test]
    fn children_gaps_are_scaled() {
        let arc = Arc::new((0.0, 0.0), (1.0, 1.0), 0.0, 1.0);
        let circle = Circle::new((0.0, 0.0), 1.0);
        let inner = Composite::new(circle, circle);
        let both = Composite::new(arc, inner);
        // The arc's gap at 0, the seam, and the inner seam at 0.5 + 0.25.
        assert_eq!(both.gaps().as_slice(), &[0.0, 0.5, 0.75]);
    }

    #[test]
    fn gap_at_b_origin_merges_with_seam() {
        let open = Polyline::new(alloc::vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let both = Composite::new(open.clone(), open);
        assert_eq!(both.gaps().as_slice(), &[0.0, 0.5]);
    }

    #[test]
    fn reversed_gaps() {
        let arc = Arc::new((0.0, 0.0), (1.0, 1.0), 0.0, 1.0);
        let inner = Composite::new(arc, Circle::new((0.0, 0.0), 1.0));
        let mut both = Composite::new(Circle::new((0.0, 0.0), 1.0), inner);
        assert_eq!(both.gaps().as_slice(), &[0.5, 0.75]);
        both.reverse();
        assert_eq!(both.gaps().as_slice(), &[0.25, 0.5]);
    }

    #[test]
    fn reversed_trace() {
        let mut both = two_lines();
        both.reverse();
        assert_eq!(both.trace(0.25), Point::new(1.5, 1.5));
        let start = both.trace(0.0);
        assert!(start.is_near(Point::new(2.0, 2.0), 1e-4));
        assert!((start.x - 2.0 * ALMOST_ONE).abs() < 1e-4);
    }

    #[test]
    fn sample_count_is_summed() {
        let both = Composite::new(
            Line::new((0.0, 0.0), (1.0, 0.0)).with_sample_count(30),
            Line::new((0.0, 0.0), (1.0, 0.0)).with_sample_count(70),
        );
        assert_eq!(both.sample_count(), 100);
    }

    #[test]
    fn translate_reaches_both_children() {
        let mut both = two_lines();
        both.translate(Vec2::new(1.0, 0.0));
        assert_eq!(both.a().p0, Point::new(1.0, 0.0));
        assert_eq!(both.b().p1, Point::new(3.0, 2.0));
        both.b_mut().p1 = Point::new(0.0, 0.0);
        let (_, b) = both.into_parts();
        assert_eq!(b.p1, Point::ORIGIN);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1)")]
    fn strict_trace_rejects_one() {
        let mut pt = Point::ORIGIN;
        two_lines().trace_unit(&mut pt, 1.0);
    }

    #[test]
    fn nested_boxed_chain() {
        let mut chain: Box<dyn Curve> = Box::new(Line::new((0.0, 0.0), (1.0, 0.0)));
        for i in 1..4 {
            let next = Line::new((i as f64 * 2.0, 0.0), (i as f64 * 2.0 + 1.0, 0.0));
            chain = Box::new(Composite::new(chain, Box::new(next) as Box<dyn Curve>));
        }
        // Three nested seams, all at distinct parameters.
        assert_eq!(chain.gap_count(), 3);
        assert!((chain.length() - 4.0).abs() < 1e-2);
    }
}
