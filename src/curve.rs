// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trait shared by every curve.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;

use crate::common::remainder;
use crate::error::check_span;
use crate::sampling;
use crate::{CurveError, Point, Polyline, Vec2, DEFAULT_SAMPLE_COUNT, GAP_EPSILON, NO_GAP};

/// An ascending list of gap parameters.
///
/// Most curves have at most a handful of gaps, so these stay inline.
pub type GapList = SmallVec<[f64; 4]>;

/// The state every curve carries besides its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Whether the curve is traced from its end back to its start.
    pub reversed: bool,
    /// The number of samples used to measure or draw the whole curve.
    pub sample_count: u32,
}

impl CurveParams {
    /// Parameters for a forward curve with the given sample count.
    #[inline]
    pub const fn new(sample_count: u32) -> CurveParams {
        CurveParams {
            reversed: false,
            sample_count,
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams::new(DEFAULT_SAMPLE_COUNT)
    }
}

/// A consumer of sampled curve geometry, such as a rendering backend.
///
/// Each continuous run of samples is delivered as one shape. A curve with
/// gaps is drawn as several shapes, so a sink that connects the vertices of
/// a shape never connects the two sides of a gap.
pub trait CurveSink {
    /// Start a new shape.
    fn begin_shape(&mut self);

    /// Add a vertex to the current shape.
    fn vertex(&mut self, pt: Point);

    /// Finish the current shape.
    fn end_shape(&mut self);
}

/// Collects each shape as its own list of points.
impl CurveSink for Vec<Vec<Point>> {
    fn begin_shape(&mut self) {
        self.push(Vec::new());
    }

    fn vertex(&mut self, pt: Point) {
        match self.last_mut() {
            Some(shape) => shape.push(pt),
            None => self.push(alloc::vec![pt]),
        }
    }

    fn end_shape(&mut self) {}
}

/// Cloning into a box, so that `Box<dyn Curve>` can be cloned.
///
/// This is implemented for every `Curve + Clone` type and shouldn't need to
/// be implemented by hand.
pub trait CurveClone {
    /// Clone `self` into a new boxed curve.
    fn clone_box(&self) -> Box<dyn Curve>;
}

impl<T: Curve + Clone + 'static> CurveClone for T {
    fn clone_box(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Curve> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// A curve parametrized over `[0, 1)`.
///
/// Implementors provide [`trace_unit`](Curve::trace_unit), which is only
/// ever called with `u` in `[0, 1)`, along with [`translate`], [`gaps`] and
/// access to their [`CurveParams`]. Everything else, including the gap-aware
/// sampling used by [`length`](Curve::length) and [`draw`](Curve::draw), is
/// built on top of those.
///
/// [`translate`]: Curve::translate
/// [`gaps`]: Curve::gaps
pub trait Curve: CurveClone + Debug {
    /// Evaluate the curve at `u` and store the result in `pt`.
    ///
    /// `u` is expected to lie in `[0, 1)`. Leaf curves accept anything, but
    /// combinators treat other values as a contract violation and panic;
    /// use [`trace`](Curve::trace) or [`trace_into`](Curve::trace_into) to
    /// evaluate at an arbitrary parameter.
    ///
    /// Implementations must honor [`is_reversed`](Curve::is_reversed).
    fn trace_unit(&self, pt: &mut Point, u: f64);

    /// Shift all of the curve's geometry by `delta`.
    fn translate(&mut self, delta: Vec2);

    /// The parameters at which the curve is discontinuous, in ascending
    /// order, each in `[0, 1)`.
    fn gaps(&self) -> GapList;

    /// The curve's reversal flag and sample count.
    fn params(&self) -> &CurveParams;

    /// Mutable access to the curve's reversal flag and sample count.
    fn params_mut(&mut self) -> &mut CurveParams;

    /// Evaluate the curve at `u`, wrapped into `[0, 1)`, and store the
    /// result in `pt`.
    #[inline]
    fn trace_into(&self, pt: &mut Point, u: f64) {
        self.trace_unit(pt, remainder(u, 1.0));
    }

    /// Evaluate the curve at `u`, wrapped into `[0, 1)`.
    ///
    /// ```
    /// use curvetrace::{Curve, Line, Point};
    ///
    /// let line = Line::new((0.0, 0.0), (4.0, 0.0));
    /// assert_eq!(line.trace(0.25), Point::new(1.0, 0.0));
    /// assert_eq!(line.trace(1.25), Point::new(1.0, 0.0));
    /// assert_eq!(line.trace(-0.75), Point::new(1.0, 0.0));
    /// ```
    #[inline]
    fn trace(&self, u: f64) -> Point {
        let mut pt = Point::ORIGIN;
        self.trace_into(&mut pt, u);
        pt
    }

    /// Flip the direction in which the curve is traced.
    ///
    /// The geometry is untouched; subsequent traces see `1 - u`.
    fn reverse(&mut self) {
        let params = self.params_mut();
        params.reversed = !params.reversed;
    }

    /// Whether the curve is traced in reverse.
    #[inline]
    fn is_reversed(&self) -> bool {
        self.params().reversed
    }

    /// The number of samples used to measure or draw the whole curve.
    #[inline]
    fn sample_count(&self) -> u32 {
        self.params().sample_count
    }

    /// Set the number of samples used to measure or draw the whole curve.
    #[inline]
    fn set_sample_count(&mut self, sample_count: u32) {
        self.params_mut().sample_count = sample_count;
    }

    /// Builder-style [`set_sample_count`](Curve::set_sample_count).
    #[must_use]
    fn with_sample_count(mut self, sample_count: u32) -> Self
    where
        Self: Sized,
    {
        self.set_sample_count(sample_count);
        self
    }

    /// The number of gaps.
    #[inline]
    fn gap_count(&self) -> usize {
        self.gaps().len()
    }

    /// The `i`th gap, or [`NO_GAP`] if there are not that many gaps.
    fn gap(&self, i: usize) -> f64 {
        self.gaps().get(i).copied().unwrap_or(NO_GAP)
    }

    /// Whether there is a gap exactly at `u`.
    ///
    /// Parameters 0 and 1 denote the same place on the curve.
    fn is_gap_at(&self, u: f64) -> bool {
        let u = if u == 1.0 { 0.0 } else { u };
        self.gaps().iter().any(|&gap| gap == u)
    }

    /// Whether there is a gap strictly between `u1` and `u2`.
    fn is_gap_between(&self, u1: f64, u2: f64) -> bool {
        self.gaps().iter().any(|&gap| u1 < gap && gap < u2)
    }

    /// The slope `dy / dx` of the curve at `u`, by finite difference.
    fn slope(&self, u: f64) -> f64 {
        let u = remainder(u, 1.0);
        let here = self.trace(u);
        if u >= GAP_EPSILON {
            self.trace(u - GAP_EPSILON).slope(here)
        } else {
            self.trace(u + GAP_EPSILON).slope(here)
        }
    }

    /// The continuous runs of parameter space between `u1` and `u2`.
    ///
    /// See [`sampling::continuous_spans`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SpanOutOfRange`] if either bound is outside
    /// `[0, 1]`.
    fn continuous_spans(&self, u1: f64, u2: f64) -> Result<Vec<Range<f64>>, CurveError> {
        check_span(u1, u2)?;
        Ok(sampling::continuous_spans(&self.gaps(), u1, u2))
    }

    /// The approximate arc length of the whole curve.
    ///
    /// Samples are never connected across a gap.
    fn length(&self) -> f64 {
        sampling::measure(self, 0.0, 1.0)
    }

    /// The approximate arc length of the span from `u1` to `u2`.
    ///
    /// The span wraps past the parameter origin if `u1 > u2`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SpanOutOfRange`] if either bound is outside
    /// `[0, 1]`.
    fn span_length(&self, u1: f64, u2: f64) -> Result<f64, CurveError> {
        check_span(u1, u2)?;
        Ok(sampling::measure(self, u1, u2))
    }

    /// Draw the whole curve into `sink`.
    fn draw<S: CurveSink + ?Sized>(&self, sink: &mut S)
    where
        Self: Sized,
    {
        sampling::draw(self, 0.0, 1.0, sink);
    }

    /// Draw the span from `u1` to `u2` into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SpanOutOfRange`] if either bound is outside
    /// `[0, 1]`.
    fn draw_span<S: CurveSink + ?Sized>(
        &self,
        u1: f64,
        u2: f64,
        sink: &mut S,
    ) -> Result<(), CurveError>
    where
        Self: Sized,
    {
        check_span(u1, u2)?;
        sampling::draw(self, u1, u2, sink);
        Ok(())
    }

    /// The sampled points of the span from `u1` to `u2`, all runs
    /// concatenated.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SpanOutOfRange`] if either bound is outside
    /// `[0, 1]`.
    fn span_points(&self, u1: f64, u2: f64) -> Result<Vec<Point>, CurveError> {
        check_span(u1, u2)?;
        let mut pts = Vec::new();
        for span in sampling::continuous_spans(&self.gaps(), u1, u2) {
            pts.extend(sampling::RunSamples::new(self, span));
        }
        Ok(pts)
    }

    /// Snapshot the span from `u1` to `u2` as a [`Polyline`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SpanOutOfRange`] if either bound is outside
    /// `[0, 1]`.
    fn to_segment_polyline(&self, u1: f64, u2: f64) -> Result<Polyline, CurveError> {
        let pts = self.span_points(u1, u2)?;
        Ok(Polyline::new(pts).with_sample_count(self.sample_count()))
    }

    /// Snapshot the curve as a [`Polyline`] with [`sample_count`] vertices.
    ///
    /// [`sample_count`]: Curve::sample_count
    fn to_polyline(&self) -> Polyline {
        Polyline::from_curve(self, self.sample_count())
    }
}

impl Curve for Box<dyn Curve> {
    #[inline]
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        (**self).trace_unit(pt, u);
    }

    #[inline]
    fn translate(&mut self, delta: Vec2) {
        (**self).translate(delta);
    }

    #[inline]
    fn gaps(&self) -> GapList {
        (**self).gaps()
    }

    #[inline]
    fn params(&self) -> &CurveParams {
        (**self).params()
    }

    #[inline]
    fn params_mut(&mut self) -> &mut CurveParams {
        (**self).params_mut()
    }

    fn reverse(&mut self) {
        (**self).reverse();
    }
}

/// Mirror a gap list for a reversed curve.
///
/// Each gap `g` moves to `1 - g`, except that a gap at 0 stays at 0, and the
/// list is put back in ascending order.
pub(crate) fn reflect_gaps(gaps: &mut GapList) {
    for gap in gaps.iter_mut() {
        let flipped = 1.0 - *gap;
        *gap = if flipped >= 1.0 { 0.0 } else { flipped };
    }
    gaps.sort_unstable_by(f64::total_cmp);
    gaps.dedup();
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use smallvec::smallvec;

    use super::*;
    use crate::{Circle, Composite, Line, ALMOST_ONE};

    #[test]
    fn trace_wraps_out_of_range_parameters() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        for &(u, expected) in &[(0.5, 5.0), (1.5, 5.0), (-0.5, 5.0), (-2.25, 7.5), (3.0, 0.0)] {
            assert!((line.trace(u).x - expected).abs() < 1e-9, "trace({u})");
        }
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut circle = Circle::new((3.0, -2.0), 5.0);
        let before: Vec<Point> = (0..50).map(|i| circle.trace(i as f64 / 50.0)).collect();
        circle.reverse();
        assert!(circle.is_reversed());
        circle.reverse();
        assert!(!circle.is_reversed());
        let after: Vec<Point> = (0..50).map(|i| circle.trace(i as f64 / 50.0)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reversed_trace_runs_backwards() {
        let mut line = Line::new((0.0, 0.0), (1.0, 0.0));
        line.reverse();
        assert_eq!(line.trace(0.25), Point::new(0.75, 0.0));
        assert_eq!(line.trace(0.0), Point::new(ALMOST_ONE, 0.0));
    }

    #[test]
    fn gap_sentinel() {
        let line = Line::new((0.0, 0.0), (1.0, 0.0));
        assert_eq!(line.gap_count(), 0);
        assert_eq!(line.gap(0), NO_GAP);
        let both = Composite::new(line, Line::new((2.0, 0.0), (3.0, 0.0)));
        assert_eq!(both.gap(0), 0.5);
        assert_eq!(both.gap(1), NO_GAP);
    }

    #[test]
    fn gap_queries() {
        let both = Composite::new(
            Line::new((0.0, 0.0), (1.0, 0.0)),
            Line::new((2.0, 0.0), (3.0, 0.0)),
        );
        assert!(both.is_gap_at(0.5));
        assert!(!both.is_gap_at(0.25));
        assert!(both.is_gap_between(0.25, 0.75));
        assert!(!both.is_gap_between(0.5, 0.75));
        assert!(!both.is_gap_between(0.0, 0.5));
    }

    #[test]
    fn gap_at_one_is_gap_at_zero() {
        let poly = Polyline::new(alloc::vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(poly.is_gap_at(0.0));
        assert!(poly.is_gap_at(1.0));
    }

    #[test]
    fn slope_of_line() {
        let line = Line::new((0.0, 0.0), (2.0, 1.0));
        assert!((line.slope(0.5) - 0.5).abs() < 1e-6);
        assert!((line.slope(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn boxed_curves_clone_deeply() {
        let mut boxed: Box<dyn Curve> = Box::new(Line::new((0.0, 0.0), (1.0, 0.0)));
        let copy = boxed.clone();
        boxed.translate(Vec2::new(5.0, 0.0));
        assert_eq!(boxed.trace(0.0), Point::new(5.0, 0.0));
        assert_eq!(copy.trace(0.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn heterogeneous_composite() {
        let a: Box<dyn Curve> = Box::new(Circle::new((0.0, 0.0), 1.0));
        let b: Box<dyn Curve> = Box::new(Line::new((5.0, 0.0), (6.0, 0.0)));
        let both = Composite::new(a, b);
        assert!(both.trace(0.0).is_near(Point::new(1.0, 0.0), 1e-12));
        assert_eq!(both.trace(0.5), Point::new(5.0, 0.0));
    }

    #[test]
    fn reflect() {
        let mut gaps: GapList = smallvec![0.0, 0.25, 0.5];
        reflect_gaps(&mut gaps);
        assert_eq!(gaps.as_slice(), &[0.0, 0.5, 0.75]);
    }

    #[test]
    fn draw_into_shape_lists() {
        let both = Composite::new(
            Line::new((0.0, 0.0), (1.0, 0.0)),
            Line::new((2.0, 0.0), (3.0, 0.0)),
        );
        let mut shapes: Vec<Vec<Point>> = Vec::new();
        both.draw(&mut shapes);
        assert_eq!(shapes.len(), 2);
        assert!(shapes[0].iter().all(|p| p.x <= 1.0));
        assert!(shapes[1].iter().all(|p| p.x >= 2.0));
    }

    #[test]
    fn malformed_spans_are_errors() {
        let line = Line::new((0.0, 0.0), (1.0, 0.0));
        let mut shapes: Vec<Vec<Point>> = Vec::new();
        assert_eq!(
            line.draw_span(0.5, 1.5, &mut shapes),
            Err(CurveError::SpanOutOfRange { u1: 0.5, u2: 1.5 })
        );
        assert!(shapes.is_empty());
        assert!(line.span_length(-0.1, 0.5).is_err());
        assert!(line.span_points(0.0, 2.0).is_err());
        assert!(line.continuous_spans(f64::NAN, 0.5).is_err());
    }
}
