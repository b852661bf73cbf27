// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap-aware sampling of curves.
//!
//! Drawing and length measurement share one procedure. A span of parameter
//! space is first cut into *continuous runs*: the span is split where it
//! wraps past the parameter origin and again on either side of every gap,
//! stopping [`GAP_EPSILON`] short of it. Each run is then sampled uniformly,
//! with a density given by the curve's [`sample_count`].
//!
//! Consecutive samples inside a run are connected (by a sink, or by the
//! length estimate); samples in different runs never are.
//!
//! [`sample_count`]: crate::Curve::sample_count

use alloc::vec::Vec;
use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{Curve, CurveSink, Point, ALMOST_ONE, GAP_EPSILON};

/// Cut the span from `u1` to `u2` into the runs that contain no gap.
///
/// `gaps` must be in ascending order. A span with `u1 > u2` wraps past the
/// parameter origin. The end value 1 is replaced by [`ALMOST_ONE`], and a
/// start of 1 is the same place as 0.
///
/// A span with `u1 == u2` is empty.
///
/// # Examples
///
/// ```
/// use curvetrace::sampling::continuous_spans;
///
/// let runs = continuous_spans(&[0.5], 0.0, 1.0);
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].start, 0.0);
/// assert!(runs[0].end < 0.5 && runs[1].start > 0.5);
/// ```
pub fn continuous_spans(gaps: &[f64], u1: f64, u2: f64) -> Vec<Range<f64>> {
    let mut runs = Vec::new();
    push_runs(gaps, u1, u2, &mut runs);
    log::trace!("span ({u1}, {u2}) has {} continuous runs", runs.len());
    runs
}

fn push_runs(gaps: &[f64], mut u1: f64, mut u2: f64, runs: &mut Vec<Range<f64>>) {
    if u1 == u2 {
        return;
    }
    if u2 == 1.0 {
        u2 = ALMOST_ONE;
    }
    if u1 == 1.0 {
        u1 = 0.0;
    }
    if u1 == u2 {
        return;
    }
    if u1 > u2 {
        let mut halves = ArrayVec::<(f64, f64), 2>::new();
        let top = ALMOST_ONE.max(0.5 * (u1 + 1.0));
        if top < 1.0 {
            halves.push((u1, top));
        }
        halves.push((0.0, u2));
        for (start, end) in halves {
            push_runs(gaps, start, end, runs);
        }
        return;
    }
    for &gap in gaps {
        if u1 < gap && gap < u2 {
            let before = (gap - GAP_EPSILON).max(0.5 * (gap + u1));
            push_runs(gaps, u1, before, runs);
            u1 = gap + GAP_EPSILON;
        }
    }
    if u1 < u2 {
        runs.push(u1..u2);
    }
}

/// The number of steps used to sample a run of the given width.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the product is non-negative and at most the sample count"
)]
fn step_count(sample_count: u32, width: f64) -> usize {
    ((f64::from(sample_count) * width) as usize).max(1)
}

/// The uniformly spaced samples of one continuous run.
///
/// A run from `a` to `b` of a curve with sample count `N` is sampled at
/// `n + 1` points, where `n = max(1, floor(N * (b - a)))`. The first sample
/// is at `a` and the last is exactly at `b`.
#[derive(Debug)]
pub struct RunSamples<'a, C: Curve + ?Sized> {
    curve: &'a C,
    start: f64,
    end: f64,
    step: f64,
    steps: usize,
    next: usize,
}

impl<'a, C: Curve + ?Sized> RunSamples<'a, C> {
    /// Sample `curve` over `run`.
    pub fn new(curve: &'a C, run: Range<f64>) -> Self {
        let steps = step_count(curve.sample_count(), run.end - run.start);
        RunSamples {
            curve,
            start: run.start,
            end: run.end,
            step: (run.end - run.start) / steps as f64,
            steps,
            next: 0,
        }
    }
}

impl<C: Curve + ?Sized> Iterator for RunSamples<'_, C> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.steps {
            return None;
        }
        let u = if self.next == self.steps {
            self.end
        } else {
            self.start + self.next as f64 * self.step
        };
        self.next += 1;
        let mut pt = Point::ORIGIN;
        self.curve.trace_into(&mut pt, u);
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<C: Curve + ?Sized> ExactSizeIterator for RunSamples<'_, C> {}

/// The length of the polyline through the samples of each run, summed over
/// the runs of the span from `u1` to `u2`.
pub(crate) fn measure<C: Curve + ?Sized>(curve: &C, u1: f64, u2: f64) -> f64 {
    let mut length = 0.0;
    for run in continuous_spans(&curve.gaps(), u1, u2) {
        let mut samples = RunSamples::new(curve, run);
        let Some(mut prev) = samples.next() else {
            continue;
        };
        for pt in samples {
            length += prev.distance(pt);
            prev = pt;
        }
    }
    length
}

/// Emit the samples of each run of the span from `u1` to `u2` as one shape.
pub(crate) fn draw<C, S>(curve: &C, u1: f64, u2: f64, sink: &mut S)
where
    C: Curve + ?Sized,
    S: CurveSink + ?Sized,
{
    let runs = continuous_spans(&curve.gaps(), u1, u2);
    if runs.is_empty() {
        log::debug!("nothing to draw between {u1} and {u2}");
    }
    for run in runs {
        sink.begin_shape();
        for pt in RunSamples::new(curve, run) {
            sink.vertex(pt);
        }
        sink.end_shape();
    }
}
