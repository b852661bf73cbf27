// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit vertex lists, parametrized by arc length.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use smallvec::smallvec;

use crate::common::reverse_param;
use crate::{Curve, CurveError, CurveParams, GapList, Point, Vec2};

/// A path through a list of vertices, traced at constant speed.
///
/// The parameter of a polyline is proportional to the distance travelled
/// along it: `u = 0.5` is halfway along the perimeter, however the vertices
/// are spaced. This is kept up to date by a table of cumulative lengths that
/// is rebuilt whenever a vertex changes.
///
/// A polyline whose last vertex equals its first is closed and has no gaps.
/// An open polyline (with at least two vertices) has a single gap at `u = 0`,
/// where its end jumps back to its start.
///
/// Polylines are also the snapshot format for other curves; see
/// [`Polyline::from_curve`] and [`Curve::to_polyline`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PolylineRecord", into = "PolylineRecord")
)]
pub struct Polyline {
    vertices: Vec<Point>,
    /// `cumulative[i]` is the fraction of the perimeter up to vertex `i`.
    cumulative: Vec<f64>,
    perimeter: f64,
    params: CurveParams,
}

impl Polyline {
    /// A polyline through `vertices`.
    pub fn new(vertices: Vec<Point>) -> Polyline {
        let mut polyline = Polyline {
            vertices,
            cumulative: Vec::new(),
            perimeter: 0.0,
            params: CurveParams::default(),
        };
        polyline.recompute();
        polyline
    }

    /// Snapshot `curve` as `n` vertices, traced at `u = i / n`.
    ///
    /// The result keeps the curve's sample count. The curve's end is not
    /// sampled, so the snapshot of a closed curve is an open polyline unless
    /// the vertex at `u = 0` is appended again.
    pub fn from_curve<C: Curve + ?Sized>(curve: &C, n: u32) -> Polyline {
        let step = 1.0 / f64::from(n);
        let vertices = (0..n).map(|i| curve.trace(f64::from(i) * step)).collect();
        Polyline::new(vertices).with_sample_count(curve.sample_count())
    }

    /// The polyline through `curve` traced at each parameter of `us`.
    pub fn derive<C: Curve + ?Sized>(curve: &C, us: &[f64]) -> Polyline {
        let vertices = us.iter().map(|&u| curve.trace(u)).collect();
        Polyline::new(vertices).with_sample_count(curve.sample_count())
    }

    /// Snapshot the interpolation between `a` and `b` by `amt` as `n`
    /// vertices.
    ///
    /// Vertex `i` is `amt` of the way from `a.trace(i / n)` to
    /// `b.trace(i / n)`.
    pub fn blend<A, B>(a: &A, b: &B, amt: f64, n: u32) -> Polyline
    where
        A: Curve + ?Sized,
        B: Curve + ?Sized,
    {
        let step = 1.0 / f64::from(n);
        let vertices = (0..n)
            .map(|i| {
                let u = f64::from(i) * step;
                a.trace(u).lerp(b.trace(u), amt)
            })
            .collect();
        Polyline::new(vertices).with_sample_count(n)
    }

    /// A closed polygon with `n` vertices evenly spaced in angle around an
    /// ellipse, the first at `start_angle`.
    ///
    /// The first vertex is repeated at the end to close the polygon. With
    /// `n = 0` the polygon is empty.
    ///
    /// ```
    /// use curvetrace::{Curve, Polyline};
    ///
    /// let square = Polyline::regular_polygon((0.0, 0.0), (1.0, 1.0), 4, 0.0);
    /// assert_eq!(square.vertex_count(), 5);
    /// assert!(square.is_closed());
    /// assert_eq!(square.gap_count(), 0);
    /// ```
    pub fn regular_polygon(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        n: u32,
        start_angle: f64,
    ) -> Polyline {
        let step = TAU / f64::from(n);
        let angles: Vec<f64> = (0..n)
            .map(|i| start_angle + f64::from(i) * step)
            .collect();
        Polyline::polygon(center, radii, &angles)
    }

    /// A closed polygon with a vertex at each of `angles` (in radians, in
    /// any order) around an ellipse.
    pub fn polygon(center: impl Into<Point>, radii: impl Into<Vec2>, angles: &[f64]) -> Polyline {
        let center = center.into();
        let radii = radii.into();
        let mut sorted = angles.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let mut vertices: Vec<Point> = sorted
            .iter()
            .map(|&angle| {
                let dir = Vec2::from_angle(angle);
                center + Vec2::new(radii.x * dir.x, radii.y * dir.y)
            })
            .collect();
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        Polyline::new(vertices)
    }

    /// The vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertex at `index`, if there is one.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// The number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The fraction of the perimeter travelled up to each vertex.
    ///
    /// Starts at 0 and, for two or more vertices, ends at exactly 1.
    #[inline]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// The total length of the line segments.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Whether the last vertex coincides with the first.
    pub fn is_closed(&self) -> bool {
        match self.vertices.as_slice() {
            [first, .., last] => first == last,
            _ => false,
        }
    }

    /// Append a vertex.
    pub fn push_vertex(&mut self, pt: Point) {
        self.vertices.push(pt);
        self.recompute();
    }

    /// Insert a vertex before `index`, shifting later vertices along.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::VertexOutOfRange`] if `index` is greater than
    /// the vertex count.
    pub fn insert_vertex(&mut self, index: usize, pt: Point) -> Result<(), CurveError> {
        if index > self.vertices.len() {
            return Err(self.out_of_range(index));
        }
        self.vertices.insert(index, pt);
        self.recompute();
        Ok(())
    }

    /// Remove and return the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::VertexOutOfRange`] if there is no such vertex.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Point, CurveError> {
        if index >= self.vertices.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.vertices.remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Move the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::VertexOutOfRange`] if there is no such vertex.
    pub fn set_vertex(&mut self, index: usize, pt: Point) -> Result<(), CurveError> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(CurveError::VertexOutOfRange { index, len })?;
        *slot = pt;
        self.recompute();
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> CurveError {
        CurveError::VertexOutOfRange {
            index,
            len: self.vertices.len(),
        }
    }

    /// Rebuild the cumulative length table.
    fn recompute(&mut self) {
        self.cumulative.clear();
        let mut total = 0.0;
        if !self.vertices.is_empty() {
            self.cumulative.push(0.0);
        }
        for pair in self.vertices.windows(2) {
            total += pair[0].distance(pair[1]);
            self.cumulative.push(total);
        }
        self.perimeter = total;
        let last = self.cumulative.len().saturating_sub(1);
        if last == 0 {
            return;
        }
        if total > 0.0 {
            for c in &mut self.cumulative {
                *c /= total;
            }
        } else {
            log::debug!(
                "polyline with {} coincident vertices, spacing them uniformly",
                self.vertices.len()
            );
            for (i, c) in self.cumulative.iter_mut().enumerate() {
                *c = i as f64 / last as f64;
            }
        }
        self.cumulative[last] = 1.0;
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Polyline::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(vertices: Vec<Point>) -> Self {
        Polyline::new(vertices)
    }
}

impl Curve for Polyline {
    fn trace_unit(&self, pt: &mut Point, u: f64) {
        let u = if self.params.reversed {
            reverse_param(u)
        } else {
            u
        };
        match self.vertices.as_slice() {
            [] => *pt = Point::ORIGIN,
            [only] => *pt = *only,
            vertices => {
                let i = self
                    .cumulative
                    .partition_point(|&c| c <= u)
                    .clamp(1, vertices.len() - 1);
                let (c0, c1) = (self.cumulative[i - 1], self.cumulative[i]);
                let t = if c1 > c0 { (u - c0) / (c1 - c0) } else { 0.0 };
                *pt = vertices[i - 1].lerp(vertices[i], t);
            }
        }
    }

    /// Translate every vertex. Distances don't change, so neither does the
    /// length table.
    fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    fn gaps(&self) -> GapList {
        if self.vertices.len() < 2 || self.is_closed() {
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

/// The serialized form of a [`Polyline`]; the length table is rebuilt on
/// load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolylineRecord {
    vertices: Vec<Point>,
    #[serde(default = "default_sample_count")]
    sample_count: u32,
}

#[cfg(feature = "serde")]
fn default_sample_count() -> u32 {
    crate::DEFAULT_SAMPLE_COUNT
}

#[cfg(feature = "serde")]
impl From<PolylineRecord> for Polyline {
    fn from(record: PolylineRecord) -> Self {
        Polyline::new(record.vertices).with_sample_count(record.sample_count)
    }
}

#[cfg(feature = "serde")]
impl From<Polyline> for PolylineRecord {
    fn from(polyline: Polyline) -> Self {
        PolylineRecord {
            sample_count: polyline.params.sample_count,
            vertices: polyline.vertices,
        }
    }
}
