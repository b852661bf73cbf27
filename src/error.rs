// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported to consumers of curves.

use thiserror::Error;

/// An error from a curve operation with caller-supplied bounds.
///
/// Numeric edge cases (empty spans, zero-length geometry) are absorbed and
/// never show up here; only malformed arguments do.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum CurveError {
    /// A span bound was outside `[0, 1]` or NaN.
    #[error("span ({u1}, {u2}) lies outside the parameter range [0, 1]")]
    SpanOutOfRange {
        /// The start of the span.
        u1: f64,
        /// The end of the span.
        u2: f64,
    },

    /// A polyline vertex index was past the end of the vertex list.
    #[error("vertex index {index} is out of range for a polyline with {len} vertices")]
    VertexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of vertices at the time of the call.
        len: usize,
    },
}

/// Check that both ends of a span lie in `[0, 1]`.
pub(crate) fn check_span(u1: f64, u2: f64) -> Result<(), CurveError> {
    let in_range = |u: f64| (0.0..=1.0).contains(&u);
    if in_range(u1) && in_range(u2) {
        Ok(())
    } else {
        Err(CurveError::SpanOutOfRange { u1, u2 })
    }
}
