// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition, sampling and measurement of parametric 2D curves.
//!
//! Every curve in this crate maps a parameter `u` in the half-open interval
//! `[0, 1)` to a [`Point`]. Primitive curves ([`Line`], [`Circle`],
//! [`Ellipse`], [`Arc`], [`Rose`]) do so with a closed-form formula; the
//! combinators build new curves out of existing ones:
//!
//! - [`Composite`] concatenates two curves across `[0, 0.5)` and `[0.5, 1)`.
//! - [`Segment`] is a window onto a sub-range of a parent curve, possibly
//!   wrapping past the parameter origin.
//! - [`Blender`] interpolates point-wise between two curves.
//! - [`Polyline`] is an explicit vertex list parametrized by arc length, and
//!   the snapshot target for any other curve.
//!
//! Curves may jump. Each curve reports the parameter values where it is
//! discontinuous as its *gaps*, and the combinators remap their children's
//! gaps into their own parameter space. The sampling engine in
//! [`sampling`] splits every span at those gaps so that neither
//! [`Curve::length`] nor [`Curve::draw`] ever bridges a jump with a straight
//! line.
//!
//! # Examples
//!
//! ```
//! use curvetrace::{Composite, Curve, Line, Point};
//!
//! let a = Line::new((0.0, 0.0), (1.0, 0.0));
//! let b = Line::new((5.0, 0.0), (6.0, 0.0));
//! let both = Composite::new(a, b);
//!
//! // The second half of the parameter range belongs to `b`.
//! assert_eq!(both.trace(0.5), Point::new(5.0, 0.0));
//! // The seam between the two lines is a gap.
//! assert_eq!(both.gap(0), 0.5);
//! // So the measured length doesn't include the jump from (1, 0) to (5, 0).
//! assert!((both.length() - 2.0).abs() < 1e-3);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. Note that this crate still uses the `alloc` crate
//! regardless.
//!
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on points,
//!   primitives and [`Polyline`].
//! - `schemars`: Add JSON schema support for [`Point`] and [`Vec2`].
//! - `mint`: Enable `From`/`Into` conversion with [mint][] types.
//!
//! [`libm`]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    reason = "numeric code"
)]
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_panics_doc,
    reason = "deferred, as in the rest of the linebender crates"
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("curvetrace requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only exercised by the serde round-trip tests.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

extern crate alloc;

mod arc;
mod blender;
mod circle;
pub mod common;
mod composite;
mod curve;
mod ellipse;
mod error;
mod line;
mod point;
mod polyline;
mod rose;
pub mod sampling;
mod segment;
mod vec2;

pub use crate::arc::*;
pub use crate::blender::*;
pub use crate::circle::*;
pub use crate::composite::*;
pub use crate::curve::*;
pub use crate::ellipse::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::point::*;
pub use crate::polyline::*;
pub use crate::rose::*;
pub use crate::segment::*;
pub use crate::vec2::*;

/// The largest parameter the engine samples at.
///
/// Curves are defined on `[0, 1)`. Wherever a parameter of exactly 1 would
/// otherwise be produced (the end of a span, the reversal of `u = 0`), this
/// value is used instead.
pub const ALMOST_ONE: f64 = 0.99999;

/// How far on either side of a gap the sampling engine stops.
pub const GAP_EPSILON: f64 = 1e-5;

/// The sample count of a newly constructed curve.
pub const DEFAULT_SAMPLE_COUNT: u32 = 100;

/// Returned by [`Curve::gap`] for an index past the last gap.
pub const NO_GAP: f64 = -1.0;
