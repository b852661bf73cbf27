// Copyright 2026 the Curvetrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common parameter arithmetic.
//!
//! Every curve in this crate is parametrized over the half-open interval
//! `[0, 1)`. The functions here keep parameters inside that interval.

use crate::ALMOST_ONE;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("curvetrace requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin(self) -> Self => sin;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// The remainder of `num / denom`, with the sign of `denom`.
///
/// This is floor-mod semantics: negative numerators wrap around to the top
/// of the range instead of producing a negative result. It is the function
/// used everywhere a parameter has to be brought back into `[0, denom)`.
///
/// # Examples
///
/// ```
/// use curvetrace::common::remainder;
///
/// assert_eq!(remainder(0.25, 1.0), 0.25);
/// assert_eq!(remainder(1.25, 1.0), 0.25);
/// assert_eq!(remainder(-0.25, 1.0), 0.75);
/// assert_eq!(remainder(-1.0, 1.0), 0.0);
/// ```
#[inline]
pub fn remainder(num: f64, denom: f64) -> f64 {
    if 0.0 <= num && num < denom {
        num
    } else if num > 0.0 {
        num % denom
    } else {
        let result = denom - ((-num) % denom);
        // Tiny negative numerators round up to `denom`.
        if result >= denom {
            0.0
        } else {
            result
        }
    }
}

/// Map `value` linearly from the range `[in0, in1]` to `[out0, out1]`.
#[inline]
pub fn map_range(value: f64, in0: f64, in1: f64, out0: f64, out1: f64) -> f64 {
    out0 + (out1 - out0) * ((value - in0) / (in1 - in0))
}

/// The one-dimensional length of the span from `u1` to `u2`.
///
/// Spans run forward, so when `u1 > u2` the span wraps past the end of the
/// parameter range.
///
/// ```
/// use curvetrace::common::span_len;
///
/// assert_eq!(span_len(0.25, 0.75), 0.5);
/// assert!((span_len(0.8, 0.2) - 0.4).abs() < 1e-12);
/// ```
#[inline]
pub fn span_len(u1: f64, u2: f64) -> f64 {
    if u1 <= u2 {
        u2 - u1
    } else {
        (1.0 - u1) + u2
    }
}

/// The parameter seen by a reversed curve.
///
/// `1 - u`, except that `u = 0` maps to [`ALMOST_ONE`] rather than 1 so the
/// result stays in the half-open parameter range.
#[inline]
pub fn reverse_param(u: f64) -> f64 {
    let v = 1.0 - u;
    if v >= 1.0 {
        ALMOST_ONE
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_wraps_like_floor_mod() {
        assert_eq!(remainder(0.0, 1.0), 0.0);
        assert_eq!(remainder(1.0, 1.0), 0.0);
        assert_eq!(remainder(2.5, 1.0), 0.5);
        assert_eq!(remainder(-0.5, 1.0), 0.5);
        assert_eq!(remainder(-2.75, 1.0), 0.25);
        assert_eq!(remainder(-1e-20, 1.0), 0.0);
        assert!(remainder(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn remainder_stays_in_range() {
        for i in -1000..1000 {
            let u = i as f64 * 0.0137;
            let r = remainder(u, 1.0);
            assert!((0.0..1.0).contains(&r), "remainder({u}, 1) = {r}");
        }
    }

    #[test]
    fn map_range_flips() {
        assert_eq!(map_range(0.25, 0.0, 1.0, 1.0, 0.0), 0.75);
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn reverse_param_keeps_half_open() {
        assert_eq!(reverse_param(0.0), ALMOST_ONE);
        assert_eq!(reverse_param(0.25), 0.75);
        assert_eq!(reverse_param(ALMOST_ONE), 1.0 - ALMOST_ONE);
    }

    #[test]
    fn span_len_wraps() {
        assert_eq!(span_len(0.5, 0.5), 0.0);
        assert_eq!(span_len(0.0, 1.0), 1.0);
        assert!((span_len(0.9, 0.1) - 0.2).abs() < 1e-12);
    }
}
