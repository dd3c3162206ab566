//! Numbers and numerics.

use crate::equality::AlmostEqual;
use bytemuck::Pod;
use num_traits as nt;
use std::{fmt, str::FromStr};

/// Gathers traits useful for working with generic scalar types, both
/// integer and floating point.
pub trait Scalar:
    Pod
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + nt::NumAssign
    + nt::Signed
    + approx::AbsDiffEq<Epsilon = Self>
    + AlmostEqual<Epsilon = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

/// Gathers traits useful for working with generic floating point types.
pub trait Float: Scalar + nt::Float + nt::FromPrimitive + approx::RelativeEq {
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const FRAC_1_PI: Self;
    const ONE_EIGHTY: Self;
}

macro_rules! impl_scalar {
    ($t:ty, $zero:literal, $one:literal) => {
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    };
}

impl_scalar!(i32, 0, 1);
impl_scalar!(i64, 0, 1);
impl_scalar!(f32, 0.0, 1.0);
impl_scalar!(f64, 0.0, 1.0);

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const FRAC_1_PI: Self = std::$f::consts::FRAC_1_PI;
            const ONE_EIGHTY: Self = 180.0;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
