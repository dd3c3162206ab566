//! Tolerant comparison of numeric values.

/// Comparison of values within a tolerance that adapts to the magnitude of
/// the compared values.
///
/// For floating point values the tolerance is interpreted relative to the
/// larger magnitude of the two values, so values that agree to roughly the
/// same number of significant digits compare equal regardless of their
/// scale. Infinities only compare equal to infinities of the same sign, and
/// NaN never compares equal to anything. For integer values comparison is
/// exact.
pub trait AlmostEqual {
    /// The tolerance type.
    type Epsilon: Copy;

    /// The tolerance used when none is given explicitly.
    fn default_epsilon() -> Self::Epsilon;

    /// Whether this value and the given value are approximately equal,
    /// using the given tolerance.
    fn almost_eq_with(&self, other: &Self, epsilon: Self::Epsilon) -> bool;

    /// Whether this value is approximately zero, using the given tolerance
    /// as the largest magnitude considered zero.
    fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool;

    /// Whether this value and the given value are approximately equal,
    /// using the default tolerance.
    fn almost_eq(&self, other: &Self) -> bool {
        self.almost_eq_with(other, Self::default_epsilon())
    }

    /// Whether this value is approximately zero, using the default
    /// tolerance as the largest magnitude considered zero.
    fn almost_zero(&self) -> bool {
        self.almost_zero_with(Self::default_epsilon())
    }
}

/// Whether the two given values are approximately equal, using the default
/// tolerance.
#[inline]
pub fn almost_equals<T: AlmostEqual>(a: T, b: T) -> bool {
    a.almost_eq(&b)
}

/// Whether the two given values are approximately equal, using the given
/// tolerance.
#[inline]
pub fn almost_equals_with<T: AlmostEqual>(a: T, b: T, epsilon: T::Epsilon) -> bool {
    a.almost_eq_with(&b, epsilon)
}

/// Whether the given value is approximately zero, using the default
/// tolerance.
#[inline]
pub fn almost_zero<T: AlmostEqual>(a: T) -> bool {
    a.almost_zero()
}

/// Whether the given value is approximately zero, using the given tolerance
/// as the largest magnitude considered zero.
#[inline]
pub fn almost_zero_with<T: AlmostEqual>(a: T, epsilon: T::Epsilon) -> bool {
    a.almost_zero_with(epsilon)
}

macro_rules! impl_almost_equal_for_float {
    ($f:ty) => {
        impl AlmostEqual for $f {
            type Epsilon = $f;

            fn default_epsilon() -> Self::Epsilon {
                1e-6
            }

            fn almost_eq_with(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let (a, b) = (*self, *other);
                if a.is_nan() || b.is_nan() {
                    return false;
                }
                // Catches identical values and zeros of opposite sign.
                if a == b {
                    return true;
                }
                // Infinities of the same sign were caught above. A finite
                // value never equals an infinite one, however large.
                if a.is_infinite() || b.is_infinite() {
                    return false;
                }
                let diff = (a - b).abs();
                if a.abs() < <$f>::MIN_POSITIVE && b.abs() < <$f>::MIN_POSITIVE {
                    // Both values are subnormal or zero, where a relative
                    // tolerance loses meaning.
                    diff < epsilon * <$f>::MIN_POSITIVE * <$f>::EPSILON
                } else {
                    diff <= epsilon * a.abs().max(b.abs())
                }
            }

            fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool {
                self.abs() <= epsilon
            }
        }
    };
}

impl_almost_equal_for_float!(f32);
impl_almost_equal_for_float!(f64);

macro_rules! impl_almost_equal_for_int {
    ($t:ty) => {
        impl AlmostEqual for $t {
            type Epsilon = $t;

            fn default_epsilon() -> Self::Epsilon {
                0
            }

            fn almost_eq_with(&self, other: &Self, _epsilon: Self::Epsilon) -> bool {
                self == other
            }

            fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool {
                self.unsigned_abs() <= epsilon.unsigned_abs()
            }
        }
    };
}

impl_almost_equal_for_int!(i32);
impl_almost_equal_for_int!(i64);
