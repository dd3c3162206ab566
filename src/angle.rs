//! Representations of angles.

use crate::{equality::AlmostEqual, num::Float};
use approx::{AbsDiffEq, RelativeEq};
use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Represents an angle.
pub trait Angle<F>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;

    /// Computes the sine of the angle.
    fn sin(self) -> F
    where
        F: Float,
    {
        self.radians().sin()
    }

    /// Computes the cosine of the angle.
    fn cos(self) -> F
    where
        F: Float,
    {
        self.radians().cos()
    }

    /// Computes the tangent of the angle.
    fn tan(self) -> F
    where
        F: Float,
    {
        self.radians().tan()
    }
}

/// An angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F> Degrees<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F> Radians<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::zero())
    }

    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn degrees(self) -> F {
        self.value()
    }

    fn radians(self) -> F {
        Radians::from(self).value()
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::zero())
    }

    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn degrees(self) -> F {
        Degrees::from(self).value()
    }

    fn radians(self) -> F {
        self.value()
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(rad.value() * F::ONE_EIGHTY * F::FRAC_1_PI)
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(deg.value() * F::PI / F::ONE_EIGHTY)
    }
}

impl<F: Add<Output = F>> Add for Degrees<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl<F: Add<Output = F>> Add for Radians<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl<F: Float> Add<Radians<F>> for Degrees<F> {
    type Output = Self;
    fn add(self, rhs: Radians<F>) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl<F: Float> Add<Degrees<F>> for Radians<F> {
    type Output = Self;
    fn add(self, rhs: Degrees<F>) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl<F: Sub<Output = F>> Sub for Degrees<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl<F: Sub<Output = F>> Sub for Radians<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl<F: Float> Sub<Radians<F>> for Degrees<F> {
    type Output = Self;
    fn sub(self, rhs: Radians<F>) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl<F: Float> Sub<Degrees<F>> for Radians<F> {
    type Output = Self;
    fn sub(self, rhs: Degrees<F>) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl<F: Mul<Output = F>> Mul<F> for Degrees<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self(self.value() * rhs)
    }
}

impl<F: Mul<Output = F>> Mul<F> for Radians<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self(self.value() * rhs)
    }
}

impl<F: Div<Output = F>> Div<F> for Degrees<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self(self.value() / rhs)
    }
}

impl<F: Div<Output = F>> Div<F> for Radians<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self(self.value() / rhs)
    }
}

impl<F: Neg<Output = F>> Neg for Degrees<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl<F: Neg<Output = F>> Neg for Radians<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl<F: AddAssign> AddAssign for Degrees<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<F: AddAssign> AddAssign for Radians<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<F: Float> AddAssign<Radians<F>> for Degrees<F> {
    fn add_assign(&mut self, rhs: Radians<F>) {
        self.0 += Self::from(rhs).0;
    }
}

impl<F: Float> AddAssign<Degrees<F>> for Radians<F> {
    fn add_assign(&mut self, rhs: Degrees<F>) {
        self.0 += Self::from(rhs).0;
    }
}

impl<F: SubAssign> SubAssign for Degrees<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<F: SubAssign> SubAssign for Radians<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<F: Float> SubAssign<Radians<F>> for Degrees<F> {
    fn sub_assign(&mut self, rhs: Radians<F>) {
        self.0 -= Self::from(rhs).0;
    }
}

impl<F: Float> SubAssign<Degrees<F>> for Radians<F> {
    fn sub_assign(&mut self, rhs: Degrees<F>) {
        self.0 -= Self::from(rhs).0;
    }
}

impl<F: MulAssign> MulAssign<F> for Degrees<F> {
    fn mul_assign(&mut self, rhs: F) {
        self.0 *= rhs;
    }
}

impl<F: MulAssign> MulAssign<F> for Radians<F> {
    fn mul_assign(&mut self, rhs: F) {
        self.0 *= rhs;
    }
}

impl<F: DivAssign> DivAssign<F> for Degrees<F> {
    fn div_assign(&mut self, rhs: F) {
        self.0 /= rhs;
    }
}

impl<F: DivAssign> DivAssign<F> for Radians<F> {
    fn div_assign(&mut self, rhs: F) {
        self.0 /= rhs;
    }
}

impl<F: Float> PartialEq<Radians<F>> for Degrees<F> {
    fn eq(&self, rhs: &Radians<F>) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl<F: Float> PartialEq<Degrees<F>> for Radians<F> {
    fn eq(&self, rhs: &Degrees<F>) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl<F: Float> PartialOrd<Radians<F>> for Degrees<F> {
    fn partial_cmp(&self, rhs: &Radians<F>) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl<F: Float> PartialOrd<Degrees<F>> for Radians<F> {
    fn partial_cmp(&self, rhs: &Degrees<F>) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl<T: Copy + AbsDiffEq> AbsDiffEq for Degrees<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl<T: Copy + AbsDiffEq> AbsDiffEq for Radians<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl<T: Copy + RelativeEq> RelativeEq for Degrees<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

impl<T: Copy + RelativeEq> RelativeEq for Radians<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

impl<T: Copy + AlmostEqual> AlmostEqual for Degrees<T> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn almost_eq_with(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        T::almost_eq_with(&self.value(), &other.value(), epsilon)
    }

    fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool {
        T::almost_zero_with(&self.value(), epsilon)
    }
}

impl<T: Copy + AlmostEqual> AlmostEqual for Radians<T> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn almost_eq_with(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        T::almost_eq_with(&self.value(), &other.value(), epsilon)
    }

    fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool {
        T::almost_zero_with(&self.value(), epsilon)
    }
}

/// A set of Euler angles. The rotation they describe applies roll about the
/// x-axis first, then pitch about the z-axis, then yaw about the y-axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles<A> {
    /// The rotation about the x-axis.
    pub roll: A,
    /// The rotation about the z-axis.
    pub pitch: A,
    /// The rotation about the y-axis.
    pub yaw: A,
}

impl<A> EulerAngles<A> {
    /// Creates a new set of Euler angles with the given roll, pitch and yaw.
    pub const fn new(roll: A, pitch: A, yaw: A) -> Self {
        Self { roll, pitch, yaw }
    }
}

impl<A: Copy + AbsDiffEq> AbsDiffEq for EulerAngles<A>
where
    A::Epsilon: Copy,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: A::Epsilon) -> bool {
        self.roll.abs_diff_eq(&other.roll, epsilon)
            && self.pitch.abs_diff_eq(&other.pitch, epsilon)
            && self.yaw.abs_diff_eq(&other.yaw, epsilon)
    }
}

impl<A: Copy + RelativeEq> RelativeEq for EulerAngles<A>
where
    A::Epsilon: Copy,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        self.roll.relative_eq(&other.roll, epsilon, max_relative)
            && self.pitch.relative_eq(&other.pitch, epsilon, max_relative)
            && self.yaw.relative_eq(&other.yaw, epsilon, max_relative)
    }
}

impl<A: Copy + AlmostEqual> AlmostEqual for EulerAngles<A> {
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        A::default_epsilon()
    }

    fn almost_eq_with(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.roll.almost_eq_with(&other.roll, epsilon)
            && self.pitch.almost_eq_with(&other.pitch, epsilon)
            && self.yaw.almost_eq_with(&other.yaw, epsilon)
    }

    fn almost_zero_with(&self, epsilon: Self::Epsilon) -> bool {
        self.roll.almost_zero_with(epsilon)
            && self.pitch.almost_zero_with(epsilon)
            && self.yaw.almost_zero_with(epsilon)
    }
}
