//! Vectors.

use crate::equality::AlmostEqual;
use crate::num::{Float, Scalar};
use crate::parse::parse_components;
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut, Mul};
use std::str::FromStr;

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    x: T,
    y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

impl<T: Scalar> Vector2<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes the perpendicular dot product of this vector with another.
    ///
    /// This equals the z-component of the cross product of the two vectors
    /// extended to 3D.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Whether every component of the vector is approximately zero, within
    /// the default tolerance.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.almost_zero()
    }
}

impl<F: Float> Vector2<F> {
    /// Computes the normalized version of the vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector. This is a synonym for
    /// [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> F {
        self.norm()
    }

    /// Computes the square of the norm of the vector. This is a synonym for
    /// [`norm_squared`](Self::norm_squared).
    #[inline]
    pub fn square_magnitude(&self) -> F {
        self.norm_squared()
    }

    /// Computes the projection of this vector onto the line spanned by the
    /// given axis. The axis does not have to be normalized.
    #[inline]
    pub fn projected_onto(&self, axis: &Self) -> Self {
        axis * (self.dot(axis) / axis.norm_squared())
    }

    /// Computes the rejection of this vector from the line spanned by the
    /// given axis. This is the part of the vector orthogonal to the axis.
    #[inline]
    pub fn rejected_from(&self, axis: &Self) -> Self {
        self - self.projected_onto(axis)
    }

    /// Computes the reflection of this vector across the plane with the
    /// given normal. The normal does not have to be normalized.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - self.projected_onto(normal) * F::TWO
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(<T: Scalar> Add, add, Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(<T: Scalar> Sub, sub, Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(<T: Scalar> Mul, mul, Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x * b.x, a.y * b.y)
});

impl_binop!(<T: Scalar> Div, div, Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x / b.x, a.y / b.y)
});

impl_binop!(<T: Scalar> Add, add, Vector2<T>, T, Vector2<T>, |a, b| {
    Vector2::new(a.x + *b, a.y + *b)
});

impl_binop!(<T: Scalar> Sub, sub, Vector2<T>, T, Vector2<T>, |a, b| {
    Vector2::new(a.x - *b, a.y - *b)
});

impl_binop!(<T: Scalar> Mul, mul, Vector2<T>, T, Vector2<T>, |a, b| {
    Vector2::new(a.x * *b, a.y * *b)
});

impl_binop!(<T: Scalar> Div, div, Vector2<T>, T, Vector2<T>, |a, b| {
    Vector2::new(a.x / *b, a.y / *b)
});

impl_binop!(Mul, mul, i32, Vector2<i32>, Vector2<i32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, i64, Vector2<i64>, Vector2<i64>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f32, Vector2<f32>, Vector2<f32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f64, Vector2<f64>, Vector2<f64>, |a, b| { b.mul(a) });

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector2<T>, Vector2<T>, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector2<T>, Vector2<T>, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector2<T>, Vector2<T>, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector2<T>, Vector2<T>, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
});

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector2<T>, T, |a, b| {
    a.x += *b;
    a.y += *b;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector2<T>, T, |a, b| {
    a.x -= *b;
    a.y -= *b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector2<T>, T, |a, b| {
    a.x *= *b;
    a.y *= *b;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector2<T>, T, |a, b| {
    a.x /= *b;
    a.y /= *b;
});

impl_unary_op!(<T: Scalar> Neg, neg, Vector2<T>, Vector2<T>, |val| {
    Vector2::new(-val.x, -val.y)
});

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<T: Scalar> Vector2<T>, |a, b, epsilon| {
    T::abs_diff_eq(&a.x, &b.x, epsilon) && T::abs_diff_eq(&a.y, &b.y, epsilon)
});

impl_relative_eq!(<T: Float> Vector2<T>, |a, b, epsilon, max_relative| {
    T::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && T::relative_eq(&a.y, &b.y, epsilon, max_relative)
});

impl_almost_equal!(
    <T: Scalar> Vector2<T>,
    |a, b, epsilon| {
        T::almost_eq_with(&a.x, &b.x, epsilon) && T::almost_eq_with(&a.y, &b.y, epsilon)
    },
    |v, epsilon| { T::almost_zero_with(&v.x, epsilon) && T::almost_zero_with(&v.y, epsilon) }
);

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.6} y: {:.6})", self.x, self.y)
    }
}

impl<T: Scalar> FromStr for Vector2<T> {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components(text)?;
        Ok(Self::new(x, y))
    }
}

unsafe impl<T: Scalar> Zeroable for Vector2<T> {}
unsafe impl<T: Scalar> Pod for Vector2<T> {}

impl<T: Scalar> Vector3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Whether every component of the vector is approximately zero, within
    /// the default tolerance.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.almost_zero()
    }
}

impl<F: Float> Vector3<F> {
    /// Computes the normalized version of the vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector. This is a synonym for
    /// [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> F {
        self.norm()
    }

    /// Computes the square of the norm of the vector. This is a synonym for
    /// [`norm_squared`](Self::norm_squared).
    #[inline]
    pub fn square_magnitude(&self) -> F {
        self.norm_squared()
    }

    /// Computes the projection of this vector onto the line spanned by the
    /// given axis. The axis does not have to be normalized.
    #[inline]
    pub fn projected_onto(&self, axis: &Self) -> Self {
        axis * (self.dot(axis) / axis.norm_squared())
    }

    /// Computes the rejection of this vector from the line spanned by the
    /// given axis. This is the part of the vector orthogonal to the axis.
    #[inline]
    pub fn rejected_from(&self, axis: &Self) -> Self {
        self - self.projected_onto(axis)
    }

    /// Computes the reflection of this vector across the plane with the
    /// given normal. The normal does not have to be normalized.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - self.projected_onto(normal) * F::TWO
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        vector.extended(T::ZERO)
    }
}

impl_binop!(<T: Scalar> Add, add, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(<T: Scalar> Sub, sub, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(<T: Scalar> Mul, mul, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
});

impl_binop!(<T: Scalar> Div, div, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x / b.x, a.y / b.y, a.z / b.z)
});

impl_binop!(<T: Scalar> Add, add, Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(a.x + *b, a.y + *b, a.z + *b)
});

impl_binop!(<T: Scalar> Sub, sub, Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(a.x - *b, a.y - *b, a.z - *b)
});

impl_binop!(<T: Scalar> Mul, mul, Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(a.x * *b, a.y * *b, a.z * *b)
});

impl_binop!(<T: Scalar> Div, div, Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(a.x / *b, a.y / *b, a.z / *b)
});

impl_binop!(Mul, mul, i32, Vector3<i32>, Vector3<i32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, i64, Vector3<i64>, Vector3<i64>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f32, Vector3<f32>, Vector3<f32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f64, Vector3<f64>, Vector3<f64>, |a, b| { b.mul(a) });

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector3<T>, Vector3<T>, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector3<T>, Vector3<T>, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector3<T>, Vector3<T>, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector3<T>, Vector3<T>, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
});

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector3<T>, T, |a, b| {
    a.x += *b;
    a.y += *b;
    a.z += *b;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector3<T>, T, |a, b| {
    a.x -= *b;
    a.y -= *b;
    a.z -= *b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector3<T>, T, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector3<T>, T, |a, b| {
    a.x /= *b;
    a.y /= *b;
    a.z /= *b;
});

impl_unary_op!(<T: Scalar> Neg, neg, Vector3<T>, Vector3<T>, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<T: Scalar> Vector3<T>, |a, b, epsilon| {
    T::abs_diff_eq(&a.x, &b.x, epsilon)
        && T::abs_diff_eq(&a.y, &b.y, epsilon)
        && T::abs_diff_eq(&a.z, &b.z, epsilon)
});

impl_relative_eq!(<T: Float> Vector3<T>, |a, b, epsilon, max_relative| {
    T::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && T::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && T::relative_eq(&a.z, &b.z, epsilon, max_relative)
});

impl_almost_equal!(
    <T: Scalar> Vector3<T>,
    |a, b, epsilon| {
        T::almost_eq_with(&a.x, &b.x, epsilon)
            && T::almost_eq_with(&a.y, &b.y, epsilon)
            && T::almost_eq_with(&a.z, &b.z, epsilon)
    },
    |v, epsilon| {
        T::almost_zero_with(&v.x, epsilon)
            && T::almost_zero_with(&v.y, epsilon)
            && T::almost_zero_with(&v.z, epsilon)
    }
);

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.6} y: {:.6} z: {:.6})", self.x, self.y, self.z)
    }
}

impl<T: Scalar> FromStr for Vector3<T> {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_components(text)?;
        Ok(Self::new(x, y, z))
    }
}

unsafe impl<T: Scalar> Zeroable for Vector3<T> {}
unsafe impl<T: Scalar> Pod for Vector3<T> {}

impl<T: Scalar> Vector4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut T {
        &mut self.w
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the cross product of the x-, y- and z-components of this
    /// vector with those of another. The w-component of the result is zero.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        self.xyz().cross(&other.xyz()).extended(T::ZERO)
    }

    /// Whether every component of the vector is approximately zero, within
    /// the default tolerance.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.almost_zero()
    }
}

impl<F: Float> Vector4<F> {
    /// Computes the normalized version of the vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector. This is a synonym for
    /// [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> F {
        self.norm()
    }

    /// Computes the square of the norm of the vector. This is a synonym for
    /// [`norm_squared`](Self::norm_squared).
    #[inline]
    pub fn square_magnitude(&self) -> F {
        self.norm_squared()
    }

    /// Computes the projection of this vector onto the line spanned by the
    /// given axis. The axis does not have to be normalized.
    #[inline]
    pub fn projected_onto(&self, axis: &Self) -> Self {
        axis * (self.dot(axis) / axis.norm_squared())
    }

    /// Computes the rejection of this vector from the line spanned by the
    /// given axis. This is the part of the vector orthogonal to the axis.
    #[inline]
    pub fn rejected_from(&self, axis: &Self) -> Self {
        self - self.projected_onto(axis)
    }

    /// Computes the reflection of this vector across the plane with the
    /// given normal. The normal does not have to be normalized.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - self.projected_onto(normal) * F::TWO
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector4<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        Self::new(vector.x, vector.y, T::ZERO, T::ZERO)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.extended(T::ZERO)
    }
}

impl_binop!(<T: Scalar> Add, add, Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(<T: Scalar> Sub, sub, Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(<T: Scalar> Mul, mul, Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
});

impl_binop!(<T: Scalar> Div, div, Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
});

impl_binop!(<T: Scalar> Add, add, Vector4<T>, T, Vector4<T>, |a, b| {
    Vector4::new(a.x + *b, a.y + *b, a.z + *b, a.w + *b)
});

impl_binop!(<T: Scalar> Sub, sub, Vector4<T>, T, Vector4<T>, |a, b| {
    Vector4::new(a.x - *b, a.y - *b, a.z - *b, a.w - *b)
});

impl_binop!(<T: Scalar> Mul, mul, Vector4<T>, T, Vector4<T>, |a, b| {
    Vector4::new(a.x * *b, a.y * *b, a.z * *b, a.w * *b)
});

impl_binop!(<T: Scalar> Div, div, Vector4<T>, T, Vector4<T>, |a, b| {
    Vector4::new(a.x / *b, a.y / *b, a.z / *b, a.w / *b)
});

impl_binop!(Mul, mul, i32, Vector4<i32>, Vector4<i32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, i64, Vector4<i64>, Vector4<i64>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f32, Vector4<f32>, Vector4<f32>, |a, b| { b.mul(a) });

impl_binop!(Mul, mul, f64, Vector4<f64>, Vector4<f64>, |a, b| { b.mul(a) });

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector4<T>, Vector4<T>, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector4<T>, Vector4<T>, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector4<T>, Vector4<T>, |a, b| {
    a.x *= b.x;
    a.y *= b.y;
    a.z *= b.z;
    a.w *= b.w;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector4<T>, Vector4<T>, |a, b| {
    a.x /= b.x;
    a.y /= b.y;
    a.z /= b.z;
    a.w /= b.w;
});

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Vector4<T>, T, |a, b| {
    a.x += *b;
    a.y += *b;
    a.z += *b;
    a.w += *b;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Vector4<T>, T, |a, b| {
    a.x -= *b;
    a.y -= *b;
    a.z -= *b;
    a.w -= *b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Vector4<T>, T, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
    a.w *= *b;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Vector4<T>, T, |a, b| {
    a.x /= *b;
    a.y /= *b;
    a.z /= *b;
    a.w /= *b;
});

impl_unary_op!(<T: Scalar> Neg, neg, Vector4<T>, Vector4<T>, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl<T: Scalar> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<T: Scalar> Vector4<T>, |a, b, epsilon| {
    T::abs_diff_eq(&a.x, &b.x, epsilon)
        && T::abs_diff_eq(&a.y, &b.y, epsilon)
        && T::abs_diff_eq(&a.z, &b.z, epsilon)
        && T::abs_diff_eq(&a.w, &b.w, epsilon)
});

impl_relative_eq!(<T: Float> Vector4<T>, |a, b, epsilon, max_relative| {
    T::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && T::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && T::relative_eq(&a.z, &b.z, epsilon, max_relative)
        && T::relative_eq(&a.w, &b.w, epsilon, max_relative)
});

impl_almost_equal!(
    <T: Scalar> Vector4<T>,
    |a, b, epsilon| {
        T::almost_eq_with(&a.x, &b.x, epsilon)
            && T::almost_eq_with(&a.y, &b.y, epsilon)
            && T::almost_eq_with(&a.z, &b.z, epsilon)
            && T::almost_eq_with(&a.w, &b.w, epsilon)
    },
    |v, epsilon| {
        T::almost_zero_with(&v.x, epsilon)
            && T::almost_zero_with(&v.y, epsilon)
            && T::almost_zero_with(&v.z, epsilon)
            && T::almost_zero_with(&v.w, epsilon)
    }
);

impl<T: Scalar> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.6} y: {:.6} z: {:.6} w: {:.6})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl<T: Scalar> FromStr for Vector4<T> {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y, z, w] = parse_components(text)?;
        Ok(Self::new(x, y, z, w))
    }
}

unsafe impl<T: Scalar> Zeroable for Vector4<T> {}
unsafe impl<T: Scalar> Pod for Vector4<T> {}
