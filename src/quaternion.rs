//! Quaternions.

use crate::angle::{Angle, Degrees, EulerAngles, Radians};
use crate::equality::AlmostEqual;
use crate::matrix::Matrix3;
use crate::num::Float;
use crate::parse::parse_components;
use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Index, IndexMut, Mul};
use std::str::FromStr;

/// A quaternion with vector part `v` and scalar part `w`.
///
/// Unit quaternions describe rotations in 3D space. The vector part points
/// along the rotation axis with the sine of the half rotation angle as
/// magnitude, and the scalar part is the cosine of the half rotation angle.
/// Multiplication composes rotations, with `q1 * q2` describing the rotation
/// of `q2` followed by the rotation of `q1`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion<F> {
    /// The vector part.
    pub v: Vector3<F>,
    /// The scalar part.
    pub w: F,
}

/// A rotation described by an angle around a normalized axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleAxis<F> {
    /// The rotation angle.
    pub angle: Degrees<F>,
    /// The normalized rotation axis.
    pub axis: Vector3<F>,
}

impl<F> AngleAxis<F> {
    /// Creates a new angle-axis rotation with the given angle and axis.
    pub const fn new(angle: Degrees<F>, axis: Vector3<F>) -> Self {
        Self { angle, axis }
    }
}

impl<F: Float> Quaternion<F> {
    /// Creates a new quaternion with the vector part (`x`, `y`, `z`) and the
    /// scalar part `w`.
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self::from_parts(Vector3::new(x, y, z), w)
    }

    /// Creates a new quaternion with the given vector and scalar parts.
    #[inline]
    pub const fn from_parts(v: Vector3<F>, w: F) -> Self {
        Self { v, w }
    }

    /// Creates the identity quaternion, which describes no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_parts(Vector3::zeros(), F::ONE)
    }

    /// Creates a quaternion with all components zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_parts(Vector3::zeros(), F::ZERO)
    }

    /// Creates a quaternion describing a rotation by the given angle around
    /// the given axis. The axis does not have to be normalized.
    pub fn from_axis_angle<A: Angle<F>>(axis: &Vector3<F>, angle: A) -> Self {
        let (sin, cos) = (angle.radians() * F::ONE_HALF).sin_cos();
        Self::from_parts(axis.normalized() * sin, cos)
    }

    /// Creates a quaternion describing the given angle-axis rotation.
    #[inline]
    pub fn from_angle_axis(angle_axis: &AngleAxis<F>) -> Self {
        Self::from_axis_angle(&angle_axis.axis, angle_axis.angle)
    }

    /// Returns the angle and axis of the rotation described by this
    /// quaternion, which is assumed to have unit norm. For a rotation by a
    /// zero angle, the axis defaults to the x-axis.
    pub fn to_angle_axis(&self) -> AngleAxis<F> {
        let w = self.w.max(F::NEG_ONE).min(F::ONE);
        let angle = Radians(F::TWO * w.acos()).as_degrees();
        let sin_half_angle = (F::ONE - w * w).sqrt();
        let axis = if sin_half_angle.almost_zero() {
            Vector3::unit_x()
        } else {
            self.v / sin_half_angle
        };
        AngleAxis::new(angle, axis)
    }

    /// Creates a quaternion applying the rotation described by the given set
    /// of Euler angles.
    pub fn from_euler_angles<A: Angle<F>>(angles: &EulerAngles<A>) -> Self {
        let roll = Self::from_axis_angle(&Vector3::unit_x(), angles.roll);
        let pitch = Self::from_axis_angle(&Vector3::unit_z(), angles.pitch);
        let yaw = Self::from_axis_angle(&Vector3::unit_y(), angles.yaw);
        roll * pitch * yaw
    }

    /// Returns a set of Euler angles describing the same rotation as this
    /// quaternion, which is assumed to have unit norm.
    #[inline]
    pub fn to_euler_angles(&self) -> EulerAngles<Degrees<F>> {
        self.to_matrix().to_euler_angles()
    }

    /// Creates a quaternion describing the same rotation as the given
    /// matrix, which is assumed to be a pure rotation matrix.
    pub fn from_matrix(matrix: &Matrix3<F>) -> Self {
        let m00 = matrix.element(0, 0);
        let m11 = matrix.element(1, 1);
        let m22 = matrix.element(2, 2);
        let trace = m00 + m11 + m22;

        if trace > F::ZERO {
            let s = (trace + F::ONE).sqrt();
            let w = s * F::ONE_HALF;
            let s = F::ONE_HALF / s;
            Self::new(
                (matrix.element(2, 1) - matrix.element(1, 2)) * s,
                (matrix.element(0, 2) - matrix.element(2, 0)) * s,
                (matrix.element(1, 0) - matrix.element(0, 1)) * s,
                w,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (F::ONE + m00 - m11 - m22).sqrt();
            let x = s * F::ONE_HALF;
            let s = F::ONE_HALF / s;
            Self::new(
                x,
                (matrix.element(0, 1) + matrix.element(1, 0)) * s,
                (matrix.element(0, 2) + matrix.element(2, 0)) * s,
                (matrix.element(2, 1) - matrix.element(1, 2)) * s,
            )
        } else if m11 > m22 {
            let s = (F::ONE + m11 - m00 - m22).sqrt();
            let y = s * F::ONE_HALF;
            let s = F::ONE_HALF / s;
            Self::new(
                (matrix.element(0, 1) + matrix.element(1, 0)) * s,
                y,
                (matrix.element(1, 2) + matrix.element(2, 1)) * s,
                (matrix.element(0, 2) - matrix.element(2, 0)) * s,
            )
        } else {
            let s = (F::ONE + m22 - m00 - m11).sqrt();
            let z = s * F::ONE_HALF;
            let s = F::ONE_HALF / s;
            Self::new(
                (matrix.element(0, 2) + matrix.element(2, 0)) * s,
                (matrix.element(1, 2) + matrix.element(2, 1)) * s,
                z,
                (matrix.element(1, 0) - matrix.element(0, 1)) * s,
            )
        }
    }

    /// Creates a rotation matrix describing the same rotation as this
    /// quaternion, which is assumed to have unit norm.
    pub fn to_matrix(&self) -> Matrix3<F> {
        let (x, y, z) = (self.v.x(), self.v.y(), self.v.z());
        let w = self.w;
        Matrix3::from_columns(
            Vector3::new(
                F::ONE - F::TWO * (y * y + z * z),
                F::TWO * (x * y + z * w),
                F::TWO * (x * z - y * w),
            ),
            Vector3::new(
                F::TWO * (x * y - z * w),
                F::ONE - F::TWO * (x * x + z * z),
                F::TWO * (y * z + x * w),
            ),
            Vector3::new(
                F::TWO * (x * z + y * w),
                F::TWO * (y * z - x * w),
                F::ONE - F::TWO * (x * x + y * y),
            ),
        )
    }

    /// Whether all components of the quaternion are almost zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.almost_zero()
    }

    /// Whether the scalar part of the quaternion is almost zero.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.w.almost_zero()
    }

    /// Whether the vector part of the quaternion is almost zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.v.almost_zero()
    }

    /// Whether the quaternion has almost unit norm.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm_squared().almost_eq(&F::ONE)
    }

    /// Returns the conjugate of this quaternion, which has the vector part
    /// negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.v, self.w)
    }

    /// Computes the dot product of this quaternion with the given
    /// quaternion.
    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        self.v.dot(&other.v) + self.w * other.w
    }

    /// Computes the norm of the quaternion.
    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the quaternion.
    #[inline]
    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    /// Computes the norm of the quaternion. This is a synonym for
    /// [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> F {
        self.norm()
    }

    /// Computes the square of the norm of the quaternion. This is a synonym
    /// for [`norm_squared`](Self::norm_squared).
    #[inline]
    pub fn square_magnitude(&self) -> F {
        self.norm_squared()
    }

    /// Computes the norm of the quaternion. This is a synonym for
    /// [`norm`](Self::norm).
    #[inline]
    pub fn modulus(&self) -> F {
        self.norm()
    }

    /// Computes the normalized version of the quaternion.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Returns the inverse of this quaternion.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Returns the inverse of this quaternion, which is assumed to have unit
    /// norm. This is just the conjugate.
    #[inline]
    pub fn inverse_unit(&self) -> Self {
        self.conjugate()
    }

    /// Rotates the given point with the rotation described by this
    /// quaternion, which is assumed to have unit norm.
    #[inline]
    pub fn rotate_vector(&self, point: &Vector3<F>) -> Vector3<F> {
        let t = self.v.cross(point) + point * self.w;
        point + self.v.cross(&t) * F::TWO
    }

    /// Computes the natural logarithm of this quaternion, interpreted as the
    /// unit quaternion with the same direction. The result is a pure
    /// quaternion whose vector part points along the rotation axis with the
    /// half rotation angle as magnitude.
    pub fn ln(&self) -> Self {
        let vector_norm = self.v.norm();
        if vector_norm.almost_zero() {
            Self::zeros()
        } else {
            let half_angle = (self.w / self.norm()).max(F::NEG_ONE).min(F::ONE).acos();
            Self::from_parts(self.v * (half_angle / vector_norm), F::ZERO)
        }
    }

    /// Computes the exponential of the vector part of this quaternion. The
    /// result is the unit quaternion whose rotation axis points along the
    /// vector part and whose half rotation angle is its magnitude.
    pub fn exp(&self) -> Self {
        let half_angle = self.v.norm();
        if half_angle.almost_zero() {
            Self::identity()
        } else {
            let (sin, cos) = half_angle.sin_cos();
            Self::from_parts(self.v * (sin / half_angle), cos)
        }
    }

    /// Raises this quaternion to the given power, interpreted as the unit
    /// quaternion with the same direction. This scales the rotation angle by
    /// the exponent.
    #[inline]
    pub fn powf(&self, exponent: F) -> Self {
        (self.ln() * exponent).exp()
    }
}

impl_binop!(<F: Float> Add, add, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::from_parts(a.v + b.v, a.w + b.w)
});

impl_binop!(<F: Float> Sub, sub, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::from_parts(a.v - b.v, a.w - b.w)
});

impl_binop!(<F: Float> Mul, mul, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::from_parts(
        b.v * a.w + a.v * b.w + a.v.cross(&b.v),
        a.w * b.w - a.v.dot(&b.v),
    )
});

impl_binop!(<F: Float> Mul, mul, Quaternion<F>, F, Quaternion<F>, |a, b| {
    Quaternion::from_parts(a.v * *b, a.w * *b)
});

impl_binop!(Mul, mul, f32, Quaternion<f32>, Quaternion<f32>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, f64, Quaternion<f64>, Quaternion<f64>, |a, b| { b.mul(*a) });

impl_binop!(<F: Float> Div, div, Quaternion<F>, F, Quaternion<F>, |a, b| {
    Quaternion::from_parts(a.v / *b, a.w / *b)
});

impl_binop_assign!(<F: Float> AddAssign, add_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(<F: Float> SubAssign, sub_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(<F: Float> MulAssign, mul_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<F: Float> MulAssign, mul_assign, Quaternion<F>, F, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<F: Float> DivAssign, div_assign, Quaternion<F>, F, |a, b| {
    *a = *a / b;
});

impl_unary_op!(<F: Float> Neg, neg, Quaternion<F>, Quaternion<F>, |q| {
    Quaternion::from_parts(-q.v, -q.w)
});

impl<F: Float> Index<usize> for Quaternion<F> {
    type Output = F;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0..=2 => &self.v[idx],
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<F: Float> IndexMut<usize> for Quaternion<F> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0..=2 => &mut self.v[idx],
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<F: Float> Quaternion<F>, |a, b, epsilon| {
    a.v.abs_diff_eq(&b.v, epsilon) && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(<F: Float> Quaternion<F>, |a, b, epsilon, max_relative| {
    a.v.relative_eq(&b.v, epsilon, max_relative) && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl_almost_equal!(<F: Float> Quaternion<F>, |a, b, epsilon| {
    a.v.almost_eq_with(&b.v, epsilon) && a.w.almost_eq_with(&b.w, epsilon)
}, |q, epsilon| {
    q.v.almost_zero_with(epsilon) && q.w.almost_zero_with(epsilon)
});

impl<F: Float> fmt::Display for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.6} y: {:.6} z: {:.6} w: {:.6})",
            self.v.x(),
            self.v.y(),
            self.v.z(),
            self.w
        )
    }
}

impl<F: Float> FromStr for Quaternion<F> {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let [x, y, z, w] = parse_components(text)?;
        Ok(Self::new(x, y, z, w))
    }
}

unsafe impl<F: Float> Zeroable for Quaternion<F> {}
unsafe impl<F: Float> Pod for Quaternion<F> {}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::equality::almost_equals;
    use approx::assert_abs_diff_eq;
    use std::mem;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn quaternion_has_the_size_of_four_scalars() {
        assert_eq!(mem::size_of::<Quaternion<f32>>(), 4 * mem::size_of::<f32>());
        assert_eq!(mem::size_of::<Quaternion<f64>>(), 4 * mem::size_of::<f64>());
    }

    #[test]
    fn creating_quaternion_works() {
        let quaternion = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(quaternion.v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(quaternion.w, 4.0);
        assert_eq!(
            quaternion,
            Quaternion::from_parts(Vector3::new(1.0, 2.0, 3.0), 4.0)
        );

        assert_eq!(Quaternion::<f32>::default(), Quaternion::zeros());
        assert_eq!(
            Quaternion::<f32>::identity(),
            Quaternion::new(0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn quaternion_predicates_work() {
        assert!(Quaternion::<f32>::zeros().is_zero());
        assert!(Quaternion::<f32>::default().is_zero());
        assert!(!Quaternion::<f32>::identity().is_zero());

        assert!(Quaternion::new(1.0_f32, 2.0, 3.0, 0.0).is_pure());
        assert!(!Quaternion::new(1.0_f32, 2.0, 3.0, 0.1).is_pure());

        assert!(Quaternion::new(0.0_f32, 0.0, 0.0, -3.0).is_real());
        assert!(!Quaternion::new(0.5_f32, 0.0, 0.0, -3.0).is_real());

        assert!(Quaternion::<f32>::identity().is_unit());
        assert!(!Quaternion::new(0.0_f32, 0.0, 0.0, 2.0).is_unit());
        assert!(
            Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 2.0, -0.5), Degrees(72.0))
                .is_unit()
        );

        // The product of unit quaternions has unit norm.
        let a = Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 2.0, -0.5), Degrees(72.0));
        let b = Quaternion::from_axis_angle(&Vector3::unit_y(), Degrees(-30.0));
        assert!((a * b).is_unit());
    }

    #[test]
    fn quaternion_basis_products_follow_the_hamilton_rules() {
        let i = Quaternion::new(1.0_f32, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0_f32, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0_f32, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, -Quaternion::identity());
        assert_eq!(j * j, -Quaternion::identity());
        assert_eq!(k * k, -Quaternion::identity());
    }

    #[test]
    fn quaternion_arithmetic_operations_work() {
        let quaternion = Quaternion::new(1.0_f32, -2.0, 3.0, -4.0);
        assert_eq!(quaternion + quaternion, quaternion * 2.0);
        assert_eq!(2.0 * quaternion, quaternion * 2.0);
        assert_eq!(quaternion - quaternion, Quaternion::zeros());
        assert_eq!((quaternion * 2.0) / 2.0, quaternion);
        assert_eq!(-quaternion, quaternion * -1.0);

        let mut accumulated = quaternion;
        accumulated += quaternion;
        assert_eq!(accumulated, quaternion * 2.0);
        accumulated -= quaternion;
        assert_eq!(accumulated, quaternion);
        accumulated *= 2.0;
        assert_eq!(accumulated, quaternion * 2.0);
        accumulated /= 2.0;
        assert_eq!(accumulated, quaternion);

        let mut accumulated = quaternion;
        accumulated *= quaternion;
        assert_eq!(accumulated, quaternion * quaternion);

        assert_eq!(&quaternion + &quaternion, quaternion * 2.0);
        assert_eq!(&quaternion * 2.0, quaternion * 2.0);
        assert_eq!(2.0 * &quaternion, quaternion * 2.0);
        assert_eq!(&quaternion * &quaternion, quaternion * quaternion);
    }

    #[test]
    fn quaternion_norms_work() {
        let quaternion = Quaternion::new(4.0_f32, 4.0, 0.0, 2.0);
        assert_abs_diff_eq!(quaternion.norm(), 6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(quaternion.norm_squared(), 36.0, epsilon = EPSILON);
        assert_abs_diff_eq!(quaternion.modulus(), 6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(quaternion.magnitude(), 6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(quaternion.square_magnitude(), 36.0, epsilon = EPSILON);

        assert_abs_diff_eq!(quaternion.normalized().norm(), 1.0, epsilon = EPSILON);
        assert!(quaternion.normalized().is_unit());
    }

    #[test]
    fn quaternion_dot_product_works() {
        let rotation = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        assert_abs_diff_eq!(rotation.dot(&rotation), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rotation.dot(&-rotation), -1.0, epsilon = EPSILON);

        let a = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        let b = Quaternion::new(2.0_f32, -1.0, 0.5, -1.0);
        assert_abs_diff_eq!(a.dot(&b), -2.5, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_conjugation_and_inversion_work() {
        let quaternion = Quaternion::new(1.0_f32, -2.0, 3.0, -4.0);
        assert_eq!(
            quaternion.conjugate(),
            Quaternion::new(-1.0, 2.0, -3.0, -4.0)
        );
        assert_abs_diff_eq!(
            quaternion * quaternion.inverse(),
            Quaternion::identity(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            quaternion.inverse() * quaternion,
            Quaternion::identity(),
            epsilon = EPSILON
        );

        let unit = Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 2.0, -0.5), Degrees(72.0));
        assert_abs_diff_eq!(unit.inverse_unit(), unit.inverse(), epsilon = EPSILON);
        assert_abs_diff_eq!(
            unit * unit.inverse_unit(),
            Quaternion::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_indexing_works() {
        let mut quaternion = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(quaternion[0], 1.0);
        assert_eq!(quaternion[1], 2.0);
        assert_eq!(quaternion[2], 3.0);
        assert_eq!(quaternion[3], 4.0);

        quaternion[3] = -4.0;
        assert_eq!(quaternion.w, -4.0);
    }

    #[test]
    #[should_panic]
    fn indexing_quaternion_out_of_bounds_panics() {
        let quaternion = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        let _ = quaternion[4];
    }

    #[test]
    fn rotating_vector_with_quaternion_works() {
        let rotation = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        assert_abs_diff_eq!(
            rotation.rotate_vector(&Vector3::unit_x()),
            Vector3::unit_y(),
            epsilon = 1e-7
        );

        let doubled = rotation * rotation;
        assert_abs_diff_eq!(
            doubled.rotate_vector(&Vector3::unit_x()),
            -Vector3::unit_x(),
            epsilon = EPSILON
        );

        let point = Vector3::new(0.3_f32, -1.2, 2.1);
        assert_abs_diff_eq!(
            rotation.rotate_vector(&point),
            Matrix3::from_rotation_z(Degrees(90.0)) * point,
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_axis_angle_construction_works() {
        let rotation = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        let cos_45 = 0.707_106_77;
        assert_abs_diff_eq!(
            rotation,
            Quaternion::new(0.0, 0.0, cos_45, cos_45),
            epsilon = EPSILON
        );

        // The axis is normalized internally.
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(&Vector3::new(0.0_f32, 0.0, 5.0), Degrees(90.0)),
            rotation,
            epsilon = EPSILON
        );

        assert_abs_diff_eq!(
            Quaternion::from_angle_axis(&AngleAxis::new(Degrees(90.0), Vector3::unit_z())),
            rotation,
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_to_angle_axis_works() {
        let angle_axis =
            Quaternion::from_axis_angle(&Vector3::new(0.0_f64, 0.0, 3.0), Degrees(90.0))
                .to_angle_axis();
        assert_abs_diff_eq!(angle_axis.angle, Degrees(90.0), epsilon = 1e-9);
        assert_abs_diff_eq!(angle_axis.axis, Vector3::unit_z(), epsilon = 1e-9);

        let identity_axis = Quaternion::<f64>::identity().to_angle_axis();
        assert_abs_diff_eq!(identity_axis.angle, Degrees(0.0), epsilon = 1e-9);
        assert_eq!(identity_axis.axis, Vector3::unit_x());
    }

    #[test]
    fn quaternion_matrix_conversion_works() {
        let rotation = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        assert_abs_diff_eq!(
            rotation.to_matrix(),
            Matrix3::from_rotation_z(Degrees(90.0)),
            epsilon = EPSILON
        );

        let axis = Vector3::new(1.0_f32, 1.0, -1.0);
        let angle = Degrees(45.0_f32);
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(&axis, angle).to_matrix(),
            Matrix3::from_axis_angle(&axis, angle),
            epsilon = EPSILON
        );

        assert_abs_diff_eq!(
            Quaternion::<f32>::identity().to_matrix(),
            Matrix3::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn creating_quaternion_from_matrix_works() {
        let rotation = Quaternion::from_matrix(&Matrix3::from_rotation_z(Degrees(90.0_f32)));
        assert_abs_diff_eq!(
            rotation,
            Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0)),
            epsilon = EPSILON
        );

        // Half turns about each axis exercise the low-trace branches.
        assert_abs_diff_eq!(
            Quaternion::from_matrix(&Matrix3::from_rotation_x(Degrees(180.0_f32))),
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_matrix(&Matrix3::from_rotation_y(Degrees(180.0_f32))),
            Quaternion::new(0.0, 1.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_matrix(&Matrix3::from_rotation_z(Degrees(180.0_f32))),
            Quaternion::new(0.0, 0.0, 1.0, 0.0),
            epsilon = EPSILON
        );

        let quaternion = Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 1.0, -1.0), Degrees(45.0));
        assert_abs_diff_eq!(
            Quaternion::from_matrix(&quaternion.to_matrix()),
            quaternion,
            epsilon = EPSILON
        );
    }

    #[test]
    fn creating_quaternion_from_euler_angles_works() {
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&EulerAngles::new(
                Degrees(0.0_f32),
                Degrees(45.0),
                Degrees(0.0),
            )),
            Quaternion::new(0.0, 0.0, 0.382_683_43, 0.923_879_5),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&EulerAngles::new(
                Degrees(0.0_f32),
                Degrees(45.0),
                Degrees(90.0),
            )),
            Quaternion::new(-0.270_598_05, 0.653_281_5, 0.270_598_05, 0.653_281_5),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&EulerAngles::new(
                Degrees(90.0_f32),
                Degrees(-45.0),
                Degrees(90.0),
            )),
            Quaternion::new(0.653_281_5, 0.653_281_5, 0.270_598_05, 0.270_598_05),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&EulerAngles::new(
                Degrees(10.0_f32),
                Degrees(95.0),
                Degrees(67.0),
            )),
            Quaternion::new(-0.356_281_67, 0.317_880_48, 0.644_964_52, 0.596_687_68),
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_euler_angle_round_trip_works() {
        for angles in [
            EulerAngles::new(Degrees(30.0_f64), Degrees(0.0), Degrees(0.0)),
            EulerAngles::new(Degrees(0.0), Degrees(45.0), Degrees(0.0)),
            EulerAngles::new(Degrees(0.0), Degrees(0.0), Degrees(60.0)),
            EulerAngles::new(Degrees(45.0), Degrees(30.0), Degrees(90.0)),
        ] {
            let extracted = Quaternion::from_euler_angles(&angles).to_euler_angles();
            assert_abs_diff_eq!(extracted, angles, epsilon = 1e-9);
        }

        // Near the pitch pole the extracted angles can differ from the
        // originals, but they must describe the same rotation.
        let angles = EulerAngles::new(Degrees(10.0_f64), Degrees(95.0), Degrees(67.0));
        let quaternion = Quaternion::from_euler_angles(&angles);
        let rebuilt = Quaternion::from_euler_angles(&quaternion.to_euler_angles());
        let probe = Vector3::new(0.3, -1.2, 2.1);
        assert_abs_diff_eq!(
            rebuilt.rotate_vector(&probe),
            quaternion.rotate_vector(&probe),
            epsilon = 1e-9
        );
    }

    #[test]
    fn quaternion_logarithm_and_exponential_work() {
        let quarter_turn = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        assert_abs_diff_eq!(
            quarter_turn.ln(),
            Quaternion::new(0.0, 0.0, std::f32::consts::FRAC_PI_4, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(quarter_turn.ln().exp(), quarter_turn, epsilon = EPSILON);

        // The logarithm sees only the direction, not the magnitude.
        assert_abs_diff_eq!(
            (quarter_turn * 2.0).ln(),
            quarter_turn.ln(),
            epsilon = EPSILON
        );

        let skewed = Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 1.0, -1.0), Degrees(45.0));
        assert_abs_diff_eq!(skewed.ln().exp(), skewed, epsilon = EPSILON);

        assert_eq!(Quaternion::<f32>::identity().ln(), Quaternion::zeros());
        assert_eq!(Quaternion::<f32>::zeros().exp(), Quaternion::identity());
    }

    #[test]
    fn raising_quaternion_to_power_scales_the_rotation() {
        let quarter_turn = Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(90.0_f32));
        assert_abs_diff_eq!(
            quarter_turn.powf(2.0),
            Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(180.0)),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            quarter_turn.powf(1.0 / 3.0),
            Quaternion::from_axis_angle(&Vector3::unit_z(), Degrees(30.0)),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            quarter_turn.powf(2.0),
            quarter_turn * quarter_turn,
            epsilon = EPSILON
        );
        let third = quarter_turn.powf(1.0 / 3.0);
        assert_abs_diff_eq!(third * third * third, quarter_turn, epsilon = EPSILON);
        assert_abs_diff_eq!(quarter_turn.powf(1.0), quarter_turn, epsilon = EPSILON);
        assert_abs_diff_eq!(
            Quaternion::<f32>::identity().powf(7.0),
            Quaternion::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_almost_equality_scales_with_magnitude() {
        let base = Quaternion::new(1_000_000.0_f32, 0.0, 0.0, 1.0);
        let nudged = Quaternion::new(1_000_001.0_f32, 0.0, 0.0, 1.0);
        assert!(almost_equals(base, nudged));

        let base = Quaternion::new(10_000.0_f32, 0.0, 0.0, 1.0);
        let nudged = Quaternion::new(10_001.0_f32, 0.0, 0.0, 1.0);
        assert!(!almost_equals(base, nudged));

        assert!(Quaternion::<f32>::zeros().almost_zero());
    }

    #[test]
    fn formatting_quaternion_works() {
        assert_eq!(
            format!("{}", Quaternion::new(4.0_f32, 2.0, 0.5, -1.0)),
            "(x: 4.000000 y: 2.000000 z: 0.500000 w: -1.000000)"
        );
    }

    #[test]
    fn parsing_quaternion_from_string_works() {
        let quaternion: Quaternion<f32> = "0.5 -1 2.25 4".parse().unwrap();
        assert_eq!(quaternion, Quaternion::new(0.5, -1.0, 2.25, 4.0));

        assert!("1 2 3".parse::<Quaternion<f32>>().is_err());
        assert!("1 2 3 4 5".parse::<Quaternion<f32>>().is_err());
        assert!("1 2 3 abc".parse::<Quaternion<f32>>().is_err());
    }
}
