//! Matrices.

use crate::angle::{Angle, Degrees, EulerAngles, Radians};
use crate::equality::AlmostEqual;
use crate::num::{Float, Scalar};
use crate::vector::{Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut, Mul};

/// A 3x3 matrix.
///
/// The elements are stored in column-major order, with each column a
/// [`Vector3`].
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3<T> {
    column_1: Vector3<T>,
    column_2: Vector3<T>,
    column_3: Vector3<T>,
}

/// A 4x4 matrix.
///
/// The elements are stored in column-major order, with each column a
/// [`Vector4`]. Multiplying a [`Vector3`] onto the right of the matrix
/// implicitly extends it to a point with unit w-component and drops the
/// w-component of the product.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix4<T> {
    column_1: Vector4<T>,
    column_2: Vector4<T>,
    column_3: Vector4<T>,
    column_4: Vector4<T>,
}

impl<T: Scalar> Matrix3<T> {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z())
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(Vector3::zeros(), Vector3::zeros(), Vector3::zeros())
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector3<T>) -> Self {
        let mut m = Self::zeros();
        *m.column_1.x_mut() = diagonal.x();
        *m.column_2.y_mut() = diagonal.y();
        *m.column_3.z_mut() = diagonal.z();
        m
    }

    /// Creates a diagonal matrix with the given element repeated along the
    /// diagonal.
    #[inline]
    pub const fn from_diagonal_element(element: T) -> Self {
        Self::from_diagonal(&Vector3::same(element))
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector3<T>,
        column_2: Vector3<T>,
        column_3: Vector3<T>,
    ) -> Self {
        Self {
            column_1,
            column_2,
            column_3,
        }
    }

    /// Creates a matrix that scales vectors by the given factors along each
    /// axis.
    #[inline]
    pub const fn from_scale(scale: &Vector3<T>) -> Self {
        Self::from_diagonal(scale)
    }

    /// The first column of the matrix.
    #[inline]
    pub const fn column_1(&self) -> &Vector3<T> {
        &self.column_1
    }

    /// The second column of the matrix.
    #[inline]
    pub const fn column_2(&self) -> &Vector3<T> {
        &self.column_2
    }

    /// The third column of the matrix.
    #[inline]
    pub const fn column_3(&self) -> &Vector3<T> {
        &self.column_3
    }

    /// Sets the first column of the matrix to the given column.
    #[inline]
    pub const fn set_column_1(&mut self, column: Vector3<T>) {
        self.column_1 = column;
    }

    /// Sets the second column of the matrix to the given column.
    #[inline]
    pub const fn set_column_2(&mut self, column: Vector3<T>) {
        self.column_2 = column;
    }

    /// Sets the third column of the matrix to the given column.
    #[inline]
    pub const fn set_column_3(&mut self, column: Vector3<T>) {
        self.column_3 = column;
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> T {
        match j {
            0 => self.column_1[i],
            1 => self.column_2[i],
            2 => self.column_3[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        match j {
            0 => &mut self.column_1[i],
            1 => &mut self.column_2[i],
            2 => &mut self.column_3[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_columns(
            Vector3::new(self.column_1.x(), self.column_2.x(), self.column_3.x()),
            Vector3::new(self.column_1.y(), self.column_2.y(), self.column_3.y()),
            Vector3::new(self.column_1.z(), self.column_2.z(), self.column_3.z()),
        )
    }

    /// Returns the sum of the diagonal elements of this matrix.
    #[inline]
    pub fn trace(&self) -> T {
        self.column_1.x() + self.column_2.y() + self.column_3.z()
    }

    /// Returns the determinant of this matrix.
    #[inline]
    pub fn determinant(&self) -> T {
        self.column_1.dot(&self.column_2.cross(&self.column_3))
    }
}

impl<F: Float> Matrix3<F> {
    /// Creates a matrix describing a rotation by the given angle around the
    /// x-axis.
    #[inline]
    pub fn from_rotation_x<A: Angle<F>>(angle: A) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_columns(
            Vector3::unit_x(),
            Vector3::new(F::ZERO, cos, sin),
            Vector3::new(F::ZERO, -sin, cos),
        )
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// y-axis.
    #[inline]
    pub fn from_rotation_y<A: Angle<F>>(angle: A) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_columns(
            Vector3::new(cos, F::ZERO, -sin),
            Vector3::unit_y(),
            Vector3::new(sin, F::ZERO, cos),
        )
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// z-axis.
    #[inline]
    pub fn from_rotation_z<A: Angle<F>>(angle: A) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_columns(
            Vector3::new(cos, sin, F::ZERO),
            Vector3::new(-sin, cos, F::ZERO),
            Vector3::unit_z(),
        )
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// given axis. The axis does not have to be normalized.
    pub fn from_axis_angle<A: Angle<F>>(axis: &Vector3<F>, angle: A) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = angle.radians().sin_cos();
        let k = F::ONE - cos;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        Self::from_columns(
            Vector3::new(cos + x * x * k, y * x * k + z * sin, z * x * k - y * sin),
            Vector3::new(x * y * k - z * sin, cos + y * y * k, z * y * k + x * sin),
            Vector3::new(x * z * k + y * sin, y * z * k - x * sin, cos + z * z * k),
        )
    }

    /// Creates a matrix applying the rotation described by the given set of
    /// Euler angles.
    #[inline]
    pub fn from_euler_angles<A: Angle<F>>(angles: &EulerAngles<A>) -> Self {
        Self::from_rotation_x(angles.roll)
            * Self::from_rotation_z(angles.pitch)
            * Self::from_rotation_y(angles.yaw)
    }

    /// Returns a set of Euler angles describing the same rotation as this
    /// matrix. The matrix is assumed to be a pure rotation matrix.
    ///
    /// Any rotation can be described by more than one set of Euler angles.
    /// When the pitch is at one of the poles where roll and yaw turn around
    /// the same world axis, the returned roll is zero.
    pub fn to_euler_angles(&self) -> EulerAngles<Degrees<F>> {
        let sin_pitch = (-self.column_2.x()).max(F::NEG_ONE).min(F::ONE);
        let pitch = sin_pitch.asin();

        let (roll, yaw) = if sin_pitch.almost_eq(&F::ONE) {
            (F::ZERO, self.column_3.y().atan2(self.column_1.y()))
        } else if sin_pitch.almost_eq(&F::NEG_ONE) {
            (F::ZERO, (-self.column_3.y()).atan2(-self.column_1.y()))
        } else {
            (
                self.column_2.z().atan2(self.column_2.y()),
                self.column_3.x().atan2(self.column_1.x()),
            )
        };

        EulerAngles::new(
            Radians(roll).as_degrees(),
            Radians(pitch).as_degrees(),
            Radians(yaw).as_degrees(),
        )
    }

    /// Returns the inverse of this matrix. If the matrix is not invertible,
    /// the result will be non-finite.
    pub fn inverted(&self) -> Self {
        let row_1 = self.column_2.cross(&self.column_3);
        let row_2 = self.column_3.cross(&self.column_1);
        let row_3 = self.column_1.cross(&self.column_2);
        let determinant = self.column_1.dot(&row_1);
        Self::from_columns(
            Vector3::new(row_1.x(), row_2.x(), row_3.x()),
            Vector3::new(row_1.y(), row_2.y(), row_3.y()),
            Vector3::new(row_1.z(), row_2.z(), row_3.z()),
        ) / determinant
    }
}

impl_binop!(<T: Scalar> Add, add, Matrix3<T>, Matrix3<T>, Matrix3<T>, |a, b| {
    Matrix3::from_columns(
        a.column_1 + b.column_1,
        a.column_2 + b.column_2,
        a.column_3 + b.column_3,
    )
});

impl_binop!(<T: Scalar> Sub, sub, Matrix3<T>, Matrix3<T>, Matrix3<T>, |a, b| {
    Matrix3::from_columns(
        a.column_1 - b.column_1,
        a.column_2 - b.column_2,
        a.column_3 - b.column_3,
    )
});

impl_binop!(<T: Scalar> Mul, mul, Matrix3<T>, Matrix3<T>, Matrix3<T>, |a, b| {
    Matrix3::from_columns(a * b.column_1, a * b.column_2, a * b.column_3)
});

impl_binop!(<T: Scalar> Mul, mul, Matrix3<T>, Vector3<T>, Vector3<T>, |a, b| {
    a.column_1 * b.x() + a.column_2 * b.y() + a.column_3 * b.z()
});

impl_binop!(<T: Scalar> Mul, mul, Matrix3<T>, T, Matrix3<T>, |a, b| {
    Matrix3::from_columns(a.column_1 * *b, a.column_2 * *b, a.column_3 * *b)
});

impl_binop!(Mul, mul, i32, Matrix3<i32>, Matrix3<i32>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, i64, Matrix3<i64>, Matrix3<i64>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, f32, Matrix3<f32>, Matrix3<f32>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, f64, Matrix3<f64>, Matrix3<f64>, |a, b| { b.mul(*a) });

impl_binop!(<T: Scalar> Div, div, Matrix3<T>, T, Matrix3<T>, |a, b| {
    Matrix3::from_columns(a.column_1 / *b, a.column_2 / *b, a.column_3 / *b)
});

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Matrix3<T>, Matrix3<T>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Matrix3<T>, Matrix3<T>, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Matrix3<T>, Matrix3<T>, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Matrix3<T>, T, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Matrix3<T>, T, |a, b| {
    *a = *a / b;
});

impl_unary_op!(<T: Scalar> Neg, neg, Matrix3<T>, Matrix3<T>, |m| {
    Matrix3::from_columns(-m.column_1, -m.column_2, -m.column_3)
});

impl<T: Scalar> Index<usize> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.column_1,
            1 => &self.column_2,
            2 => &self.column_3,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix3<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.column_1,
            1 => &mut self.column_2,
            2 => &mut self.column_3,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<T: Scalar> Matrix3<T>, |a, b, epsilon| {
    a.column_1.abs_diff_eq(&b.column_1, epsilon)
        && a.column_2.abs_diff_eq(&b.column_2, epsilon)
        && a.column_3.abs_diff_eq(&b.column_3, epsilon)
});

impl_relative_eq!(<T: Float> Matrix3<T>, |a, b, epsilon, max_relative| {
    a.column_1.relative_eq(&b.column_1, epsilon, max_relative)
        && a.column_2.relative_eq(&b.column_2, epsilon, max_relative)
        && a.column_3.relative_eq(&b.column_3, epsilon, max_relative)
});

impl_almost_equal!(<T: Scalar> Matrix3<T>, |a, b, epsilon| {
    a.column_1.almost_eq_with(&b.column_1, epsilon)
        && a.column_2.almost_eq_with(&b.column_2, epsilon)
        && a.column_3.almost_eq_with(&b.column_3, epsilon)
}, |m, epsilon| {
    m.column_1.almost_zero_with(epsilon)
        && m.column_2.almost_zero_with(epsilon)
        && m.column_3.almost_zero_with(epsilon)
});

unsafe impl<T: Scalar> Zeroable for Matrix3<T> {}
unsafe impl<T: Scalar> Pod for Matrix3<T> {}

impl<T: Scalar> Matrix4<T> {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4<T>) -> Self {
        let mut m = Self::zeros();
        *m.column_1.x_mut() = diagonal.x();
        *m.column_2.y_mut() = diagonal.y();
        *m.column_3.z_mut() = diagonal.z();
        *m.column_4.w_mut() = diagonal.w();
        m
    }

    /// Creates a diagonal matrix with the given element repeated along the
    /// diagonal.
    #[inline]
    pub const fn from_diagonal_element(element: T) -> Self {
        Self::from_diagonal(&Vector4::same(element))
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4<T>,
        column_2: Vector4<T>,
        column_3: Vector4<T>,
        column_4: Vector4<T>,
    ) -> Self {
        Self {
            column_1,
            column_2,
            column_3,
            column_4,
        }
    }

    /// Creates a homogeneous transformation matrix with the given matrix as
    /// the upper left 3x3 block.
    #[inline]
    pub const fn from_matrix3(matrix: &Matrix3<T>) -> Self {
        Self::from_columns(
            matrix.column_1.extended(T::ZERO),
            matrix.column_2.extended(T::ZERO),
            matrix.column_3.extended(T::ZERO),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix that translates points by the given vector.
    #[inline]
    pub const fn from_translation(translation: &Vector3<T>) -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            translation.extended(T::ONE),
        )
    }

    /// Creates a matrix that scales points by the given factors along each
    /// axis.
    #[inline]
    pub const fn from_scale(scale: &Vector3<T>) -> Self {
        Self::from_matrix3(&Matrix3::from_scale(scale))
    }

    /// Returns the upper left 3x3 block of this matrix.
    #[inline]
    pub const fn to_matrix3(&self) -> Matrix3<T> {
        Matrix3::from_columns(
            self.column_1.xyz(),
            self.column_2.xyz(),
            self.column_3.xyz(),
        )
    }

    /// The first column of the matrix.
    #[inline]
    pub const fn column_1(&self) -> &Vector4<T> {
        &self.column_1
    }

    /// The second column of the matrix.
    #[inline]
    pub const fn column_2(&self) -> &Vector4<T> {
        &self.column_2
    }

    /// The third column of the matrix.
    #[inline]
    pub const fn column_3(&self) -> &Vector4<T> {
        &self.column_3
    }

    /// The fourth column of the matrix.
    #[inline]
    pub const fn column_4(&self) -> &Vector4<T> {
        &self.column_4
    }

    /// Sets the first column of the matrix to the given column.
    #[inline]
    pub const fn set_column_1(&mut self, column: Vector4<T>) {
        self.column_1 = column;
    }

    /// Sets the second column of the matrix to the given column.
    #[inline]
    pub const fn set_column_2(&mut self, column: Vector4<T>) {
        self.column_2 = column;
    }

    /// Sets the third column of the matrix to the given column.
    #[inline]
    pub const fn set_column_3(&mut self, column: Vector4<T>) {
        self.column_3 = column;
    }

    /// Sets the fourth column of the matrix to the given column.
    #[inline]
    pub const fn set_column_4(&mut self, column: Vector4<T>) {
        self.column_4 = column;
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> T {
        match j {
            0 => self.column_1[i],
            1 => self.column_2[i],
            2 => self.column_3[i],
            3 => self.column_4[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        match j {
            0 => &mut self.column_1[i],
            1 => &mut self.column_2[i],
            2 => &mut self.column_3[i],
            3 => &mut self.column_4[i],
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::from_columns(
            Vector4::new(
                self.column_1.x(),
                self.column_2.x(),
                self.column_3.x(),
                self.column_4.x(),
            ),
            Vector4::new(
                self.column_1.y(),
                self.column_2.y(),
                self.column_3.y(),
                self.column_4.y(),
            ),
            Vector4::new(
                self.column_1.z(),
                self.column_2.z(),
                self.column_3.z(),
                self.column_4.z(),
            ),
            Vector4::new(
                self.column_1.w(),
                self.column_2.w(),
                self.column_3.w(),
                self.column_4.w(),
            ),
        )
    }

    /// Returns the sum of the diagonal elements of this matrix.
    #[inline]
    pub fn trace(&self) -> T {
        self.column_1.x() + self.column_2.y() + self.column_3.z() + self.column_4.w()
    }

    /// Returns the determinant of this matrix.
    pub fn determinant(&self) -> T {
        let (s0, s1, s2, s3, s4, s5) = self.upper_minors();
        let (c0, c1, c2, c3, c4, c5) = self.lower_minors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// The 2x2 minors formed from the upper two rows.
    fn upper_minors(&self) -> (T, T, T, T, T, T) {
        let (m00, m10) = (self.column_1.x(), self.column_1.y());
        let (m01, m11) = (self.column_2.x(), self.column_2.y());
        let (m02, m12) = (self.column_3.x(), self.column_3.y());
        let (m03, m13) = (self.column_4.x(), self.column_4.y());
        (
            m00 * m11 - m10 * m01,
            m00 * m12 - m10 * m02,
            m00 * m13 - m10 * m03,
            m01 * m12 - m11 * m02,
            m01 * m13 - m11 * m03,
            m02 * m13 - m12 * m03,
        )
    }

    /// The 2x2 minors formed from the lower two rows.
    fn lower_minors(&self) -> (T, T, T, T, T, T) {
        let (m20, m30) = (self.column_1.z(), self.column_1.w());
        let (m21, m31) = (self.column_2.z(), self.column_2.w());
        let (m22, m32) = (self.column_3.z(), self.column_3.w());
        let (m23, m33) = (self.column_4.z(), self.column_4.w());
        (
            m20 * m31 - m30 * m21,
            m20 * m32 - m30 * m22,
            m20 * m33 - m30 * m23,
            m21 * m32 - m31 * m22,
            m21 * m33 - m31 * m23,
            m22 * m33 - m32 * m23,
        )
    }
}

impl<F: Float> Matrix4<F> {
    /// Creates a matrix describing a rotation by the given angle around the
    /// x-axis.
    #[inline]
    pub fn from_rotation_x<A: Angle<F>>(angle: A) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_x(angle))
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// y-axis.
    #[inline]
    pub fn from_rotation_y<A: Angle<F>>(angle: A) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_y(angle))
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// z-axis.
    #[inline]
    pub fn from_rotation_z<A: Angle<F>>(angle: A) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_z(angle))
    }

    /// Creates a matrix describing a rotation by the given angle around the
    /// given axis. The axis does not have to be normalized.
    #[inline]
    pub fn from_axis_angle<A: Angle<F>>(axis: &Vector3<F>, angle: A) -> Self {
        Self::from_matrix3(&Matrix3::from_axis_angle(axis, angle))
    }

    /// Creates a matrix applying the rotation described by the given set of
    /// Euler angles.
    #[inline]
    pub fn from_euler_angles<A: Angle<F>>(angles: &EulerAngles<A>) -> Self {
        Self::from_matrix3(&Matrix3::from_euler_angles(angles))
    }

    /// Returns a set of Euler angles describing the same rotation as the
    /// upper left 3x3 block of this matrix, which is assumed to be a pure
    /// rotation matrix.
    #[inline]
    pub fn to_euler_angles(&self) -> EulerAngles<Degrees<F>> {
        self.to_matrix3().to_euler_angles()
    }

    /// Returns the inverse of this matrix. If the matrix is not invertible,
    /// the result will be non-finite.
    pub fn inverted(&self) -> Self {
        let (m00, m10, m20, m30) = (
            self.column_1.x(),
            self.column_1.y(),
            self.column_1.z(),
            self.column_1.w(),
        );
        let (m01, m11, m21, m31) = (
            self.column_2.x(),
            self.column_2.y(),
            self.column_2.z(),
            self.column_2.w(),
        );
        let (m02, m12, m22, m32) = (
            self.column_3.x(),
            self.column_3.y(),
            self.column_3.z(),
            self.column_3.w(),
        );
        let (m03, m13, m23, m33) = (
            self.column_4.x(),
            self.column_4.y(),
            self.column_4.z(),
            self.column_4.w(),
        );

        let (s0, s1, s2, s3, s4, s5) = self.upper_minors();
        let (c0, c1, c2, c3, c4, c5) = self.lower_minors();
        let determinant = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;

        Self::from_columns(
            Vector4::new(
                m11 * c5 - m12 * c4 + m13 * c3,
                -m10 * c5 + m12 * c2 - m13 * c1,
                m10 * c4 - m11 * c2 + m13 * c0,
                -m10 * c3 + m11 * c1 - m12 * c0,
            ),
            Vector4::new(
                -m01 * c5 + m02 * c4 - m03 * c3,
                m00 * c5 - m02 * c2 + m03 * c1,
                -m00 * c4 + m01 * c2 - m03 * c0,
                m00 * c3 - m01 * c1 + m02 * c0,
            ),
            Vector4::new(
                m31 * s5 - m32 * s4 + m33 * s3,
                -m30 * s5 + m32 * s2 - m33 * s1,
                m30 * s4 - m31 * s2 + m33 * s0,
                -m30 * s3 + m31 * s1 - m32 * s0,
            ),
            Vector4::new(
                -m21 * s5 + m22 * s4 - m23 * s3,
                m20 * s5 - m22 * s2 + m23 * s1,
                -m20 * s4 + m21 * s2 - m23 * s0,
                m20 * s3 - m21 * s1 + m22 * s0,
            ),
        ) / determinant
    }
}

impl_binop!(<T: Scalar> Add, add, Matrix4<T>, Matrix4<T>, Matrix4<T>, |a, b| {
    Matrix4::from_columns(
        a.column_1 + b.column_1,
        a.column_2 + b.column_2,
        a.column_3 + b.column_3,
        a.column_4 + b.column_4,
    )
});

impl_binop!(<T: Scalar> Sub, sub, Matrix4<T>, Matrix4<T>, Matrix4<T>, |a, b| {
    Matrix4::from_columns(
        a.column_1 - b.column_1,
        a.column_2 - b.column_2,
        a.column_3 - b.column_3,
        a.column_4 - b.column_4,
    )
});

impl_binop!(<T: Scalar> Mul, mul, Matrix4<T>, Matrix4<T>, Matrix4<T>, |a, b| {
    Matrix4::from_columns(a * b.column_1, a * b.column_2, a * b.column_3, a * b.column_4)
});

impl_binop!(<T: Scalar> Mul, mul, Matrix4<T>, Vector4<T>, Vector4<T>, |a, b| {
    a.column_1 * b.x() + a.column_2 * b.y() + a.column_3 * b.z() + a.column_4 * b.w()
});

impl_binop!(<T: Scalar> Mul, mul, Matrix4<T>, Vector3<T>, Vector3<T>, |a, b| {
    let product = a * b.extended(T::ONE);
    product.xyz()
});

impl_binop!(<T: Scalar> Mul, mul, Matrix4<T>, T, Matrix4<T>, |a, b| {
    Matrix4::from_columns(
        a.column_1 * *b,
        a.column_2 * *b,
        a.column_3 * *b,
        a.column_4 * *b,
    )
});

impl_binop!(Mul, mul, i32, Matrix4<i32>, Matrix4<i32>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, i64, Matrix4<i64>, Matrix4<i64>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, f32, Matrix4<f32>, Matrix4<f32>, |a, b| { b.mul(*a) });
impl_binop!(Mul, mul, f64, Matrix4<f64>, Matrix4<f64>, |a, b| { b.mul(*a) });

impl_binop!(<T: Scalar> Div, div, Matrix4<T>, T, Matrix4<T>, |a, b| {
    Matrix4::from_columns(
        a.column_1 / *b,
        a.column_2 / *b,
        a.column_3 / *b,
        a.column_4 / *b,
    )
});

impl_binop_assign!(<T: Scalar> AddAssign, add_assign, Matrix4<T>, Matrix4<T>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(<T: Scalar> SubAssign, sub_assign, Matrix4<T>, Matrix4<T>, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Matrix4<T>, Matrix4<T>, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<T: Scalar> MulAssign, mul_assign, Matrix4<T>, T, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(<T: Scalar> DivAssign, div_assign, Matrix4<T>, T, |a, b| {
    *a = *a / b;
});

impl_unary_op!(<T: Scalar> Neg, neg, Matrix4<T>, Matrix4<T>, |m| {
    Matrix4::from_columns(-m.column_1, -m.column_2, -m.column_3, -m.column_4)
});

impl<T: Scalar> Index<usize> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.column_1,
            1 => &self.column_2,
            2 => &self.column_3,
            3 => &self.column_4,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.column_1,
            1 => &mut self.column_2,
            2 => &mut self.column_3,
            3 => &mut self.column_4,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(<T: Scalar> Matrix4<T>, |a, b, epsilon| {
    a.column_1.abs_diff_eq(&b.column_1, epsilon)
        && a.column_2.abs_diff_eq(&b.column_2, epsilon)
        && a.column_3.abs_diff_eq(&b.column_3, epsilon)
        && a.column_4.abs_diff_eq(&b.column_4, epsilon)
});

impl_relative_eq!(<T: Float> Matrix4<T>, |a, b, epsilon, max_relative| {
    a.column_1.relative_eq(&b.column_1, epsilon, max_relative)
        && a.column_2.relative_eq(&b.column_2, epsilon, max_relative)
        && a.column_3.relative_eq(&b.column_3, epsilon, max_relative)
        && a.column_4.relative_eq(&b.column_4, epsilon, max_relative)
});

impl_almost_equal!(<T: Scalar> Matrix4<T>, |a, b, epsilon| {
    a.column_1.almost_eq_with(&b.column_1, epsilon)
        && a.column_2.almost_eq_with(&b.column_2, epsilon)
        && a.column_3.almost_eq_with(&b.column_3, epsilon)
        && a.column_4.almost_eq_with(&b.column_4, epsilon)
}, |m, epsilon| {
    m.column_1.almost_zero_with(epsilon)
        && m.column_2.almost_zero_with(epsilon)
        && m.column_3.almost_zero_with(epsilon)
        && m.column_4.almost_zero_with(epsilon)
});

unsafe impl<T: Scalar> Zeroable for Matrix4<T> {}
unsafe impl<T: Scalar> Pod for Matrix4<T> {}
