//! Linear algebra utilities.

#[macro_use]
mod macros;

pub mod angle;
pub mod equality;
pub mod matrix;
pub mod num;
pub mod quaternion;
pub mod vector;

mod parse;

pub use angle::{Angle, Degrees, EulerAngles, Radians};
pub use equality::{AlmostEqual, almost_equals, almost_equals_with, almost_zero, almost_zero_with};
pub use matrix::{Matrix3, Matrix4};
pub use num::{Float, Scalar};
pub use quaternion::{AngleAxis, Quaternion};
pub use vector::{Vector2, Vector3, Vector4};
