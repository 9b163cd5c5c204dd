//! Shapes supported by collide3d.

#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};
pub use self::shape_error::ShapeError;
pub use self::sphere::Sphere;

#[doc(hidden)]
pub mod shape;
mod shape_error;
mod sphere;
