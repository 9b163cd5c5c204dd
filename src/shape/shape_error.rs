use crate::math::Real;

/// Errors raised when a shape is built from invalid parameters.
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use collide3d::shape::{ShapeError, Sphere};
///
/// assert_eq!(Sphere::try_new(-1.0).unwrap_err(), ShapeError::NegativeRadius(-1.0));
/// assert!(matches!(
///     Sphere::try_new(f32::NAN),
///     Err(ShapeError::NonFiniteRadius(_))
/// ));
/// assert!(Sphere::try_new(0.0).is_ok());
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum ShapeError {
    /// The radius is smaller than zero.
    #[error("The radius of a shape must be non-negative, found {0}.")]
    NegativeRadius(Real),
    /// The radius is NaN or infinite.
    #[error("The radius of a shape must be finite, found {0}.")]
    NonFiniteRadius(Real),
}

/// Checks that `radius` is usable as the radius of a shape.
pub(crate) fn validate_radius(radius: Real) -> Result<(), ShapeError> {
    if !radius.is_finite() {
        Err(ShapeError::NonFiniteRadius(radius))
    } else if radius < 0.0 {
        Err(ShapeError::NegativeRadius(radius))
    } else {
        Ok(())
    }
}
