use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Sphere;

/// Computes the Axis-Aligned Bounding Box of a sphere centered at `center`.
#[inline]
pub fn sphere_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

/// Computes the Axis-Aligned Bounding Box of a sphere centered at the origin.
#[inline]
pub fn local_sphere_aabb(radius: Real) -> Aabb {
    let half_extents = Point::from(Vector::repeat(radius));

    Aabb::new(-half_extents, half_extents)
}

impl Sphere {
    /// Computes the world-space AABB of this sphere transformed by `pos`.
    ///
    /// The rotational part of `pos` is irrelevant for a sphere. This does not touch the
    /// cached local AABB.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        sphere_aabb(&Point::from(pos.translation.vector), self.radius)
    }

    /// Computes the local-space AABB of this sphere.
    ///
    /// The result is cached along with the radius it was computed from, and only
    /// recomputed when a different radius is observed.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.local_aabb_cache.get_or_compute(self.radius, |radius| {
            if radius < 0.0 {
                log::warn!(
                    "Computing the local AABB of a sphere with a negative radius ({}).",
                    radius
                );
            }

            local_sphere_aabb(radius)
        })
    }
}
