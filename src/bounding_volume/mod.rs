//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::local_aabb_cache::{CachedLocalAabb, LocalAabbCache};

#[doc(hidden)]
pub mod aabb;
mod aabb_sphere;
#[doc(hidden)]
pub mod bounding_volume;
mod local_aabb_cache;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_sphere::{local_sphere_aabb, sphere_aabb};
}
