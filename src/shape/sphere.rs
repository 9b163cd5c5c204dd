use core::fmt;

use crate::bounding_volume::LocalAabbCache;
use crate::math::{AngularInertia, Isometry, Point, Real};
use crate::shape::shape_error::{validate_radius, ShapeError};
use na::{Matrix3, RealField};
#[cfg(feature = "serde-serialize")]
use serde::Deserialize;

// Edge length, divided by two, of the icosahedron circumscribing a unit sphere:
// 6 / (sqrt(27) + sqrt(15)).
const ICOSAHEDRON_HALF_EDGE: Real = 0.661_584_538_249_607_5;
// (1 + sqrt(5)) / 2
const GOLDEN_RATIO: Real = 1.618_033_988_749_895;

/// A sphere centered at the origin of its local frame.
///
/// The radius is a plain public field and can be changed at any time by whoever owns
/// the sphere. The local AABB is derived from it lazily: [`Sphere::local_aabb`] caches
/// its result along with the radius it was computed from, and recomputes it only when
/// it observes a different radius. The cache is protected by a spin lock, so a sphere
/// can be shared between threads and queried concurrently.
///
/// Since changing the radius requires `&mut Sphere`, the radius can never change while
/// another thread is reading the local AABB: every returned AABB matches the radius
/// that was live during the call.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use collide3d::shape::Sphere;
/// use nalgebra::Vector3;
///
/// let mut sphere = Sphere::new(2.0);
/// assert_eq!(sphere.local_aabb().half_extents(), Vector3::new(2.0, 2.0, 2.0));
///
/// sphere.radius = 5.0;
/// assert_eq!(sphere.local_aabb().half_extents(), Vector3::new(5.0, 5.0, 5.0));
/// assert_eq!(sphere.to_string(), "Sphere(5)");
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub(crate) local_aabb_cache: LocalAabbCache<Real>,
}

static_assertions::assert_impl_all!(Sphere: Send, Sync);

impl Sphere {
    /// Creates a new sphere with the given radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative, NaN, or infinite. See [`Sphere::try_new`] for
    /// a non-panicking alternative.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Self::try_new(radius).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Creates a new sphere with the given radius, if it is finite and non-negative.
    #[inline]
    pub fn try_new(radius: Real) -> Result<Sphere, ShapeError> {
        validate_radius(radius)?;
        Ok(Sphere {
            radius,
            local_aabb_cache: LocalAabbCache::new(),
        })
    }

    /// Checks that the current radius is finite and non-negative.
    ///
    /// The radius being a public field, this is the only way to detect that it was set
    /// to an invalid value after construction.
    #[inline]
    pub fn validate(&self) -> Result<(), ShapeError> {
        validate_radius(self.radius)
    }

    /// Computes a scaled version of this sphere.
    ///
    /// The result has a radius of `self.radius * scale.abs()` and an empty AABB cache.
    #[inline]
    #[must_use]
    pub fn scaled(&self, scale: Real) -> Self {
        Sphere {
            radius: self.radius * scale.abs(),
            local_aabb_cache: LocalAabbCache::new(),
        }
    }

    /// The radius used to compute the currently cached local AABB, if any.
    #[inline]
    pub fn cached_local_aabb_radius(&self) -> Option<Real> {
        self.local_aabb_cache.cached_key()
    }

    /// The volume of this sphere: `4/3 * π * radius³`.
    ///
    /// This is computed on every call.
    #[inline]
    pub fn volume(&self) -> Real {
        Real::pi() * self.radius * self.radius * self.radius * 4.0 / 3.0
    }

    /// The angular inertia tensor of this sphere with a unit density.
    ///
    /// The mass is taken equal to the volume `V`, so the tensor is the diagonal matrix
    /// with `2/5 * V * radius²` on every diagonal entry. This is computed on every call.
    #[inline]
    pub fn moment_of_inertia(&self) -> AngularInertia<Real> {
        let i = self.volume() * self.radius * self.radius * 2.0 / 5.0;
        Matrix3::from_diagonal_element(i)
    }

    /// The vertices of a convex polyhedron bounding this sphere placed at `pos`.
    ///
    /// These are the 12 vertices of the icosahedron circumscribing the sphere, i.e.,
    /// the icosahedron whose faces are all tangent to the sphere.
    pub fn bound_vertices(&self, pos: &Isometry<Real>) -> [Point<Real>; 12] {
        let a = ICOSAHEDRON_HALF_EDGE * self.radius;
        let b = GOLDEN_RATIO * a;

        [
            pos * Point::new(0.0, a, b),
            pos * Point::new(0.0, -a, b),
            pos * Point::new(0.0, a, -b),
            pos * Point::new(0.0, -a, -b),
            pos * Point::new(a, b, 0.0),
            pos * Point::new(-a, b, 0.0),
            pos * Point::new(a, -b, 0.0),
            pos * Point::new(-a, -b, 0.0),
            pos * Point::new(b, 0.0, a),
            pos * Point::new(b, 0.0, -a),
            pos * Point::new(-b, 0.0, a),
            pos * Point::new(-b, 0.0, -a),
        ]
    }
}

// Deserialized spheres go through the same radius validation as `Sphere::try_new`.
#[cfg(feature = "serde-serialize")]
impl<'de> Deserialize<'de> for Sphere {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "Sphere")]
        struct SphereParams {
            radius: Real,
        }

        let params = SphereParams::deserialize(deserializer)?;
        Sphere::try_new(params.radius).map_err(serde::de::Error::custom)
    }
}

// The cache is derived data: two spheres with the same radius are equal.
impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere({})", self.radius)
    }
}
