use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Isometry, Point, Real};
use crate::shape::Sphere;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use downcast_rs::{impl_downcast, DowncastSync};
use na::Matrix3;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
///
/// This is the node type used by collision dispatchers to select the algorithm
/// suited to a pair of shapes.
pub enum ShapeType {
    /// A sphere shape.
    Sphere = 0,
    /// A box shape.
    Box,
    /// An ellipsoid shape.
    Ellipsoid,
    /// A capsule shape.
    Capsule,
    /// A cone shape.
    Cone,
    /// A cylindrical shape.
    Cylinder,
    /// A convex polyhedron.
    Convex,
    /// An infinitely thin plane.
    Plane,
    /// A shape representing a full half-space.
    HalfSpace,
    /// A triangle shape.
    Triangle,
    /// An octree of occupancy cells.
    Octree,
    /// A custom user-defined shape.
    Custom,
}

#[derive(Copy, Clone)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A sphere shape.
    Sphere(&'a Sphere),
    /// A custom user-defined shape with a type identified by a number.
    Custom(u32),
}

/// Trait implemented by shapes usable by collision-detection algorithms.
///
/// Broad-phase and narrow-phase algorithms only rely on this contract, so they stay
/// polymorphic over the shape kind. Every shape owns its parameters and whatever
/// cached data it derives from them.
///
/// Inertia-related methods follow a unit-density convention: the mass of a shape is
/// taken equal to its volume. Use [`Shape::mass_properties`] for an actual density.
pub trait Shape: DowncastSync {
    /// Computes the AABB of this shape in its local frame.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the AABB of this shape with the given position.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_local_aabb().transform_by(position)
    }

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// Computes the volume of this shape.
    fn compute_volume(&self) -> Real;

    /// Computes the angular inertia tensor of this shape about the origin of its local
    /// frame, with a unit density.
    fn compute_moment_of_inertia(&self) -> AngularInertia<Real>;

    /// Computes the center of mass of this shape in its local frame.
    fn compute_center_of_mass(&self) -> Point<Real> {
        Point::origin()
    }

    /// Computes the angular inertia tensor of this shape about its center of mass, with a
    /// unit density.
    fn compute_moment_of_inertia_related_to_com(&self) -> AngularInertia<Real> {
        let com = self.compute_center_of_mass().coords;
        let volume = self.compute_volume();
        let shift = Matrix3::from_diagonal_element(com.norm_squared()) - com * com.transpose();

        self.compute_moment_of_inertia() - shift * volume
    }

    /// Compute the mass-properties of this shape given its uniform density.
    fn mass_properties(&self, density: Real) -> MassProperties;

    /// The vertices of a convex polyhedron bounding this shape placed at `position`.
    ///
    /// This is a point-cloud proxy for algorithms that cannot work with the analytic
    /// shape.
    #[cfg(feature = "alloc")]
    fn bound_vertices(&self, position: &Isometry<Real>) -> Vec<Point<Real>>;

    /// Is this shape known to be convex?
    ///
    /// If this returns `true` then `self` is known to be convex.
    /// If this returns `false` then it is not known whether or
    /// not `self` is convex.
    fn is_convex(&self) -> bool {
        false
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        self.downcast_ref()
    }
}

impl Shape for Sphere {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Sphere(self)
    }

    fn compute_volume(&self) -> Real {
        self.volume()
    }

    fn compute_moment_of_inertia(&self) -> AngularInertia<Real> {
        self.moment_of_inertia()
    }

    // Centered at the origin, so no parallel-axis shift is needed.
    fn compute_moment_of_inertia_related_to_com(&self) -> AngularInertia<Real> {
        self.moment_of_inertia()
    }

    fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_sphere(density, self.radius)
    }

    #[cfg(feature = "alloc")]
    fn bound_vertices(&self, position: &Isometry<Real>) -> Vec<Point<Real>> {
        Sphere::bound_vertices(self, position).to_vec()
    }

    fn is_convex(&self) -> bool {
        true
    }
}
