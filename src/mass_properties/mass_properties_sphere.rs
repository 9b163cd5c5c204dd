use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use na::RealField;

impl MassProperties {
    /// The volume and the angular inertia per unit of mass of a sphere.
    pub(crate) fn sphere_volume_unit_angular_inertia(
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let volume = Real::pi() * radius * radius * radius * 4.0 / 3.0;
        let i = radius * radius * 2.0 / 5.0;

        (volume, Vector::repeat(i))
    }

    /// Computes the mass properties of a sphere with the given uniform density.
    ///
    /// The center of mass is at the origin and the angular inertia is isotropic:
    /// `2/5 * mass * radius²` along every axis.
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use collide3d::mass_properties::MassProperties;
    /// use nalgebra::Point3;
    ///
    /// // A 0.5m radius sphere of water.
    /// let mprops = MassProperties::from_sphere(1000.0, 0.5);
    ///
    /// assert!((mprops.mass() - 523.6).abs() < 1.0);
    /// assert_eq!(mprops.local_com, Point3::origin());
    /// # }
    /// ```
    pub fn from_sphere(density: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::sphere_volume_unit_angular_inertia(radius);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
