use crate::math::{AngularInertia, Point, PrincipalAngularInertia, Real};
use approx::{AbsDiffEq, RelativeEq};
use na::{ComplexField, Matrix3};

// Zero stands for an infinite mass or inertia, in both directions.
fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a rigid-body.
///
/// The principal axes of the angular inertia are the axes of the local frame. This is
/// exact for every primitive of this crate since they are all symmetric with respect
/// to their local coordinate planes.
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inverse of the mass of a rigid-body.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the square root of the principal angular inertia of the rigid-body.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: PrincipalAngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the rigid-body.
    /// The principal angular inertia are the angular inertia along the coordinate axes in the local-space
    /// of the rigid-body.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        let inv_mass = inv(mass);
        let inv_principal_inertia_sqrt =
            principal_inertia.map(|e| inv(ComplexField::sqrt(e)));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
        }
    }

    /// The mass of the rigid-body.
    pub fn mass(&self) -> Real {
        inv(self.inv_mass)
    }

    /// The principal angular inertia of the rigid-body.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia<Real> {
        self.inv_principal_inertia_sqrt.map(|e| inv(e * e))
    }

    /// Reconstructs the angular inertia tensor of the rigid body, about its center of mass.
    pub fn reconstruct_inertia_matrix(&self) -> AngularInertia<Real> {
        Matrix3::from_diagonal(&self.principal_inertia())
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.inv_mass.abs_diff_eq(&other.inv_mass, epsilon)
            && self
                .inv_principal_inertia_sqrt
                .abs_diff_eq(&other.inv_principal_inertia_sqrt, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self
                .inv_mass
                .relative_eq(&other.inv_mass, epsilon, max_relative)
            && self.inv_principal_inertia_sqrt.relative_eq(
                &other.inv_principal_inertia_sqrt,
                epsilon,
                max_relative,
            )
    }
}
