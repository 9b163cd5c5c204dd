use collide3d::math::{Point, Real, Vector};
use collide3d::na::RealField;
use collide3d::shape::{Shape, Sphere};

#[test]
fn sphere_volume_closed_form() {
    for radius in [0.0, 0.5, 1.0, 2.0, 10.0] {
        let sphere = Sphere::new(radius);
        let expected = 4.0 / 3.0 * Real::pi() * radius * radius * radius;
        assert_relative_eq!(sphere.compute_volume(), expected, max_relative = 1.0e-6);
    }

    assert_relative_eq!(Sphere::new(2.0).compute_volume(), 33.51, epsilon = 1.0e-2);
}

#[test]
fn sphere_inertia_is_isotropic_diagonal() {
    for radius in [0.5, 1.0, 4.0] {
        let sphere = Sphere::new(radius);
        let inertia = sphere.compute_moment_of_inertia();
        let expected = 2.0 / 5.0 * sphere.compute_volume() * radius * radius;

        assert_relative_eq!(inertia.diagonal(), Vector::repeat(expected), max_relative = 1.0e-6);
        assert_eq!(inertia.m12, 0.0);
        assert_eq!(inertia.m13, 0.0);
        assert_eq!(inertia.m21, 0.0);
        assert_eq!(inertia.m23, 0.0);
        assert_eq!(inertia.m31, 0.0);
        assert_eq!(inertia.m32, 0.0);
    }
}

#[test]
fn sphere_mass_properties_agree_with_unit_density_inertia() {
    let sphere = Sphere::new(1.5);
    let mprops = sphere.mass_properties(1.0);

    assert_eq!(sphere.compute_center_of_mass(), Point::origin());
    assert_eq!(mprops.local_com, Point::origin());
    assert_relative_eq!(mprops.mass(), sphere.compute_volume(), max_relative = 1.0e-6);
    assert_relative_eq!(
        mprops.reconstruct_inertia_matrix(),
        sphere.compute_moment_of_inertia_related_to_com(),
        max_relative = 1.0e-5
    );

    let heavy = sphere.mass_properties(7.0);
    assert_relative_eq!(heavy.mass(), 7.0 * mprops.mass(), max_relative = 1.0e-6);
}
