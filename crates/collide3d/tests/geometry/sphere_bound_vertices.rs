use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::shape::{Shape, Sphere};

fn random_unit_vector(rng: &mut oorandom::Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        )
        .map(|e| e as Real);

        if let Some(dir) = v.try_normalize(1.0e-3) {
            return dir;
        }
    }
}

#[test]
fn sphere_bound_vertices_enclose_the_sphere() {
    let mut rng = oorandom::Rand32::new(42);

    for radius in [0.5, 1.0, 3.0] {
        let sphere = Sphere::new(radius);
        let vertices = sphere.bound_vertices(&Isometry::identity());

        for _ in 0..1_000 {
            let dir = random_unit_vector(&mut rng);
            // The support value of a polytope containing the sphere is at least its radius.
            let support = vertices
                .iter()
                .map(|pt| pt.coords.dot(&dir))
                .fold(Real::MIN, Real::max);
            assert!(support >= radius * (1.0 - 1.0e-5), "{} < {}", support, radius);
        }
    }
}

#[test]
fn sphere_bound_vertices_are_tight() {
    let sphere = Sphere::new(1.0);
    let vertices = sphere.bound_vertices(&Isometry::identity());

    // (1, 1, 1) is the normal of one of the icosahedron faces, tangent to the sphere.
    let dir = Vector::repeat(1.0).normalize();
    let support = vertices
        .iter()
        .map(|pt| pt.coords.dot(&dir))
        .fold(Real::MIN, Real::max);
    assert_relative_eq!(support, 1.0, epsilon = 1.0e-5);
}

#[test]
fn sphere_bound_vertices_through_dyn_shape() {
    let shape: Box<dyn Shape> = Box::new(Sphere::new(2.0));
    let pos = Isometry::new(Vector::new(1.0, 2.0, 3.0), Vector::new(0.1, 0.2, 0.3));
    let vertices = shape.bound_vertices(&pos);

    assert_eq!(vertices.len(), 12);
    let world_aabb = shape.compute_aabb(&pos);
    let centroid = vertices
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords)
        / vertices.len() as Real;
    // The icosahedron sticks out of the sphere but shares its center.
    assert_relative_eq!(Point::from(centroid), world_aabb.center(), epsilon = 1.0e-4);
    assert!(vertices
        .iter()
        .all(|pt| (pt - Point::new(1.0, 2.0, 3.0)).norm() >= 2.0));
}
