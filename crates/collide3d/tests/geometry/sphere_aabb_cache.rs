use collide3d::bounding_volume::{Aabb, BoundingVolume};
use collide3d::math::{Isometry, Point, Vector};
use collide3d::shape::{Shape, Sphere};

#[test]
fn sphere_local_aabb_matches_radius() {
    for radius in [0.0, 0.25, 1.0, 2.0, 1.0e3] {
        let sphere = Sphere::new(radius);
        let aabb = sphere.compute_local_aabb();

        assert_eq!(aabb.half_extents(), Vector::repeat(radius));
        assert_eq!(aabb.center(), Point::origin());
    }
}

#[test]
fn sphere_local_aabb_cache_hit_is_bit_identical() {
    let sphere = Sphere::new(0.1);
    assert_eq!(sphere.cached_local_aabb_radius(), None);

    let first = sphere.compute_local_aabb();
    assert_eq!(sphere.cached_local_aabb_radius(), Some(0.1));

    let second = sphere.compute_local_aabb();
    assert_eq!(sphere.cached_local_aabb_radius(), Some(0.1));

    for (a, b) in first.vertices().iter().zip(second.vertices().iter()) {
        for i in 0..3 {
            assert_eq!(a[i].to_bits(), b[i].to_bits());
        }
    }
}

#[test]
fn sphere_local_aabb_detects_stale_radius() {
    let mut sphere = Sphere::new(2.0);
    assert_eq!(sphere.compute_local_aabb().half_extents(), Vector::repeat(2.0));

    sphere.radius = 5.0;
    // Nothing is invalidated on write.
    assert_eq!(sphere.cached_local_aabb_radius(), Some(2.0));

    assert_eq!(sphere.compute_local_aabb().half_extents(), Vector::repeat(5.0));
    assert_eq!(sphere.cached_local_aabb_radius(), Some(5.0));
    assert_eq!(sphere.to_string(), "Sphere(5)");
}

#[test]
fn sphere_world_aabb_contains_local_aabb_moved() {
    let sphere = Sphere::new(1.5);
    let pos = Isometry::translation(-3.0, 4.0, 0.5);
    let world = sphere.compute_aabb(&pos);
    let expected = Aabb::new(Point::new(-4.5, 2.5, -1.0), Point::new(-1.5, 5.5, 2.0));

    assert_eq!(world, expected);
    assert!(world.contains(&sphere.compute_local_aabb().transform_by(&pos)));
}

#[test]
fn sphere_negative_radius_set_through_field_inverts_aabb() {
    let mut sphere = Sphere::new(1.0);
    sphere.radius = -1.0;

    let aabb = sphere.compute_local_aabb();
    assert!(sphere.validate().is_err());
    assert_eq!(aabb.mins, Point::new(1.0, 1.0, 1.0));
    assert_eq!(aabb.maxs, Point::new(-1.0, -1.0, -1.0));
}
