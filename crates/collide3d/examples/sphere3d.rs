extern crate nalgebra as na;

use collide3d::bounding_volume::BoundingVolume;
use collide3d::shape::{Shape, Sphere};
use na::{Isometry3, Vector3};
use std::sync::Arc;
use std::thread;

fn main() {
    /*
     * Initialize the shape and share it between threads.
     */
    let sphere = Arc::new(Sphere::new(0.5));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sphere = sphere.clone();
            thread::spawn(move || {
                let pos = Isometry3::translation(i as f32, 0.0, 0.0);
                sphere.compute_aabb(&pos)
            })
        })
        .collect();

    /*
     * Merge the AABBs computed concurrently.
     */
    let mut merged = sphere.compute_local_aabb();
    for handle in handles {
        merged.merge(&handle.join().unwrap());
    }

    println!("{}: {:?}", sphere, merged);
    println!("volume: {}", sphere.compute_volume());
    println!("inertia: {}", sphere.compute_moment_of_inertia());

    /*
     * Changing the radius is picked up by the next AABB query.
     */
    let mut sphere = Arc::try_unwrap(sphere).unwrap();
    sphere.radius = 2.0;
    let aabb = sphere.compute_local_aabb();
    assert_eq!(aabb.half_extents(), Vector3::repeat(2.0));
    println!("{}: {:?}", sphere, aabb);

    for pt in sphere.bound_vertices(&Isometry3::identity()) {
        println!("bound vertex: {}", pt);
    }
}
