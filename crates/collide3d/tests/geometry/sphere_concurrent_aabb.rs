use collide3d::math::{Real, Vector};
use collide3d::shape::{Shape, Sphere};
use std::sync::{Arc, Barrier};
use std::thread;

const NTHREADS: usize = 8;
const NREADS: usize = 2_000;

#[test]
fn sphere_concurrent_local_aabb_reads_agree() {
    let radius = 3.25;
    let sphere = Arc::new(Sphere::new(radius));
    let barrier = Arc::new(Barrier::new(NTHREADS));

    let handles: Vec<_> = (0..NTHREADS)
        .map(|_| {
            let sphere = sphere.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let _ = barrier.wait();
                (0..NREADS)
                    .map(|_| sphere.compute_local_aabb())
                    .all(|aabb| aabb.half_extents() == Vector::repeat(radius))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    assert_eq!(sphere.cached_local_aabb_radius(), Some(radius));
}

#[test]
fn sphere_radius_updates_between_concurrent_read_phases() {
    let mut sphere = Sphere::new(1.0);

    for radius in [1.0, 2.0, 2.0, 0.5, 7.0] {
        sphere.radius = radius;

        // Every phase borrows the sphere immutably, so the radius is fixed while it runs.
        let seen: Vec<Real> = thread::scope(|s| {
            let handles: Vec<_> = (0..NTHREADS)
                .map(|_| s.spawn(|| sphere.compute_local_aabb().maxs.x))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(seen.iter().all(|x| *x == radius));
        assert_eq!(sphere.cached_local_aabb_radius(), Some(radius));
    }
}

#[test]
fn shared_dyn_shapes_are_queryable_from_threads() {
    let shapes: Arc<Vec<Box<dyn Shape>>> = Arc::new(
        (1..=4)
            .map(|i| Box::new(Sphere::new(i as Real)) as Box<dyn Shape>)
            .collect(),
    );

    let handles: Vec<_> = (0..NTHREADS)
        .map(|_| {
            let shapes = shapes.clone();
            thread::spawn(move || {
                shapes
                    .iter()
                    .map(|shape| shape.compute_local_aabb().maxs.x)
                    .sum::<Real>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10.0);
    }
}
