#[macro_use]
extern crate approx;

mod sphere_aabb_cache;
mod sphere_bound_vertices;
mod sphere_concurrent_aabb;
mod sphere_mass_properties;
