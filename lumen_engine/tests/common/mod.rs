#![allow(dead_code)]

use lumen_engine::core::types::*;
use lumen_engine::mesh::sphere::SphereMesh;
use lumen_engine::shared::token::MaterialToken;
use rand::SeedableRng;
use std::f64::consts::TAU;
use tracing_subscriber::EnvFilter;

pub type Rng = rand::rngs::SmallRng;

/// Fixed seed, so the statistical tests are reproducible
pub const SEED: u64 = 0x6C75_6D65_6E;

pub fn rng() -> Rng { Rng::seed_from_u64(SEED) }

/// Installs a subscriber that prints engine logs (filtered by `RUST_LOG`) into the test output.
///
/// Safe to call from every test, only the first call does anything
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sphere with a material token, so tests can tell which member was hit
pub fn tagged_sphere(pos: impl Into<Point3>, radius: Number, tag: IdToken) -> SphereMesh {
    SphereMesh::new(pos, radius).with_material(MaterialToken(tag))
}

/// Solid angle of the cone subtended by a sphere of `radius`, seen from `dist` away from its centre
pub fn sphere_solid_angle(radius: Number, dist: Number) -> Number {
    let cos_theta_max = (1. - (radius * radius) / (dist * dist)).sqrt();
    TAU * (1. - cos_theta_max)
}
