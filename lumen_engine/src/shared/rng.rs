//! Helper module for RNG-related functions
//!
//! Every function takes the RNG as a parameter, there is no global RNG in the engine.
//! The `?Sized` bound lets these be called with the `&mut dyn RngCore` that meshes receive.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::core::types::{Number, Vector3};

// region 3D

/// Returns a random vector in a unit cube (-1..=1)
pub fn vector_in_unit_cube<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let mut arr = [0.; 3];
    arr.fill_with(|| rng.gen_range(-1.0..=1.0));
    arr.into()
}

/// Returns a random vector in a unit sphere (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let v = vector_in_unit_cube(rng);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

/// Returns a random vector on a unit sphere (`-1..=1`, `length = 1`)
pub fn vector_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let Some(vec) = vector_in_unit_sphere(rng).try_normalize() else {
            continue;
        };
        return vec;
    }
}

/// The density of [vector_on_unit_sphere()], for any direction: one over the area of the unit sphere
pub const UNIT_SPHERE_PDF: Number = 1. / (4. * PI);

// endregion 3D

// region Local Directions

/// Returns a cosine-weighted random direction on the hemisphere around `+Z`.
///
/// The density of the returned direction is `z / PI`.
pub fn cosine_direction<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let r1: Number = rng.gen();
    let r2: Number = rng.gen();

    let phi = TAU * r1;
    let x = phi.cos() * r2.sqrt();
    let y = phi.sin() * r2.sqrt();
    let z = (1. - r2).sqrt();

    Vector3::new(x, y, z)
}

/// Returns a random direction, uniformly distributed over the cone around `+Z` whose half-angle has
/// the cosine `cos_theta_max`.
///
/// This is the cone subtended by a sphere of radius `r` seen from distance `d`, when
/// `cos_theta_max = sqrt(1 - r²/d²)`
pub fn cone_direction<R: Rng + ?Sized>(rng: &mut R, cos_theta_max: Number) -> Vector3 {
    let r1: Number = rng.gen();
    let r2: Number = rng.gen();

    let z = 1. + r2 * (cos_theta_max - 1.);
    let phi = TAU * r1;
    let sin_theta = (1. - z * z).max(0.).sqrt();
    let x = phi.cos() * sin_theta;
    let y = phi.sin() * sin_theta;

    Vector3::new(x, y, z)
}

/// The density of [cone_direction()] for any direction inside the cone: one over the cone's solid angle
pub fn cone_pdf(cos_theta_max: Number) -> Number { 1. / (TAU * (1. - cos_theta_max)) }

// endregion Local Directions
