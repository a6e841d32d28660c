//! # Module [crate::mesh]
//!
//! This module contains the submodules for different mesh (see [Mesh] and [MeshInstance]) types.
//!
//! ## Related
//! - [Mesh]
//! - [MeshInstance]
//! - [list]
//!
//! # DEV: Code Structure
//!
//! ## Mesh Modules
//! Meshes (and their corresponding types) are placed into named submodules, and those submodules
//! are publicly exported. Meshes are split into a "Builder" struct, which contains the publicly accessible
//! (and serialisable) properties for the type, and a "Mesh" struct which contains the 'built' mesh (which may
//! contain cached values for performance, and should be immutable/private fields)
//!
//! ## Example
//! Considering a "Sphere" mesh:
//!
//! - File: `./sphere.rs`
//! - Add module: `pub mod sphere;`
//! - Structs: `SphereBuilder`, which is translated into `SphereMesh`, where `SphereMesh: Mesh`
//! - Add an entry to [MeshInstance] to correspond to the `SphereMesh` for static-dispatch
//! - See [sphere] for an example

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;
use rand_core::RngCore;
use thiserror::Error;
use valuable::Valuable;
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{
    axis_box::AxisBoxMesh, dynamic::DynamicMesh, infinite_plane::InfinitePlaneMesh, list::MeshList,
    moving_sphere::MovingSphereMesh, parallelogram::ParallelogramMesh, sphere::SphereMesh,
    translated::TranslatedMesh,
};

pub mod axis_box;
pub mod dynamic;
pub mod infinite_plane;
pub mod list;
pub mod moving_sphere;
pub mod parallelogram;
pub mod planar;
pub mod sphere;
pub mod translated;

/// How far along a sampling ray a surface has to be before it counts as being hit.
///
/// Stops a surface from "seeing" itself when a direction is sampled from a point lying on it
pub const SAMPLE_EPSILON: Number = 1e-3;

// region Errors

/// Failure of a direction-sampling query ([Mesh::pdf_value()] or [Mesh::random_direction()]).
///
/// These are precondition violations, not "no result" outcomes: a mesh that simply isn't in the sampled
/// direction has a density of `0.0`, it does not return an error
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Valuable)]
pub enum SampleError {
    /// A [MeshList] with no members has no distribution to sample from or evaluate
    #[error("can't sample directions from an empty mesh list")]
    EmptyList,
    /// The mesh has no scheme for generating directions towards itself
    #[error("the mesh doesn't support direction sampling")]
    Unsupported,
    /// The sampled point coincided with the origin, so no direction could be formed
    #[error("the sampled direction was degenerate (sampling origin lies on the sampled point)")]
    DegenerateDirection,
}

// endregion Errors

// region Mesh traits

#[enum_dispatch]
pub trait Mesh: RtRequirement {
    /// Attempts to perform an intersection between the given ray and the target mesh
    ///
    /// # Return Value
    /// This should return the *first* intersection that is within the given interval, else [None]
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection>;

    /// Gets the bounding box that contains the mesh at every moment between `time_start` and `time_end`.
    ///
    /// If the mesh can't be bounded (e.g. infinite plane), return [None]
    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb>;

    /// The probability density (with respect to solid angle) of [Self::random_direction()] generating
    /// the direction `dir`, when sampling from `origin`.
    ///
    /// Meshes without a sampling scheme are never sampled towards, so they return `0.0`
    fn pdf_value(&self, _origin: Point3, _dir: Vector3) -> Result<Number, SampleError> { Ok(0.) }

    /// Generates a random unit direction from `origin` towards this mesh.
    ///
    /// The distribution of returned directions must match [Self::pdf_value()]
    fn random_direction(&self, _origin: Point3, _rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        Err(SampleError::Unsupported)
    }
}

/// An optimised implementation of [Mesh], using static dispatch.
///
/// Each variant is a concrete mesh type, and the [macro@enum_dispatch] macro generates the [Mesh] implementation
/// and `From<Variant>` conversions. Mesh types defined outside this crate go through [DynamicMesh].
#[enum_dispatch(Mesh)]
#[derive(Clone, Debug)]
pub enum MeshInstance {
    SphereMesh,
    MovingSphereMesh,
    ParallelogramMesh,
    InfinitePlaneMesh,
    AxisBoxMesh,
    TranslatedMesh,
    MeshList,
    DynamicMesh,
}

// endregion Mesh traits
