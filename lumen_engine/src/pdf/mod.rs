//! # Module [crate::pdf]
//!
//! Probability distributions over directions, used for importance sampling.
//!
//! A [Pdf] can both *generate* random directions and *evaluate* the density of any direction; an estimator divides
//! by [Pdf::value()] of the direction that [Pdf::generate()] returned. The two must therefore agree.
//!
//! - [cosine::CosinePdf]: cosine-weighted hemisphere, the ideal distribution for a diffuse surface
//! - [mesh::MeshPdf]: directions towards a mesh (typically a [MeshList](crate::mesh::list::MeshList) of lights)
//! - [mixture::MixturePdf]: combination of two of the above

use enum_dispatch::enum_dispatch;
use rand_core::RngCore;

use crate::core::types::{Number, Vector3};
use crate::mesh::SampleError;
use crate::shared::RtRequirement;

// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{cosine::CosinePdf, mesh::MeshPdf, mixture::MixturePdf};

pub mod cosine;
pub mod mesh;
pub mod mixture;

#[enum_dispatch]
pub trait Pdf: RtRequirement {
    /// The density of the distribution at the (normalised) direction `dir`
    fn value(&self, dir: Vector3) -> Result<Number, SampleError>;

    /// Draws a random unit direction from the distribution
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vector3, SampleError>;
}

/// Static-dispatch version of [Pdf], see [crate::mesh::MeshInstance] for the same pattern on meshes
#[enum_dispatch(Pdf)]
#[derive(Clone, Debug)]
pub enum PdfInstance {
    CosinePdf,
    MeshPdf,
    MixturePdf,
}
