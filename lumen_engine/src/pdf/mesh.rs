use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;
use tracing::trace;

use crate::core::targets::PDF;
use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::{Mesh, MeshInstance, SampleError};
use crate::pdf::Pdf;

/// Directions from a fixed origin towards a mesh.
///
/// Pass a [MeshList](crate::mesh::list::MeshList) of all the lights in a scene to sample the lights
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct MeshPdf {
    #[get = "pub"]
    mesh: Arc<MeshInstance>,
    #[get_copy = "pub"]
    origin: Point3,
}

impl MeshPdf {
    pub fn new(mesh: Arc<MeshInstance>, origin: Point3) -> Self { Self { mesh, origin } }
}

impl Pdf for MeshPdf {
    fn value(&self, dir: Vector3) -> Result<Number, SampleError> {
        self.mesh.pdf_value(self.origin, dir).inspect_err(|err| {
            trace!(target: PDF, ?err, origin = ?self.origin, "couldn't evaluate mesh pdf");
        })
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        self.mesh.random_direction(self.origin, rng).inspect_err(|err| {
            trace!(target: PDF, ?err, origin = ?self.origin, "couldn't sample direction towards mesh");
        })
    }
}
