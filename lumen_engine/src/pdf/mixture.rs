use std::sync::Arc;

use getset::Getters;
use rand::Rng;
use rand_core::RngCore;

use crate::core::types::{Number, Vector3};
use crate::mesh::SampleError;
use crate::pdf::{Pdf, PdfInstance};

/// An even mix of two distributions.
///
/// Typically a [CosinePdf](super::cosine::CosinePdf) for the surface and a [MeshPdf](super::mesh::MeshPdf)
/// for the lights, so that neither is relied upon completely
#[derive(Clone, Debug, Getters)]
#[get = "pub"]
pub struct MixturePdf {
    a: Arc<PdfInstance>,
    b: Arc<PdfInstance>,
}

impl MixturePdf {
    pub fn new(a: impl Into<PdfInstance>, b: impl Into<PdfInstance>) -> Self {
        Self {
            a: Arc::new(a.into()),
            b: Arc::new(b.into()),
        }
    }
}

impl Pdf for MixturePdf {
    fn value(&self, dir: Vector3) -> Result<Number, SampleError> {
        Ok(0.5 * self.a.value(dir)? + 0.5 * self.b.value(dir)?)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        if rng.gen_bool(0.5) {
            self.a.generate(rng)
        } else {
            self.b.generate(rng)
        }
    }
}
