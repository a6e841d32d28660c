use std::f64::consts::FRAC_1_PI;

use getset::CopyGetters;
use rand_core::RngCore;

use crate::core::types::{Number, Vector3};
use crate::mesh::SampleError;
use crate::pdf::Pdf;
use crate::shared::math::Onb;
use crate::shared::rng;

/// Cosine-weighted distribution over the hemisphere around a normal
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct CosinePdf {
    onb: Onb,
}

impl CosinePdf {
    /// Creates the distribution around `normal`; [None] if the normal is zero-length
    pub fn new(normal: Vector3) -> Option<Self> { Onb::new(normal).map(|onb| Self { onb }) }
}

impl Pdf for CosinePdf {
    fn value(&self, dir: Vector3) -> Result<Number, SampleError> {
        let cosine = Vector3::dot(dir.normalize(), self.onb.w());
        Ok(cosine.max(0.) * FRAC_1_PI)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        Ok(self.onb.local(rng::cosine_direction(rng)).normalize())
    }
}
