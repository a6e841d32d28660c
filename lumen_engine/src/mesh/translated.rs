//! Moving a mesh without rebuilding it.
//!
//! Instead of moving the mesh, rays are moved by the opposite amount, and the results are moved back into world
//! space afterwards. Distances along the ray are unaffected by a translation, so they pass through unchanged.

use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;

use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::{Mesh, MeshInstance, SampleError};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// Wraps a (shared) mesh, and displaces it by `offset`
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct TranslatedMesh {
    #[get = "pub"]
    inner: Arc<MeshInstance>,
    #[get_copy = "pub"]
    offset: Vector3,
}

impl TranslatedMesh {
    pub fn new(inner: impl Into<MeshInstance>, offset: impl Into<Vector3>) -> Self {
        Self::new_shared(Arc::new(inner.into()), offset)
    }

    /// Displaces a mesh that is already shared, without copying it
    pub fn new_shared(inner: Arc<MeshInstance>, offset: impl Into<Vector3>) -> Self {
        Self {
            inner,
            offset: offset.into(),
        }
    }
}

impl Mesh for TranslatedMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let local_ray = Ray::new_at(ray.pos() - self.offset, ray.dir(), ray.time());
        let mut intersect = self.inner.intersect(&local_ray, interval)?;
        intersect.pos_w = intersect.pos_w + self.offset;
        Some(intersect)
    }

    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb> {
        self.inner
            .aabb(time_start, time_end)
            .map(|aabb| aabb.translated(self.offset))
    }

    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        self.inner.pdf_value(origin - self.offset, dir)
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        self.inner.random_direction(origin - self.offset, rng)
    }
}
