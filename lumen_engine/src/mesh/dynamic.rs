use std::sync::Arc;

use rand_core::RngCore;

use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::{Mesh, SampleError};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// Mesh wrapper around a `dyn` [Mesh]; Delegates everything to the inner mesh.
///
/// This is how mesh types from outside the engine get into a [super::list::MeshList].
/// If possible use the enum variants on [super::MeshInstance], so that static-dispatch is used instead of dynamic dispatch
#[derive(Clone, Debug)]
pub struct DynamicMesh {
    pub inner: Arc<dyn Mesh>,
}

impl DynamicMesh {
    pub fn from(value: impl Mesh + 'static) -> Self { Self { inner: Arc::new(value) } }
}

impl super::MeshInstance {
    pub fn from_dyn(value: impl Mesh + 'static) -> Self { Self::from(DynamicMesh::from(value)) }
}

impl Mesh for DynamicMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        self.inner.intersect(ray, interval)
    }

    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb> { self.inner.aabb(time_start, time_end) }

    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        self.inner.pdf_value(origin, dir)
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        self.inner.random_direction(origin, rng)
    }
}
