use getset::CopyGetters;
use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::planar::{Planar, AABB_PADDING};
use crate::mesh::{Mesh, MeshInstance, SampleError, SAMPLE_EPSILON};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::token::MaterialToken;

/// Builds a parallelogram with corner `p`, spanned by the edge vectors `u` and `v`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallelogramBuilder {
    pub p: Point3,
    pub u: Vector3,
    pub v: Vector3,
    #[serde(default)]
    pub material: Option<MaterialToken>,
}

/// A flat four-sided shape, most commonly used as an area light.
///
/// Supports direction sampling: directions are generated by picking a uniformly random point on the surface
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct ParallelogramMesh {
    /// The plane that this mesh sits upon
    plane: Planar,
    aabb: Aabb,
    material: Option<MaterialToken>,
}

// region Constructors

impl From<ParallelogramBuilder> for ParallelogramMesh {
    fn from(builder: ParallelogramBuilder) -> Self {
        let plane = Planar::new(builder.p, builder.u, builder.v);
        let (p, u, v) = (plane.p(), plane.u(), plane.v());
        let aabb = Aabb::encompass_points([p, p + u, p + v, p + u + v]).min_padded(AABB_PADDING);

        Self {
            plane,
            aabb,
            material: builder.material,
        }
    }
}

impl From<ParallelogramBuilder> for MeshInstance {
    fn from(value: ParallelogramBuilder) -> Self { ParallelogramMesh::from(value).into() }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for ParallelogramMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let i = self.plane.intersect_bounded(ray, interval, self.material)?;
        // Check in bounds for our segment of the plane: `uv in [0, 1]`
        if (0.0..=1.0).contains(&i.uv.x) && (0.0..=1.0).contains(&i.uv.y) {
            Some(i)
        } else {
            None
        }
    }

    fn aabb(&self, _time_start: Number, _time_end: Number) -> Option<Aabb> { Some(self.aabb) }

    /// Converts the area density `1/A` of the uniformly chosen point into a solid angle density,
    /// `dist² / (|cos θ| * A)`
    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        let ray = Ray::new(origin, dir);
        let Some(i) = self.intersect(&ray, &Interval::from(SAMPLE_EPSILON..)) else {
            return Ok(0.);
        };

        let dist_sqr = i.dist * i.dist;
        let cosine = Vector3::dot(ray.dir(), self.plane.n()).abs();

        Ok(dist_sqr / (cosine * self.plane.area()))
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        let (a, b): (Number, Number) = (rng.gen(), rng.gen());
        let target = self.plane.p() + (self.plane.u() * a) + (self.plane.v() * b);

        (target - origin)
            .try_normalize()
            .ok_or(SampleError::DegenerateDirection)
    }
}

// endregion Mesh Impl
