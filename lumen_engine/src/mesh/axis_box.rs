use getset::Getters;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::list::MeshList;
use crate::mesh::parallelogram::ParallelogramBuilder;
use crate::mesh::{Mesh, MeshInstance, SampleError};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::token::MaterialToken;

/// A builder struct used to create a box, between two opposite corners
///
/// Call [Into::into] or [AxisBoxMesh::from] to create the actual mesh. The corners must differ along every axis,
/// a box that is flat along some axis has sides that don't span a plane
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBoxBuilder {
    pub a: Point3,
    pub b: Point3,
    #[serde(default)]
    pub material: Option<MaterialToken>,
}

impl AxisBoxBuilder {
    pub fn new_corners(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            material: None,
        }
    }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        Self::new_corners(centre + size / 2., centre - size / 2.)
    }
}

/// Built instance of a box mesh.
///
/// The box is made of six [parallelograms](crate::mesh::parallelogram::ParallelogramMesh) grouped in a
/// [MeshList]. Bounds and sampling go through that list
#[derive(Clone, Debug, Getters)]
#[get = "pub"]
pub struct AxisBoxMesh {
    sides: MeshList,
}

// region Constructors

impl From<AxisBoxBuilder> for AxisBoxMesh {
    fn from(value: AxisBoxBuilder) -> Self {
        let bounds = Aabb::new(value.a, value.b);
        let (min, max) = (bounds.min(), bounds.max());
        let size = bounds.size();

        let dx = Vector3::new(size.x, 0., 0.);
        let dy = Vector3::new(0., size.y, 0.);
        let dz = Vector3::new(0., 0., size.z);

        let side = |p: Point3, u: Vector3, v: Vector3| ParallelogramBuilder {
            p,
            u,
            v,
            material: value.material,
        };

        let sides = MeshList::from_iter([
            // front
            side(Point3::new(min.x, min.y, max.z), dx, dy),
            // right
            side(Point3::new(max.x, min.y, max.z), -dz, dy),
            // back
            side(Point3::new(max.x, min.y, min.z), -dx, dy),
            // left
            side(Point3::new(min.x, min.y, min.z), dz, dy),
            // top
            side(Point3::new(min.x, max.y, max.z), dx, -dz),
            // bottom
            side(Point3::new(min.x, min.y, min.z), dx, dz),
        ]);

        Self { sides }
    }
}

impl From<AxisBoxBuilder> for MeshInstance {
    fn from(value: AxisBoxBuilder) -> MeshInstance { AxisBoxMesh::from(value).into() }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for AxisBoxMesh {
    /// Same nearest-hit search as [MeshList], except that the hit reports the index of the side as its `face`
    /// (in the order front, right, back, left, top, bottom)
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;

        for (face, side) in self.sides.iter().enumerate() {
            let search = match &closest {
                Some(c) => interval.with_some_end(c.dist),
                None => *interval,
            };

            let Some(intersect) = side.intersect(ray, &search) else {
                continue;
            };
            if closest.as_ref().map_or(true, |c| intersect.dist < c.dist) {
                closest = Some(Intersection { face, ..intersect });
            }
        }

        closest
    }

    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb> { self.sides.aabb(time_start, time_end) }

    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        self.sides.pdf_value(origin, dir)
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        self.sides.random_direction(origin, rng)
    }
}

// endregion Mesh Impl
