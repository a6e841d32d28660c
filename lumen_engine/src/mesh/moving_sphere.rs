use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::sphere::intersect_sphere;
use crate::mesh::{Mesh, MeshInstance};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::token::MaterialToken;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// A builder struct used to create a sphere that moves in a straight line over time
///
/// The centre is at `pos_0` at `time_0`, and at `pos_1` at `time_1`. Outside that span the motion is extrapolated.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingSphereBuilder {
    pub pos_0: Point3,
    pub pos_1: Point3,
    pub time_0: Number,
    pub time_1: Number,
    pub radius: Number,
    #[serde(default)]
    pub material: Option<MaterialToken>,
}

#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct MovingSphereMesh {
    pos_0: Point3,
    time_0: Number,
    /// How far the centre moves per unit of time
    velocity: Vector3,
    radius: Number,
    material: Option<MaterialToken>,
}

// region Constructors

impl From<MovingSphereBuilder> for MovingSphereMesh {
    fn from(value: MovingSphereBuilder) -> Self {
        let duration = value.time_1 - value.time_0;
        // A zero-length motion can't have a velocity, so treat it as stationary
        let velocity = if duration == 0. {
            Vector3::ZERO
        } else {
            (value.pos_1 - value.pos_0) / duration
        };

        Self {
            pos_0: value.pos_0,
            time_0: value.time_0,
            velocity,
            radius: value.radius,
            material: value.material,
        }
    }
}

impl From<MovingSphereBuilder> for MeshInstance {
    fn from(value: MovingSphereBuilder) -> MeshInstance { MovingSphereMesh::from(value).into() }
}

// endregion Constructors

impl MovingSphereMesh {
    /// Where the centre of the sphere is at the given time
    pub fn centre(&self, time: Number) -> Point3 { self.pos_0 + (self.velocity * (time - self.time_0)) }

    fn aabb_at(&self, time: Number) -> Aabb {
        let centre = self.centre(time);
        let half = Vector3::splat(self.radius);
        Aabb::new(centre - half, centre + half)
    }
}

// region Mesh Impl

impl Mesh for MovingSphereMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        intersect_sphere(self.centre(ray.time()), self.radius, self.material, ray, interval)
    }

    /// Motion is linear, so the boxes at both ends of the span cover everything in between
    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb> {
        Some(Aabb::encompass(self.aabb_at(time_start), self.aabb_at(time_end)))
    }
}

// endregion Mesh Impl
