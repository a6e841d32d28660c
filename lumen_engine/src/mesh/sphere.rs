use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::mesh::{Mesh, MeshInstance, SampleError, SAMPLE_EPSILON};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::math::Onb;
use crate::shared::ray::Ray;
use crate::shared::rng;
use crate::shared::token::MaterialToken;
use getset::CopyGetters;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A builder struct used to create a sphere
///
/// Call [Into::into] or [SphereMesh::from] to create the actual sphere mesh
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereBuilder {
    pub pos: Point3,
    pub radius: Number,
    #[serde(default)]
    pub material: Option<MaterialToken>,
}

/// The actual instance of a sphere that can be rendered.
/// Has precomputed values and therefore cannot be mutated
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct SphereMesh {
    pos: Point3,
    radius: Number,
    radius_sqr: Number,
    aabb: Aabb,
    material: Option<MaterialToken>,
}

// region Constructors

impl SphereMesh {
    pub fn new(pos: impl Into<Point3>, radius: Number) -> Self {
        SphereBuilder {
            pos: pos.into(),
            radius,
            material: None,
        }
        .into()
    }

    /// Returns a copy of the sphere that reports the given material on its intersections
    pub fn with_material(self, material: MaterialToken) -> Self {
        Self {
            material: Some(material),
            ..self
        }
    }
}

/// Builds the sphere
impl From<SphereBuilder> for SphereMesh {
    fn from(value: SphereBuilder) -> Self {
        Self {
            pos: value.pos,
            radius: value.radius,
            radius_sqr: value.radius * value.radius,
            // Cube centred around self
            aabb: Aabb::new(
                value.pos - Vector3::splat(value.radius),
                value.pos + Vector3::splat(value.radius),
            ),
            material: value.material,
        }
    }
}

/// Converts the sphere builder into an [MeshInstance]
impl From<SphereBuilder> for MeshInstance {
    fn from(value: SphereBuilder) -> MeshInstance { SphereMesh::from(value).into() }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for SphereMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        intersect_sphere(self.pos, self.radius, self.material, ray, interval)
    }

    fn aabb(&self, _time_start: Number, _time_end: Number) -> Option<Aabb> { Some(self.aabb) }

    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        // Inside or on the surface, every direction is sampled
        let Some(cos_theta_max) = self.cos_theta_max(origin) else {
            return Ok(rng::UNIT_SPHERE_PDF);
        };

        let ray = Ray::new(origin, dir);
        if self.intersect(&ray, &Interval::from(SAMPLE_EPSILON..)).is_none() {
            return Ok(0.);
        }
        Ok(rng::cone_pdf(cos_theta_max))
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        let cone = self
            .cos_theta_max(origin)
            .and_then(|cos| Some((cos, Onb::new(self.pos - origin)?)));

        let dir = match cone {
            Some((cos_theta_max, onb)) => onb.local(rng::cone_direction(rng, cos_theta_max)),
            None => rng::vector_on_unit_sphere(rng),
        };
        Ok(dir.normalize())
    }
}

impl SphereMesh {
    /// The cosine of the half-angle of the cone that the sphere subtends when seen from `origin`.
    ///
    /// [None] if the origin is inside (or on the surface of) the sphere, in which case the sphere covers
    /// all directions
    fn cos_theta_max(&self, origin: Point3) -> Option<Number> {
        let dist_sqr = (self.pos - origin).length_squared();
        if dist_sqr <= self.radius_sqr {
            return None;
        }
        Some((1. - self.radius_sqr / dist_sqr).sqrt())
    }
}

// endregion Mesh Impl

// region Helpers

/// Ray-sphere intersection for a sphere of the given centre and radius.
///
/// Shared between [SphereMesh] and [super::moving_sphere::MovingSphereMesh]
pub(super) fn intersect_sphere(
    centre: Point3,
    radius: Number,
    material: Option<MaterialToken>,
    ray: &Ray,
    interval: &Interval<Number>,
) -> Option<Intersection> {
    //Do some ray-sphere intersection math to find if the ray intersects
    let ray_pos = ray.pos();
    let ray_dir = ray.dir();
    let ray_rel_pos = ray_pos - centre;

    // Quadratic formula variables
    let a = ray_dir.length_squared();
    let half_b = Vector3::dot(ray_rel_pos, ray_dir);
    let c = ray_rel_pos.length_squared() - (radius * radius);
    let discriminant = (half_b * half_b) - (a * c);

    //No solutions to where ray intersects with sphere because of negative square root
    if discriminant < 0. {
        return None;
    };

    let sqrt_d = discriminant.sqrt();

    // Find the nearest root that lies in the acceptable range.
    //This way we do a double check on both, prioritizing the less-positive root (as it's closer)
    //And we only return null if neither is valid
    let mut root = (-half_b - sqrt_d) / a;
    if !interval.contains(&root) {
        root = (-half_b + sqrt_d) / a;
        if !interval.contains(&root) {
            return None;
        }
    }

    let dist = root;
    let world_point = ray.at(dist);
    let local_point = (world_point - centre) / radius;
    let outward_normal = local_point;
    let ray_pos_inside = Vector3::dot(ray_dir, outward_normal) > 0.;
    //This flips the normal if the ray is inside the sphere
    //This forces the normal to always be going against the ray
    let ray_normal = if ray_pos_inside {
        -outward_normal
    } else {
        outward_normal
    };

    Some(Intersection {
        pos_w: world_point,
        pos_l: local_point.to_point(),
        dist,
        normal: outward_normal,
        ray_normal,
        front_face: !ray_pos_inside,
        uv: sphere_uv(local_point),
        face: 0,
        material,
    })
}

/// Converts a point on a sphere (centred at [Point3::ZERO], radius `1`), into a UV coordinate
pub fn sphere_uv(p: Vector3) -> Point2 {
    // Clamp since `p` is only normalised up to rounding error
    let theta = Number::acos((-p.y).clamp(-1., 1.));
    let phi = Number::atan2(-p.z, p.x) + PI;

    let u = phi / (2. * PI);
    let v = theta / PI;
    Point2::new(u, v)
}

// endregion Helpers
