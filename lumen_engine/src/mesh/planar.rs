//! This module is not a mesh module per-se, but a helper module that provides abstractions for
//! planar types (such as planes and quads)
//!
//! You should store an instance of [Planar] inside your mesh struct, and then simply validate the UV coordinates
//! of the planar intersection for whichever shape your dreams do so desire...

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::token::MaterialToken;
use getset::CopyGetters;
use num_traits::Zero;

/// The recommended amount of padding around AABB's for planar meshes
///
/// Planes are infinitely thin, the padding gives their boxes some volume along the normal
pub const AABB_PADDING: Number = 1e-6;

/// A helper struct that is used in planar meshes (meshes that exist in a subsection of a 2D plane)
///
/// Use this for calculating the ray-plane intersection, instead of reimplementing for each type.
/// Then, you can restrict by validating the UV coordinates returned by the intersection
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct Planar {
    p: Point3,
    /// The vector for the `U` direction, typically the 'right' direction
    u: Vector3,
    /// The vector for the `V` direction, typically the 'up' direction
    v: Vector3,
    /// The normal vector for the plane, perpendicular to [Self::u()] and [Self::v()], and normalised
    n: Vector3,
    /// Part of the plane equation
    d: Number,
    /// Precalculated vector `n / dot(n, cross(u,v))` (using un-normalised `n`)
    w: Vector3,
    /// Area of the parallelogram spanned by `u` and `v`
    area: Number,
}

// region Constructors

impl Planar {
    /// Creates a plane from the origin point `p`, and the two side vectors `u`, `v`
    ///
    /// For a 2D plane in the `XY` plane, the point layout would be:
    ///
    /// ```text
    ///       +-----------------+
    ///      /                 /
    ///   ^ /                 /
    ///   V/                 /
    ///   P ----> U ------- +
    /// ```
    ///
    /// # Panics
    /// If `u` and `v` are parallel (or either is zero), since they don't span a plane
    pub fn new(p: impl Into<Point3>, u: impl Into<Vector3>, v: impl Into<Vector3>) -> Self {
        let (p, u, v) = (p.into(), u.into(), v.into());

        let n_raw = Vector3::cross(u, v);
        let n = n_raw
            .try_normalize()
            .expect("couldn't normalise plane normal: cross(u, v) == 0");
        let d = -Vector3::dot(n, p.to_vector());
        // NOTE: using non-normalised normal here
        let w = n_raw / n_raw.length_squared();
        let area = n_raw.length();
        Self { p, u, v, n, d, w, area }
    }
}

// endregion Constructors

// region Intersection

impl Planar {
    /// Does a full ray-plane intersection check, returning the intersection if possible. If an intersection is not found,
    /// it means that the ray is perfectly parallel to the plane, or outside the given interval.
    ///
    /// The `uv` of the intersection are the `(α, β)` coordinates of the hit point with respect to [Self::u()] and
    /// [Self::v()], so `P = p + α*u + β*v`. Callers restrict the shape by validating those.
    #[inline(always)]
    pub fn intersect_bounded(
        &self,
        ray: &Ray,
        interval: &Interval<Number>,
        material: Option<MaterialToken>,
    ) -> Option<Intersection> {
        let denominator = Vector3::dot(self.n, ray.dir());

        // Ray is parallel to plane
        if denominator.is_zero() {
            return None;
        }

        let t = -(Vector3::dot(self.n, ray.pos().to_vector()) + self.d) / denominator;

        if !interval.contains(&t) {
            return None;
        }

        let pos_w = ray.at(t);
        let pos_l = pos_w - self.p;

        // We would normally project so the point is `P = P_local + α*u + β*v`
        // But since the vectors `u, v` don't have to be orthogonal, have to account for that too
        let alpha = Vector3::dot(self.w, Vector3::cross(pos_l, self.v));
        let beta = Vector3::dot(self.w, Vector3::cross(self.u, pos_l));

        Some(Intersection {
            pos_w,
            pos_l: pos_l.to_point(),
            dist: t,
            normal: self.n,
            // Positive => ray and normal same dir => must be behind plane => backface
            front_face: denominator.is_sign_negative(),
            ray_normal: -self.n * denominator.signum(),
            uv: Point2::new(alpha, beta),
            face: 0,
            material,
        })
    }
}

// endregion Intersection
