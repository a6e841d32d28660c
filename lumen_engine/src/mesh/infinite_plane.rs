use getset::CopyGetters;

use crate::core::types::{Number, Point2};
use crate::mesh::planar::Planar;
use crate::mesh::{Mesh, MeshInstance};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::token::MaterialToken;

// region UV Wrap

/// Enum for different ways UV coordinates can be wrapped (or not) on a plane
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq)]
pub enum UvWrappingMode {
    /// Don't wrap UV coords, keep them unbounded
    None,
    /// Wrap the UV coordinates when they reach `1.0`
    ///
    /// Equivalent to `x.rem_euclid(1.0)`, so negative coordinates keep counting up towards `1.0`
    #[default]
    Wrap,
    /// Mirror the UV coordinates when they reach `1.0`, repeating each interval
    ///
    /// Equivalent to `abs(x.rem_euclid(2.0) - 1.0)`, which stays within `0.0..=1.0`
    Mirror,
}

impl UvWrappingMode {
    /// Applies the wrapping mode to the UV coordinate, returning the new coordinate
    #[inline(always)]
    pub fn apply(self, uvs: Point2) -> Point2 {
        fn wrap(x: Number) -> Number { x.rem_euclid(1.0) }
        fn mirror(x: Number) -> Number { (x.rem_euclid(2.0) - 1.0).abs() }

        match self {
            Self::None => uvs,
            Self::Wrap => Point2::new(wrap(uvs.x), wrap(uvs.y)),
            Self::Mirror => Point2::new(mirror(uvs.x), mirror(uvs.y)),
        }
    }
}

// endregion UV Wrap

/// A plane that extends forever in both directions.
///
/// It can't be bounded, so it has no [Aabb], and it has no sampling scheme (it covers half of all directions
/// from any point, which makes it useless as a light to aim at)
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct InfinitePlaneMesh {
    /// The plane that this mesh sits upon
    plane: Planar,
    uv_wrap: UvWrappingMode,
    material: Option<MaterialToken>,
}

// region Constructors

impl InfinitePlaneMesh {
    pub fn new(plane: Planar, uv_wrap: UvWrappingMode) -> Self {
        Self {
            plane,
            uv_wrap,
            material: None,
        }
    }

    /// Returns a copy of the plane that reports the given material on its intersections
    pub fn with_material(self, material: MaterialToken) -> Self {
        Self {
            material: Some(material),
            ..self
        }
    }
}

impl From<Planar> for InfinitePlaneMesh {
    fn from(plane: Planar) -> Self { Self::new(plane, UvWrappingMode::default()) }
}

impl From<Planar> for MeshInstance {
    fn from(plane: Planar) -> Self { InfinitePlaneMesh::from(plane).into() }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for InfinitePlaneMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let mut i = self.plane.intersect_bounded(ray, interval, self.material)?;
        // Wrap uv's if required
        i.uv = self.uv_wrap.apply(i.uv);
        Some(i)
    }

    fn aabb(&self, _time_start: Number, _time_end: Number) -> Option<Aabb> { None }
}

// endregion Mesh Impl
