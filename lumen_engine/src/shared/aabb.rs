use std::borrow::Borrow;

use getset::*;

use crate::core::types::{Number, Point3, Vector3};

/// An **Axis-Aligned Bounding Box** (AABB)
///
/// The box spans between the two corners `min` and `max`'
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq)]
#[getset(get_copy = "pub")]
pub struct Aabb {
    /// The lower corner of the [Aabb]; the corner with the smallest coordinates
    min: Point3,
    /// The upper corner of the [Aabb]; the corner with the largest coordinates
    max: Point3,
    /// The difference between [min](fn@Self::min) and [max](fn@Self::max); how large the [Aabb] is
    size: Vector3,
}

// region Constructors

impl Aabb {
    /// Creates a new [Aabb] from two points, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        let (a, b) = (a.into(), b.into());
        let min = Point3::min(a, b);
        let max = Point3::max(a, b);
        let size = max - min;
        Self { min, max, size }
    }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        let min = centre - size / 2.;
        let max = centre + size / 2.;
        Self::new(min, max)
    }

    /// Returns an [Aabb] that surrounds the two given boxes
    pub fn encompass(a: impl Borrow<Self>, b: impl Borrow<Self>) -> Self {
        let (a, b) = (a.borrow(), b.borrow());
        let min = Point3::min(a.min, b.min);
        let max = Point3::max(a.max, b.max);
        Self::new(min, max)
    }

    /// [Self::encompass] but for an arbitrary number of points
    pub fn encompass_points<B: Borrow<Point3>>(iter: impl IntoIterator<Item = B>) -> Self {
        let mut min = Point3::splat(Number::INFINITY);
        let mut max = Point3::splat(Number::NEG_INFINITY);
        for p in iter.into_iter() {
            let p = *p.borrow();
            min = min.min(p);
            max = max.max(p);
        }
        Self::new(min, max)
    }

    /// Ensures that an AABB has all sides of at least `thresh` thickness.
    /// If any side widths between corners are less than this threshold, the [Aabb] will
    /// be expanded (away from the centre) to fit.
    pub fn min_padded(&self, thresh: Number) -> Self {
        let dims = self.size();
        let centre = self.min + dims / 2.;
        let dims = Vector3::new(dims.x.max(thresh), dims.y.max(thresh), dims.z.max(thresh));
        Self::new_centred(centre, dims)
    }

    /// Moves the whole box by `offset`, keeping its size
    pub fn translated(&self, offset: Vector3) -> Self { Self::new(self.min + offset, self.max + offset) }
}

// endregion Constructors

// region Helper

impl Aabb {
    /// Checks whether the point is inside the box (inclusive of the faces)
    pub fn contains_point(&self, p: Point3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Checks whether `other` lies completely inside `self`
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }
}

// endregion Helper
