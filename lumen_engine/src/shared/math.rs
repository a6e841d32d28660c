use crate::core::types::{Number, Vector3};
use getset::CopyGetters;

/// An orthonormal basis, built around a single axis `w`.
///
/// Used to take directions sampled around `+Z` and rotate them so they are sampled around `w` instead.
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct Onb {
    u: Vector3,
    v: Vector3,
    w: Vector3,
}

impl Onb {
    /// Creates a basis whose `w` axis points along `axis`.
    ///
    /// Returns [None] if the axis can't be normalised (zero-length or NaN)
    pub fn new(axis: Vector3) -> Option<Self> {
        let w = axis.try_normalize()?;
        // Any vector not parallel to `w` works as a helper
        let helper = if w.x.abs() > 0.9 { Vector3::Y } else { Vector3::X };
        let v = Vector3::cross(w, helper).normalize();
        let u = Vector3::cross(w, v);
        Some(Self { u, v, w })
    }

    /// Transforms a vector in local (basis) coordinates into world coordinates
    pub fn local(&self, a: Vector3) -> Vector3 { self.local_xyz(a.x, a.y, a.z) }

    pub fn local_xyz(&self, x: Number, y: Number, z: Number) -> Vector3 { (self.u * x) + (self.v * y) + (self.w * z) }
}
