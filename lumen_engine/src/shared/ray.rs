use crate::core::types::{Number, Point3, Vector3};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
    time: Number,
}

impl Ray {
    /// World-space coordinate of the ray
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray.
    ///
    /// # Requirements
    /// Must be normalised
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// The moment in time the ray was cast at. Moving meshes use this to decide where they are.
    #[inline(always)]
    pub fn time(&self) -> Number { self.time }

    /// Creates a new ray cast at time `0.0`, normalising the direction
    pub fn new(pos: Point3, dir: Vector3) -> Self { Self::new_at(pos, dir, 0.) }

    /// Creates a new ray cast at the given time, normalising the direction
    pub fn new_at(pos: Point3, dir: Vector3, time: Number) -> Self {
        Self {
            pos,
            dir: dir.normalize(),
            time,
        }
    }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}
