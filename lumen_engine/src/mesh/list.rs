//! The aggregate mesh: many meshes that behave as one.
//!
//! Every query is answered by asking each member in insertion order and combining the answers:
//!
//! | Query                        | Combination                                        |
//! |------------------------------|----------------------------------------------------|
//! | [Mesh::intersect()]          | nearest hit wins, ties go to the earlier member    |
//! | [Mesh::aabb()]               | union of all boxes, [None] if any member has none  |
//! | [Mesh::pdf_value()]          | average of all member densities                    |
//! | [Mesh::random_direction()]   | uniformly pick one member, let it sample           |
//!
//! There is no acceleration structure, every query is linear in the number of members.

use std::sync::Arc;

use getset::Getters;
use itertools::Itertools;
use rand::Rng;
use rand_core::RngCore;
use tracing::{debug, trace};

use crate::core::targets::MESH;
use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::{Mesh, MeshInstance, SampleError};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;

/// A group of meshes that are rendered as one mesh
///
/// Members are shared ([Arc]), so the same mesh can be placed in several lists at once; for example in the scene
/// and in a separate list of lights used for sampling. Dropping the list only drops the members that nothing else
/// holds on to.
#[derive(Clone, Debug, Default, Getters)]
pub struct MeshList {
    /// The members of the list, in insertion order
    #[get = "pub"]
    meshes: Vec<Arc<MeshInstance>>,
}

// region Constructors

impl MeshList {
    /// Creates a new list with no members
    pub fn new() -> Self { Self::default() }

    /// Creates a new list with a single initial member
    pub fn new_with(mesh: impl Into<MeshInstance>) -> Self {
        let mut list = Self::new();
        list.add(mesh);
        list
    }

    /// Creates a list from meshes that are already shared elsewhere
    pub fn new_shared(meshes: impl IntoIterator<Item = Arc<MeshInstance>>) -> Self {
        Self {
            meshes: meshes.into_iter().collect_vec(),
        }
    }
}

/// Create [MeshList] from an iterator of anything that can become a [MeshInstance]
impl<M: Into<MeshInstance>> FromIterator<M> for MeshList {
    fn from_iter<Iter: IntoIterator<Item = M>>(iter: Iter) -> Self {
        Self::new_shared(iter.into_iter().map(Into::into).map(Arc::new))
    }
}

// endregion Constructors

// region Management

impl MeshList {
    /// Appends a mesh to the end of the list.
    ///
    /// The mesh is placed into a new [Arc], which is returned so that it can be shared with other lists.
    pub fn add(&mut self, mesh: impl Into<MeshInstance>) -> Arc<MeshInstance> {
        let mesh = Arc::new(mesh.into());
        self.add_shared(Arc::clone(&mesh));
        mesh
    }

    /// Appends an already shared mesh to the end of the list. No deduplication is done.
    pub fn add_shared(&mut self, mesh: Arc<MeshInstance>) {
        trace!(target: MESH, index = self.meshes.len(), "adding mesh to list");
        self.meshes.push(mesh);
    }

    /// Removes every member from the list.
    ///
    /// Afterwards the list behaves exactly like one made with [MeshList::new()]
    pub fn clear(&mut self) {
        trace!(target: MESH, count = self.meshes.len(), "clearing mesh list");
        self.meshes.clear();
    }

    pub fn len(&self) -> usize { self.meshes.len() }

    pub fn is_empty(&self) -> bool { self.meshes.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MeshInstance>> { self.meshes.iter() }
}

impl<'a> IntoIterator for &'a MeshList {
    type Item = &'a Arc<MeshInstance>;
    type IntoIter = std::slice::Iter<'a, Arc<MeshInstance>>;

    fn into_iter(self) -> Self::IntoIter { self.meshes.iter() }
}

// endregion Management

// region Mesh Impl

impl Mesh for MeshList {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;

        for mesh in &self.meshes {
            // Anything further than the closest hit so far can't win, so don't let members look past it
            let search = match &closest {
                Some(c) => interval.with_some_end(c.dist),
                None => *interval,
            };

            let Some(intersect) = mesh.intersect(ray, &search) else {
                continue;
            };

            // Strictly nearer only: on equal distances the earlier member keeps the hit
            if closest.as_ref().map_or(true, |c| intersect.dist < c.dist) {
                closest = Some(intersect);
            }
        }

        if let Some(i) = &closest {
            validate::intersection(ray, i, interval);
        }
        closest
    }

    fn aabb(&self, time_start: Number, time_end: Number) -> Option<Aabb> {
        let (first, rest) = self.meshes.split_first()?;

        let bounds = |mesh: &Arc<MeshInstance>| {
            let aabb = mesh.aabb(time_start, time_end);
            if aabb.is_none() {
                debug!(target: MESH, ?mesh, "mesh list member is unbounded, so the list is too");
            }
            aabb
        };

        let aabb = rest
            .iter()
            .try_fold(bounds(first)?, |acc, mesh| Some(Aabb::encompass(acc, bounds(mesh)?)))?;
        validate::aabb(aabb);
        Some(aabb)
    }

    /// Every member gets an equal share of the probability, so the density is the mean of the members' densities
    fn pdf_value(&self, origin: Point3, dir: Vector3) -> Result<Number, SampleError> {
        if self.meshes.is_empty() {
            trace!(target: MESH, "tried to evaluate pdf of empty mesh list");
            return Err(SampleError::EmptyList);
        }

        let weight = 1. / self.meshes.len() as Number;
        let pdf = self
            .meshes
            .iter()
            .map(|mesh| mesh.pdf_value(origin, dir).map(|p| p * weight))
            .sum::<Result<Number, SampleError>>()?;

        validate::pdf(pdf);
        Ok(pdf)
    }

    fn random_direction(&self, origin: Point3, rng: &mut dyn RngCore) -> Result<Vector3, SampleError> {
        if self.meshes.is_empty() {
            trace!(target: MESH, "tried to sample direction from empty mesh list");
            return Err(SampleError::EmptyList);
        }

        let index = rng.gen_range(0..self.meshes.len());
        let dir = self.meshes[index]
            .random_direction(origin, rng)
            .inspect_err(|err| trace!(target: MESH, ?err, index, "mesh list member failed to sample direction"))?;

        validate::normal3(dir);
        Ok(dir)
    }
}

// endregion Mesh Impl
