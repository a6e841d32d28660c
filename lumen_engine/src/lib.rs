//! # Lumen Engine
//!
//! Geometry core for a Monte Carlo path tracer.
//!
//! Everything renderable implements [mesh::Mesh], which answers three questions: where a ray first hits the mesh,
//! what box bounds the mesh over a time span, and (for light sampling) what the density of directions towards the
//! mesh is, and how to draw one. [mesh::list::MeshList] aggregates any number of meshes behind that same interface,
//! so lists nest inside lists.
//!
//! Direction distributions that consume meshes live in [pdf].

pub mod core;
pub mod mesh;
pub mod pdf;
pub mod shared;
