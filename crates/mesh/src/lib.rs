//! Polyhedral finite-volume mesh for foamke
//!
//! Builds cell volumes from the face-based `polyMesh` description
//! (points, faces, owner, neighbour).

mod error;
mod geometry;
mod poly_mesh;

pub use error::MeshError;
pub use poly_mesh::PolyMesh;
