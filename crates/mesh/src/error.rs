#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("mesh has no faces")]
    Empty,
    #[error("owner length mismatch: expected {expected} (one per face), got {got}")]
    OwnerLengthMismatch { expected: usize, got: usize },
    #[error("neighbour list has {n_neighbour} entries but the mesh only has {n_faces} faces")]
    NeighbourExceedsFaces { n_neighbour: usize, n_faces: usize },
    #[error("face {face} has {n_vertices} vertices, at least 3 are required")]
    DegenerateFace { face: usize, n_vertices: usize },
    #[error("point index out of range: face {face}, point {point}, n_points {n_points}")]
    PointIndexOutOfRange {
        face: usize,
        point: usize,
        n_points: usize,
    },
    #[error("cell {cell} has non-positive volume {volume}")]
    NonPositiveVolume { cell: usize, volume: f64 },
}
