use foamke_types::tensor::Vector;

use crate::error::MeshError;
use crate::geometry::{cell_volumes, face_geometry};

/// 面ベースの多面体メッシュ。
///
/// 面 `f < n_internal_faces` は内部面で、`owner[f]` から `neighbour[f]` へ向く。
/// それ以降の面は境界面で owner のみを持つ。セル数は owner / neighbour に
/// 現れる最大のセル番号 + 1 とする。
#[derive(Debug, Clone)]
pub struct PolyMesh {
    n_points: usize,
    n_faces: usize,
    n_internal_faces: usize,
    cell_volumes: Vec<f64>,
}

impl PolyMesh {
    /// 検証したうえでセル体積を計算する。
    pub fn new(
        points: Vec<Vector>,
        faces: Vec<Vec<usize>>,
        owner: Vec<usize>,
        neighbour: Vec<usize>,
    ) -> Result<Self, MeshError> {
        if faces.is_empty() {
            return Err(MeshError::Empty);
        }
        if owner.len() != faces.len() {
            return Err(MeshError::OwnerLengthMismatch {
                expected: faces.len(),
                got: owner.len(),
            });
        }
        if neighbour.len() > faces.len() {
            return Err(MeshError::NeighbourExceedsFaces {
                n_neighbour: neighbour.len(),
                n_faces: faces.len(),
            });
        }
        for (face, verts) in faces.iter().enumerate() {
            if verts.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face,
                    n_vertices: verts.len(),
                });
            }
            if let Some(&point) = verts.iter().find(|&&p| p >= points.len()) {
                return Err(MeshError::PointIndexOutOfRange {
                    face,
                    point,
                    n_points: points.len(),
                });
            }
        }

        let n_cells = owner.iter().chain(neighbour.iter()).max().map_or(0, |&c| c + 1);

        let geometry: Vec<_> = faces.iter().map(|f| face_geometry(&points, f)).collect();
        let volumes = cell_volumes(&geometry, &owner, &neighbour, n_cells);

        if let Some((cell, &volume)) = volumes.iter().enumerate().find(|&(_, v)| *v <= 0.0) {
            return Err(MeshError::NonPositiveVolume { cell, volume });
        }

        Ok(Self {
            n_points: points.len(),
            n_faces: faces.len(),
            n_internal_faces: neighbour.len(),
            cell_volumes: volumes,
        })
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn n_faces(&self) -> usize {
        self.n_faces
    }

    pub fn n_internal_faces(&self) -> usize {
        self.n_internal_faces
    }

    pub fn n_cells(&self) -> usize {
        self.cell_volumes.len()
    }

    /// セル体積 `V`（次元 `[0 3 0 0 0 0 0]`）。
    pub fn cell_volumes(&self) -> &[f64] {
        &self.cell_volumes
    }

    pub fn total_volume(&self) -> f64 {
        self.cell_volumes.iter().sum()
    }
}
