use foamke_types::tensor::Vector;

/// これより小さい面積の面は退化面として扱う。
const ROOT_VSMALL: f64 = 1e-150;

/// 面の重心と面積ベクトル。面積ベクトルの向きは owner セルの外向き。
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceGeometry {
    pub centre: Vector,
    pub area: Vector,
}

/// 面の重心と面積ベクトルを計算する。
///
/// 三角形はそのまま、それ以外は頂点平均点を頂点とする三角形に分割し、
/// 各三角形の面積で重心を加重平均する。
///
/// # Panics
///
/// `face` の各要素が `points` の有効なインデックスでない場合、実行時パニックとなる。
pub(crate) fn face_geometry(points: &[Vector], face: &[usize]) -> FaceGeometry {
    let n = face.len();

    if n == 3 {
        let (p0, p1, p2) = (points[face[0]], points[face[1]], points[face[2]]);
        return FaceGeometry {
            centre: (p0 + p1 + p2) / 3.0,
            area: (p1 - p0).cross(&(p2 - p0)) * 0.5,
        };
    }

    let estimate = face
        .iter()
        .fold(Vector::zero(), |acc, &pi| acc + points[pi])
        / n as f64;

    let mut sum_n = Vector::zero();
    let mut sum_a = 0.0;
    let mut sum_ac = Vector::zero();

    for (i, &pi) in face.iter().enumerate() {
        let this = points[pi];
        let next = points[face[(i + 1) % n]];

        // 三角形 (this, next, estimate) の 2 倍面積ベクトル
        let tri_n = (next - this).cross(&(estimate - this));
        let tri_a = tri_n.mag();

        sum_n += tri_n;
        sum_a += tri_a;
        sum_ac += (this + next + estimate) * tri_a;
    }

    if sum_a < ROOT_VSMALL {
        FaceGeometry {
            centre: estimate,
            area: Vector::zero(),
        }
    } else {
        FaceGeometry {
            centre: sum_ac / (3.0 * sum_a),
            area: sum_n * 0.5,
        }
    }
}

/// 全セルの体積を計算する。
///
/// 各セルを「面 + セル推定中心」の角錐に分解し、角錐体積
/// `S_f · (C_f - C_est) / 3` を合計する。neighbour 側では面積ベクトルが内向きになるため符号を反転する。
///
/// # Panics
///
/// `owner` / `neighbour` の各要素が `n_cells` 未満であり、
/// `faces.len() == owner.len()` かつ `neighbour.len() <= faces.len()` であること。
pub(crate) fn cell_volumes(
    faces: &[FaceGeometry],
    owner: &[usize],
    neighbour: &[usize],
    n_cells: usize,
) -> Vec<f64> {
    let mut n_faces_of = vec![0usize; n_cells];
    let mut estimate = vec![Vector::zero(); n_cells];

    for (f, &o) in owner.iter().enumerate() {
        estimate[o] += faces[f].centre;
        n_faces_of[o] += 1;
    }
    for (f, &nb) in neighbour.iter().enumerate() {
        estimate[nb] += faces[f].centre;
        n_faces_of[nb] += 1;
    }
    for (c, count) in n_faces_of.iter().enumerate() {
        if *count > 0 {
            estimate[c] /= *count as f64;
        }
    }

    let mut volumes = vec![0.0_f64; n_cells];
    for (f, &o) in owner.iter().enumerate() {
        volumes[o] += faces[f].area.dot(&(faces[f].centre - estimate[o]));
    }
    for (f, &nb) in neighbour.iter().enumerate() {
        volumes[nb] += faces[f].area.dot(&(estimate[nb] - faces[f].centre));
    }
    for v in &mut volumes {
        *v /= 3.0;
    }
    volumes
}
