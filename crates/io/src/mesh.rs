use std::path::Path;

use foamke_mesh::PolyMesh;
use tracing::debug;

use crate::cursor::TokenCursor;
use crate::error::{FoamError, SyntaxError};
use crate::foam_file::FoamFile;
use crate::list::{read_face, read_label, read_list, read_vector};

/// `polyMesh` ディレクトリ（`points`, `faces`, `owner`, `neighbour`）からメッシュを構築する。
pub fn read_poly_mesh(dir: &Path) -> Result<PolyMesh, FoamError> {
    let points = read_list_file(&dir.join("points"), |c| read_list(c, read_vector))?;
    let faces = read_list_file(&dir.join("faces"), read_faces)?;
    let owner = read_list_file(&dir.join("owner"), |c| read_list(c, read_label))?;
    let neighbour = read_list_file(&dir.join("neighbour"), |c| read_list(c, read_label))?;

    let mesh = PolyMesh::new(points, faces, owner, neighbour).map_err(|source| FoamError::Mesh {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(
        "mesh {}: {} points, {} faces ({} internal), {} cells, volume {}",
        dir.display(),
        mesh.n_points(),
        mesh.n_faces(),
        mesh.n_internal_faces(),
        mesh.n_cells(),
        mesh.total_volume()
    );
    Ok(mesh)
}

fn read_list_file<T>(
    path: &Path,
    read: impl FnOnce(&mut TokenCursor<'_>) -> Result<T, SyntaxError>,
) -> Result<T, FoamError> {
    let file = FoamFile::read(path)?;
    let mut c = file.cursor();
    let value = read(&mut c).map_err(|e| e.at(path))?;
    c.expect_end().map_err(|e| e.at(path))?;
    Ok(value)
}

/// `faceList` または ASCII の `faceCompactList`（オフセット列 + 頂点列）。
fn read_faces(c: &mut TokenCursor<'_>) -> Result<Vec<Vec<usize>>, SyntaxError> {
    // faceCompactList は先頭がラベルのみのリスト: N ( 0 4 8 ... )
    // faceList は N ( 4 ( ... ) ... ) なので 4 番目のトークンで区別できる
    let compact = matches!(
        (c.peek_at(1), c.peek_at(2), c.peek_at(3)),
        (Some(open), Some(first), Some(after))
            if open.is_punct('(') && first.as_label().is_some() && !after.is_punct('(')
    );
    if !compact {
        return read_list(c, read_face);
    }

    let offsets = read_list(c, read_label)?;
    let vertices = read_list(c, read_label)?;
    let mut faces = Vec::with_capacity(offsets.len().saturating_sub(1));
    for w in offsets.windows(2) {
        let (start, end) = (w[0], w[1]);
        if start > end || end > vertices.len() {
            return Err(c.error(format!(
                "faceCompactList offsets {start}..{end} exceed {} vertices",
                vertices.len()
            )));
        }
        faces.push(vertices[start..end].to_vec());
    }
    Ok(faces)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn header(class: &str, object: &str) -> String {
        format!("FoamFile {{ version 2.0; format ascii; class {class}; object {object}; }}\n")
    }

    const POINTS: &str = "8 ((0 0 0) (1 0 0) (1 1 0) (0 1 0) (0 0 1) (1 0 1) (1 1 1) (0 1 1))";

    fn write_cube(dir: &Path, faces: &str) {
        fs::write(dir.join("points"), header("vectorField", "points") + POINTS).unwrap();
        fs::write(dir.join("faces"), header("faceList", "faces") + faces).unwrap();
        fs::write(dir.join("owner"), header("labelList", "owner") + "6{0}").unwrap();
        fs::write(dir.join("neighbour"), header("labelList", "neighbour") + "0()").unwrap();
    }

    #[test]
    fn reads_single_cell_face_list() {
        let dir = tempfile::tempdir().unwrap();
        write_cube(
            dir.path(),
            "6 (4(0 3 2 1) 4(4 5 6 7) 4(0 1 5 4) 4(3 7 6 2) 4(0 4 7 3) 4(1 2 6 5))",
        );
        let mesh = read_poly_mesh(dir.path()).unwrap();
        assert_eq!(mesh.n_cells(), 1);
        assert!((mesh.cell_volumes()[0] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn reads_face_compact_list() {
        let dir = tempfile::tempdir().unwrap();
        write_cube(
            dir.path(),
            "7 (0 4 8 12 16 20 24)\n24 (0 3 2 1 4 5 6 7 0 1 5 4 3 7 6 2 0 4 7 3 1 2 6 5)",
        );
        let mesh = read_poly_mesh(dir.path()).unwrap();
        assert_eq!(mesh.n_faces(), 6);
        assert!((mesh.total_volume() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn invalid_topology_is_a_mesh_error() {
        let dir = tempfile::tempdir().unwrap();
        write_cube(dir.path(), "5 (4(0 3 2 1) 4(4 5 6 7) 4(0 1 5 4) 4(3 7 6 2) 4(0 4 7 3))");
        let err = read_poly_mesh(dir.path()).unwrap_err();
        assert!(matches!(err, FoamError::Mesh { .. }), "{err}");
    }

    #[test]
    fn missing_points_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_poly_mesh(dir.path()).unwrap_err();
        assert!(matches!(err, FoamError::Io { .. }), "{err}");
    }
}
