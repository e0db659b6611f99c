//! 一時ディレクトリ上に小さな OpenFOAM ケースを組み立てる。

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use total_kinetic_energy::{Cli, execute};

pub const VELOCITY_DIMS: &str = "[0 1 -1 0 0 0 0]";
pub const DENSITY_DIMS: &str = "[1 -3 0 0 0 0 0]";
pub const DIMLESS: &str = "[0 0 0 0 0 0 0]";

fn header(class: &str, object: &str) -> String {
    format!(
        "FoamFile\n{{\n    version 2.0;\n    format ascii;\n    class {class};\n    object {object};\n}}\n"
    )
}

fn write(path: PathBuf, text: String) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn with_region(dir: PathBuf, region: Option<&str>) -> PathBuf {
    match region {
        Some(r) => dir.join(r),
        None => dir,
    }
}

/// x 方向に並んだ `n_cells` 個の直方体セル（各辺 `size`）の `polyMesh`。
///
/// 点番号は `p(i, j, k) = 4 i + 2 j + k`。内部面を先に、境界面を後に並べる。
pub fn write_row_mesh(base: &Path, region: Option<&str>, n_cells: usize, size: [f64; 3]) {
    let dir = with_region(base.join("constant"), region).join("polyMesh");
    let p = |i: usize, j: usize, k: usize| 4 * i + 2 * j + k;

    let mut points = Vec::new();
    for i in 0..=n_cells {
        for j in 0..2 {
            for k in 0..2 {
                points.push(format!(
                    "({} {} {})",
                    i as f64 * size[0],
                    j as f64 * size[1],
                    k as f64 * size[2]
                ));
            }
        }
    }

    let mut faces: Vec<[usize; 4]> = Vec::new();
    let mut owner = Vec::new();
    let mut neighbour = Vec::new();
    for i in 1..n_cells {
        faces.push([p(i, 0, 0), p(i, 1, 0), p(i, 1, 1), p(i, 0, 1)]);
        owner.push(i - 1);
        neighbour.push(i);
    }
    for i in 0..n_cells {
        faces.push([p(i, 0, 0), p(i + 1, 0, 0), p(i + 1, 0, 1), p(i, 0, 1)]);
        faces.push([p(i, 1, 0), p(i, 1, 1), p(i + 1, 1, 1), p(i + 1, 1, 0)]);
        faces.push([p(i, 0, 0), p(i, 1, 0), p(i + 1, 1, 0), p(i + 1, 0, 0)]);
        faces.push([p(i, 0, 1), p(i + 1, 0, 1), p(i + 1, 1, 1), p(i, 1, 1)]);
        owner.extend([i; 4]);
    }
    faces.push([p(0, 0, 0), p(0, 0, 1), p(0, 1, 1), p(0, 1, 0)]);
    owner.push(0);
    let n = n_cells;
    faces.push([p(n, 0, 0), p(n, 1, 0), p(n, 1, 1), p(n, 0, 1)]);
    owner.push(n_cells - 1);

    let faces: Vec<String> = faces
        .iter()
        .map(|f| format!("4({} {} {} {})", f[0], f[1], f[2], f[3]))
        .collect();
    let labels = |v: &[usize]| {
        let items: Vec<String> = v.iter().map(usize::to_string).collect();
        format!("{}\n(\n{}\n)\n", v.len(), items.join("\n"))
    };

    write(
        dir.join("points"),
        header("vectorField", "points") + &format!("{}\n(\n{}\n)\n", points.len(), points.join("\n")),
    );
    write(
        dir.join("faces"),
        header("faceList", "faces") + &format!("{}\n(\n{}\n)\n", faces.len(), faces.join("\n")),
    );
    write(dir.join("owner"), header("labelList", "owner") + &labels(&owner));
    write(
        dir.join("neighbour"),
        header("labelList", "neighbour") + &labels(&neighbour),
    );
}

pub fn write_transport_properties(base: &Path, region: Option<&str>, entry: &str) {
    let path = with_region(base.join("constant"), region).join("transportProperties");
    write(
        path,
        header("dictionary", "transportProperties")
            + "\ntransportModel  Newtonian;\n\nnu              [0 2 -1 0 0 0 0] 1e-05;\n"
            + entry
            + "\n",
    );
}

fn boundary() -> &'static str {
    "boundaryField\n{\n    \".*\"\n    {\n        type zeroGradient;\n    }\n}\n"
}

pub fn write_velocity(base: &Path, time: &str, region: Option<&str>, u: [f64; 3]) {
    let path = with_region(base.join(time), region).join("U");
    write(
        path,
        header("volVectorField", "U")
            + &format!(
                "\ndimensions      {VELOCITY_DIMS};\n\ninternalField   uniform ({} {} {});\n\n",
                u[0], u[1], u[2]
            )
            + boundary(),
    );
}

pub fn write_density(base: &Path, time: &str, region: Option<&str>, values: &[f64]) {
    let path = with_region(base.join(time), region).join("rho");
    let items: Vec<String> = values.iter().map(f64::to_string).collect();
    write(
        path,
        header("volScalarField", "rho")
            + &format!(
                "\ndimensions      {DENSITY_DIMS};\n\ninternalField   nonuniform List<scalar> {}\n(\n{}\n)\n;\n\n",
                values.len(),
                items.join("\n")
            )
            + boundary(),
    );
}

/// 実行結果と標準出力に相当するテキスト。
pub struct Outcome {
    pub result: anyhow::Result<total_kinetic_energy::RunSummary>,
    pub stdout: String,
}

impl Outcome {
    pub fn error(&self) -> String {
        match &self.result {
            Ok(_) => panic!("expected failure, got output:\n{}", self.stdout),
            Err(e) => format!("{e:#}"),
        }
    }
}

pub fn run(case: &Path, args: &[&str]) -> Outcome {
    let case = case.to_str().unwrap().to_string();
    let argv = ["total-kinetic-energy", "-case", case.as_str()]
        .into_iter()
        .chain(args.iter().copied());
    let cli = Cli::try_parse_foam_args(argv).unwrap();
    let mut out = Vec::new();
    let result = execute(&cli, &mut out);
    Outcome {
        result,
        stdout: String::from_utf8(out).unwrap(),
    }
}

pub fn tempdir() -> TempDir {
    tempfile::tempdir().unwrap()
}
