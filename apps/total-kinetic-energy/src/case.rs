//! ケースデータへのアクセス。
//!
//! ドライバは [`FieldLoader`]・[`DictionaryLookup`]・[`CaseGeometry`] を通してのみ
//! ケースを読み、時刻の列挙は [`TimeEnumerator`] が受け持つ。実ケースは単一ドメインの
//! [`SerialCase`] と `processor<N>` に分割された [`DecomposedCase`] の 2 種類。

use foamke_fields::{DomainSum, GlobalReduce, SerialSum, VolField, VolScalarField, VolVectorField};
use foamke_io::{FoamCase, FoamError, Instant, ReadValue};
use foamke_mesh::PolyMesh;
use foamke_types::DimensionedScalar;
use tracing::debug;

/// 時刻を明示して体積場を読む。
pub trait FieldLoader {
    fn has_field(&self, name: &str, time: &Instant) -> bool;
    fn read_vector(&self, name: &str, time: &Instant) -> Result<VolVectorField, FoamError>;
    fn read_scalar(&self, name: &str, time: &Instant) -> Result<VolScalarField, FoamError>;
}

/// `constant/` 以下の辞書から次元付きスカラーを引く。
pub trait DictionaryLookup {
    fn dimensioned_scalar(&self, dictionary: &str, key: &str)
    -> Result<DimensionedScalar, FoamError>;
}

/// ケースに存在する時刻を昇順で列挙する。
pub trait TimeEnumerator {
    fn times(&self) -> Result<Vec<Instant>, FoamError>;
}

/// 分割されていないケース。メッシュは起動時に一度だけ読む。
#[derive(Debug)]
pub struct SerialCase {
    case: FoamCase,
    mesh: PolyMesh,
}

impl SerialCase {
    pub fn open(case: FoamCase) -> Result<Self, FoamError> {
        let mesh = case.read_mesh()?;
        debug!(
            "mesh {}: {} cells, total volume {:e}",
            case.mesh_dir().display(),
            mesh.n_cells(),
            mesh.total_volume()
        );
        Ok(Self { case, mesh })
    }

    fn read<T: ReadValue>(&self, name: &str, time: &Instant) -> Result<VolField<T>, FoamError> {
        self.case.read_field(name, time, self.mesh.n_cells())
    }
}

impl FieldLoader for SerialCase {
    fn has_field(&self, name: &str, time: &Instant) -> bool {
        self.case.has_field(name, time)
    }

    fn read_vector(&self, name: &str, time: &Instant) -> Result<VolVectorField, FoamError> {
        self.read(name, time)
    }

    fn read_scalar(&self, name: &str, time: &Instant) -> Result<VolScalarField, FoamError> {
        self.read(name, time)
    }
}

impl DictionaryLookup for SerialCase {
    fn dimensioned_scalar(
        &self,
        dictionary: &str,
        key: &str,
    ) -> Result<DimensionedScalar, FoamError> {
        self.case.lookup_dimensioned_scalar(dictionary, key)
    }
}

impl TimeEnumerator for SerialCase {
    fn times(&self) -> Result<Vec<Instant>, FoamError> {
        self.case.times()
    }
}

/// `processor<N>` に分割されたケース。
///
/// フィールドとセル体積はプロセッサ番号順に連結し、総和は [`DomainSum`] で
/// ドメインごとに取る。時刻は `processor0` から、辞書は分割前の `constant/` から読み、
/// なければ `processor0/constant/` を使う。
#[derive(Debug)]
pub struct DecomposedCase {
    root: FoamCase,
    domains: Vec<SerialCase>,
    volumes: Vec<f64>,
    reducer: DomainSum,
}

impl DecomposedCase {
    pub fn open(root: FoamCase) -> Result<Self, FoamError> {
        let domains = root
            .processor_cases()?
            .into_iter()
            .map(SerialCase::open)
            .collect::<Result<Vec<_>, _>>()?;

        let sizes: Vec<usize> = domains.iter().map(|d| d.mesh.n_cells()).collect();
        let volumes = domains
            .iter()
            .flat_map(|d| d.cell_volumes().iter().copied())
            .collect();
        let reducer = DomainSum::from_sizes(&sizes);
        debug!(
            "decomposed case: {} domains, {} cells",
            reducer.n_domains(),
            reducer.n_cells()
        );

        Ok(Self {
            root,
            domains,
            volumes,
            reducer,
        })
    }

    pub fn n_domains(&self) -> usize {
        self.domains.len()
    }

    fn read<T: ReadValue>(&self, name: &str, time: &Instant) -> Result<VolField<T>, FoamError> {
        let mut domains = self.domains.iter();
        // processor_cases は空を返さない
        let Some(first) = domains.next() else {
            return Err(FoamError::NoProcessorDirectories(self.root.root().to_path_buf()));
        };
        let mut field = first.read::<T>(name, time)?;
        for domain in domains {
            field.append(domain.read(name, time)?);
        }
        field.check_size(self.volumes.len())?;
        Ok(field)
    }
}

impl FieldLoader for DecomposedCase {
    fn has_field(&self, name: &str, time: &Instant) -> bool {
        self.domains.iter().all(|d| d.has_field(name, time))
    }

    fn read_vector(&self, name: &str, time: &Instant) -> Result<VolVectorField, FoamError> {
        self.read(name, time)
    }

    fn read_scalar(&self, name: &str, time: &Instant) -> Result<VolScalarField, FoamError> {
        self.read(name, time)
    }
}

impl DictionaryLookup for DecomposedCase {
    fn dimensioned_scalar(
        &self,
        dictionary: &str,
        key: &str,
    ) -> Result<DimensionedScalar, FoamError> {
        if self.root.dictionary_path(dictionary).is_file() {
            return self.root.lookup_dimensioned_scalar(dictionary, key);
        }
        match self.domains.first() {
            Some(first) => first.dimensioned_scalar(dictionary, key),
            None => self.root.lookup_dimensioned_scalar(dictionary, key),
        }
    }
}

impl TimeEnumerator for DecomposedCase {
    fn times(&self) -> Result<Vec<Instant>, FoamError> {
        match self.domains.first() {
            Some(first) => first.times(),
            None => Ok(Vec::new()),
        }
    }
}

/// セル体積と、ケースの分割に合った総和演算。
pub trait CaseGeometry {
    fn cell_volumes(&self) -> &[f64];
    fn reducer(&self) -> &dyn GlobalReduce;
}

impl CaseGeometry for SerialCase {
    fn cell_volumes(&self) -> &[f64] {
        self.mesh.cell_volumes()
    }

    fn reducer(&self) -> &dyn GlobalReduce {
        &SerialSum
    }
}

impl CaseGeometry for DecomposedCase {
    fn cell_volumes(&self) -> &[f64] {
        &self.volumes
    }

    fn reducer(&self) -> &dyn GlobalReduce {
        &self.reducer
    }
}
