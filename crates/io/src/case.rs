use std::fs;
use std::path::{Path, PathBuf};

use foamke_fields::VolField;
use foamke_mesh::PolyMesh;
use foamke_types::DimensionedScalar;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::FoamError;
use crate::field::{ReadValue, read_vol_field};
use crate::foam_file::FoamFile;
use crate::mesh::read_poly_mesh;
use crate::time::{CONSTANT, Instant, find_times};

/// 既定の領域名。この名前の領域はサブディレクトリを持たない。
pub const DEFAULT_REGION: &str = "region0";

/// ケースディレクトリのレイアウト。
///
/// 既定領域ではフィールドは `<root>/<time>/<name>`、名前付き領域では
/// `<root>/<time>/<region>/<name>` に置かれる。`constant` 以下も同様。
#[derive(Debug, Clone, PartialEq)]
pub struct FoamCase {
    root: PathBuf,
    region: Option<String>,
}

impl FoamCase {
    pub fn new(root: impl Into<PathBuf>, region: Option<String>) -> Self {
        let region = region.filter(|r| r != DEFAULT_REGION);
        Self {
            root: root.into(),
            region,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn with_region(&self, dir: PathBuf) -> PathBuf {
        match &self.region {
            Some(r) => dir.join(r),
            None => dir,
        }
    }

    pub fn constant_dir(&self) -> PathBuf {
        self.with_region(self.root.join(CONSTANT))
    }

    pub fn mesh_dir(&self) -> PathBuf {
        self.constant_dir().join("polyMesh")
    }

    pub fn time_dir(&self, time: &Instant) -> PathBuf {
        self.with_region(self.root.join(&time.name))
    }

    pub fn field_path(&self, name: &str, time: &Instant) -> PathBuf {
        self.time_dir(time).join(name)
    }

    pub fn dictionary_path(&self, name: &str) -> PathBuf {
        self.constant_dir().join(name)
    }

    pub fn has_field(&self, name: &str, time: &Instant) -> bool {
        FoamFile::exists(&self.field_path(name, time))
    }

    pub fn times(&self) -> Result<Vec<Instant>, FoamError> {
        find_times(&self.root)
    }

    pub fn read_mesh(&self) -> Result<PolyMesh, FoamError> {
        read_poly_mesh(&self.mesh_dir())
    }

    pub fn read_field<T: ReadValue>(
        &self,
        name: &str,
        time: &Instant,
        n_cells: usize,
    ) -> Result<VolField<T>, FoamError> {
        read_vol_field(&self.field_path(name, time), name, n_cells)
    }

    pub fn read_dictionary(&self, name: &str) -> Result<Dictionary, FoamError> {
        FoamFile::read(&self.dictionary_path(name))?.dictionary()
    }

    /// `constant/<dictionary>` の次元付きスカラー `key` を読む。キーがなければエラー。
    pub fn lookup_dimensioned_scalar(
        &self,
        dictionary: &str,
        key: &str,
    ) -> Result<DimensionedScalar, FoamError> {
        let path = self.dictionary_path(dictionary);
        let dict = self.read_dictionary(dictionary)?;
        dict.dimensioned_scalar(key)
            .map_err(|e| e.at(&path))?
            .ok_or_else(|| FoamError::MissingEntry {
                path,
                key: key.to_string(),
            })
    }

    /// 分割ケースの `processor<N>` ディレクトリを N の昇順で返す。領域は引き継ぐ。
    pub fn processor_cases(&self) -> Result<Vec<FoamCase>, FoamError> {
        let entries = fs::read_dir(&self.root).map_err(|source| FoamError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut numbered = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| FoamError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            let index = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_prefix("processor"))
                .and_then(|n| n.parse::<usize>().ok());
            if let (Some(index), true) = (index, path.is_dir()) {
                numbered.push((index, path));
            }
        }
        if numbered.is_empty() {
            return Err(FoamError::NoProcessorDirectories(self.root.clone()));
        }
        numbered.sort_by_key(|(i, _)| *i);
        debug!("found {} processor directories", numbered.len());

        Ok(numbered
            .into_iter()
            .map(|(_, path)| FoamCase::new(path, self.region.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_has_no_subdirectory() {
        let case = FoamCase::new("/case", Some(DEFAULT_REGION.to_string()));
        assert_eq!(case.region(), None);
        assert_eq!(case.mesh_dir(), PathBuf::from("/case/constant/polyMesh"));
        let t = Instant::new(0.1, "0.1");
        assert_eq!(case.field_path("U", &t), PathBuf::from("/case/0.1/U"));
    }

    #[test]
    fn named_region_scopes_every_path() {
        let case = FoamCase::new("/case", Some("fluid".to_string()));
        let t = Instant::new(0.1, "0.1");
        assert_eq!(case.field_path("U", &t), PathBuf::from("/case/0.1/fluid/U"));
        assert_eq!(
            case.dictionary_path("transportProperties"),
            PathBuf::from("/case/constant/fluid/transportProperties")
        );
        assert_eq!(case.mesh_dir(), PathBuf::from("/case/constant/fluid/polyMesh"));
    }

    #[test]
    fn constant_instant_maps_to_constant_directory() {
        let case = FoamCase::new("/case", None);
        assert_eq!(
            case.field_path("U", &Instant::constant()),
            PathBuf::from("/case/constant/U")
        );
    }

    #[test]
    fn lookup_reports_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("constant")).unwrap();
        fs::write(
            dir.path().join("constant/transportProperties"),
            "FoamFile { class dictionary; object transportProperties; }\nnu [0 2 -1 0 0 0 0] 1e-05;\n",
        )
        .unwrap();
        let case = FoamCase::new(dir.path(), None);
        let nu = case.lookup_dimensioned_scalar("transportProperties", "nu").unwrap();
        assert_eq!(nu.value, 1e-5);
        let err = case
            .lookup_dimensioned_scalar("transportProperties", "rho")
            .unwrap_err();
        assert!(err.to_string().starts_with("keyword rho is undefined"), "{err}");
    }

    #[test]
    fn processor_directories_sorted_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for d in ["processor10", "processor2", "processor0", "processorX", "0"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        let case = FoamCase::new(dir.path(), Some("fluid".into()));
        let procs = case.processor_cases().unwrap();
        let names: Vec<_> = procs
            .iter()
            .map(|p| p.root().file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["processor0", "processor2", "processor10"]);
        assert_eq!(procs[0].region(), Some("fluid"));
    }

    #[test]
    fn no_processor_directories_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FoamCase::new(dir.path(), None).processor_cases().unwrap_err();
        assert!(matches!(err, FoamError::NoProcessorDirectories(_)));
    }
}
