use std::path::PathBuf;

use foamke_fields::FieldError;
use foamke_mesh::MeshError;

/// トークン列上の構文エラー。ファイルパスは呼び出し側で [`SyntaxError::at`] により付与する。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    pub fn at(self, path: impl Into<PathBuf>) -> FoamError {
        FoamError::Parse {
            path: path.into(),
            line: self.line,
            message: self.message,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FoamError {
    #[error("cannot open file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("keyword {key} is undefined in dictionary {path}")]
    MissingEntry { path: PathBuf, key: String },
    #[error("{path}: class {found} is not {expected}")]
    ClassMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("{path}: binary format is not supported, convert the case with foamFormatConvert")]
    BinaryFormat { path: PathBuf },
    #[error("no processor directories found in {0}")]
    NoProcessorDirectories(PathBuf),
    #[error("invalid time range {0:?}")]
    InvalidTimeRange(String),
    #[error("mesh {path}: {source}")]
    Mesh {
        path: PathBuf,
        #[source]
        source: MeshError,
    },
    #[error(transparent)]
    Field(#[from] FieldError),
}
