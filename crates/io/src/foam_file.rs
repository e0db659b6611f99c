use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cursor::TokenCursor;
use crate::dictionary::Dictionary;
use crate::error::FoamError;
use crate::token::{Spanned, Token, tokenize};

/// `FoamFile { ... }` ヘッダとそれに続く本体からなる OpenFOAM ファイル。
#[derive(Debug, Clone)]
pub struct FoamFile {
    path: PathBuf,
    header: Dictionary,
    body: Vec<Spanned>,
}

impl FoamFile {
    /// ヘッダを読めるファイルが存在するか（OpenFOAM の `headerOk` に相当）。
    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }

    pub fn read(path: &Path) -> Result<Self, FoamError> {
        debug!("reading {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| FoamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self, FoamError> {
        let tokens = tokenize(text).map_err(|e| e.at(path))?;

        let has_header = matches!(
            tokens.as_slice(),
            [first, second, ..] if first.token == Token::Word("FoamFile".into()) && second.token.is_punct('{')
        );

        let (header, body) = if has_header {
            let close = matching_brace(&tokens, 1).ok_or_else(|| FoamError::Parse {
                path: path.to_path_buf(),
                line: tokens[1].line,
                message: "unterminated FoamFile header".into(),
            })?;
            let header = Dictionary::parse(&tokens[2..close]).map_err(|e| e.at(path))?;
            (header, tokens[close + 1..].to_vec())
        } else {
            (Dictionary::default(), tokens)
        };

        if header.word("format") == Some("binary") {
            return Err(FoamError::BinaryFormat {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            header,
            body,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &Dictionary {
        &self.header
    }

    pub fn class(&self) -> Option<&str> {
        self.header.word("class")
    }

    /// ヘッダのクラス名が `expected` であることを確認する。ヘッダがなければ確認しない。
    pub fn check_class(&self, expected: &str) -> Result<(), FoamError> {
        match self.class() {
            Some(found) if found != expected => Err(FoamError::ClassMismatch {
                path: self.path.clone(),
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// 本体を辞書として解釈する。
    pub fn dictionary(&self) -> Result<Dictionary, FoamError> {
        Dictionary::parse(&self.body).map_err(|e| e.at(&self.path))
    }

    /// 本体を先頭から読むカーソル（リスト形式のファイル用）。
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(&self.body)
    }
}

/// `tokens[open]` の `{` に対応する `}` の位置。
fn matching_brace(tokens: &[Spanned], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, s) in tokens.iter().enumerate().skip(open) {
        match s.token {
            Token::Punct('{') => depth += 1,
            Token::Punct('}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "FoamFile\n{\n    version 2.0;\n    format ascii;\n    class labelList;\n    object owner;\n}\n";

    #[test]
    fn separates_header_from_body() {
        let text = format!("{HEADER}3 (0 0 1)\n");
        let file = FoamFile::parse(Path::new("owner"), &text).unwrap();
        assert_eq!(file.class(), Some("labelList"));
        assert_eq!(file.header().word("object"), Some("owner"));
        let mut c = file.cursor();
        assert_eq!(c.expect_label().unwrap(), 3);
    }

    #[test]
    fn headerless_file_keeps_all_tokens() {
        let file = FoamFile::parse(Path::new("x"), "rho 1;").unwrap();
        assert!(file.class().is_none());
        assert!(file.dictionary().unwrap().contains("rho"));
        assert!(file.check_class("dictionary").is_ok());
    }

    #[test]
    fn rejects_binary_format() {
        let text = "FoamFile { format binary; class volVectorField; }";
        let err = FoamFile::parse(Path::new("U"), text).unwrap_err();
        assert!(matches!(err, FoamError::BinaryFormat { .. }));
    }

    #[test]
    fn class_mismatch() {
        let file = FoamFile::parse(Path::new("U"), HEADER).unwrap();
        let err = file.check_class("volVectorField").unwrap_err();
        assert_eq!(
            err.to_string(),
            "U: class labelList is not volVectorField"
        );
    }

    #[test]
    fn unterminated_header() {
        let err = FoamFile::parse(Path::new("U"), "FoamFile { class x;").unwrap_err();
        assert!(matches!(err, FoamError::Parse { line: 1, .. }));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FoamFile::read(&dir.path().join("nothing")).unwrap_err();
        assert!(matches!(err, FoamError::Io { .. }));
    }
}
