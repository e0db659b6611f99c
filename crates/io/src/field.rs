use std::path::Path;

use foamke_fields::VolField;
use foamke_types::FieldValue;
use foamke_types::tensor::Vector;

use crate::cursor::TokenCursor;
use crate::error::{FoamError, SyntaxError};
use crate::foam_file::FoamFile;
use crate::list::{read_list, read_scalar, read_vector};
use crate::token::Token;

/// ファイルから読めるフィールド値。
pub trait ReadValue: FieldValue {
    fn read(c: &mut TokenCursor<'_>) -> Result<Self, SyntaxError>;
}

impl ReadValue for f64 {
    fn read(c: &mut TokenCursor<'_>) -> Result<Self, SyntaxError> {
        read_scalar(c)
    }
}

impl ReadValue for Vector {
    fn read(c: &mut TokenCursor<'_>) -> Result<Self, SyntaxError> {
        read_vector(c)
    }
}

/// `vol<Type>Field` ファイルの `dimensions` と `internalField` を読む。
///
/// `uniform` の内部場は `n_cells` 個に展開し、`nonuniform` の場合は要素数が
/// `n_cells` と一致することを確認する。`boundaryField` は読まない。
pub fn read_vol_field<T: ReadValue>(
    path: &Path,
    name: &str,
    n_cells: usize,
) -> Result<VolField<T>, FoamError> {
    let file = FoamFile::read(path)?;
    file.check_class(&VolField::<T>::class_name())?;
    let dict = file.dictionary()?;

    let missing = |key: &str| FoamError::MissingEntry {
        path: path.to_path_buf(),
        key: key.to_string(),
    };

    let dims_tokens = dict.stream("dimensions").ok_or_else(|| missing("dimensions"))?;
    let mut c = TokenCursor::new(dims_tokens);
    let dimensions = c.expect_dimensions().map_err(|e| e.at(path))?;

    let internal_tokens = dict
        .stream("internalField")
        .ok_or_else(|| missing("internalField"))?;
    let values = read_internal_field::<T>(internal_tokens, n_cells).map_err(|e| e.at(path))?;

    let field = VolField::new(name, dimensions, values);
    field.check_size(n_cells)?;
    Ok(field)
}

fn read_internal_field<T: ReadValue>(
    tokens: &[crate::token::Spanned],
    n_cells: usize,
) -> Result<Vec<T>, SyntaxError> {
    let mut c = TokenCursor::new(tokens);
    let values = match c.next_token() {
        Some(Token::Word(w)) if w == "uniform" => vec![T::read(&mut c)?; n_cells],
        Some(Token::Word(w)) if w == "nonuniform" => read_list(&mut c, T::read)?,
        _ => {
            return Err(c.error("internalField must start with uniform or nonuniform"));
        }
    };
    c.expect_end()?;
    Ok(values)
}
