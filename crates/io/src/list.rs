use foamke_types::tensor::Vector;

use crate::cursor::TokenCursor;
use crate::error::SyntaxError;
use crate::token::Token;

/// OpenFOAM のリストを読む。
///
/// 受け付ける形式:
/// - `N ( a b c ... )`
/// - `N { a }`（全要素が `a`）
/// - `( a b c ... )`（要素数の省略）
///
/// 先頭の `List<vector>` のような型名は読み飛ばす。
pub(crate) fn read_list<'a, T, F>(c: &mut TokenCursor<'a>, mut item: F) -> Result<Vec<T>, SyntaxError>
where
    T: Clone,
    F: FnMut(&mut TokenCursor<'a>) -> Result<T, SyntaxError>,
{
    if let Some(Token::Word(w)) = c.peek() {
        if w.starts_with("List<") {
            c.next_token();
        }
    }

    let size = match c.peek() {
        Some(t) if t.as_label().is_some() => Some(c.expect_label()?),
        _ => None,
    };

    if let Some(n) = size {
        if c.eat_punct('{') {
            let value = item(c)?;
            c.expect_punct('}')?;
            return Ok(vec![value; n]);
        }
    }

    c.expect_punct('(')?;
    let mut values = Vec::with_capacity(size.unwrap_or(0));
    while !c.eat_punct(')') {
        if c.is_empty() {
            return Err(c.error("unexpected end of input inside list"));
        }
        values.push(item(c)?);
    }

    match size {
        Some(n) if n != values.len() => Err(c.error(format!(
            "list declares {n} elements but contains {}",
            values.len()
        ))),
        _ => Ok(values),
    }
}

pub(crate) fn read_label(c: &mut TokenCursor<'_>) -> Result<usize, SyntaxError> {
    c.expect_label()
}

pub(crate) fn read_scalar(c: &mut TokenCursor<'_>) -> Result<f64, SyntaxError> {
    c.expect_number()
}

pub(crate) fn read_vector(c: &mut TokenCursor<'_>) -> Result<Vector, SyntaxError> {
    c.expect_triple().map(Vector::from)
}

/// `4(0 1 2 3)` 形式の面。
pub(crate) fn read_face(c: &mut TokenCursor<'_>) -> Result<Vec<usize>, SyntaxError> {
    read_list(c, read_label)
}
