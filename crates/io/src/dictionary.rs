use foamke_types::{DimensionSet, DimensionedScalar};
use tracing::debug;

use crate::cursor::TokenCursor;
use crate::error::SyntaxError;
use crate::token::{Spanned, Token};

/// 辞書エントリの値。
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Dict(Dictionary),
    /// `;` までのトークン列（`;` は含まない）
    Stream(Vec<Spanned>),
}

/// `key value;` と `key { ... }` からなる OpenFOAM 辞書。
///
/// 同じキーが複数回現れた場合は後のものが有効。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Entry)>,
}

impl Dictionary {
    pub fn parse(tokens: &[Spanned]) -> Result<Self, SyntaxError> {
        let mut cursor = TokenCursor::new(tokens);
        parse_entries(&mut cursor, false)
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, e)| e)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn sub_dict(&self, key: &str) -> Option<&Dictionary> {
        match self.get(key)? {
            Entry::Dict(d) => Some(d),
            Entry::Stream(_) => None,
        }
    }

    pub fn stream(&self, key: &str) -> Option<&[Spanned]> {
        match self.get(key)? {
            Entry::Stream(s) => Some(s),
            Entry::Dict(_) => None,
        }
    }

    /// 単一の語または文字列からなるエントリ（`class volVectorField;` など）。
    pub fn word(&self, key: &str) -> Option<&str> {
        match self.stream(key)? {
            [single] => single.token.as_word(),
            _ => None,
        }
    }

    /// 次元付きスカラーを読む。キーがなければ `Ok(None)`。
    ///
    /// 受け付ける形式:
    /// - `rho [1 -3 0 0 0 0 0] 1.2;`
    /// - `rho rho [1 -3 0 0 0 0 0] 1.2;`
    /// - `rho 1.2;`（無次元）
    pub fn dimensioned_scalar(&self, key: &str) -> Result<Option<DimensionedScalar>, SyntaxError> {
        let Some(tokens) = self.stream(key) else {
            return Ok(None);
        };
        let mut c = TokenCursor::new(tokens);
        let name = match c.peek() {
            Some(Token::Word(w)) => {
                c.next_token();
                w.clone()
            }
            _ => key.to_string(),
        };
        let dimensions = if c.peek().is_some_and(|t| t.is_punct('[')) {
            c.expect_dimensions()?
        } else {
            DimensionSet::DIMLESS
        };
        let value = c.expect_number()?;
        c.expect_end()?;
        Ok(Some(DimensionedScalar::new(name, dimensions, value)))
    }
}

fn parse_entries(c: &mut TokenCursor<'_>, nested: bool) -> Result<Dictionary, SyntaxError> {
    let mut dict = Dictionary::default();
    loop {
        let key = match c.peek() {
            None if nested => return Err(c.error("unexpected end of input, missing '}'")),
            None => return Ok(dict),
            Some(Token::Punct('}')) if nested => {
                c.next_token();
                return Ok(dict);
            }
            Some(Token::Punct(';')) => {
                c.next_token();
                continue;
            }
            Some(Token::Word(w) | Token::Str(w)) => w.clone(),
            Some(t) => return Err(c.error(format!("expected a keyword, found {t}"))),
        };
        c.next_token();

        // #include / #inputMode などの指示子は引数 1 つを読み飛ばす
        if key.starts_with('#') {
            let arg = c.next_token();
            debug!("ignoring directive {key} {:?}", arg);
            continue;
        }

        if c.eat_punct('{') {
            let sub = parse_entries(c, true)?;
            dict.entries.push((key, Entry::Dict(sub)));
            continue;
        }

        let stream = read_stream(c, &key)?;
        dict.entries.push((key, Entry::Stream(stream)));
    }
}

/// 深さ 0 の `;` までを読み、`;` を消費する。
fn read_stream(c: &mut TokenCursor<'_>, key: &str) -> Result<Vec<Spanned>, SyntaxError> {
    let start = c.position();
    let start_line = c.line();
    let mut depth = 0usize;
    loop {
        let Some(t) = c.peek() else {
            return Err(SyntaxError::new(
                start_line,
                format!("missing ';' after keyword {key}"),
            ));
        };
        match t {
            Token::Punct(';') if depth == 0 => break,
            Token::Punct('(' | '[' | '{') => depth += 1,
            Token::Punct(')' | ']' | '}') => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| c.error(format!("unbalanced {t} in entry {key}")))?;
            }
            _ => {}
        }
        c.next_token();
    }
    let stream = c.slice_from(start).to_vec();
    c.next_token();
    Ok(stream)
}
