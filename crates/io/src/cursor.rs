use foamke_types::DimensionSet;

use crate::error::SyntaxError;
use crate::token::{Spanned, Token};

/// トークン列を先頭から読み進めるカーソル。
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    pub fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset).map(|s| &s.token)
    }

    pub fn next_token(&mut self) -> Option<&'a Token> {
        let t = self.peek();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// `start` から現在位置の直前までのトークン。
    pub fn slice_from(&self, start: usize) -> &'a [Spanned] {
        &self.tokens[start.min(self.pos)..self.pos]
    }

    /// 現在位置（終端なら最後のトークン）の行番号。
    pub fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |s| s.line)
    }

    pub fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.line(), message)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(t) => self.error(format!("expected {expected}, found {t}")),
            None => self.error(format!("expected {expected}, found end of input")),
        }
    }

    pub fn expect_punct(&mut self, c: char) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(t) if t.is_punct(c) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected(&format!("'{c}'"))),
        }
    }

    /// 次が `c` なら消費して `true`。
    pub fn eat_punct(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|t| t.is_punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_number(&mut self) -> Result<f64, SyntaxError> {
        match self.peek() {
            Some(Token::Number(v)) => {
                self.pos += 1;
                Ok(*v)
            }
            _ => Err(self.unexpected("a number")),
        }
    }

    pub fn expect_label(&mut self) -> Result<usize, SyntaxError> {
        match self.peek().and_then(Token::as_label) {
            Some(n) => {
                self.pos += 1;
                Ok(n)
            }
            None => Err(self.unexpected("a label")),
        }
    }

    /// `( x y z )` 形式のベクトル成分。
    pub fn expect_triple(&mut self) -> Result<[f64; 3], SyntaxError> {
        self.expect_punct('(')?;
        let triple = [
            self.expect_number()?,
            self.expect_number()?,
            self.expect_number()?,
        ];
        self.expect_punct(')')?;
        Ok(triple)
    }

    /// `[1 -3 0 0 0 0 0]` 形式の次元。5 成分または 7 成分。
    pub fn expect_dimensions(&mut self) -> Result<DimensionSet, SyntaxError> {
        self.expect_punct('[')?;
        let mut exponents = Vec::with_capacity(7);
        while !self.eat_punct(']') {
            match self.peek() {
                Some(Token::Number(v)) => {
                    exponents.push(*v);
                    self.pos += 1;
                }
                Some(Token::Word(w)) => {
                    return Err(self.error(format!(
                        "unit name {w} in dimensions is not supported, use exponents"
                    )));
                }
                _ => return Err(self.unexpected("a dimension exponent or ']'")),
            }
        }
        DimensionSet::from_exponents(&exponents).ok_or_else(|| {
            self.error(format!(
                "dimensions need 5 or 7 exponents, found {}",
                exponents.len()
            ))
        })
    }

    /// 読み残しがないことを確認する。
    pub fn expect_end(&self) -> Result<(), SyntaxError> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(self.error(format!("unexpected trailing token {t}"))),
        }
    }
}
