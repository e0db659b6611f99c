use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::SyntaxError;

/// OpenFOAM 入力の字句。
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// キーワード・識別子（`internalField`, `List<vector>`, `#include` など）
    Word(String),
    Number(f64),
    /// 二重引用符で囲まれた文字列（引用符は除去済み）
    Str(String),
    /// `(){}[];` のいずれか
    Punct(char),
}

impl Token {
    /// 非負整数として解釈できる数値トークンの値。
    pub fn as_label(&self) -> Option<usize> {
        match *self {
            Token::Number(v) if v >= 0.0 && v.fract() == 0.0 && v < 9.007_199_254_740_992e15 => {
                Some(v as usize)
            }
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) | Token::Str(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_punct(&self, c: char) -> bool {
        matches!(self, Token::Punct(p) if *p == c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(w),
            Token::Number(v) => write!(f, "{v}"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Punct(c) => write!(f, "'{c}'"),
        }
    }
}

/// 行番号付きトークン。
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
}

const PUNCT: &str = "(){}[];";

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !PUNCT.contains(c) && c != '"'
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Lexer<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// `/` の直後で呼ぶ。コメントなら読み飛ばして `true` を返す。
    fn skip_comment(&mut self) -> Result<bool, SyntaxError> {
        match self.chars.peek() {
            Some('/') => {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
                Ok(true)
            }
            Some('*') => {
                let start = self.line;
                self.bump();
                let mut prev = '\0';
                loop {
                    match self.bump() {
                        Some('/') if prev == '*' => return Ok(true),
                        Some(c) => prev = c,
                        None => return Err(SyntaxError::new(start, "unterminated block comment")),
                    }
                }
            }
            _ => Ok(false),
        }
    }

    fn string(&mut self) -> Result<Token, SyntaxError> {
        let start = self.line;
        let mut s = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(s)),
                Some('\\') => match self.bump() {
                    Some(c) => s.push(c),
                    None => break,
                },
                Some(c) => s.push(c),
                None => break,
            }
        }
        Err(SyntaxError::new(start, "unterminated string"))
    }

    /// 次の `/` が `//` または `/*` の始まりか。
    fn comment_ahead(&self) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        matches!(ahead.peek(), Some('/' | '*'))
    }

    fn word(&mut self, first: char) -> Token {
        let mut w = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if !is_word_char(c) || (c == '/' && self.comment_ahead()) {
                break;
            }
            w.push(c);
            self.bump();
        }
        let numeric_start = first.is_ascii_digit() || matches!(first, '-' | '+' | '.');
        match w.parse::<f64>() {
            Ok(v) if numeric_start && v.is_finite() => Token::Number(v),
            _ => Token::Word(w),
        }
    }
}

/// 入力全体をトークン列に分割する。`//` と `/* */` のコメントは除去する。
pub fn tokenize(text: &str) -> Result<Vec<Spanned>, SyntaxError> {
    let mut lexer = Lexer {
        chars: text.chars().peekable(),
        line: 1,
    };
    let mut tokens = Vec::new();

    while let Some(c) = lexer.bump() {
        let line = lexer.line;
        let token = match c {
            c if c.is_whitespace() => continue,
            '/' if lexer.skip_comment()? => continue,
            '"' => lexer.string()?,
            c if PUNCT.contains(c) => Token::Punct(c),
            c => lexer.word(c),
        };
        tokens.push(Spanned { token, line });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Token> {
        tokenize(text).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn splits_entry_with_dimensions() {
        let got = kinds("rho [1 -3 0 0 0 0 0] 1.2;");
        assert_eq!(got[0], Token::Word("rho".into()));
        assert_eq!(got[1], Token::Punct('['));
        assert_eq!(got[3], Token::Number(-3.0));
        assert_eq!(got[9], Token::Punct(']'));
        assert_eq!(got[10], Token::Number(1.2));
        assert_eq!(got[11], Token::Punct(';'));
        assert_eq!(got.len(), 12);
    }

    #[test]
    fn comment_directly_after_token_ends_it() {
        let got = kinds("1.2//kg/m3\nnu 3/*m2/s*/;");
        assert_eq!(
            got,
            vec![
                Token::Number(1.2),
                Token::Word("nu".into()),
                Token::Number(3.0),
                Token::Punct(';'),
            ]
        );
        assert_eq!(kinds("a/b"), vec![Token::Word("a/b".into())]);
    }

    #[test]
    fn face_prefix_count_is_separate_token() {
        let got = kinds("4(0 1 2 3)");
        assert_eq!(got[0], Token::Number(4.0));
        assert_eq!(got[1], Token::Punct('('));
        assert_eq!(got.len(), 7);
    }

    #[test]
    fn strips_comments_and_counts_lines() {
        let text = "// header\n/* multi\nline */ a 1;\n";
        let tokens = tokenize(text).unwrap();
        assert_eq!(tokens[0].token, Token::Word("a".into()));
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn words_keep_angle_brackets_and_hash() {
        let got = kinds("nonuniform List<vector> #include \"file\"");
        assert_eq!(got[1], Token::Word("List<vector>".into()));
        assert_eq!(got[2], Token::Word("#include".into()));
        assert_eq!(got[3], Token::Str("file".into()));
    }

    #[test]
    fn inf_is_a_word_not_a_number() {
        assert_eq!(kinds("inf"), vec![Token::Word("inf".into())]);
        assert_eq!(kinds("1e-05"), vec![Token::Number(1e-5)]);
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let err = tokenize("a /* b").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn label_conversion() {
        assert_eq!(Token::Number(7.0).as_label(), Some(7));
        assert_eq!(Token::Number(-1.0).as_label(), None);
        assert_eq!(Token::Number(0.5).as_label(), None);
    }
}
