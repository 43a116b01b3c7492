//! Tagged token variants produced by the regex scanner and consumed by
//! the regex parser. Tokens are not retained past the parser: each one
//! is created, matched on, and dropped.

use crate::alphabet::SymbolSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Eof,
    Eol,
    Star,
    Plus,
    Pipe,
    LParen,
    RParen,
    Symbol(u8),
    CharClass(SymbolSet),
}

impl Token {
    /// `EOF` and `EOL` are the two "end" tokens: a regex on a line must
    /// be followed by one of these, never by more regex syntax.
    pub fn is_end(&self) -> bool {
        matches!(self, Token::Eof | Token::Eol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "EOF"),
            Token::Eol => write!(f, "EOL"),
            Token::Star => write!(f, "*"),
            Token::Plus => write!(f, "+"),
            Token::Pipe => write!(f, "|"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Symbol(c) => write!(f, "{}", printable_repr(*c)),
            Token::CharClass(set) => {
                write!(f, "[")?;
                for b in set.iter() {
                    write!(f, "{}", printable_repr(b))?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Escapes a byte for display the same way the scanner's `-l` token log
/// and the Graphviz renderer print non-printable bytes.
pub fn printable_repr(byte: u8) -> String {
    match byte {
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        0x00 => "\\0".to_string(),
        0x07 => "\\a".to_string(),
        0x08 => "\\b".to_string(),
        0x0B => "\\v".to_string(),
        0x0C => "\\f".to_string(),
        b if (0x20..0x7F).contains(&b) => (b as char).to_string(),
        b => format!("\\x{:02x}", b),
    }
}
