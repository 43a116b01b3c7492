//! Token stream → list of AST nodes via recursive descent (component
//! C). One [`Ast`] per non-blank input line.

use crate::ast::Ast;
use crate::error::{CompileError, ParsingError};
use crate::scanner::Scanner;
use crate::token::Token;

pub struct Parser {
    scanner: Scanner,
    lookahead: Token,
}

impl Parser {
    pub fn new(mut scanner: Scanner) -> Result<Self, CompileError> {
        let lookahead = scanner.next().map_err(|source| CompileError::Scanning {
            line: scanner.line(),
            source,
        })?;
        Ok(Parser { scanner, lookahead })
    }

    /// Parses the whole input: `top_level := (line)*`. Blank lines
    /// contribute nothing to the result.
    pub fn parse(mut self) -> Result<Vec<Ast>, CompileError> {
        let mut asts = Vec::new();
        loop {
            match self.lookahead {
                Token::Eof => break,
                Token::Eol => {
                    self.advance()?;
                }
                _ => {
                    let ast = self.regex()?;
                    match self.lookahead {
                        Token::Eol => {
                            self.advance()?;
                        }
                        Token::Eof => {}
                        _ => return Err(self.parse_err(ParsingError::JunkAfterRegex)),
                    }
                    asts.push(ast);
                }
            }
        }
        Ok(asts)
    }

    fn advance(&mut self) -> Result<Token, CompileError> {
        let old = std::mem::replace(&mut self.lookahead, Token::Eof);
        self.lookahead = self
            .scanner
            .next()
            .map_err(|source| CompileError::Scanning {
                line: self.scanner.line(),
                source,
            })?;
        Ok(old)
    }

    fn parse_err(&self, err: ParsingError) -> CompileError {
        CompileError::Parsing {
            line: self.scanner.line(),
            source: err,
        }
    }

    fn regex(&mut self) -> Result<Ast, CompileError> {
        self.alternation()
    }

    /// `alternation := concat ('|' alternation)?`, right-associative.
    fn alternation(&mut self) -> Result<Ast, CompileError> {
        let lhs = self.concat()?;
        if self.lookahead == Token::Pipe {
            self.advance()?;
            let rhs = self.alternation()?;
            Ok(Ast::Alt(Box::new(lhs), Box::new(rhs)))
        } else {
            Ok(lhs)
        }
    }

    /// `concat := kleene (concat)?`, right-associative.
    fn concat(&mut self) -> Result<Ast, CompileError> {
        let lhs = self.kleene()?;
        if self.starts_term() {
            let rhs = self.concat()?;
            Ok(Ast::Concat(Box::new(lhs), Box::new(rhs)))
        } else {
            Ok(lhs)
        }
    }

    fn starts_term(&self) -> bool {
        matches!(
            self.lookahead,
            Token::Symbol(_) | Token::CharClass(_) | Token::LParen
        )
    }

    /// `kleene := term ('*' | '+')?`, postfix.
    fn kleene(&mut self) -> Result<Ast, CompileError> {
        let term = self.term()?;
        match self.lookahead {
            Token::Star => {
                self.advance()?;
                Ok(Ast::Kleene(Box::new(term)))
            }
            Token::Plus => {
                self.advance()?;
                Ok(Ast::Plus(Box::new(term)))
            }
            _ => Ok(term),
        }
    }

    /// `term := SYMBOL | CHARCLASS | '(' regex ')'`
    fn term(&mut self) -> Result<Ast, CompileError> {
        match self.lookahead.clone() {
            Token::Symbol(c) => {
                self.advance()?;
                Ok(Ast::Symbol(c))
            }
            Token::CharClass(set) => {
                self.advance()?;
                Ok(Ast::CharClass(set))
            }
            Token::LParen => {
                self.advance()?;
                let inner = self.regex()?;
                match self.lookahead {
                    Token::RParen => {
                        self.advance()?;
                        Ok(inner)
                    }
                    _ => Err(self.parse_err(ParsingError::UnmatchedParentheses)),
                }
            }
            _ => Err(self.parse_err(ParsingError::ExpectedTerm)),
        }
    }
}

/// Convenience entry point: scan and parse a whole regex source at once.
pub fn parse(source: impl Into<Vec<u8>>) -> Result<Vec<Ast>, CompileError> {
    Parser::new(Scanner::new(source))?.parse()
}
