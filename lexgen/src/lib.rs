//! # lexgen
//!
//! `lexgen` compiles a list of regular expressions (one rule per
//! line, tagged by line position) into a portable C scanner that
//! performs greedy, longest-match, maximal-munch lexical analysis over
//! the union of those rules, preserving rule priority (earlier rule
//! wins on ties of match length).
//!
//! ## Pipeline
//!
//! ```text
//! source text
//!   -> scanner::Scanner   (bytes -> tokens)
//!   -> parser::Parser     (tokens -> Vec<ast::Ast>)
//!   -> nfa::asts_to_nfa   (AST -> NFA, Thompson's construction)
//!   -> Nfa::to_dfa        (NFA -> DFA, Rabin-Scott subset construction)
//!   -> Dfa::minimize      (DFA -> minimal DFA, Hopcroft partition refinement)
//!   -> codegen::generate_c (minimal DFA -> C source)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lexgen::{codegen, nfa, parser};
//!
//! let asts = parser::parse("ab|c\n[a-z]+\n").unwrap();
//! let nfa = nfa::asts_to_nfa(&asts);
//! let dfa = nfa.to_dfa();
//! let minimized = dfa.minimize();
//! assert!(minimized.accepts(b"ab"));
//! assert!(minimized.accepts(b"hello"));
//!
//! let c_source = codegen::generate_c(&minimized);
//! assert!(c_source.contains("pylex"));
//! ```
//!
//! ## Scope
//!
//! The alphabet Σ is fixed to the 128 single-byte ASCII code units
//! (see [`alphabet::NUM_SYMBOLS`]); there is no support for capture
//! groups, anchors, lookaround, non-greedy quantifiers, Unicode beyond
//! single bytes, or regex flags. Argument parsing and stdin/stdout
//! plumbing live in the `lexgen-cli` binary, not in this crate.

pub mod alphabet;
pub mod ast;
pub mod codegen;
pub mod dfa;
pub mod dot;
pub mod error;
pub mod nfa;
pub mod parser;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod proptests;
