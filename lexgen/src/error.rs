use thiserror::Error;

/// Fails to tokenize a malformed regex byte stream. Fatal: scanning
/// does not recover from these, it aborts the current compilation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScanningError {
    #[error("trailing backslash at end of input")]
    TrailingBackslash,
    #[error("unmatched [ or [^")]
    UnmatchedCharClass,
    #[error("invalid range end: '{1}' (0x{1:02x}) is before range start '{0}' (0x{0:02x})")]
    InvalidRangeEnd(u8, u8),
    #[error("empty character class")]
    EmptyCharClass,
    #[error("byte 0x{0:02x} is outside of Σ")]
    ByteOutsideAlphabet(u8),
}

/// Fails to parse a token stream as a well-formed regex grammar.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParsingError {
    #[error("expected regex term")]
    ExpectedTerm,
    #[error("unmatched parentheses")]
    UnmatchedParentheses,
    #[error("junk after regex")]
    JunkAfterRegex,
}

/// Top-level error for the scan+parse stages, as seen by callers that
/// drive the whole pipeline (the CLI, mainly).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CompileError {
    #[error("line {line}: {source}")]
    Scanning {
        line: usize,
        #[source]
        source: ScanningError,
    },
    #[error("line {line}: {source}")]
    Parsing {
        line: usize,
        #[source]
        source: ParsingError,
    },
}

/// Fails to deliver a rendered artifact (generated C, a dot file, the
/// token log) to its caller-provided sink. Distinct from `CompileError`
/// because it has nothing to do with the regex itself; the ruleset
/// compiled fine, the sink just wasn't writable.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to write {path}: {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
