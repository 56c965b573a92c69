use ariadne::Report;
use std::{fmt, ops::Range};

/// Utility enum to package errors that can occur while tokenizing / parsing.
///
/// Either kind of error aborts the pipeline; no partial expression is produced.
#[derive(Debug)]
pub enum Error {
    /// The source code contained a character that is not part of any token.
    Lex(eqsat_error::Error),

    /// The tokens did not form a valid expression.
    Parse(eqsat_error::Error),
}

impl Error {
    /// Returns the underlying error, regardless of which stage produced it.
    pub fn inner(&self) -> &eqsat_error::Error {
        match self {
            Self::Lex(err) | Self::Parse(err) => err,
        }
    }

    /// Returns the regions of the source code that the error points at.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.inner().spans
    }

    /// Build a report from this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.inner().build_report(src_id)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Lex(_) => "lex",
            Self::Parse(_) => "parse",
        };
        write!(f, "{} error", stage)?;
        if let Some(span) = self.spans().first() {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        write!(f, ": {:?}", self.inner().kind)
    }
}

impl std::error::Error for Error {}
