//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every error produced while lexing or parsing an expression is an [`Error`]: a set of source
//! spans paired with a boxed [`ErrorKind`]. The kind knows how to build an [`ariadne`] report for
//! itself, which front-ends can print however they like.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error kind as [`Any`], so that callers can downcast it to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the concrete error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source code into a string.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so the
    /// report is written into an in-memory buffer instead. The output contains ANSI color codes.
    pub fn render_report(&self, src_id: &str, source: &str) -> String {
        let mut buf = Vec::new();

        // writing into a `Vec<u8>` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(source)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use pretty_assertions::assert_eq;
    use super::*;

    #[derive(Debug, PartialEq)]
    struct StrayCharacter;

    impl ErrorKind for StrayCharacter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("stray character")
                .with_label(Label::new((src_id, spans[0].clone())).with_message("this one"))
                .finish()
        }
    }

    #[derive(Debug)]
    struct Other;

    impl ErrorKind for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start).finish()
        }
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![2..3], StrayCharacter);
        assert!(err.is::<StrayCharacter>());
        assert!(!err.is::<Other>());
        assert_eq!(err.downcast_ref::<StrayCharacter>(), Some(&StrayCharacter));
    }

    #[test]
    fn render_contains_message_and_label() {
        let err = Error::new(vec![2..3], StrayCharacter);
        let rendered = err.render_report("input", "x $ y");
        let stripped = strip_ansi_escapes::strip_str(rendered);

        assert!(stripped.contains("stray character"));
        assert!(stripped.contains("this one"));
        assert!(stripped.contains("x $ y"));
    }
}
