use std::cmp::max;
use std::fmt;

use crate::span::Span;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while building a formatter, extracting a template
/// or inserting formatted markup into a document.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    span: Option<(String, Span)>,
    cause: Option<regex::Error>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A comment template source did not consist of a single non-empty
    /// multi-line comment.
    TemplateExtraction,

    /// A node passed as an insertion target or reference node cannot be used
    /// as one.
    InvalidTarget,

    /// A placeholder pattern failed to compile or has no capture group.
    Pattern,
}

impl Error {
    pub(crate) fn extraction(msg: impl Into<String>, source: &str, span: impl Into<Span>) -> Self {
        Self {
            kind: ErrorKind::TemplateExtraction,
            msg: msg.into(),
            span: Some((source.to_string(), span.into())),
            cause: None,
        }
    }

    pub(crate) fn invalid_target(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidTarget,
            msg: msg.into(),
            span: None,
            cause: None,
        }
    }

    pub(crate) fn pattern(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Pattern,
            msg: msg.into(),
            span: None,
            cause: None,
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self {
            kind: ErrorKind::Pattern,
            msg: String::from("invalid placeholder pattern"),
            span: None,
            cause: Some(err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(&self.msg, source, *span, f),
            None => fmt::Display::fmt(self, f),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.span, &self.cause) {
            (Some((source, span)), _) => {
                if f.alternate() {
                    fmt_pretty(&self.msg, source, *span, f)
                } else {
                    write!(f, "{} between bytes {} and {}", self.msg, span.m, span.n)
                }
            }
            (None, Some(cause)) => write!(f, "{}: {}", self.msg, cause),
            (None, None) => write!(f, "{}", self.msg),
        }
    }
}

#[cfg(feature = "unicode")]
fn width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}

#[cfg(not(feature = "unicode"))]
fn width(s: &str) -> usize {
    s.chars().count()
}

fn fmt_pretty(msg: &str, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, span.m);
    let underline_width = max(1, width(&source[span]));
    let code = lines
        .get(line)
        .or_else(|| lines.last())
        .copied()
        .unwrap_or_default();

    let num = (line + 1).to_string();
    let pad = width(&num);
    let pipe = "|";
    let underline = "^".repeat(underline_width);

    write!(
        f,
        "\n \
        {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = code,
        underline = underline,
        width = col + underline_width,
        msg = msg
    )
}

fn to_line_col(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, width(&line[..offset - n]));
        }
        n += len;
    }
    (
        lines.len().saturating_sub(1),
        lines.last().map(|l| width(l)).unwrap_or(0),
    )
}
