//! Defines the [`Template`] type, the source of the text to be formatted.

use std::borrow::Cow;
use std::fmt;

use crate::span::Span;
use crate::{Error, Result};

/// A template to be formatted.
///
/// A template is either literal text containing placeholders or an accessor
/// function that returns the text each time the template is resolved.
///
/// Text authored inside a single multi-line comment can be turned into a
/// template with [`Template::from_comment`], this is handy for inline markup
/// combined with [`include_str!`].
///
/// # Examples
///
/// ```
/// use automat::Template;
///
/// let text = Template::from("Hello, ${0}!");
/// let accessor = Template::from_fn(|| String::from("Hello, ${0}!"));
/// let comment = Template::from_comment("/* Hello, ${0}! */")?;
///
/// assert_eq!(text.resolve(), accessor.resolve());
/// assert_eq!(text.resolve(), comment.resolve());
/// # Ok::<(), automat::Error>(())
/// ```
pub struct Template<'a> {
    repr: Repr<'a>,
}

enum Repr<'a> {
    Text(Cow<'a, str>),
    Fn(Box<dyn Fn() -> String + 'a>),
}

impl<'a> Template<'a> {
    /// Construct a template from literal text.
    #[inline]
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            repr: Repr::Text(text.into()),
        }
    }

    /// Construct a template from an accessor function.
    ///
    /// The function is called every time the template is resolved and its
    /// return value is used as the template text.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> String + 'a,
    {
        Self {
            repr: Repr::Fn(Box::new(f)),
        }
    }

    /// Extract a template from source text consisting entirely of a single
    /// multi-line comment.
    ///
    /// Whitespace around the comment is allowed. The inner text of the comment
    /// is trimmed and used as the template text.
    ///
    /// # Errors
    ///
    /// If the source is not exactly one `/* ... */` block or the comment body
    /// is empty. Nothing is ever invoked as a fallback.
    pub fn from_comment(source: &'a str) -> Result<Self> {
        extract_comment(source).map(Self::new)
    }

    /// Returns the template text.
    ///
    /// For an accessor template this calls the accessor function.
    #[inline]
    pub fn resolve(&self) -> Cow<'_, str> {
        match &self.repr {
            Repr::Text(text) => Cow::Borrowed(text),
            Repr::Fn(f) => Cow::Owned(f()),
        }
    }
}

fn extract_comment(source: &str) -> Result<&str> {
    let m = source.len() - source.trim_start().len();
    let n = source.trim_end().len();

    if m >= n {
        return Err(Error::extraction(
            "expected comment template, found empty source",
            source,
            source.len()..source.len(),
        ));
    }

    if !source[m..].starts_with("/*") {
        let c = source[m..].chars().next().map_or(1, char::len_utf8);
        return Err(Error::extraction("expected `/*`", source, m..m + c));
    }

    let open = Span::from(m..m + 2);
    if n < m + 4 || !source[..n].ends_with("*/") {
        return Err(match source[m + 2..n].rfind("*/") {
            Some(i) => {
                let j = m + 2 + i + 2;
                let j = n - source[j..n].trim_start().len();
                Error::extraction("unexpected text after comment", source, j..n)
            }
            None => Error::extraction("unclosed comment", source, open),
        });
    }

    let body = source[m + 2..n - 2].trim();
    if body.is_empty() {
        let close = Span::from(n - 2..n);
        return Err(Error::extraction(
            "comment template is empty",
            source,
            open.combine(close),
        ));
    }
    Ok(body)
}

impl<'a> From<&'a str> for Template<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for Template<'a> {
    fn from(text: &'a String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<String> for Template<'_> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<'a> From<Cow<'a, str>> for Template<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Text(text) => f.debug_tuple("Template").field(text).finish(),
            Repr::Fn(_) => f.debug_tuple("Template").field(&"<fn>").finish(),
        }
    }
}
