//! A small positional template formatter.
//!
//! # Features
//!
//! - Numbered replacer placeholders: `${0}`, `${1}`, ...
//! - Numbered encoder placeholders that HTML-escape the value: `%{0}`, ...
//! - Configurable placeholder patterns using regular expressions
//! - Templates from literal text, accessor functions or comment blocks
//! - Insertion of the formatted markup into a document tree, either the
//!   built-in [`markup::Tree`] or any [`markup::Document`] implementor
//!
//! This is not a template engine, there are no loops, conditionals or nested
//! templates. Placeholders are substituted with the value at their index in
//! the replacement list, an index without a value is substituted with an
//! empty string.
//!
//! # Getting started
//!
//! The quickest way to format a template is the [`render!`] macro, which uses
//! the default placeholder patterns.
//!
//! ```
//! let result = automat::render!("Hello, ${0}! You are %{1}.", "John", "<b>bold</b>");
//! assert_eq!(result, "Hello, John! You are &lt;b&gt;bold&lt;/b&gt;.");
//! ```
//!
//! Replacer placeholders insert the value as is while encoder placeholders
//! escape it first.
//!
//! ```
//! use automat::values;
//!
//! assert_eq!(automat::format("${0}", &values!["<x>"]), "<x>");
//! assert_eq!(automat::format("%{0}", &values!["<x>"]), "&lt;x&gt;");
//! assert_eq!(automat::format("${5}", &values!["a"]), "");
//! ```
//!
//! When no replacements are given the template is returned unchanged, even if
//! it contains placeholders.
//!
//! ```
//! assert_eq!(automat::format("${0}", &[]), "${0}");
//! ```
//!
//! # Examples
//!
//! ### Use custom placeholder patterns
//!
//! The placeholder syntax is set by constructing a [`Formatter`] with a
//! [`Patterns`] configuration. Each pattern must have a capture group, the
//! first capture group that participates in a match is the index.
//!
//! ```
//! use automat::{values, Formatter, Patterns};
//!
//! let patterns = Patterns::builder()
//!     .replacer(r"\{\{(\d+)\}\}")
//!     .encoder(r"\{\{!(\d+)\}\}")
//!     .build()?;
//!
//! let result = Formatter::with_patterns(patterns)
//!     .format("{{0}} {{!1}}", &values!["<a>", "<b>"]);
//!
//! assert_eq!(result, "<a> &lt;b&gt;");
//! # Ok::<(), automat::Error>(())
//! ```
//!
//! ### Author a template inside a comment
//!
//! ```
//! use automat::{values, Template};
//!
//! let template = Template::from_comment("/* Hello, ${0}! */")?;
//! assert_eq!(automat::format(template, &values!["World"]), "Hello, World!");
//! # Ok::<(), automat::Error>(())
//! ```
//!
//! ### Insert formatted markup into a document
//!
//! ```
//! use automat::markup::{Document, Tree};
//! use automat::values;
//!
//! let mut tree = Tree::new();
//! let list = tree.create_element("ul");
//! tree.set_inner_html(&list, "<li>first</li>")?;
//!
//! let nodes = automat::append_into(&mut tree, "<li>%{0}</li>", &list, None, &values!["<second>"])?;
//!
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(tree.inner_html(&list), "<li>first</li><li>&lt;second&gt;</li>");
//! # Ok::<(), automat::Error>(())
//! ```

mod error;
mod insert;
mod macros;
pub mod markup;
mod render;
mod span;
mod syntax;
mod template;
mod value;

use std::sync::LazyLock;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::syntax::{Patterns, PatternsBuilder, DEFAULT_ENCODER, DEFAULT_REPLACER};
pub use crate::template::Template;
pub use crate::value::Value;

use crate::markup::Document;

/// The placeholder formatter.
///
/// A formatter holds the placeholder [`Patterns`]. The patterns are fixed
/// once the formatter is constructed so a formatter can be shared freely
/// between threads. Generally, you only need to construct one formatter
/// during the lifetime of a program, or none if the default patterns suffice
/// and the free functions like [`format`] are used.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    patterns: Patterns,
}

static DEFAULT: LazyLock<Formatter> = LazyLock::new(Formatter::new);

impl Formatter {
    /// Construct a new formatter with the default patterns.
    #[inline]
    pub fn new() -> Self {
        Self::with_patterns(Patterns::default())
    }

    /// Construct a new formatter with custom patterns.
    #[inline]
    pub fn with_patterns(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Returns the placeholder patterns.
    #[inline]
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Returns the template text without substituting anything.
    #[inline]
    pub fn resolve<'a>(&self, template: impl Into<Template<'a>>) -> String {
        template.into().resolve().into_owned()
    }

    /// Format a template.
    ///
    /// Replacer placeholders are substituted first, then encoder placeholders
    /// in the remaining template text. If `replacements` is empty the template
    /// text is returned unchanged.
    pub fn format<'a>(&self, template: impl Into<Template<'a>>, replacements: &[Value]) -> String {
        let template = template.into();
        let text = template.resolve();
        if replacements.is_empty() {
            return text.into_owned();
        }
        render::format(&self.patterns, &text, replacements)
    }

    /// Replace the content of `target` with the nodes generated from the
    /// formatted template.
    ///
    /// If `target` is `None` a new `<div>` element is created. Returns the
    /// target element.
    ///
    /// # Errors
    ///
    /// If `target` is not an element.
    pub fn replace_into<'a, D>(
        &self,
        document: &mut D,
        template: impl Into<Template<'a>>,
        target: Option<&D::Node>,
        replacements: &[Value],
    ) -> Result<D::Node>
    where
        D: Document + ?Sized,
    {
        insert::replace_into(self, document, template.into(), target, replacements)
    }

    /// Insert the nodes generated from the formatted template into `target`.
    ///
    /// The nodes are inserted immediately before `reference` or at the end of
    /// `target` if `reference` is `None`. Returns the inserted nodes in order.
    ///
    /// # Errors
    ///
    /// If `target` is not an element or `reference` is not a child of
    /// `target`.
    pub fn append_into<'a, D>(
        &self,
        document: &mut D,
        template: impl Into<Template<'a>>,
        target: &D::Node,
        reference: Option<&D::Node>,
        replacements: &[Value],
    ) -> Result<Vec<D::Node>>
    where
        D: Document + ?Sized,
    {
        insert::append_into(
            self,
            document,
            template.into(),
            target,
            reference,
            replacements,
        )
    }

    /// Returns the first node generated from the formatted template.
    ///
    /// Returns `None` if the formatted markup does not produce any nodes.
    pub fn first_child_of<'a, D>(
        &self,
        document: &mut D,
        template: impl Into<Template<'a>>,
        replacements: &[Value],
    ) -> Result<Option<D::Node>>
    where
        D: Document + ?Sized,
    {
        insert::first_child_of(self, document, template.into(), replacements)
    }
}

/// Returns the template text using the default formatter.
///
/// See [`Formatter::resolve`].
#[inline]
pub fn resolve<'a>(template: impl Into<Template<'a>>) -> String {
    DEFAULT.resolve(template)
}

/// Format a template using the default formatter.
///
/// See [`Formatter::format`].
#[inline]
pub fn format<'a>(template: impl Into<Template<'a>>, replacements: &[Value]) -> String {
    DEFAULT.format(template, replacements)
}

/// Replace the content of an element using the default formatter.
///
/// See [`Formatter::replace_into`].
#[inline]
pub fn replace_into<'a, D>(
    document: &mut D,
    template: impl Into<Template<'a>>,
    target: Option<&D::Node>,
    replacements: &[Value],
) -> Result<D::Node>
where
    D: Document + ?Sized,
{
    DEFAULT.replace_into(document, template, target, replacements)
}

/// Insert formatted nodes into an element using the default formatter.
///
/// See [`Formatter::append_into`].
#[inline]
pub fn append_into<'a, D>(
    document: &mut D,
    template: impl Into<Template<'a>>,
    target: &D::Node,
    reference: Option<&D::Node>,
    replacements: &[Value],
) -> Result<Vec<D::Node>>
where
    D: Document + ?Sized,
{
    DEFAULT.append_into(document, template, target, reference, replacements)
}

/// Returns the first formatted node using the default formatter.
///
/// See [`Formatter::first_child_of`].
#[inline]
pub fn first_child_of<'a, D>(
    document: &mut D,
    template: impl Into<Template<'a>>,
    replacements: &[Value],
) -> Result<Option<D::Node>>
where
    D: Document + ?Sized,
{
    DEFAULT.first_child_of(document, template, replacements)
}
