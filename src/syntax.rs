//! The placeholder pattern configuration.

use regex::Regex;

use crate::{Error, Result};

/// The default replacer pattern, matches `${n}`.
pub const DEFAULT_REPLACER: &str = r"\$\{(\d+)\}";

/// The default encoder pattern, matches `%{n}`.
pub const DEFAULT_ENCODER: &str = r"%\{(\d+)\}";

/// The placeholder pattern configuration.
///
/// A pattern configuration holds two regular expressions: the *replacer*
/// pattern, whose matches are substituted with a replacement value verbatim,
/// and the *encoder* pattern, whose matches are substituted with the
/// HTML-escaped replacement value. The first participating capture group of
/// each match is parsed as the zero-based index into the replacement list.
///
/// Use [`Patterns::default()`] to get the default configuration and
/// [`Patterns::builder()`] to create a custom one.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub(crate) replacer: Regex,
    pub(crate) encoder: Regex,
}

/// A builder for the pattern configuration.
///
/// This struct is typically created using [`Patterns::builder()`].
#[derive(Debug, Clone)]
pub struct PatternsBuilder<'a> {
    replacer: Option<&'a str>,
    encoder: Option<&'a str>,
}

impl Default for Patterns {
    /// Returns the default pattern configuration.
    ///
    /// This is equivalent to the following.
    /// ```
    /// use automat::Patterns;
    ///
    /// let patterns = Patterns::builder()
    ///     .replacer(r"\$\{(\d+)\}")
    ///     .encoder(r"%\{(\d+)\}")
    ///     .build()?;
    /// assert_eq!(patterns, Patterns::default());
    /// # Ok::<(), automat::Error>(())
    /// ```
    #[inline]
    fn default() -> Self {
        Self {
            replacer: default_regex(DEFAULT_REPLACER),
            encoder: default_regex(DEFAULT_ENCODER),
        }
    }
}

impl PartialEq for Patterns {
    fn eq(&self, other: &Self) -> bool {
        self.replacer.as_str() == other.replacer.as_str()
            && self.encoder.as_str() == other.encoder.as_str()
    }
}

impl Eq for Patterns {}

impl Patterns {
    /// Create a new pattern builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let patterns = automat::Patterns::builder()
    ///     .replacer(r"\{\{(\d+)\}\}")
    ///     .encoder(r"\{\{!(\d+)\}\}")
    ///     .build()?;
    /// # Ok::<(), automat::Error>(())
    /// ```
    #[inline]
    pub fn builder<'a>() -> PatternsBuilder<'a> {
        PatternsBuilder::new()
    }

    /// Returns the replacer pattern source.
    #[inline]
    pub fn replacer(&self) -> &str {
        self.replacer.as_str()
    }

    /// Returns the encoder pattern source.
    #[inline]
    pub fn encoder(&self) -> &str {
        self.encoder.as_str()
    }
}

impl<'a> PatternsBuilder<'a> {
    /// Creates a new pattern builder.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            replacer: None,
            encoder: None,
        }
    }

    /// Set the replacer pattern.
    ///
    /// If not set then the default `${n}` pattern is used.
    #[inline]
    pub fn replacer(&mut self, pattern: &'a str) -> &mut Self {
        self.replacer = Some(pattern);
        self
    }

    /// Set the encoder pattern.
    ///
    /// If not set then the default `%{n}` pattern is used.
    #[inline]
    pub fn encoder(&mut self, pattern: &'a str) -> &mut Self {
        self.encoder = Some(pattern);
        self
    }

    /// Builds the pattern configuration.
    ///
    /// # Errors
    ///
    /// If either pattern is not a valid regular expression or does not have
    /// a capture group for the replacement index.
    pub fn build(&self) -> Result<Patterns> {
        let replacer = compile("replacer", self.replacer.unwrap_or(DEFAULT_REPLACER))?;
        let encoder = compile("encoder", self.encoder.unwrap_or(DEFAULT_ENCODER))?;
        tracing::debug!(
            replacer = replacer.as_str(),
            encoder = encoder.as_str(),
            "built placeholder patterns"
        );
        Ok(Patterns { replacer, encoder })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    let re = Regex::new(pattern)?;
    // Group zero is the whole match.
    if re.captures_len() < 2 {
        return Err(Error::pattern(format!(
            "{name} pattern `{pattern}` has no capture group for the replacement index"
        )));
    }
    Ok(re)
}

fn default_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => unreachable!("default pattern `{pattern}` is invalid: {err}"),
    }
}

/// Returns the replacement index captured by a pattern match.
///
/// Returns `None` if no group participated in the match or the captured text
/// is not a valid index.
pub(crate) fn index(caps: &regex::Captures<'_>) -> Option<usize> {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(feature = "serde")]
mod de {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    use super::Patterns;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawPatterns {
        #[serde(default)]
        replacer: Option<String>,
        #[serde(default)]
        encoder: Option<String>,
    }

    impl<'de> Deserialize<'de> for Patterns {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawPatterns::deserialize(deserializer)?;
            let mut builder = Patterns::builder();
            if let Some(replacer) = &raw.replacer {
                builder.replacer(replacer);
            }
            if let Some(encoder) = &raw.encoder {
                builder.encoder(encoder);
            }
            builder.build().map_err(D::Error::custom)
        }
    }
}
