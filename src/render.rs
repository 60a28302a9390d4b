//! Performs placeholder substitution on resolved template text.
//!
//! Substitution happens in two passes:
//! - The replacer pass substitutes each replacer match with the display form
//!   of the indexed replacement value.
//! - The encoder pass runs over the result of the replacer pass and
//!   substitutes each encoder match with the HTML-escaped display form of the
//!   indexed replacement value.
//!
//! The replacer pass records where it inserted values. An encoder match that
//! overlaps an inserted value is left as is, so a value containing something
//! that looks like an encoder placeholder is never reprocessed.

use std::fmt::Write;
use std::ops::Range;

use regex::Regex;

use crate::markup;
use crate::syntax::{self, Patterns};
use crate::Value;

/// Substitute all placeholders in `text`.
pub(crate) fn format(patterns: &Patterns, text: &str, replacements: &[Value]) -> String {
    let (replaced, inserted, count) = replace(&patterns.replacer, text, replacements);
    let mut buf = String::with_capacity(replaced.len());
    let encoded = encode(&patterns.encoder, &replaced, &inserted, replacements, &mut buf);

    tracing::trace!(
        replacements = replacements.len(),
        replaced = count,
        encoded,
        "formatted template"
    );
    buf
}

/// Runs the replacer pass. Returns the replaced text, the byte ranges of the
/// inserted values in it and the number of placeholders substituted.
fn replace(
    replacer: &Regex,
    text: &str,
    replacements: &[Value],
) -> (String, Vec<Range<usize>>, usize) {
    let mut buf = String::with_capacity(text.len());
    let mut inserted = Vec::new();
    let mut count = 0;
    let mut last = 0;

    for caps in replacer.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        buf.push_str(&text[last..m.start()]);
        if let Some(value) = lookup(replacements, syntax::index(&caps)) {
            let start = buf.len();
            // writing to a `String` cannot fail
            let _ = write!(buf, "{value}");
            if buf.len() > start {
                inserted.push(start..buf.len());
            }
        }
        count += 1;
        last = m.end();
    }
    buf.push_str(&text[last..]);
    (buf, inserted, count)
}

/// Runs the encoder pass, appending the result to `buf`. Matches overlapping
/// one of the `inserted` ranges are skipped. Returns the number of
/// placeholders substituted.
fn encode(
    encoder: &Regex,
    text: &str,
    inserted: &[Range<usize>],
    replacements: &[Value],
    buf: &mut String,
) -> usize {
    let mut inserted = inserted.iter().peekable();
    let mut count = 0;
    let mut last = 0;

    for caps in encoder.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        while inserted.next_if(|r| r.end <= m.start()).is_some() {}
        if inserted.peek().is_some_and(|r| r.start < m.end()) {
            continue;
        }
        buf.push_str(&text[last..m.start()]);
        if let Some(value) = lookup(replacements, syntax::index(&caps)) {
            buf.push_str(&markup::escape_text(&value.to_string()));
        }
        count += 1;
        last = m.end();
    }
    buf.push_str(&text[last..]);
    count
}

fn lookup(replacements: &[Value], index: Option<usize>) -> Option<&Value> {
    index.and_then(|i| replacements.get(i))
}
