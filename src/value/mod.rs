//! Defines the [`Value`] enum, representing a replacement value.

mod from;
#[cfg(feature = "serde")]
mod ser;

use std::fmt;
use std::mem;

/// A replacement value for a numbered placeholder.
///
/// Values are usually constructed using one of the [`From`] implementations
/// or the [`values!`][crate::values] macro.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(s), Self::Bool(o)) => s == o,
            (Self::Integer(s), Self::Integer(o)) => s == o,
            (Self::Float(s), Self::Float(o)) => s == o,
            (Self::String(s), Self::String(o)) => s == o,
            (Self::List(s), Self::List(o)) => s == o,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

/// Formats the value the way it is substituted into a template.
///
/// Values are formatted as follows:
/// - [`Value::None`]: empty string
/// - [`Value::Bool`]: `true` or `false`
/// - [`Value::Integer`]: the integer formatted using [`Display`][fmt::Display]
/// - [`Value::Float`]: the float formatted using [`Display`][fmt::Display],
///   except infinities which are formatted as `Infinity` and `-Infinity` and
///   negative zero which is formatted as `0`
/// - [`Value::String`]: the string, unescaped
/// - [`Value::List`]: each item formatted as above, separated by `,`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Float(n) if *n == 0.0 => f.write_str("0"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::List(list) => {
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}
