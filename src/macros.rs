/// Construct a list of replacement [`Value`][crate::Value]s.
///
/// Each argument is converted using [`Value::from`][crate::Value].
///
/// # Examples
///
/// ```
/// use automat::{values, Value};
///
/// let values = values!["John", 42, true, None::<i32>];
/// assert_eq!(
///     values,
///     [
///         Value::String("John".into()),
///         Value::Integer(42),
///         Value::Bool(true),
///         Value::None,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($value)),*];
        values
    }};
}

/// Format a template with the default formatter.
///
/// With only a template argument the template text is returned unchanged,
/// otherwise every following argument is a replacement value.
///
/// # Examples
///
/// ```
/// assert_eq!(automat::render!("${0}"), "${0}");
/// assert_eq!(automat::render!("${0} is %{1}", "x", "<y>"), "x is &lt;y&gt;");
/// ```
#[macro_export]
macro_rules! render {
    ($template:expr $(,)?) => {
        $crate::resolve($template)
    };
    ($template:expr, $($value:expr),+ $(,)?) => {
        $crate::format($template, &$crate::values![$($value),+])
    };
}
