#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Value {
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl From<Value> for automat::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::None => Self::None,
            Value::Bool(b) => Self::Bool(b),
            Value::Integer(i) => Self::Integer(i),
            Value::Float(f) => Self::Float(f),
            Value::String(s) => Self::String(s),
            Value::List(list) => list.into_iter().map(Self::from).collect(),
        }
    }
}

fuzz_target!(|data: (&str, Vec<Value>)| {
    let (template, values) = data;
    let values: Vec<automat::Value> = values.into_iter().map(Into::into).collect();
    let first = automat::format(template, &values);
    let second = automat::format(template, &values);
    assert_eq!(first, second);
    if values.is_empty() {
        assert_eq!(first, template);
    }
    let _ = automat::Template::from_comment(template);
});
