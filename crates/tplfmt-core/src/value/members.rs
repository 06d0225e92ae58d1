//! Member tables of the built-in value kinds
//!
//! | Kind     | Fields          | Methods                                                    |
//! |----------|-----------------|------------------------------------------------------------|
//! | `Map`    | its keys        | -                                                          |
//! | `List`   | decimal indices | `len`/`length`/`size`, `is_empty`/`isEmpty`, `first`, `last` |
//! | `Str`    | -               | `len`/`length`, `to_uppercase`/`toUpperCase`, `to_lowercase`/`toLowerCase`, `trim`, `is_empty`/`isEmpty` |
//! | `Int`    | -               | `abs`                                                      |
//! | `Float`  | -               | `abs`                                                      |
//!
//! Every non-null kind also answers `to_string`/`toString`. `Object` values
//! delegate to their [`Object`](super::Object) implementation and `Null` has
//! no members at all.

use super::{MemberError, Value};

impl Value {
    /// Look up the field `name` of this value
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map.get(name).cloned(),
            Value::List(items) => list_index(name).and_then(|index| items.get(index)).cloned(),
            Value::Object(object) => object.field(name),
            _ => None,
        }
    }

    /// Invoke the zero-argument method `name` of this value.
    ///
    /// `None` means the value has no such method.
    pub fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match self {
            Value::Null => None,
            Value::Object(object) => object.call(name),
            Value::Str(s) => str_method(s, name),
            Value::List(items) => list_method(items, name),
            Value::Int(i) => match name {
                "abs" => Some(
                    i.checked_abs()
                        .map(Value::Int)
                        .ok_or_else(|| MemberError::failed("abs", format!("{} overflows", i))),
                ),
                _ => display_method(self, name),
            },
            Value::Float(f) => match name {
                "abs" => Some(Ok(Value::Float(f.abs()))),
                _ => display_method(self, name),
            },
            Value::Bool(_) | Value::Map(_) => display_method(self, name),
        }
    }
}

/// Plain decimal index; `parse` alone would also take `+1`
fn list_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

fn str_method(s: &str, name: &str) -> Option<Result<Value, MemberError>> {
    let value = match name {
        "len" | "length" => Value::Int(s.chars().count() as i64),
        "to_uppercase" | "toUpperCase" => Value::Str(s.to_uppercase()),
        "to_lowercase" | "toLowerCase" => Value::Str(s.to_lowercase()),
        "trim" => Value::Str(s.trim().to_string()),
        "is_empty" | "isEmpty" => Value::Bool(s.is_empty()),
        "to_string" | "toString" => Value::Str(s.to_string()),
        _ => return None,
    };
    Some(Ok(value))
}

fn list_method(items: &[Value], name: &str) -> Option<Result<Value, MemberError>> {
    let value = match name {
        "len" | "length" | "size" => Value::Int(items.len() as i64),
        "is_empty" | "isEmpty" => Value::Bool(items.is_empty()),
        "first" => items.first().cloned().unwrap_or(Value::Null),
        "last" => items.last().cloned().unwrap_or(Value::Null),
        "to_string" | "toString" => Value::Str(Value::List(items.to_vec()).to_string()),
        _ => return None,
    };
    Some(Ok(value))
}

fn display_method(value: &Value, name: &str) -> Option<Result<Value, MemberError>> {
    match name {
        "to_string" | "toString" => Some(Ok(Value::Str(value.to_string()))),
        _ => None,
    }
}
