//! Host objects with fields, bean getters and plain methods

use std::fmt;
use tplfmt_core::value::{MemberError, Object, Value};

/// Width and height, readable as fields or through `getWidth`/`getHeight`
///
/// `getSize` returns a copy of the dimension itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub width: i64,
    pub height: i64,
}

impl Dimension {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Bind as a [`Value`]
    pub fn value(self) -> Value {
        Value::object(self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimension[width={},height={}]", self.width, self.height)
    }
}

impl Object for Dimension {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "width" => Some(Value::Int(self.width)),
            "height" => Some(Value::Int(self.height)),
            _ => None,
        }
    }

    fn field_names(&self) -> Vec<&str> {
        vec!["width", "height"]
    }

    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "getWidth" => Some(Ok(Value::Float(self.width as f64))),
            "getHeight" => Some(Ok(Value::Float(self.height as f64))),
            "getSize" => Some(Ok(Value::object(*self))),
            "toString" => Some(Ok(Value::Str(self.to_string()))),
            _ => None,
        }
    }
}

/// Its method `b` always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingMethod;

impl fmt::Display for FailingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FailingMethod")
    }
}

impl Object for FailingMethod {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "b" => Some(Err(MemberError::Unsupported("b".to_string()))),
            _ => None,
        }
    }
}

/// Its method `v` returns nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitMethod;

impl fmt::Display for UnitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitMethod")
    }
}

impl Object for UnitMethod {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "v" => Some(Ok(Value::Null)),
            _ => None,
        }
    }
}

/// A named on/off switch: `getName` and `isOn`
#[derive(Debug, Clone)]
pub struct Switch {
    pub name: String,
    pub on: bool,
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, if self.on { "on" } else { "off" })
    }
}

impl Object for Switch {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "getName" => Some(Ok(Value::Str(self.name.clone()))),
            "isOn" => Some(Ok(Value::Bool(self.on))),
            _ => None,
        }
    }
}
