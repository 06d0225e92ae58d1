//! Shared test helpers for template engine tests

use crate::interpreter::Interpreter;
use crate::template::error::ScriptError;
use crate::value::{Bindings, MemberError, Object, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Two-dimensional size with public fields and bean getters
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Dimension {
    pub width: i64,
    pub height: i64,
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

/// Object whose only method fails
#[derive(Debug)]
pub(super) struct Exploding;

impl fmt::Display for Exploding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exploding")
    }
}

impl Object for Exploding {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "b" | "getValue" => Some(Err(MemberError::Unsupported(name.to_string()))),
            "value" => Some(Ok(Value::from("from method"))),
            _ => None,
        }
    }
}

/// Object with a method that returns nothing
#[derive(Debug)]
pub(super) struct UnitMethod;

impl fmt::Display for UnitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitMethod")
    }
}

impl Object for UnitMethod {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        (name == "v").then_some(Ok(Value::Null))
    }
}

/// Object exposing a boolean through an `is` getter
#[derive(Debug)]
pub(super) struct Flag {
    pub active: bool,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flag({})", self.active)
    }
}

impl Object for Flag {
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        match name {
            "isActive" => Some(Ok(Value::Bool(self.active))),
            "active" => Some(Ok(Value::from("method, not getter"))),
            _ => None,
        }
    }
}

pub(super) fn size_bindings() -> Bindings {
    Bindings::new()
        .with("foo", "bar")
        .with("size", Value::object(Dimension { width: 11, height: 12 }))
}

/// Interpreter call, as recorded by [`RecordingInterpreter`]
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Call {
    Set(String),
    Eval(String),
    Unset(String),
}

type Evaluator = fn(&str, &BTreeMap<String, Value>) -> Result<Value, ScriptError>;

/// Interpreter that records every call and evaluates with a plain function
/// over its current globals
pub(super) struct RecordingInterpreter {
    globals: BTreeMap<String, Value>,
    evaluator: Evaluator,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingInterpreter {
    pub fn new(evaluator: Evaluator, calls: Arc<Mutex<Vec<Call>>>) -> Self {
        Self {
            globals: BTreeMap::new(),
            evaluator,
            calls,
        }
    }
}

impl Interpreter for RecordingInterpreter {
    fn set(&mut self, name: &str, value: &Value) -> Result<(), ScriptError> {
        self.calls.lock().unwrap().push(Call::Set(name.to_string()));
        self.globals.insert(name.to_string(), value.clone());
        Ok(())
    }

    fn eval(&mut self, source: &str) -> Result<Value, ScriptError> {
        self.calls.lock().unwrap().push(Call::Eval(source.to_string()));
        (self.evaluator)(source, &self.globals)
    }

    fn unset(&mut self, name: &str) -> Result<(), ScriptError> {
        self.calls.lock().unwrap().push(Call::Unset(name.to_string()));
        self.globals.remove(name);
        Ok(())
    }
}

/// Understands `len <name>`, `upper <name>`, `nil`, `globals` and `fail`
pub(super) fn tiny_script(
    source: &str,
    globals: &BTreeMap<String, Value>,
) -> Result<Value, ScriptError> {
    let mut words = source.split_whitespace();
    match (words.next(), words.next()) {
        (Some("len"), Some(name)) => globals
            .get(name)
            .and_then(|v| v.call("length"))
            .and_then(Result::ok)
            .ok_or_else(|| ScriptError::Evaluation(format!("undefined variable {}", name))),
        (Some("upper"), Some(name)) => globals
            .get(name)
            .map(|v| Value::Str(v.to_string().to_uppercase()))
            .ok_or_else(|| ScriptError::Evaluation(format!("undefined variable {}", name))),
        (Some("nil"), None) => Ok(Value::Null),
        (Some("globals"), None) => Ok(Value::Int(globals.len() as i64)),
        _ => Err(ScriptError::Evaluation(format!("cannot evaluate '{}'", source))),
    }
}
