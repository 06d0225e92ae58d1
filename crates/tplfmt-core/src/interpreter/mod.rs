//! Interpreter bridge for script sections
//!
//! The formatter never evaluates script source itself. It talks to an
//! [`Interpreter`] session through three calls:
//!
//! | Call            | Effect                                        |
//! |-----------------|-----------------------------------------------|
//! | `set(name, v)`  | Register a binding under `name`               |
//! | `eval(source)`  | Evaluate script source, returning its result  |
//! | `unset(name)`   | Remove the binding registered under `name`    |
//!
//! Sessions come from an [`InterpreterFactory`] and live for one render call.
//! With the `lua` feature, [`LuaInterpreter`] provides a Lua 5.4 session.

#[cfg(feature = "lua")]
mod lua;

#[cfg(feature = "lua")]
pub use lua::LuaInterpreter;

use crate::template::ScriptError;
use crate::value::Value;

/// A stateful scripting session
pub trait Interpreter {
    /// Register `value` under `name`
    fn set(&mut self, name: &str, value: &Value) -> Result<(), ScriptError>;

    /// Evaluate `source` and return its result (`Value::Null` for none)
    fn eval(&mut self, source: &str) -> Result<Value, ScriptError>;

    /// Remove whatever is registered under `name`
    fn unset(&mut self, name: &str) -> Result<(), ScriptError>;
}

/// Creates interpreter sessions on demand
///
/// Implemented for any `Fn() -> Result<Box<dyn Interpreter>, ScriptError>`.
pub trait InterpreterFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn Interpreter>, ScriptError>;
}

impl<F> InterpreterFactory for F
where
    F: Fn() -> Result<Box<dyn Interpreter>, ScriptError> + Send + Sync,
{
    fn create(&self) -> Result<Box<dyn Interpreter>, ScriptError> {
        self()
    }
}
