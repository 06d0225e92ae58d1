//! Lua 5.4 sessions via the `mlua` crate.
//!
//! Enabled with the `lua` Cargo feature:
//! ```text
//! cargo build --features lua
//! cargo test  --features lua
//! ```
//!
//! Bindings become Lua globals. Conversion in both directions:
//!
//! | Value              | Lua                                   |
//! |--------------------|---------------------------------------|
//! | `Null`             | `nil`                                 |
//! | `Bool`/`Int`/`Float` | boolean / integer / number          |
//! | `Str`              | string                                |
//! | `List`             | sequence table (1-based)              |
//! | `Map`              | table keyed by string                 |
//! | `Object`           | table of its fields, or its text form |
//!
//! A table comes back as a `List` only when it is a gapless sequence with no
//! other keys. Anything else becomes a `Map` whose integer keys are written
//! in decimal.

use std::collections::BTreeMap;

use mlua::prelude::*;

use super::{Interpreter, InterpreterFactory};
use crate::template::ScriptError;
use crate::value::Value;

/// A Lua interpreter session
pub struct LuaInterpreter {
    lua: Lua,
}

impl LuaInterpreter {
    pub fn new() -> Self {
        Self { lua: Lua::new() }
    }

    /// Factory producing a fresh Lua state per render call
    pub fn factory() -> impl InterpreterFactory {
        create_session
    }
}

impl Default for LuaInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn create_session() -> Result<Box<dyn Interpreter>, ScriptError> {
    Ok(Box::new(LuaInterpreter::new()))
}

impl Interpreter for LuaInterpreter {
    fn set(&mut self, name: &str, value: &Value) -> Result<(), ScriptError> {
        let binding_error = |e: LuaError| ScriptError::Binding {
            name: name.to_string(),
            reason: e.to_string(),
        };
        let value = to_lua(&self.lua, value).map_err(binding_error)?;
        self.lua.globals().set(name, value).map_err(binding_error)
    }

    fn eval(&mut self, source: &str) -> Result<Value, ScriptError> {
        let result: LuaValue = self
            .lua
            .load(source)
            .eval()
            .map_err(|e| ScriptError::Evaluation(e.to_string()))?;
        from_lua(result)
    }

    fn unset(&mut self, name: &str) -> Result<(), ScriptError> {
        self.lua
            .globals()
            .set(name, LuaValue::Nil)
            .map_err(|e| ScriptError::Binding {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

fn to_lua(lua: &Lua, value: &Value) -> LuaResult<LuaValue> {
    Ok(match value {
        Value::Null => LuaValue::Nil,
        Value::Bool(b) => LuaValue::Boolean(*b),
        Value::Int(i) => LuaValue::Integer(*i),
        Value::Float(x) => LuaValue::Number(*x),
        Value::Str(s) => LuaValue::String(lua.create_string(s)?),
        Value::List(items) => {
            let table = lua.create_table()?;
            for (i, item) in items.iter().enumerate() {
                table.raw_set(i as i64 + 1, to_lua(lua, item)?)?;
            }
            LuaValue::Table(table)
        }
        Value::Map(map) => {
            let table = lua.create_table()?;
            for (key, item) in map {
                table.raw_set(key.as_str(), to_lua(lua, item)?)?;
            }
            LuaValue::Table(table)
        }
        Value::Object(object) => {
            let names = object.field_names();
            if names.is_empty() {
                LuaValue::String(lua.create_string(object.to_string())?)
            } else {
                let table = lua.create_table()?;
                for name in names {
                    if let Some(field) = object.field(name) {
                        table.raw_set(name, to_lua(lua, &field)?)?;
                    }
                }
                LuaValue::Table(table)
            }
        }
    })
}

fn from_lua(value: LuaValue) -> Result<Value, ScriptError> {
    let conversion_error = |e: LuaError| ScriptError::Evaluation(e.to_string());
    Ok(match value {
        LuaValue::Nil => Value::Null,
        LuaValue::Boolean(b) => Value::Bool(b),
        LuaValue::Integer(i) => Value::Int(i),
        LuaValue::Number(x) => Value::Float(x),
        LuaValue::String(s) => Value::Str(s.to_str().map_err(conversion_error)?.to_string()),
        LuaValue::Table(table) => {
            let len = table.raw_len() as i64;
            let mut sequence = BTreeMap::new();
            let mut named = BTreeMap::new();
            for pair in table.pairs::<LuaValue, LuaValue>() {
                let (key, item) = pair.map_err(conversion_error)?;
                let item = from_lua(item)?;
                match key {
                    LuaValue::Integer(i) if (1..=len).contains(&i) => {
                        sequence.insert(i, item);
                    }
                    other => {
                        named.insert(table_key(other)?, item);
                    }
                }
            }
            // Only a gapless sequence without other keys becomes a list
            if named.is_empty() && len > 0 && sequence.len() as i64 == len {
                Value::List(sequence.into_values().collect())
            } else {
                named.extend(sequence.into_iter().map(|(i, item)| (i.to_string(), item)));
                Value::Map(named)
            }
        }
        other => {
            return Err(ScriptError::Evaluation(format!(
                "unsupported script result type: {}",
                other.type_name()
            )))
        }
    })
}

/// Map key for a Lua table key
fn table_key(key: LuaValue) -> Result<String, ScriptError> {
    match key {
        LuaValue::String(s) => s
            .to_str()
            .map(|s| s.to_string())
            .map_err(|e| ScriptError::Evaluation(e.to_string())),
        LuaValue::Integer(i) => Ok(i.to_string()),
        LuaValue::Number(x) => Ok(x.to_string()),
        LuaValue::Boolean(b) => Ok(b.to_string()),
        other => Err(ScriptError::Evaluation(format!(
            "unsupported table key type: {}",
            other.type_name()
        ))),
    }
}
