//! Scripted interpreter sessions for testing script sections
//!
//! [`ScriptedFactory`] hands out [`ScriptedInterpreter`] sessions that
//! evaluate every script with one shared Rust closure and record every
//! bridge call, so tests can assert on the exact set/eval/unset protocol.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tplfmt_core::interpreter::{Interpreter, InterpreterFactory};
use tplfmt_core::template::ScriptError;
use tplfmt_core::value::Value;

/// Evaluates script source against the globals currently set
pub type Evaluator =
    dyn Fn(&str, &BTreeMap<String, Value>) -> Result<Value, ScriptError> + Send + Sync;

/// One bridge call, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set(String, Value),
    Eval(String),
    Unset(String),
}

/// Factory for [`ScriptedInterpreter`] sessions
///
/// Clones share the call log and the session counter.
#[derive(Clone)]
pub struct ScriptedFactory {
    evaluator: Arc<Evaluator>,
    calls: Arc<Mutex<Vec<Call>>>,
    sessions: Arc<AtomicUsize>,
}

impl ScriptedFactory {
    pub fn new(
        evaluator: impl Fn(&str, &BTreeMap<String, Value>) -> Result<Value, ScriptError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            calls: Arc::new(Mutex::new(Vec::new())),
            sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every call made so far, across all sessions
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of sessions created so far
    pub fn sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }

    /// Build a session directly, bypassing the counter
    pub fn session(&self) -> ScriptedInterpreter {
        ScriptedInterpreter {
            globals: BTreeMap::new(),
            evaluator: Arc::clone(&self.evaluator),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl InterpreterFactory for ScriptedFactory {
    fn create(&self) -> Result<Box<dyn Interpreter>, ScriptError> {
        self.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.session()))
    }
}

/// Session that keeps globals in a map and records every call
pub struct ScriptedInterpreter {
    globals: BTreeMap<String, Value>,
    evaluator: Arc<Evaluator>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedInterpreter {
    /// Globals currently set in this session
    pub fn globals(&self) -> &BTreeMap<String, Value> {
        &self.globals
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("call log poisoned").push(call);
    }
}

impl Interpreter for ScriptedInterpreter {
    fn set(&mut self, name: &str, value: &Value) -> Result<(), ScriptError> {
        self.record(Call::Set(name.to_string(), value.clone()));
        self.globals.insert(name.to_string(), value.clone());
        Ok(())
    }

    fn eval(&mut self, source: &str) -> Result<Value, ScriptError> {
        self.record(Call::Eval(source.to_string()));
        (self.evaluator)(source, &self.globals)
    }

    fn unset(&mut self, name: &str) -> Result<(), ScriptError> {
        self.record(Call::Unset(name.to_string()));
        self.globals.remove(name);
        Ok(())
    }
}

/// Factory that never produces a session, like a missing scripting runtime
pub fn unavailable_factory() -> impl InterpreterFactory {
    || -> Result<Box<dyn Interpreter>, ScriptError> {
        Err(ScriptError::Unavailable("scripting runtime not installed".to_string()))
    }
}
