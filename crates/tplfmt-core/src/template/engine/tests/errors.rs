//! Failure handling tests for template engine

use super::helpers::{tiny_script, Call, Exploding, RecordingInterpreter};
use super::*;
use std::sync::{Arc, Mutex};

#[test]
fn test_exception_throwing_method_left_verbatim() {
    let bindings = Bindings::new().with("a", Value::object(Exploding));
    assert_eq!(render("${a.b}", &bindings), "${a.b}");
}

#[test]
fn test_failing_method_does_not_stop_rendering() {
    let bindings = Bindings::new()
        .with("a", Value::object(Exploding))
        .with("n", 5);
    assert_eq!(render("${a.b} then ${n}", &bindings), "${a.b} then 5");
}

#[test]
fn test_builtin_overflow_left_verbatim() {
    let bindings = Bindings::new().with("n", i64::MIN);
    assert_eq!(render("${n.abs}", &bindings), "${n.abs}");
}

#[test]
fn test_format_script_with_given_session() {
    let formatter = TemplateFormatter::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut session = RecordingInterpreter::new(tiny_script, Arc::clone(&calls));
    let bindings = Bindings::new().with("foo", "abcd");

    assert_eq!(formatter.format_script("len foo", &bindings, &mut session), "4");
    assert_eq!(
        formatter.format_script("len bar", &bindings, &mut session),
        "[Script-Error: EvaluationError]"
    );
    assert_eq!(calls.lock().unwrap().len(), 6);
}

#[test]
fn test_binding_failure_renders_marker_and_still_unsets() {
    struct RejectsSet {
        unset: Vec<String>,
    }

    impl Interpreter for RejectsSet {
        fn set(&mut self, name: &str, _value: &Value) -> Result<(), ScriptError> {
            Err(ScriptError::Binding {
                name: name.to_string(),
                reason: "read-only".to_string(),
            })
        }

        fn eval(&mut self, _source: &str) -> Result<Value, ScriptError> {
            panic!("eval must not run after a failed set");
        }

        fn unset(&mut self, name: &str) -> Result<(), ScriptError> {
            self.unset.push(name.to_string());
            Ok(())
        }
    }

    let formatter = TemplateFormatter::new();
    let mut session = RejectsSet { unset: Vec::new() };
    let bindings = Bindings::new().with("x", 1).with("y", 2);
    assert_eq!(
        formatter.format_script("anything", &bindings, &mut session),
        "[Script-Error: BindingError]"
    );
    assert_eq!(session.unset, vec!["x", "y"]);
}

#[test]
fn test_unset_failure_renders_marker() {
    struct RejectsUnset;

    impl Interpreter for RejectsUnset {
        fn set(&mut self, _name: &str, _value: &Value) -> Result<(), ScriptError> {
            Ok(())
        }

        fn eval(&mut self, _source: &str) -> Result<Value, ScriptError> {
            Ok(Value::Int(1))
        }

        fn unset(&mut self, name: &str) -> Result<(), ScriptError> {
            Err(ScriptError::Binding {
                name: name.to_string(),
                reason: "locked".to_string(),
            })
        }
    }

    let formatter = TemplateFormatter::new();
    let bindings = Bindings::new().with("x", 1);
    assert_eq!(
        formatter.format_script("anything", &bindings, &mut RejectsUnset),
        "[Script-Error: BindingError]"
    );
}

#[test]
fn test_script_error_kinds_and_messages() {
    let unavailable = ScriptError::Unavailable("missing".to_string());
    assert_eq!(unavailable.kind(), "InterpreterUnavailable");
    assert!(unavailable.to_string().starts_with("SCRIPT_INTERPRETER_UNAVAILABLE"));

    let binding = ScriptError::Binding {
        name: "x".to_string(),
        reason: "nope".to_string(),
    };
    assert_eq!(binding.to_string(), "SCRIPT_BINDING_FAILED: 'x': nope");
}

#[test]
fn test_empty_bindings_only_eval() {
    let formatter = TemplateFormatter::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut session = RecordingInterpreter::new(tiny_script, Arc::clone(&calls));
    formatter.format_script("len foo", &Bindings::new(), &mut session);
    assert_eq!(
        calls.lock().unwrap().clone(),
        vec![Call::Eval("len foo".to_string())]
    );
}
