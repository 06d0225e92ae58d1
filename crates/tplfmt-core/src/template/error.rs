//! Template error types

use thiserror::Error;

/// Script section failures
///
/// Rendering turns these into an inline `[Script-Error: <kind>]` marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No interpreter configured, or the session could not be created
    #[error("SCRIPT_INTERPRETER_UNAVAILABLE: {0}")]
    Unavailable(String),

    /// The script itself failed
    #[error("SCRIPT_EVAL_FAILED: {0}")]
    Evaluation(String),

    /// A binding could not be registered or removed
    #[error("SCRIPT_BINDING_FAILED: '{name}': {reason}")]
    Binding { name: String, reason: String },
}

impl ScriptError {
    /// Short name of the failure kind, shown in the inline marker
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptError::Unavailable(_) => "InterpreterUnavailable",
            ScriptError::Evaluation(_) => "EvaluationError",
            ScriptError::Binding { .. } => "BindingError",
        }
    }
}
