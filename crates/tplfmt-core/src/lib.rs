// Core modules
pub mod config;
pub mod error;
pub mod interpreter;
pub mod template;
pub mod value;

// Re-export commonly used types
pub use config::FormatterConfig;
pub use error::{Result, TplfmtError};
pub use interpreter::{Interpreter, InterpreterFactory};
pub use template::{render, TemplateFormatter};
pub use value::{Bindings, Object, Value};
