//! Template engine implementation

mod helpers;
pub mod resolve;
pub mod scan;
pub mod script;

use std::fmt;

use crate::config::FormatterConfig;
use crate::interpreter::{Interpreter, InterpreterFactory};
use crate::template::error::ScriptError;
use crate::value::{Bindings, Value};

pub use helpers::{DisplayFormatter, ValueFormatter};

use helpers::stringify_value;
use resolve::PropertyResolver;
use scan::Scanner;
use script::ScriptBlocks;

/// Inline replacement for a failed script section
fn script_error_marker(err: &ScriptError) -> String {
    format!("[Script-Error: {}]", err.kind())
}

/// Renders templates against named bindings
///
/// Rendering runs two passes, each governed by the configuration:
///
/// 1. **Placeholders** (if any of fields/beans/methods is enabled): every
///    resolvable `${...}` is replaced, everything else is kept verbatim
/// 2. **Scripts** (if scripts are enabled): every script section of the
///    substituted text is evaluated in one interpreter session
///
/// # Example
///
/// ```rust
/// use tplfmt_core::{Bindings, TemplateFormatter};
///
/// let formatter = TemplateFormatter::new();
/// let bindings = Bindings::new().with("foo", "bar");
/// assert_eq!(formatter.render("Uppercase: ${foo.toUpperCase}", &bindings), "Uppercase: BAR");
/// assert_eq!(formatter.render("${unknown}", &bindings), "${unknown}");
/// ```
pub struct TemplateFormatter {
    config: FormatterConfig,
    value_formatter: Box<dyn ValueFormatter>,
    interpreters: Option<Box<dyn InterpreterFactory>>,
}

impl TemplateFormatter {
    /// Create a formatter with the default configuration and no interpreter
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            value_formatter: Box::new(DisplayFormatter),
            interpreters: None,
        }
    }

    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `factory` to create the interpreter session for script sections
    pub fn with_interpreter(mut self, factory: impl InterpreterFactory + 'static) -> Self {
        self.interpreters = Some(Box::new(factory));
        self
    }

    /// Replace the value-to-text conversion used by the placeholder pass
    pub fn with_value_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.value_formatter = Box::new(formatter);
        self
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Replace the configuration between renders
    pub fn set_config(&mut self, config: FormatterConfig) {
        self.config = config;
    }

    pub fn null_string(&self) -> &str {
        &self.config.null_string
    }

    /// Render `template` with `bindings`. Never fails.
    pub fn render(&self, template: &str, bindings: &Bindings) -> String {
        let substituted = if self.config.property_access_enabled() {
            self.format_properties(template, bindings)
        } else {
            template.to_string()
        };

        if self.config.scripts {
            self.format_scripts(&substituted, bindings)
        } else {
            substituted
        }
    }

    /// Placeholder pass only
    pub fn format_properties(&self, template: &str, bindings: &Bindings) -> String {
        let resolver = PropertyResolver::from_config(&self.config);
        let null_string = self.config.null_string.as_str();
        let mut output = String::with_capacity(template.len());
        let mut copied = 0;

        for span in Scanner::new(template) {
            // Starts inside a placeholder that was already replaced
            if span.open < copied {
                continue;
            }
            let resolution =
                resolver.resolve_span(&span, bindings, self.value_formatter.as_ref(), null_string);
            if let Some(text) = resolution.into_text() {
                output.push_str(&template[copied..span.open]);
                output.push_str(&text);
                copied = span.end();
            }
        }

        output.push_str(&template[copied..]);
        output
    }

    /// Script pass only
    ///
    /// The interpreter session is created on the first script section and
    /// shared by the following ones. If it cannot be created, every section
    /// renders as an error marker.
    pub fn format_scripts(&self, text: &str, bindings: &Bindings) -> String {
        let mut session: Option<Result<Box<dyn Interpreter>, ScriptError>> = None;
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;

        for block in ScriptBlocks::new(text, &self.config.script_start, &self.config.script_end) {
            output.push_str(&text[copied..block.start]);
            let rendered = match session.get_or_insert_with(|| self.create_session()) {
                Ok(interpreter) => self.format_script(block.source, bindings, &mut **interpreter),
                Err(e) => {
                    tracing::warn!("Script section skipped: {}", e);
                    script_error_marker(e)
                }
            };
            output.push_str(&rendered);
            copied = block.end;
        }

        output.push_str(&text[copied..]);
        output
    }

    /// Evaluate one script in `interpreter`, bracketed by registering and
    /// removing every binding
    pub fn format_script(
        &self,
        source: &str,
        bindings: &Bindings,
        interpreter: &mut dyn Interpreter,
    ) -> String {
        match run_script(source, bindings, interpreter) {
            Ok(value) => stringify_value(&value, &self.config.null_string),
            Err(e) => {
                tracing::warn!("Script evaluation failed: {}", e);
                script_error_marker(&e)
            }
        }
    }

    /// True if an interpreter session can be created
    pub fn is_interpreter_available(&self) -> bool {
        self.create_session().is_ok()
    }

    fn create_session(&self) -> Result<Box<dyn Interpreter>, ScriptError> {
        match &self.interpreters {
            Some(factory) => factory.create(),
            None => Err(ScriptError::Unavailable(
                "no interpreter configured".to_string(),
            )),
        }
    }
}

/// Register, evaluate, unregister
///
/// Bindings are removed even when evaluation failed, so the next script in
/// the session starts clean.
fn run_script(
    source: &str,
    bindings: &Bindings,
    interpreter: &mut dyn Interpreter,
) -> Result<Value, ScriptError> {
    let evaluated = bindings
        .iter()
        .try_for_each(|(name, value)| interpreter.set(name, value))
        .and_then(|()| interpreter.eval(source));

    let released = bindings
        .names()
        .try_for_each(|name| interpreter.unset(name));

    let value = evaluated?;
    released?;
    Ok(value)
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFormatter")
            .field("config", &self.config)
            .field("interpreter", &self.interpreters.is_some())
            .finish_non_exhaustive()
    }
}

/// Convenience function to render a template with the default configuration
pub fn render(template: &str, bindings: &Bindings) -> String {
    TemplateFormatter::new().render(template, bindings)
}

#[cfg(test)]
mod tests;
