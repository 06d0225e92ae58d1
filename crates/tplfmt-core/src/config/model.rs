use serde::{Deserialize, Serialize};
use std::path::Path;

use super::consts::{
    DEFAULT_BEANS_ENABLED, DEFAULT_FIELDS_ENABLED, DEFAULT_METHODS_ENABLED, DEFAULT_NULL_STRING,
    DEFAULT_SCRIPTS_ENABLED, SCRIPT_END_TAG, SCRIPT_START_TAG,
};
use super::ConfigError;

/// Formatter settings, read once at the start of every rendering pass.
///
/// Every key is optional in TOML form:
///
/// ```toml
/// fields = true
/// beans = true
/// methods = false
/// scripts = true
/// null_string = "-"
/// script_start = "<%"
/// script_end = "%>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Resolve `${obj.name}` through fields
    pub fields: bool,
    /// Resolve `${obj.name}` through `getName`/`isName`
    pub beans: bool,
    /// Resolve `${obj.name}` through a zero-argument method `name`
    pub methods: bool,
    /// Evaluate script sections
    pub scripts: bool,
    pub null_string: String,
    pub script_start: String,
    pub script_end: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS_ENABLED,
            beans: DEFAULT_BEANS_ENABLED,
            methods: DEFAULT_METHODS_ENABLED,
            scripts: DEFAULT_SCRIPTS_ENABLED,
            null_string: DEFAULT_NULL_STRING.to_string(),
            script_start: SCRIPT_START_TAG.to_string(),
            script_end: SCRIPT_END_TAG.to_string(),
        }
    }
}

impl FormatterConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: FormatterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.script_start.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "script_start".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.script_end.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "script_end".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// True if the placeholder pass runs at all
    pub fn property_access_enabled(&self) -> bool {
        self.fields || self.beans || self.methods
    }

    pub fn with_fields(mut self, enabled: bool) -> Self {
        self.fields = enabled;
        self
    }

    pub fn with_beans(mut self, enabled: bool) -> Self {
        self.beans = enabled;
        self
    }

    pub fn with_methods(mut self, enabled: bool) -> Self {
        self.methods = enabled;
        self
    }

    pub fn with_scripts(mut self, enabled: bool) -> Self {
        self.scripts = enabled;
        self
    }

    pub fn with_null_string(mut self, null_string: impl Into<String>) -> Self {
        self.null_string = null_string.into();
        self
    }

    pub fn with_script_tags(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.script_start = start.into();
        self.script_end = end.into();
        self
    }
}
