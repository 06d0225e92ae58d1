use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum TplfmtError {
    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Bindings errors
    #[error("BINDINGS_PARSE_ERROR: {0}")]
    BindingsParse(String),

    #[error("BINDINGS_NOT_A_TABLE: expected a table of named values, found {0}")]
    BindingsNotATable(String),
}

impl From<serde_json::Error> for TplfmtError {
    fn from(err: serde_json::Error) -> Self {
        TplfmtError::BindingsParse(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, TplfmtError>;
