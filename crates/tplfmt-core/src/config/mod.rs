//! Formatter configuration

pub mod consts;
mod error;
mod model;

pub use error::ConfigError;
pub use model::FormatterConfig;
