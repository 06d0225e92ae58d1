//! Template syntax markers and configuration defaults

/// Opens a property reference
pub const PROPERTY_START_TAG: &str = "${";

/// Closes a property reference
pub const PROPERTY_CLOSE_TAG: &str = "}";

/// Separates the root binding from its continuation, and continuation steps
pub const PROPERTY_SEPARATOR: char = '.';

/// Opens a script section
pub const SCRIPT_START_TAG: &str = "<bsh>";

/// Closes a script section
pub const SCRIPT_END_TAG: &str = "</bsh>";

/// Text rendered for a null value
pub const DEFAULT_NULL_STRING: &str = "<null>";

pub const DEFAULT_FIELDS_ENABLED: bool = true;
pub const DEFAULT_BEANS_ENABLED: bool = true;
pub const DEFAULT_METHODS_ENABLED: bool = true;

/// Script blocks need an interpreter, so they are opt-in
pub const DEFAULT_SCRIPTS_ENABLED: bool = false;
