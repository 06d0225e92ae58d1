//! Tests for template engine
//!
//! This module contains the tests for the template engine,
//! organized into focused submodules for better maintainability.

use super::*;

// Test helper functions
mod helpers;



// Error and edge case tests
mod errors;
