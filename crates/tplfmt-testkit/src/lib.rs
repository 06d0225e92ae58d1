//! Test utilities for tplfmt
//!
//! This crate provides shared fixtures and a scripted interpreter used by
//! the tplfmt integration tests.

pub mod fixtures;
pub mod mock;

pub use fixtures::{Dimension, FailingMethod, Switch, UnitMethod};
pub use mock::{Call, ScriptedFactory, ScriptedInterpreter, unavailable_factory};
