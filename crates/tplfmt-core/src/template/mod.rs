//! Template module - placeholder substitution with optional script sections
//!
//! This module renders text templates against a set of named [`Value`]s.
//!
//! ## Philosophy
//!
//! - **Total rendering**: `render` never fails; anything it cannot resolve is
//!   left in the output exactly as written
//! - **No expression language**: placeholders name a binding and a path of
//!   members, nothing more
//! - **Scripts are external**: script sections are handed verbatim to an
//!   [`Interpreter`](crate::interpreter::Interpreter) session
//!
//! ## Syntax
//!
//! - Binding reference: `${name}`
//! - Member path: `${name.member}` or `${name.a.b.c}`, where each member is a
//!   field, a bean getter (`getMember`/`isMember`) or a zero-argument method
//! - Script section: `<bsh>source</bsh>` (delimiters configurable)
//!
//! [`Value`]: crate::value::Value

pub mod engine;
pub mod error;

pub use engine::resolve::{PropertyResolver, Resolution, ResolutionStrategy};
pub use engine::scan::{Scanner, Span, SpanKind};
pub use engine::script::{ScriptBlocks, ScriptSpan};
pub use engine::{render, DisplayFormatter, TemplateFormatter, ValueFormatter};
pub use error::ScriptError;
