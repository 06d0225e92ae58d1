//! Runtime member access for host objects

use std::fmt;
use thiserror::Error;

use super::Value;

/// Failure raised while invoking a member of a bound value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    #[error("MEMBER_FAILED: '{member}' failed: {reason}")]
    Failed { member: String, reason: String },

    #[error("MEMBER_UNSUPPORTED: '{0}' is not supported on this value")]
    Unsupported(String),
}

impl MemberError {
    /// Convenience constructor for [`MemberError::Failed`]
    pub fn failed(member: impl Into<String>, reason: impl Into<String>) -> Self {
        MemberError::Failed {
            member: member.into(),
            reason: reason.into(),
        }
    }
}

/// A host value whose members can be queried by name at render time.
///
/// Two kinds of members exist:
///
/// - **fields**: plain attributes, read without side effects
/// - **methods**: zero-argument callables, which may fail
///
/// Bean-style getters (`getWidth`, `isActive`) are ordinary methods; the
/// resolver derives their names from the property being looked up.
///
/// # Example
///
/// ```rust
/// use std::fmt;
/// use tplfmt_core::value::{MemberError, Object, Value};
///
/// #[derive(Debug)]
/// struct Size {
///     width: i64,
///     height: i64,
/// }
///
/// impl fmt::Display for Size {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}x{}", self.width, self.height)
///     }
/// }
///
/// impl Object for Size {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "width" => Some(Value::Int(self.width)),
///             "height" => Some(Value::Int(self.height)),
///             _ => None,
///         }
///     }
///
///     fn field_names(&self) -> Vec<&str> {
///         vec!["width", "height"]
///     }
///
///     fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
///         match name {
///             "area" => Some(Ok(Value::Int(self.width * self.height))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Object: fmt::Debug + fmt::Display + Send + Sync {
    /// Read the field `name`, or `None` if the object has no such field
    fn field(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// Names of all fields answered by [`Object::field`]
    fn field_names(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Invoke the zero-argument method `name`.
    ///
    /// Returns `None` when the object has no such method, and `Some(Err(_))`
    /// when the method exists but failed.
    fn call(&self, name: &str) -> Option<Result<Value, MemberError>> {
        let _ = name;
        None
    }
}
