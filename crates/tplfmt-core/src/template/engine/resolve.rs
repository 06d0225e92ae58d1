//! Property resolution: binding lookup plus member path walking

use std::fmt;

use super::helpers::capitalize;
use super::scan::{Span, SpanKind};
use super::ValueFormatter;
use crate::config::consts::PROPERTY_SEPARATOR;
use crate::config::FormatterConfig;
use crate::value::{Bindings, Value};

/// One way of turning `(value, property)` into the next value
pub trait ResolutionStrategy: fmt::Debug + Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// The member `property` of `value`, or `None` if this strategy finds
    /// no such member (or invoking it failed)
    fn try_resolve(&self, value: &Value, property: &str) -> Option<Value>;
}

/// Field-like attribute access
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldStrategy;

impl ResolutionStrategy for FieldStrategy {
    fn name(&self) -> &'static str {
        "field"
    }

    fn try_resolve(&self, value: &Value, property: &str) -> Option<Value> {
        value.field(property)
    }
}

/// Bean getter access: `getProperty`, then `isProperty`
#[derive(Debug, Clone, Copy, Default)]
pub struct BeanStrategy;

impl ResolutionStrategy for BeanStrategy {
    fn name(&self) -> &'static str {
        "bean"
    }

    fn try_resolve(&self, value: &Value, property: &str) -> Option<Value> {
        let base = capitalize(property);
        invoke(value, &format!("get{}", base)).or_else(|| invoke(value, &format!("is{}", base)))
    }
}

/// Zero-argument method named exactly like the property
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodStrategy;

impl ResolutionStrategy for MethodStrategy {
    fn name(&self) -> &'static str {
        "method"
    }

    fn try_resolve(&self, value: &Value, property: &str) -> Option<Value> {
        invoke(value, property)
    }
}

/// Call a method, downgrading an invocation failure to "no match"
fn invoke(value: &Value, method: &str) -> Option<Value> {
    match value.call(method)? {
        Ok(result) => Some(result),
        Err(e) => {
            tracing::debug!("Invocation of '{}' on {} failed: {}", method, value.kind(), e);
            None
        }
    }
}

/// Outcome of resolving one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Replace the placeholder with this text
    Resolved(String),
    /// The path is valid but ended at a null value; replace with nothing
    ResolvedNull,
    /// Leave the placeholder as written
    Unresolved,
}

impl Resolution {
    /// Replacement text, or `None` when the placeholder stays literal
    pub fn into_text(self) -> Option<String> {
        match self {
            Resolution::Resolved(text) => Some(text),
            Resolution::ResolvedNull => Some(String::new()),
            Resolution::Unresolved => None,
        }
    }
}

/// Where walking a member path ended
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PathOutcome {
    Present(Value),
    /// A null value was reached; the remaining steps were skipped
    Absent,
    /// No strategy matched `property`
    Missing { property: String },
}

/// Walks member paths with an ordered set of strategies
///
/// The first strategy that matches a step wins; a step nothing matches
/// fails the whole path.
#[derive(Debug)]
pub struct PropertyResolver {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl PropertyResolver {
    /// Field, bean and method strategies, in that order, as enabled
    pub fn from_config(config: &FormatterConfig) -> Self {
        let mut strategies: Vec<Box<dyn ResolutionStrategy>> = Vec::with_capacity(3);
        if config.fields {
            strategies.push(Box::new(FieldStrategy));
        }
        if config.beans {
            strategies.push(Box::new(BeanStrategy));
        }
        if config.methods {
            strategies.push(Box::new(MethodStrategy));
        }
        Self::with_strategies(strategies)
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve one property step against all strategies
    fn step(&self, value: &Value, property: &str) -> Option<Value> {
        if property.is_empty() {
            return None;
        }
        self.strategies.iter().find_map(|strategy| {
            let found = strategy.try_resolve(value, property);
            if found.is_some() {
                tracing::trace!("'{}' resolved by {} strategy", property, strategy.name());
            }
            found
        })
    }

    /// Walk the dot-separated `path` starting at `root`
    pub(crate) fn resolve_path(&self, root: &Value, path: &str) -> PathOutcome {
        let mut current = root.clone();
        for property in path.split(PROPERTY_SEPARATOR) {
            if current.is_null() {
                // Null short-circuits: the path stays valid
                continue;
            }
            match self.step(&current, property) {
                Some(next) => current = next,
                None => {
                    return PathOutcome::Missing {
                        property: property.to_string(),
                    }
                }
            }
        }

        if current.is_null() {
            PathOutcome::Absent
        } else {
            PathOutcome::Present(current)
        }
    }

    /// Resolve a scanned placeholder against `bindings`
    pub fn resolve_span(
        &self,
        span: &Span<'_>,
        bindings: &Bindings,
        formatter: &dyn ValueFormatter,
        null_string: &str,
    ) -> Resolution {
        match span.kind {
            SpanKind::Direct { name } => match bindings.get(name) {
                Some(value) => Resolution::Resolved(formatter.format_value(name, value, null_string)),
                None => {
                    tracing::trace!("Unknown binding '{}'", name);
                    Resolution::Unresolved
                }
            },
            SpanKind::Dotted { root, continuation } => {
                let Some(root_value) = bindings.get(root) else {
                    tracing::trace!("Unknown binding '{}'", root);
                    return Resolution::Unresolved;
                };
                match self.resolve_path(root_value, continuation) {
                    PathOutcome::Present(value) => Resolution::Resolved(formatter.format_value(
                        continuation,
                        &value,
                        null_string,
                    )),
                    PathOutcome::Absent => Resolution::ResolvedNull,
                    PathOutcome::Missing { property } => {
                        tracing::trace!(
                            "No member '{}' while resolving '{}.{}'",
                            property,
                            root,
                            continuation
                        );
                        Resolution::Unresolved
                    }
                }
            }
        }
    }
}
