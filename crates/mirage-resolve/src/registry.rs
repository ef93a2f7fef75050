//! Constant tables.
//!
//! The original runtime resolves constant references against process-global
//! state. Here the lookup is an explicit dependency instead: the resolver
//! receives a [`ConstantProvider`] at construction, so resolution is
//! deterministic and testable with injected fixtures.

use fxhash::FxHashMap;

use crate::error::RegistryError;
use crate::value::Value;

/// Read access to a table of defined constants.
///
/// Keyed by the joined string form of a name (`App\Config\DEBUG` — no
/// leading separator).
pub trait ConstantProvider {
    /// Looks up a constant's value.
    fn get(&self, name: &str) -> Option<Value>;

    /// Whether a constant is defined.
    fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// An in-memory constant table.
///
/// This is the provider the surrounding reflection layer fills while walking
/// `define()`-style declarations, and the fixture type tests inject.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: FxHashMap<String, Value>,
}

impl ConstantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the constants the language defines
    /// unconditionally: `true`, `false` and `null`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Infallible: the names are valid and the registry is empty.
        let _ = registry.define("true", Value::Bool(true));
        let _ = registry.define("false", Value::Bool(false));
        let _ = registry.define("null", Value::Null);
        registry
    }

    /// Defines a constant.
    ///
    /// Names are stored in joined form without a leading separator;
    /// redefinition is rejected.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.is_empty() || name.starts_with('\\') {
            return Err(RegistryError::InvalidConstantName { name });
        }
        if self.constants.contains_key(&name) {
            return Err(RegistryError::DuplicateConstant { name });
        }
        self.constants.insert(name, value);
        Ok(())
    }

    /// Number of defined constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Whether the registry defines no constants.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl ConstantProvider for ConstantRegistry {
    fn get(&self, name: &str) -> Option<Value> {
        self.constants.get(name).cloned()
    }

    fn is_defined(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
}
