//! Resolution contexts.
//!
//! A context represents the program construct an expression was found in —
//! the class whose constant it initializes, the method whose parameter it
//! defaults, the function, or the file namespace. The resolver only ever
//! *reads* from its context, and every capability is optional: a context
//! variant implements the accessors it can answer and inherits "capability
//! absent" defaults for the rest.

use std::path::Path;

use crate::value::Value;

/// The closed set of context kinds the reflection layer can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// A class, interface or trait declaration.
    Class,
    /// A method declared inside a class-like construct.
    Method,
    /// A free function.
    Function,
    /// A namespace block within one source file.
    FileNamespace,
}

impl ContextKind {
    /// Whether this kind of construct can be called.
    pub fn is_callable(self) -> bool {
        matches!(self, Self::Method | Self::Function)
    }
}

/// Capabilities a resolution context may expose.
///
/// Every accessor defaults to `None`: the resolver queries with existence
/// checks and falls back gracefully, so a context variant only implements
/// what it can actually answer. Implementations must be cheap and free of
/// side effects — the resolver may query the same capability more than once
/// per evaluation.
pub trait ReflectionContext {
    /// Which construct this context represents.
    fn kind(&self) -> ContextKind;

    /// The construct's own name: fully qualified for classes and functions,
    /// the bare method name for methods.
    fn name(&self) -> Option<String> {
        None
    }

    /// The construct's short (unqualified) name.
    fn short_name(&self) -> Option<String> {
        None
    }

    /// The fully qualified name of the class declaring this construct.
    fn declaring_class_name(&self) -> Option<String> {
        None
    }

    /// The namespace the construct was declared in.
    fn namespace_name(&self) -> Option<String> {
        None
    }

    /// The path of the source file the construct was declared in.
    fn file_path(&self) -> Option<&Path> {
        None
    }

    /// For class-like constructs: whether the construct is a trait.
    fn is_trait(&self) -> Option<bool> {
        None
    }

    /// Looks up a constant in the namespace-scoped table visible from this
    /// context. Checked before the global provider for names that are not
    /// fully qualified.
    fn namespaced_constant(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }
}
