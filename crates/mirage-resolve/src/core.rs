// Core resolution logic: one dispatch point, one handler per node kind.

use std::path::Path;

use mirage_syntax::ast::{ArrayItem, Expr, ExprKind, MagicConst, Name};

use crate::config::ResolverConfig;
use crate::context::{ContextKind, ReflectionContext};
use crate::registry::ConstantProvider;
use crate::value::{ArrayKey, Value, ValueArray};

/// Best-effort static resolver for constant expressions.
///
/// A resolver is bound at construction to one resolution context and one
/// constant provider, both immutable for its lifetime. One instance serves
/// one evaluation request: call [`process`](Self::process) with the root
/// node, then read [`value`](Self::value),
/// [`constant_name`](Self::constant_name) and
/// [`is_constant`](Self::is_constant).
///
/// Resolution is infallible. Node kinds that would need runtime
/// evaluation come back as an absent value, magic markers degrade to `""`
/// or `0` when the context lacks the capability they need, and undefined
/// constants are absent rather than errors. The resolver never mutates its
/// context or the constant provider.
pub struct ValueResolver<'a> {
    context: &'a dyn ReflectionContext,
    constants: &'a dyn ConstantProvider,
    config: ResolverConfig,
    value: Option<Value>,
    constant_name: Option<String>,
    is_constant: bool,
}

impl<'a> ValueResolver<'a> {
    /// Creates a resolver with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `context`: The construct the expression textually appears in.
    /// * `constants`: The table of globally defined constants.
    pub fn new(
        context: &'a dyn ReflectionContext,
        constants: &'a dyn ConstantProvider,
    ) -> Self {
        Self::with_config(context, constants, ResolverConfig::default())
    }

    /// Creates a resolver with an explicit configuration.
    pub fn with_config(
        context: &'a dyn ReflectionContext,
        constants: &'a dyn ConstantProvider,
        config: ResolverConfig,
    ) -> Self {
        Self {
            context,
            constants,
            config,
            value: None,
            constant_name: None,
            is_constant: false,
        }
    }

    /// Resolves the given root node and stores the outcome.
    ///
    /// Calling `process` again overwrites the previous outcome; resolving
    /// the same node against the same context is idempotent and free of
    /// side effects.
    pub fn process(&mut self, node: &Expr) {
        log::trace!("resolving expression rooted at line {:?}", node.line);
        self.constant_name = match &node.kind {
            ExprKind::ConstFetch(name) => Some(name.to_string()),
            _ => None,
        };
        self.value = self.resolve(node, 0);
        self.is_constant = self.value.is_some();
    }

    /// The resolved value of the last processed node, or `None` when the
    /// node was not statically knowable.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the resolver, returning the resolved value.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// The referenced constant's name, when the last processed root node
    /// was a named-constant reference — captured even when the constant
    /// turned out to be undefined, for use in diagnostics.
    pub fn constant_name(&self) -> Option<&str> {
        self.constant_name.as_deref()
    }

    /// Whether the last processed node resolved to a value.
    ///
    /// True exactly when [`value`](Self::value) is `Some`; consumers use it
    /// to decide whether the outcome is safe to cache.
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }

    /// The single dispatch point of the resolver.
    ///
    /// Routes the node to exactly one kind-specific handler; composite
    /// handlers recurse by re-entering this method. Sub-resolutions return
    /// their results directly and never write instance state, so nested
    /// calls cannot corrupt an in-flight evaluation.
    fn resolve(&self, node: &Expr, depth: usize) -> Option<Value> {
        if depth > self.config.max_depth {
            log::debug!(
                "literal tree deeper than {} levels, treating as unknown",
                self.config.max_depth
            );
            return None;
        }

        match &node.kind {
            ExprKind::Int(value) => Some(Value::Int(*value)),
            ExprKind::Float(value) => Some(Value::Float(*value)),
            ExprKind::String(value) => Some(Value::String(value.clone())),
            ExprKind::ConstFetch(name) => self.resolve_const_fetch(name),
            ExprKind::Array(items) => Some(self.resolve_array(items, depth)),
            ExprKind::MagicConst(magic) => Some(self.resolve_magic(*magic, node)),

            // Everything below needs runtime evaluation and is never
            // statically known.
            ExprKind::Variable(_)
            | ExprKind::ClassConstFetch { .. }
            | ExprKind::Call { .. }
            | ExprKind::Binary { .. } => None,
        }
    }

    /// Resolves a named-constant reference.
    ///
    /// Names that are not fully qualified are offered to the context's
    /// namespace-scoped table first; that table takes precedence over the
    /// global provider. An undefined name is absent, not an error.
    fn resolve_const_fetch(&self, name: &Name) -> Option<Value> {
        let joined = name.to_string();

        if !name.is_fully_qualified() {
            if let Some(value) = self.context.namespaced_constant(&joined) {
                return Some(value);
            }
        }

        if self.constants.is_defined(&joined) {
            return self.constants.get(&joined);
        }

        log::debug!("constant `{joined}` is not defined in any reachable table");
        None
    }

    /// Resolves an array literal into an ordered mapping.
    ///
    /// The entry at position `i` takes its resolved key sub-node as key, or
    /// `i` itself when written without one. Later entries overwrite earlier
    /// entries with an equal key; the key keeps its first-insertion
    /// position.
    fn resolve_array(&self, items: &[ArrayItem], depth: usize) -> Value {
        let mut result = ValueArray::new();

        for (index, item) in items.iter().enumerate() {
            // Absence collapses to null inside a composite; only the root
            // of an evaluation can report "not statically known".
            let value = self
                .resolve(&item.value, depth + 1)
                .unwrap_or(Value::Null);

            let key = match &item.key {
                Some(key_node) => {
                    let key_value = self
                        .resolve(key_node, depth + 1)
                        .unwrap_or(Value::Null);
                    match ArrayKey::from_value(&key_value) {
                        Some(key) => key,
                        None => {
                            log::debug!(
                                "array entry {index} has an unrepresentable key, dropping it"
                            );
                            continue;
                        }
                    }
                }
                None => ArrayKey::Int(index as i64),
            };

            result.insert(key, value);
        }

        Value::Array(result)
    }

    /// Resolves a context-magic marker.
    ///
    /// Magic markers always yield a string or integer — a missing context
    /// capability degrades to `""` (or `0` for the line marker), never to
    /// an absent value.
    fn resolve_magic(&self, magic: MagicConst, node: &Expr) -> Value {
        match magic {
            MagicConst::Method => Value::String(self.enclosing_method()),
            MagicConst::Function => Value::String(self.enclosing_function()),
            MagicConst::Namespace => {
                Value::String(self.context.namespace_name().unwrap_or_default())
            }
            MagicConst::Class => Value::String(self.enclosing_class()),
            MagicConst::Dir => Value::String(self.enclosing_dir()),
            MagicConst::File => Value::String(self.enclosing_file()),
            MagicConst::Line => Value::Int(node.line.map_or(0, i64::from)),
            MagicConst::Trait => Value::String(self.enclosing_trait()),
        }
    }

    /// `Class::method` for method contexts exposing a declaring class.
    fn enclosing_method(&self) -> String {
        if self.context.kind() == ContextKind::Method {
            let class = self.context.declaring_class_name();
            let short = self.context.short_name();
            if let (Some(class), Some(short)) = (class, short) {
                return format!("{class}::{short}");
            }
        }
        String::new()
    }

    fn enclosing_function(&self) -> String {
        if self.context.kind().is_callable() {
            return self.context.name().unwrap_or_default();
        }
        String::new()
    }

    /// The enclosing class: the context's own name for class contexts,
    /// otherwise the declaring class of the context's construct.
    fn enclosing_class(&self) -> String {
        if self.context.kind() == ContextKind::Class {
            return self.context.name().unwrap_or_default();
        }
        self.context.declaring_class_name().unwrap_or_default()
    }

    fn enclosing_dir(&self) -> String {
        self.context
            .file_path()
            .and_then(Path::parent)
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    }

    fn enclosing_file(&self) -> String {
        self.context
            .file_path()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    }

    /// The enclosing trait name, for class contexts flagged as traits.
    fn enclosing_trait(&self) -> String {
        if self.context.kind() == ContextKind::Class && self.context.is_trait() == Some(true) {
            return self.context.name().unwrap_or_default();
        }
        String::new()
    }
}
