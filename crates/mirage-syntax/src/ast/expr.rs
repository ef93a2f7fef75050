//! Expression nodes consumed by the constant-expression resolver.
//!
//! These types are the contract between the external parser and the rest of
//! the toolkit. A parser produces an `Expr` tree for the initializer
//! expressions it encounters (default parameter values, class constant
//! values, annotation arguments); the resolver walks that tree without ever
//! executing the program it came from.

use serde::{Deserialize, Serialize};

use crate::ast::name::Name;

/// A single node in a parsed, unexecuted expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    /// The structural kind of the node.
    pub kind: ExprKind,

    /// Source line the node starts on, when the parser attached one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Expr {
    /// Creates a node with no source-line attribute.
    pub fn new(kind: ExprKind) -> Self {
        Self { kind, line: None }
    }

    /// Creates a node carrying the line it starts on.
    pub fn with_line(kind: ExprKind, line: u32) -> Self {
        Self {
            kind,
            line: Some(line),
        }
    }
}

/// The structural kinds of expression nodes.
///
/// Only a subset of these denotes values knowable at analysis time; the
/// remaining kinds exist because a real parser emits them and downstream
/// consumers must be able to represent "this initializer is not a constant
/// expression".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    /// An integer literal.
    Int(i64),

    /// A floating-point literal.
    Float(f64),

    /// A string literal, already unescaped by the parser.
    String(String),

    /// A reference to a named constant, possibly namespace-qualified.
    ConstFetch(Name),

    /// An array literal: an ordered list of entries with optional keys.
    Array(Vec<ArrayItem>),

    /// One of the closed set of context-magic markers.
    MagicConst(MagicConst),

    /// A variable reference. Never constant.
    Variable(String),

    /// A class constant fetch (`SomeClass::CONST`). Not resolved statically.
    ClassConstFetch {
        /// The class portion of the fetch.
        class: Name,
        /// The constant name on the right of `::`.
        constant: String,
    },

    /// A call expression. Never constant.
    Call {
        /// The called name.
        callee: Name,
        /// Argument expressions, in source order.
        args: Vec<Expr>,
    },

    /// A binary operation. Not resolved statically.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

/// One entry of an array literal.
///
/// `key` is absent for entries written without an explicit key; such entries
/// take their position in the literal as an integer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayItem {
    /// The explicit key expression, if the entry has one.
    pub key: Option<Expr>,

    /// The value expression.
    pub value: Expr,
}

impl ArrayItem {
    /// An entry without an explicit key.
    pub fn value(value: Expr) -> Self {
        Self { key: None, value }
    }

    /// An entry with an explicit key.
    pub fn keyed(key: Expr, value: Expr) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }
}

/// Context-magic markers.
///
/// Each marker stands for a value that depends on *where* the expression
/// appears in the program rather than on any payload of its own. The
/// resolver derives the value from the resolution context (or, for `Line`,
/// from the node's own line attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagicConst {
    /// The enclosing method, rendered `Class::method`.
    Method,
    /// The enclosing function or method name.
    Function,
    /// The enclosing namespace.
    Namespace,
    /// The enclosing class name.
    Class,
    /// The directory of the enclosing file.
    Dir,
    /// The path of the enclosing file.
    File,
    /// The line the marker appears on.
    Line,
    /// The enclosing trait name.
    Trait,
}

/// Binary operators the parser can produce inside initializer expressions.
///
/// The resolver treats every binary node as non-constant; the enum exists so
/// parsed trees can still represent such initializers faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}
