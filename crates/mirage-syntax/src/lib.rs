pub mod ast;
pub mod error;

pub use ast::{ArrayItem, BinaryOp, Expr, ExprKind, MagicConst, Name};
pub use error::NameError;
