pub mod expr;
pub mod name;

pub use expr::{ArrayItem, BinaryOp, Expr, ExprKind, MagicConst};
pub use name::Name;
