use miette::Diagnostic;
use thiserror::Error;

/// Errors raised when populating a constant registry.
///
/// Resolution itself never errors — unresolvable input degrades to an
/// absent value — so this enum only covers the fallible write side.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum RegistryError {
    /// The constant is already defined.
    #[error("Constant `{name}` is already defined")]
    #[diagnostic(code(mirage_resolve::duplicate_constant))]
    DuplicateConstant {
        /// The name that was defined twice.
        name: String,
    },

    /// The name is not a valid registry key.
    #[error("Invalid constant name `{name}`")]
    #[diagnostic(
        code(mirage_resolve::invalid_constant_name),
        help("registry keys are joined names without a leading `\\`")
    )]
    InvalidConstantName {
        /// The rejected name.
        name: String,
    },
}
