use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum NameError {
    #[error("Empty name")]
    #[diagnostic(code(mirage_syntax::empty_name))]
    Empty,

    #[error("Empty segment in name `{name}`")]
    #[diagnostic(
        code(mirage_syntax::empty_segment),
        help("check for doubled `\\` separators")
    )]
    EmptySegment { name: String },

    #[error("Invalid segment `{segment}` in name `{name}`")]
    #[diagnostic(
        code(mirage_syntax::invalid_segment),
        help("segments must start with a letter or underscore")
    )]
    InvalidSegment { name: String, segment: String },
}
