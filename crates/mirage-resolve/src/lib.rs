#![doc = include_str!("../README.md")]

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod registry;
pub mod value;

pub use self::config::ResolverConfig;
pub use self::context::{ContextKind, ReflectionContext};
pub use self::core::ValueResolver;
pub use self::error::RegistryError;
pub use self::registry::{ConstantProvider, ConstantRegistry};
pub use self::value::{ArrayKey, Value, ValueArray};

#[cfg(test)]
mod tests;
