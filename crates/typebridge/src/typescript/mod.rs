//! TypeScript declaration converter.
//!
//! Walks a descriptor graph and renders inline declarations. Overrides short
//! circuit structural expansion, and the discovery hook lets callers register
//! freshly converted types as overrides for later references.

mod config;
mod converter;
mod error;
mod func;
mod naming;
mod registry;
mod structs;

#[cfg(test)]
mod registry_tests;

pub use config::{Config, FunctionConfig};
pub use converter::Converter;
pub use error::ConvertError;
pub use func::{ExtractedFunction, Param};
pub use registry::Registry;
pub use structs::{ExtractedStruct, StructField};
