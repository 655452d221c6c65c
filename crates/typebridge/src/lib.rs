#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! typebridge: host type descriptors to TypeScript declarations.
//!
//! This crate provides the conversion engine:
//! - `typescript` - the recursive converter, struct and function expanders,
//!   parameter naming, and override tables
//!
//! Descriptors come from any [`TypeSource`]; [`TypeGraph`] is the bundled
//! implementation.
//!
//! # Example
//!
//! ```
//! use typebridge::{Converter, TypeGraph, TypeKind};
//!
//! let mut graph = TypeGraph::new();
//! let string = graph.builtin(TypeKind::String).unwrap();
//! let user = graph.structure("User", [("Name", string)]);
//! let users = graph.map(string, user);
//!
//! let mut converter = Converter::new(&graph);
//! assert_eq!(converter.convert(user).unwrap(), "{ Name: string }");
//!
//! converter.add_overrides([(user, "User")]);
//! assert_eq!(converter.convert(users).unwrap(), "{ [k: string]: User }");
//! ```

pub mod typescript;

#[cfg(test)]
pub mod test_utils;

pub use typebridge_core::{Field, TypeGraph, TypeId, TypeKind, TypeSource, parse_type_graph};
pub use typescript::{
    Config, ConvertError, Converter, ExtractedFunction, ExtractedStruct, FunctionConfig, Param,
    Registry, StructField,
};

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;
