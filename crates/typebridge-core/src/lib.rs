#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typebridge type descriptors.
//!
//! Two layers:
//! - **Capability layer**: the [`TypeSource`] trait, which is all the converter
//!   knows about host types
//! - **Graph layer**: [`TypeGraph`], an ID-indexed descriptor graph that can be
//!   built programmatically or loaded from JSON

mod graph;
mod kind;
mod raw;
mod source;
pub mod utils;

#[cfg(test)]
mod raw_tests;

pub use graph::{TypeDef, TypeGraph, TypeId};
pub use kind::TypeKind;
pub use raw::{GraphError, RawField, RawGraph, RawType, parse_type_graph};
pub use source::{Field, TypeSource};
