//! The descriptor capability consumed by the converter.

use std::fmt::Debug;
use std::hash::Hash;

use crate::TypeKind;

/// A struct field as reported by a [`TypeSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<Id> {
    pub name: String,
    pub ty: Id,
}

/// Introspection over a graph of host type descriptors.
///
/// Descriptors are addressed by `Id`. Two ids for the same type must compare
/// equal, since override lookups are by identity.
pub trait TypeSource {
    type Id: Copy + Eq + Hash + Debug;

    fn kind(&self, id: Self::Id) -> TypeKind;

    /// Declared name, empty for unnamed types.
    fn name(&self, id: Self::Id) -> &str;

    /// Pointee, element or map value type.
    fn elem(&self, id: Self::Id) -> Option<Self::Id>;

    /// Map key type.
    fn key(&self, id: Self::Id) -> Option<Self::Id>;

    /// Struct fields in declaration order.
    fn fields(&self, id: Self::Id) -> &[Field<Self::Id>];

    /// Function parameter types, receiver first for methods.
    fn params(&self, id: Self::Id) -> &[Self::Id];

    fn returns(&self, id: Self::Id) -> &[Self::Id];

    /// Whether the type satisfies the host's error contract.
    fn implements_error(&self, id: Self::Id) -> bool;

    /// Canonical descriptor for a scalar kind, if the source defines one.
    fn primitive(&self, kind: TypeKind) -> Option<Self::Id>;
}
