//! Canonical type kind definitions.

use std::fmt;

/// Structural category of a host type.
///
/// Converter dispatch matches exhaustively over these variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    /// Reference to another type. Erased in the target representation.
    Pointer,
    /// Stream of values of the element type.
    Chan,
    Func,
    /// Record with ordered, named fields.
    Struct,
    /// Dynamic-length sequence.
    Slice,
    /// Fixed-length sequence.
    Array,
    Map,
    /// Dynamic or interface type.
    Interface,
    UnsafePointer,
}

impl TypeKind {
    /// Kinds with a fixed primitive mapping, in declaration order.
    pub const SCALARS: [TypeKind; 15] = [
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::String,
    ];

    /// Whether this kind has a fixed primitive mapping.
    ///
    /// Complex numbers and unsafe pointers are primitive in the host but have
    /// no mapping, so they are not scalars here.
    pub fn is_scalar(self) -> bool {
        Self::SCALARS.contains(&self)
    }

    /// Whether this kind carries an element descriptor.
    pub fn has_elem(self) -> bool {
        matches!(
            self,
            Self::Pointer | Self::Chan | Self::Slice | Self::Array | Self::Map
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Pointer => "pointer",
            Self::Chan => "chan",
            Self::Func => "func",
            Self::Struct => "struct",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Interface => "interface",
            Self::UnsafePointer => "unsafe_pointer",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
