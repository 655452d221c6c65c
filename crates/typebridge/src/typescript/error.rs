use typebridge_core::TypeKind;

/// Errors that abort a conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The descriptor's kind has no TypeScript representation.
    #[error("unhandled type: {name:?} ({kind})")]
    UnhandledKind { kind: TypeKind, name: String },

    /// An element-bearing descriptor reported no element type.
    #[error("{kind} type {name:?} has no element type")]
    MissingElement { kind: TypeKind, name: String },
}
