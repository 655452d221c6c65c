//! Parameter name derivation.

use typebridge_core::utils::{is_upper, to_lower_first};
use typebridge_core::{TypeKind, TypeSource};

use super::Converter;

impl<S: TypeSource> Converter<'_, S> {
    /// Derive a parameter name for a descriptor.
    ///
    /// Registered names win. Pointers and slices are named after their
    /// element; anything else after its declared name.
    pub fn param_name(&self, id: S::Id) -> String {
        if let Some(name) = self.registry.param_name_for(id) {
            return name.to_string();
        }

        let types = self.types;
        if matches!(types.kind(id), TypeKind::Pointer | TypeKind::Slice) {
            if let Some(elem) = types.elem(id) {
                return self.param_name(elem);
            }
        }
        derive_param_name(types.name(id))
    }
}

/// `_` for unnamed types, all lower-case for all-caps names (`ID` -> `id`),
/// otherwise the name with a lower-cased first character.
pub(super) fn derive_param_name(name: &str) -> String {
    if name.is_empty() {
        "_".to_string()
    } else if is_upper(name) {
        name.to_lowercase()
    } else {
        to_lower_first(name)
    }
}

/// Short parameter names seeded for the builtin scalars.
pub(super) fn primitive_param_name(kind: TypeKind) -> Option<&'static str> {
    match kind {
        TypeKind::Bool => Some("bool"),
        TypeKind::Int | TypeKind::Int8 | TypeKind::Int16 | TypeKind::Int32 | TypeKind::Int64 => {
            Some("int")
        }
        TypeKind::Uint
        | TypeKind::Uint8
        | TypeKind::Uint16
        | TypeKind::Uint32
        | TypeKind::Uint64 => Some("uint"),
        TypeKind::Float32 | TypeKind::Float64 => Some("num"),
        TypeKind::String => Some("str"),
        _ => None,
    }
}
