//! Struct expansion.

use typebridge_core::TypeSource;
use typebridge_core::utils::is_upper;

use super::Converter;
use crate::Result;

/// A converted struct field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub decl: String,
}

/// Exported fields of a struct, converted in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedStruct {
    pub name: String,
    pub fields: Vec<StructField>,
}

impl ExtractedStruct {
    /// Render as an inline object literal type.
    pub fn render(&self) -> String {
        if self.fields.is_empty() {
            return "{}".to_string();
        }

        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.decl))
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }
}

impl<S: TypeSource> Converter<'_, S> {
    pub fn extract_struct(&mut self, id: S::Id) -> Result<ExtractedStruct> {
        let types = self.types;
        let mut info = ExtractedStruct {
            name: types.name(id).to_string(),
            fields: Vec::new(),
        };

        for field in types.fields(id) {
            if !is_exported(&field.name) {
                continue;
            }
            info.fields.push(StructField {
                name: field.name.clone(),
                decl: self.convert(field.ty)?,
            });
        }
        Ok(info)
    }

    pub(super) fn convert_struct(&mut self, id: S::Id) -> Result<String> {
        Ok(self.extract_struct(id)?.render())
    }
}

/// A field is exported when its first character is not a lower-case letter.
fn is_exported(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| is_upper(&name[..first.len_utf8()]))
}
