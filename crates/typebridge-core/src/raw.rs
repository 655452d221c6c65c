//! JSON deserialization layer for descriptor graphs.
//!
//! A graph document lists types by `id`; references name another entry's `id`
//! or a builtin (`bool`, `int`, ..., `string`, `error`, `any`). Forward
//! references are allowed.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{Field, TypeDef, TypeGraph, TypeId, TypeKind};

/// Raw graph document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawGraph {
    pub types: Vec<RawType>,
}

/// Raw type entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawType {
    pub id: String,
    pub kind: TypeKind,
    /// Declared name. Defaults to `id` for struct, interface and scalar kinds.
    pub name: Option<String>,
    pub elem: Option<String>,
    pub key: Option<String>,
    pub len: Option<usize>,
    /// Field name -> type reference, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, RawField>,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub returns: Vec<String>,
    #[serde(default)]
    pub error: bool,
}

/// Raw struct field: either a bare type reference or `{ "type": ... }`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Ref(String),
    Typed {
        #[serde(rename = "type")]
        type_ref: String,
    },
}

impl RawField {
    pub fn type_ref(&self) -> &str {
        match self {
            Self::Ref(r) => r,
            Self::Typed { type_ref } => type_ref,
        }
    }
}

/// Errors raised while loading a descriptor graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid type graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate type id `{0}`")]
    DuplicateId(String),

    #[error("type `{from}` references unknown type `{target}`")]
    UnknownRef { from: String, target: String },

    #[error("{kind} type `{id}` has no element type")]
    MissingElem { id: String, kind: TypeKind },

    #[error("map type `{0}` has no key type")]
    MissingKey(String),
}

/// Parse a JSON graph document into a [`TypeGraph`].
pub fn parse_type_graph(json: &str) -> Result<TypeGraph, GraphError> {
    let raw: RawGraph = serde_json::from_str(json)?;
    let graph = TypeGraph::from_raw(&raw)?;
    tracing::debug!("loaded type graph with {} declared types", raw.types.len());
    Ok(graph)
}

impl TypeGraph {
    /// Build a graph from raw entries on top of the builtins.
    pub fn from_raw(raw: &RawGraph) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        // Allocate ids first so entries can reference later ones
        let mut ids: HashMap<&str, TypeId> = HashMap::new();
        for ty in &raw.types {
            if ids.contains_key(ty.id.as_str()) || graph.lookup(&ty.id).is_some() {
                return Err(GraphError::DuplicateId(ty.id.clone()));
            }
            let id = graph.push(TypeDef::new(ty.kind, ty.declared_name()));
            ids.insert(&ty.id, id);
        }

        for ty in &raw.types {
            let resolve = |target: &str| {
                ids.get(target)
                    .copied()
                    .or_else(|| graph.lookup(target))
                    .ok_or_else(|| GraphError::UnknownRef {
                        from: ty.id.clone(),
                        target: target.to_string(),
                    })
            };

            let mut def = TypeDef::new(ty.kind, ty.declared_name());
            def.len = ty.len;
            def.implements_error = ty.error;

            if ty.kind.has_elem() {
                let elem = ty.elem.as_deref().ok_or_else(|| GraphError::MissingElem {
                    id: ty.id.clone(),
                    kind: ty.kind,
                })?;
                def.elem = Some(resolve(elem)?);
            }
            if ty.kind == TypeKind::Map {
                let key = ty
                    .key
                    .as_deref()
                    .ok_or_else(|| GraphError::MissingKey(ty.id.clone()))?;
                def.key = Some(resolve(key)?);
            }

            for (name, field) in &ty.fields {
                def.fields.push(Field {
                    name: name.clone(),
                    ty: resolve(field.type_ref())?,
                });
            }
            for param in &ty.params {
                def.params.push(resolve(param)?);
            }
            for ret in &ty.returns {
                def.returns.push(resolve(ret)?);
            }

            graph.replace(ids[ty.id.as_str()], def);
        }

        for (name, &id) in &ids {
            graph.register_name(name, id);
        }
        Ok(graph)
    }
}

impl RawType {
    fn declared_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if self.kind.is_scalar() || matches!(self.kind, TypeKind::Struct | TypeKind::Interface) {
            self.id.clone()
        } else {
            String::new()
        }
    }
}
