//! ID-indexed descriptor graph.
//!
//! Builtin scalars, `error` and the empty interface are registered on
//! construction. Unnamed wrapper and function types are interned by shape, so
//! building `[]*User` twice yields the same [`TypeId`].

use std::collections::HashMap;

use crate::{Field, TypeKind, TypeSource};

/// Handle to a descriptor in a [`TypeGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// A single descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDef {
    pub kind: TypeKind,
    pub name: String,
    pub elem: Option<TypeId>,
    pub key: Option<TypeId>,
    /// Length of fixed-size arrays.
    pub len: Option<usize>,
    pub fields: Vec<Field<TypeId>>,
    pub params: Vec<TypeId>,
    pub returns: Vec<TypeId>,
    pub implements_error: bool,
}

impl TypeDef {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            elem: None,
            key: None,
            len: None,
            fields: Vec::new(),
            params: Vec::new(),
            returns: Vec::new(),
            implements_error: false,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Shape {
    Wrapper {
        kind: TypeKind,
        elem: TypeId,
        key: Option<TypeId>,
        len: Option<usize>,
    },
    Func {
        params: Vec<TypeId>,
        returns: Vec<TypeId>,
    },
}

/// Descriptor graph implementing [`TypeSource`].
#[derive(Clone, Debug)]
pub struct TypeGraph {
    defs: Vec<TypeDef>,
    /// Scalar kind -> builtin descriptor
    primitives: HashMap<TypeKind, TypeId>,
    /// Builtin and registered names
    names: HashMap<String, TypeId>,
    /// Interned unnamed shapes
    shapes: HashMap<Shape, TypeId>,
    error: TypeId,
    any: TypeId,
}

impl Default for TypeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGraph {
    pub fn new() -> Self {
        let mut graph = Self {
            defs: Vec::new(),
            primitives: HashMap::new(),
            names: HashMap::new(),
            shapes: HashMap::new(),
            error: TypeId(0),
            any: TypeId(0),
        };

        for kind in TypeKind::SCALARS {
            let id = graph.named(kind.as_str(), kind);
            graph.primitives.insert(kind, id);
        }
        graph.named("complex64", TypeKind::Complex64);
        graph.named("complex128", TypeKind::Complex128);
        let unsafe_ptr = graph.push(TypeDef::new(TypeKind::UnsafePointer, "Pointer"));
        graph.register_name("unsafe.Pointer", unsafe_ptr);
        graph.error = graph.interface("error", true);
        graph.any = graph.push(TypeDef::new(TypeKind::Interface, ""));
        graph.names.insert("any".to_string(), graph.any);
        graph
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.defs.get(id.0 as usize)
    }

    /// Resolve a builtin or registered name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Builtin descriptor for a scalar kind.
    pub fn builtin(&self, kind: TypeKind) -> Option<TypeId> {
        self.primitives.get(&kind).copied()
    }

    /// The builtin `error` interface.
    pub fn error(&self) -> TypeId {
        self.error
    }

    /// The empty interface.
    pub fn any(&self) -> TypeId {
        self.any
    }

    /// Register a named type of the given kind, e.g. a defined scalar alias.
    ///
    /// The name becomes resolvable through [`TypeGraph::lookup`]; a later
    /// registration under the same name shadows the earlier one.
    pub fn named(&mut self, name: &str, kind: TypeKind) -> TypeId {
        let id = self.push(TypeDef::new(kind, name));
        self.names.insert(name.to_string(), id);
        id
    }

    /// Register a named interface.
    pub fn interface(&mut self, name: &str, implements_error: bool) -> TypeId {
        let id = self.named(name, TypeKind::Interface);
        self.defs[id.0 as usize].implements_error = implements_error;
        id
    }

    /// Register a struct. An empty name declares an anonymous struct.
    pub fn structure<N: Into<String>>(
        &mut self,
        name: &str,
        fields: impl IntoIterator<Item = (N, TypeId)>,
    ) -> TypeId {
        let mut def = TypeDef::new(TypeKind::Struct, name);
        def.fields = fields
            .into_iter()
            .map(|(name, ty)| Field {
                name: name.into(),
                ty,
            })
            .collect();
        let id = self.push(def);
        if !name.is_empty() {
            self.names.insert(name.to_string(), id);
        }
        id
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.wrapper(TypeKind::Pointer, elem, None, None)
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.wrapper(TypeKind::Slice, elem, None, None)
    }

    pub fn array(&mut self, elem: TypeId, len: usize) -> TypeId {
        self.wrapper(TypeKind::Array, elem, None, Some(len))
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.wrapper(TypeKind::Map, value, Some(key), None)
    }

    pub fn chan(&mut self, elem: TypeId) -> TypeId {
        self.wrapper(TypeKind::Chan, elem, None, None)
    }

    /// Function type. Methods list their receiver as the first parameter.
    pub fn func(
        &mut self,
        params: impl IntoIterator<Item = TypeId>,
        returns: impl IntoIterator<Item = TypeId>,
    ) -> TypeId {
        let params: Vec<TypeId> = params.into_iter().collect();
        let returns: Vec<TypeId> = returns.into_iter().collect();
        let shape = Shape::Func {
            params: params.clone(),
            returns: returns.clone(),
        };
        if let Some(&id) = self.shapes.get(&shape) {
            return id;
        }

        let mut def = TypeDef::new(TypeKind::Func, "");
        def.params = params;
        def.returns = returns;
        let id = self.push(def);
        self.shapes.insert(shape, id);
        id
    }

    fn wrapper(
        &mut self,
        kind: TypeKind,
        elem: TypeId,
        key: Option<TypeId>,
        len: Option<usize>,
    ) -> TypeId {
        let shape = Shape::Wrapper {
            kind,
            elem,
            key,
            len,
        };
        if let Some(&id) = self.shapes.get(&shape) {
            return id;
        }

        let mut def = TypeDef::new(kind, "");
        def.elem = Some(elem);
        def.key = key;
        def.len = len;
        let id = self.push(def);
        self.shapes.insert(shape, id);
        id
    }

    pub(crate) fn push(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.defs.len() as u32);
        self.defs.push(def);
        id
    }

    /// Overwrite a placeholder created during raw loading.
    pub(crate) fn replace(&mut self, id: TypeId, def: TypeDef) {
        self.defs[id.0 as usize] = def;
    }

    pub(crate) fn register_name(&mut self, name: &str, id: TypeId) {
        self.names.insert(name.to_string(), id);
    }

    fn def(&self, id: TypeId) -> &TypeDef {
        &self.defs[id.0 as usize]
    }
}

impl TypeSource for TypeGraph {
    type Id = TypeId;

    fn kind(&self, id: TypeId) -> TypeKind {
        self.def(id).kind
    }

    fn name(&self, id: TypeId) -> &str {
        &self.def(id).name
    }

    fn elem(&self, id: TypeId) -> Option<TypeId> {
        self.def(id).elem
    }

    fn key(&self, id: TypeId) -> Option<TypeId> {
        self.def(id).key
    }

    fn fields(&self, id: TypeId) -> &[Field<TypeId>] {
        &self.def(id).fields
    }

    fn params(&self, id: TypeId) -> &[TypeId] {
        &self.def(id).params
    }

    fn returns(&self, id: TypeId) -> &[TypeId] {
        &self.def(id).returns
    }

    fn implements_error(&self, id: TypeId) -> bool {
        self.def(id).implements_error
    }

    fn primitive(&self, kind: TypeKind) -> Option<TypeId> {
        self.builtin(kind)
    }
}
