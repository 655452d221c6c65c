//! Converter struct and the recursive dispatch.

use tracing::{debug, trace};

use typebridge_core::{TypeKind, TypeSource};

use super::naming::primitive_param_name;
use super::{Config, ConvertError, FunctionConfig, Registry};
use crate::Result;

type DiscoveryHook<'a, Id> = Box<dyn FnMut(&mut Registry<Id>, Id, &str) + 'a>;
type FuncResolver<'a, Id> = Box<dyn FnMut(Id) -> FunctionConfig + 'a>;

/// TypeScript converter over a descriptor source.
///
/// Chans become `AsyncIterable`, interfaces become `any`, pointers are
/// erased. Functions are asynchronous unless configured otherwise, and a
/// trailing error return is assumed to be thrown. Recursive types are not
/// supported: a self-referential descriptor recurses without bound.
pub struct Converter<'a, S: TypeSource> {
    pub(super) types: &'a S,
    pub(super) config: Config,
    pub(super) registry: Registry<S::Id>,
    /// Called after every conversion that was not served from the registry
    on_convert: DiscoveryHook<'a, S::Id>,
    /// Resolves rendering options for each converted function type
    pub(super) configure_func: FuncResolver<'a, S::Id>,
}

impl<'a, S: TypeSource> Converter<'a, S> {
    /// Create a converter seeded with the primitive mappings of `types`.
    pub fn new(types: &'a S) -> Self {
        Self::with_config(types, Config::default())
    }

    pub fn with_config(types: &'a S, config: Config) -> Self {
        let mut registry = Registry::new();
        for kind in TypeKind::SCALARS {
            let Some(id) = types.primitive(kind) else {
                continue;
            };
            registry.add_override(id, builtin_decl(kind));
            if let Some(name) = primitive_param_name(kind) {
                registry.add_param_name(id, name);
            }
        }

        Self {
            types,
            config,
            registry,
            on_convert: Box::new(ignore_discovery::<S::Id>),
            configure_func: Box::new(|_: S::Id| FunctionConfig::default()),
        }
    }

    pub fn registry(&self) -> &Registry<S::Id> {
        &self.registry
    }

    /// Mutable access to the override and parameter-name tables.
    pub fn registry_mut(&mut self) -> &mut Registry<S::Id> {
        &mut self.registry
    }

    /// Add custom declarations.
    pub fn add_overrides<D: Into<String>>(
        &mut self,
        entries: impl IntoIterator<Item = (S::Id, D)>,
    ) {
        self.registry.add_overrides(entries);
    }

    /// Add custom function parameter names for types.
    pub fn add_param_names<N: Into<String>>(
        &mut self,
        entries: impl IntoIterator<Item = (S::Id, N)>,
    ) {
        self.registry.add_param_names(entries);
    }

    /// Set the discovery hook.
    ///
    /// The hook receives the registry, so it may register the discovered type
    /// as an override. An override installed for the type being converted
    /// replaces the structural declaration as that conversion's result.
    pub fn set_on_convert(&mut self, hook: impl FnMut(&mut Registry<S::Id>, S::Id, &str) + 'a) {
        self.on_convert = Box::new(hook);
    }

    /// Set the resolver for per-function rendering options.
    pub fn set_configure_func(&mut self, resolve: impl FnMut(S::Id) -> FunctionConfig + 'a) {
        self.configure_func = Box::new(resolve);
    }

    /// Convert a descriptor to a TypeScript declaration.
    pub fn convert(&mut self, id: S::Id) -> Result<String> {
        if let Some(decl) = self.registry.override_for(id) {
            trace!("override hit for {:?}", id);
            return Ok(decl.to_string());
        }

        let types = self.types;
        let kind = types.kind(id);
        trace!("converting {:?} ({})", id, kind);

        let decl = match kind {
            TypeKind::Bool
            | TypeKind::Int
            | TypeKind::Int8
            | TypeKind::Int16
            | TypeKind::Int32
            | TypeKind::Int64
            | TypeKind::Uint
            | TypeKind::Uint8
            | TypeKind::Uint16
            | TypeKind::Uint32
            | TypeKind::Uint64
            | TypeKind::Uintptr
            | TypeKind::Float32
            | TypeKind::Float64
            | TypeKind::String => {
                // Defined aliases of primitives use the builtin mapping for
                // their kind, not overrides of the builtin descriptor
                return Ok(builtin_decl(kind).to_string());
            }
            TypeKind::Pointer => {
                let elem = self.elem_of(id)?;
                self.convert(elem)?
            }
            TypeKind::Chan => {
                let elem = self.elem_of(id)?;
                format!("AsyncIterable<{}>", self.convert(elem)?)
            }
            TypeKind::Func => self.convert_func(id)?,
            TypeKind::Struct => self.convert_struct(id)?,
            TypeKind::Slice | TypeKind::Array => {
                let elem = self.elem_of(id)?;
                format!("Array<{}>", self.convert(elem)?)
            }
            TypeKind::Map => {
                let value = self.elem_of(id)?;
                format!("{{ [k: string]: {} }}", self.convert(value)?)
            }
            TypeKind::Interface => "any".to_string(),
            TypeKind::Complex64 | TypeKind::Complex128 | TypeKind::UnsafePointer => {
                return Err(ConvertError::UnhandledKind {
                    kind,
                    name: types.name(id).to_string(),
                });
            }
        };

        (self.on_convert)(&mut self.registry, id, &decl);

        // The hook may have registered this type
        match self.registry.override_for(id) {
            Some(installed) => {
                debug!("discovery hook registered {:?} as `{}`", id, installed);
                Ok(installed.to_string())
            }
            None => Ok(decl),
        }
    }

    fn elem_of(&self, id: S::Id) -> Result<S::Id> {
        self.types
            .elem(id)
            .ok_or_else(|| ConvertError::MissingElement {
                kind: self.types.kind(id),
                name: self.types.name(id).to_string(),
            })
    }
}

fn ignore_discovery<Id>(_: &mut Registry<Id>, _: Id, _: &str) {}

/// Builtin declaration for a scalar kind.
fn builtin_decl(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Bool => "boolean",
        TypeKind::String => "string",
        _ => "number",
    }
}
