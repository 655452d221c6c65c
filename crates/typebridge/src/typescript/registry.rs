//! Override and parameter-name tables.

use std::collections::HashMap;
use std::hash::Hash;

/// Caller-registered declarations and parameter names, keyed by descriptor.
///
/// Owned by a [`Converter`](super::Converter) and handed to the discovery hook
/// so it can register types while a conversion is in progress.
#[derive(Clone, Debug)]
pub struct Registry<Id> {
    overrides: HashMap<Id, String>,
    param_names: HashMap<Id, String>,
}

impl<Id> Default for Registry<Id> {
    fn default() -> Self {
        Self {
            overrides: HashMap::new(),
            param_names: HashMap::new(),
        }
    }
}

impl<Id: Copy + Eq + Hash> Registry<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge declarations. Later entries replace earlier ones for the same id.
    pub fn add_overrides<S: Into<String>>(&mut self, entries: impl IntoIterator<Item = (Id, S)>) {
        for (id, decl) in entries {
            self.overrides.insert(id, decl.into());
        }
    }

    pub fn add_override(&mut self, id: Id, decl: impl Into<String>) {
        self.overrides.insert(id, decl.into());
    }

    /// Merge parameter names. Later entries replace earlier ones for the same id.
    pub fn add_param_names<S: Into<String>>(
        &mut self,
        entries: impl IntoIterator<Item = (Id, S)>,
    ) {
        for (id, name) in entries {
            self.param_names.insert(id, name.into());
        }
    }

    pub fn add_param_name(&mut self, id: Id, name: impl Into<String>) {
        self.param_names.insert(id, name.into());
    }

    pub fn override_for(&self, id: Id) -> Option<&str> {
        self.overrides.get(&id).map(String::as_str)
    }

    pub fn param_name_for(&self, id: Id) -> Option<&str> {
        self.param_names.get(&id).map(String::as_str)
    }

    pub fn overrides_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn param_names_count(&self) -> usize {
        self.param_names.len()
    }
}
