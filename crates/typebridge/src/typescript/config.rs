//! Configuration types for TypeScript conversion.

/// Engine-wide configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Declared name of the host context-propagation type
    pub(crate) context_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_type: "Context".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared name of the context type elided from parameter lists.
    pub fn context_type(mut self, name: impl Into<String>) -> Self {
        self.context_type = name.into();
        self
    }
}

/// How a single function type is rendered.
///
/// Produced per conversion by the converter's function resolver. The default
/// renders an asynchronous, non-method function that drops a leading context.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FunctionConfig {
    /// Return values directly instead of a `Promise`
    pub(crate) is_sync: bool,
    /// Wrap a single return value in a tuple
    pub(crate) always_array: bool,
    /// Keep context parameters
    pub(crate) no_ignore_context: bool,
    /// Skip the receiver and render as a class method
    pub(crate) is_method: bool,
    pub(crate) method_name: String,
    /// Parameter names by original parameter index
    pub(crate) param_names: Vec<String>,
}

impl FunctionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the function is synchronous.
    pub fn sync(mut self, value: bool) -> Self {
        self.is_sync = value;
        self
    }

    /// Set whether a single return value is still rendered as a tuple.
    pub fn always_array(mut self, value: bool) -> Self {
        self.always_array = value;
        self
    }

    /// Set whether context parameters are kept.
    pub fn no_ignore_context(mut self, value: bool) -> Self {
        self.no_ignore_context = value;
        self
    }

    /// Render as a method with the given name. The first parameter is
    /// treated as the receiver and skipped.
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.is_method = true;
        self.method_name = name.into();
        self
    }

    /// Set parameter names, indexed like the descriptor's parameters.
    pub fn param_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.param_names = names.into_iter().map(Into::into).collect();
        self
    }
}
