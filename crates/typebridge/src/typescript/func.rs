//! Function expansion: parameter lists and return folding.

use typebridge_core::TypeSource;

use super::{Converter, FunctionConfig};
use crate::Result;

/// A function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub decl: String,
}

/// Parameters and folded return declaration of a function type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedFunction {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: String,
}

impl ExtractedFunction {
    /// Append a parameter, suffixing its name (`name1`, `name2`, ...) until it
    /// is unique within the list.
    fn push_param(&mut self, mut param: Param) {
        let mut n = 0;
        loop {
            let candidate = if n == 0 {
                param.name.clone()
            } else {
                format!("{}{}", param.name, n)
            };
            if !self.params.iter().any(|p| p.name == candidate) {
                param.name = candidate;
                break;
            }
            n += 1;
        }
        self.params.push(param);
    }

    /// Render as an arrow function type, or a method signature when
    /// `config` marks a method.
    pub fn render(&self, config: &FunctionConfig) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.decl))
            .collect();
        if config.is_method {
            return format!(
                "{} ({}): {}",
                config.method_name,
                params.join(", "),
                self.returns
            );
        }
        format!("({}) => {}", params.join(", "), self.returns)
    }
}

impl<S: TypeSource> Converter<'_, S> {
    /// Extract parameters and the folded return type of a function.
    ///
    /// A trailing error return is dropped. No remaining returns fold to
    /// `void`, one to itself, more to a tuple; `always_array` turns a single
    /// return into a tuple as well. Asynchronous functions wrap the result in
    /// `Promise`.
    pub fn extract_func(
        &mut self,
        id: S::Id,
        config: &FunctionConfig,
    ) -> Result<ExtractedFunction> {
        let types = self.types;

        let outs = types.returns(id);
        let outs = match outs.split_last() {
            Some((&last, init)) if types.implements_error(last) => init,
            _ => outs,
        };
        let mut rets = Vec::with_capacity(outs.len());
        for &out in outs {
            rets.push(self.convert(out)?);
        }
        let returns = match rets.as_slice() {
            [] => "void".to_string(),
            [single] if !config.always_array => single.clone(),
            all => format!("[{}]", all.join(", ")),
        };

        let mut info = ExtractedFunction {
            name: types.name(id).to_string(),
            params: Vec::new(),
            returns,
        };

        // Receiver has no TypeScript representation
        let start = usize::from(config.is_method);
        for (index, &param) in types.params(id).iter().enumerate().skip(start) {
            if !config.no_ignore_context && types.name(param) == self.config.context_type {
                continue;
            }
            let name = match config.param_names.get(index) {
                Some(name) => name.clone(),
                None => self.param_name(param),
            };
            let decl = self.convert(param)?;
            info.push_param(Param { name, decl });
        }

        if !config.is_sync {
            info.returns = format!("Promise<{}>", info.returns);
        }
        Ok(info)
    }

    pub(super) fn convert_func(&mut self, id: S::Id) -> Result<String> {
        let config = (self.configure_func)(id);
        let info = self.extract_func(id, &config)?;
        Ok(info.render(&config))
    }
}
