//! The `methods` and `doc` commands.

use quark_eval::{docstring, listing, MethodRegistry};

use crate::CliError;

pub fn method_listing() -> String {
    listing(&MethodRegistry::stock())
}

pub fn method_doc(name: &str) -> Result<String, CliError> {
    let registry = MethodRegistry::stock();
    let method = registry.get(name).ok_or_else(|| CliError::UnknownMethod {
        name: name.to_string(),
    })?;
    Ok(docstring(name, method))
}
