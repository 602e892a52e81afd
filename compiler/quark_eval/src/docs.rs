//! Docstrings and method listings.

use crate::{MethodDefinition, MethodRegistry};

const ANY: &str = "any";

/// Usage line: the name followed by parameter names.
pub fn signature(name: &str, method: &MethodDefinition) -> String {
    let mut out = name.to_string();
    for param in &method.documentation.params {
        out.push(' ');
        out.push_str(&param.name);
    }
    out
}

/// Full documentation of one method.
///
/// ```text
/// add lhs rhs varname
///
/// Adds two numbers and writes it to a variable
///
/// Parameters:
///
/// lhs: The left hand side of the addition [number]
/// ...
/// ```
pub fn docstring(name: &str, method: &MethodDefinition) -> String {
    let doc = &method.documentation;
    let mut out = format!("{}\n\n{}", signature(name, method), doc.summary);
    if !doc.params.is_empty() {
        out.push_str("\n\nParameters:\n");
        for param in &doc.params {
            let kind = param.kind.as_deref().unwrap_or(ANY);
            out.push_str(&format!("\n{}: {} [{kind}]", param.name, param.description));
        }
    }
    out
}

/// One line per method, sorted by name: `name param: type ...`.
pub fn listing(registry: &MethodRegistry) -> String {
    registry
        .sorted()
        .into_iter()
        .map(|(name, method)| {
            let mut line = name.to_string();
            for param in &method.documentation.params {
                let kind = param.kind.as_deref().unwrap_or(ANY);
                line.push_str(&format!(" {}: {kind}", param.name));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Documentation, MethodGroup};
    use pretty_assertions::assert_eq;

    #[test]
    fn docstring_with_parameters() {
        let registry = MethodRegistry::stock();
        let Some(goto) = registry.get("goto") else {
            panic!("goto is a stock method");
        };
        assert_eq!(
            docstring("goto", goto),
            "goto cond line\n\n\
             Jump to a different part of the code if the condition is met\n\n\
             Parameters:\n\n\
             cond: The condition to check [0 or 1]\n\
             line: The line to go to [number]"
        );
    }

    #[test]
    fn docstring_without_parameters() {
        let registry = MethodRegistry::stock();
        let Some(flush) = registry.get("flush") else {
            panic!("flush is a stock method");
        };
        assert_eq!(
            docstring("flush", flush),
            "flush\n\nFlushes out the previously called print statements"
        );
    }

    #[test]
    fn untyped_parameters_render_as_any() {
        let registry = MethodRegistry::stock();
        let Some(print) = registry.get("print") else {
            panic!("print is a stock method");
        };
        assert!(docstring("print", print).ends_with("value: Any value [any]"));
    }

    #[test]
    fn listing_is_sorted_with_types() {
        let registry = MethodRegistry::merge([MethodGroup::new("t")
            .with(
                "b",
                MethodDefinition::new(Documentation::new("b"), |_, _| Ok(())),
            )
            .with(
                "a",
                MethodDefinition::new(
                    Documentation::new("a")
                        .typed_param("n", "", "number")
                        .param("v", ""),
                    |_, _| Ok(()),
                ),
            )]);
        assert_eq!(listing(&registry), "a n: number v: any\nb");
    }
}
