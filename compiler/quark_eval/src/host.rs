//! Wrapping host (Rust) functions as instructions.
//!
//! A host function receives resolved values. Its arity becomes the
//! instruction's parameter count; a value-returning function takes one more
//! trailing parameter, the variable that receives the result.

use crate::{Documentation, MethodDefinition, RuntimeError, Value};

/// How the host function's result is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// Fire-and-forget: the result is discarded.
    Void,
    /// The last operand names the variable that receives the result.
    Value,
}

/// Wrap `func` as a method named `name` taking `arity` arguments.
///
/// ```
/// use quark_eval::{host_function, Conversion, Interpreter, MethodGroup, Value};
///
/// let max = host_function("max", 2, Conversion::Value, |args| {
///     Value::Number(args[0].as_number().max(args[1].as_number()))
/// });
/// let mut interp = Interpreter::builder()
///     .methods(MethodGroup::new("host").with("max", max))
///     .build();
/// interp.execute("max 3 7 m").unwrap();
/// assert_eq!(interp.context().variable("m"), Some(&Value::Number(7.0)));
/// ```
pub fn host_function<F>(name: &str, arity: usize, conversion: Conversion, func: F) -> MethodDefinition
where
    F: Fn(&[Value]) -> Value + Send + Sync + 'static,
{
    let mut documentation = Documentation::new(format!("Runs the host function named {name}"));
    for i in 1..=arity {
        documentation = documentation.param(format!("argument{i}"), "");
    }
    if conversion == Conversion::Value {
        documentation = documentation.param(
            "returnname",
            "The variable name for the function's return value",
        );
    }

    MethodDefinition::new(documentation, move |ctx, args| match conversion {
        Conversion::Void => {
            let values: Vec<Value> = args.iter().map(|arg| ctx.resolve(arg)).collect();
            func(&values);
            Ok(())
        }
        Conversion::Value => {
            let Some((target, inputs)) = args.split_last() else {
                return Err(RuntimeError::ArityMismatch {
                    expected: arity + 1,
                    found: 0,
                });
            };
            let values: Vec<Value> = inputs.iter().map(|arg| ctx.resolve(arg)).collect();
            let result = func(&values);
            ctx.assign(target, result)
        }
    })
}

/// Wrap a unary numeric function, e.g. `f64::sin`, as a value-returning method.
pub fn numeric_function(name: &str, func: fn(f64) -> f64) -> MethodDefinition {
    host_function(name, 1, Conversion::Value, move |args| {
        Value::Number(func(args.first().map_or(f64::NAN, Value::as_number)))
    })
}
