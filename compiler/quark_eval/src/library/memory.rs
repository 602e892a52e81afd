//! Variables and the heap.

use crate::{fixed_args, Documentation, MethodDefinition, MethodGroup, RuntimeError, Value};

#[allow(
    clippy::cast_precision_loss,
    reason = "heap length is bounded by the heap limit"
)]
fn heap_size_value(size: usize) -> Value {
    Value::Number(size as f64)
}

pub fn memory() -> MethodGroup {
    MethodGroup::new("memory")
        .with(
            "set",
            MethodDefinition::new(
                Documentation::new("Writes a value to a variable")
                    .typed_param("varname", "The variable name to write the value to", "string")
                    .param("value", "The value of the variable"),
                |ctx, args| {
                    let [target, value] = fixed_args::<2>(args)?;
                    ctx.write_variable(target, value)
                },
            ),
        )
        .with(
            "alloc",
            MethodDefinition::new(
                Documentation::new("Allocates space in the context's heap").typed_param(
                    "amount",
                    "The amount of space to allocate",
                    "number",
                ),
                |ctx, args| {
                    let [amount] = fixed_args::<1>(args)?;
                    let amount = ctx.resolve(amount);
                    let slots = amount.as_index().ok_or_else(|| RuntimeError::InvalidAmount {
                        amount: amount.to_string(),
                    })?;
                    ctx.grow(slots)
                },
            ),
        )
        .with(
            "heapsize",
            MethodDefinition::new(
                Documentation::new("Writes the heap's size to a variable")
                    .param("varname", "The variable to store the value"),
                |ctx, args| {
                    let [target] = fixed_args::<1>(args)?;
                    let size = heap_size_value(ctx.heap_size());
                    ctx.assign(target, size)
                },
            ),
        )
        .with(
            "write",
            MethodDefinition::new(
                Documentation::new("Writes a value into the context's heap")
                    .typed_param("address", "The address to write to", "number")
                    .param("value", "The value to write"),
                |ctx, args| {
                    let [address, value] = fixed_args::<2>(args)?;
                    let index = ctx.address(address)?;
                    let value = ctx.resolve(value);
                    ctx.heap_write(index, value)
                },
            ),
        )
        .with(
            "read",
            MethodDefinition::new(
                Documentation::new("Reads a value from the context's heap")
                    .typed_param("address", "The address to read from", "number")
                    .param("varname", "The variable to store the value"),
                |ctx, args| {
                    let [address, target] = fixed_args::<2>(args)?;
                    // Soft read: a bad or unset address yields Empty.
                    let value = ctx
                        .resolve(address)
                        .as_index()
                        .map_or(Value::Empty, |index| ctx.heap_read(index));
                    ctx.assign(target, value)
                },
            ),
        )
}
