//! Buffered output.

use crate::{fixed_args, Documentation, MethodDefinition, MethodGroup};

pub fn io() -> MethodGroup {
    MethodGroup::new("io")
        .with(
            "print",
            MethodDefinition::new(
                Documentation::new("Prints its input. Execute `flush` to write to output")
                    .param("value", "Any value"),
                |ctx, args| {
                    let [value] = fixed_args::<1>(args)?;
                    let text = ctx.resolve(value).to_string();
                    ctx.append(&text);
                    Ok(())
                },
            ),
        )
        .with(
            "flush",
            MethodDefinition::new(
                Documentation::new("Flushes out the previously called print statements"),
                |ctx, _| {
                    ctx.flush();
                    Ok(())
                },
            ),
        )
        .with(
            "dump",
            MethodDefinition::new(Documentation::new("Dumps debug information"), |ctx, _| {
                let dump = ctx.dump();
                ctx.print_handler().println(&dump);
                Ok(())
            }),
        )
}
