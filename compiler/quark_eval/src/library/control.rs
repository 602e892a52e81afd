//! Jumps. The only control flow Quark has.

use crate::{fixed_args, Documentation, MethodDefinition, MethodGroup};

pub fn control() -> MethodGroup {
    MethodGroup::new("control")
        .with(
            "goto",
            MethodDefinition::new(
                Documentation::new("Jump to a different part of the code if the condition is met")
                    .typed_param("cond", "The condition to check", "0 or 1")
                    .typed_param("line", "The line to go to", "number"),
                |ctx, args| {
                    let [cond, line] = fixed_args::<2>(args)?;
                    if ctx.resolve(cond).as_number() > 0.0 {
                        let target = ctx.resolve(line);
                        ctx.jump_to(&target)?;
                    }
                    Ok(())
                },
            ),
        )
        .with(
            "jump",
            MethodDefinition::new(
                Documentation::new("Jump to a different part of the code")
                    .typed_param("line", "The line to go to", "number"),
                |ctx, args| {
                    let [line] = fixed_args::<1>(args)?;
                    let target = ctx.resolve(line);
                    ctx.jump_to(&target)
                },
            ),
        )
}
