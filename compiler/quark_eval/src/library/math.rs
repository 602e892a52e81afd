//! Arithmetic and comparison. Every method writes its result to a variable.

use crate::{fixed_args, Documentation, MethodDefinition, MethodGroup, Value};

fn operation_doc(verb: &str, noun: &str) -> Documentation {
    Documentation::new(format!("{verb} two numbers and writes it to a variable"))
        .typed_param("lhs", format!("The left hand side of the {noun}"), "number")
        .typed_param("rhs", format!("The right hand side of the {noun}"), "number")
        .param("varname", "The variable to write the result to")
}

fn comparison_doc(relation: &str) -> Documentation {
    Documentation::new(format!(
        "Compares if the left hand side is {relation} the right hand side"
    ))
    .typed_param("lhs", "The left hand side of the comparison", "number")
    .typed_param("rhs", "The right hand side of the comparison", "number")
    .param(
        "varname",
        "The variable to write the comparison to (either 0 or 1)",
    )
}

fn operation(verb: &str, noun: &str, op: fn(f64, f64) -> f64) -> MethodDefinition {
    MethodDefinition::new(operation_doc(verb, noun), move |ctx, args| {
        let [lhs, rhs, target] = fixed_args::<3>(args)?;
        let result = op(ctx.resolve(lhs).as_number(), ctx.resolve(rhs).as_number());
        ctx.assign(target, Value::Number(result))
    })
}

fn comparison(relation: &str, test: fn(f64, f64) -> bool) -> MethodDefinition {
    MethodDefinition::new(comparison_doc(relation), move |ctx, args| {
        let [lhs, rhs, target] = fixed_args::<3>(args)?;
        let holds = test(ctx.resolve(lhs).as_number(), ctx.resolve(rhs).as_number());
        ctx.assign(target, Value::from(holds))
    })
}

pub fn math() -> MethodGroup {
    MethodGroup::new("math")
        .with("add", operation("Adds", "addition", |l, r| l + r))
        .with("sub", operation("Subtracts", "subtraction", |l, r| l - r))
        .with("mul", operation("Multiplies", "product", |l, r| l * r))
        .with("div", operation("Divides", "division", |l, r| l / r))
        .with("les", comparison("lesser than", |l, r| l < r))
        .with("gre", comparison("greater than", |l, r| l > r))
        .with("lesoe", comparison("lesser than or equal to", |l, r| l <= r))
        .with("greoe", comparison("greater than or equal to", |l, r| l >= r))
        .with(
            "eq",
            // Loose equality on values, not numbers: strings compare as text.
            MethodDefinition::new(comparison_doc("equal to"), |ctx, args| {
                let [lhs, rhs, target] = fixed_args::<3>(args)?;
                let equal = ctx.resolve(lhs).loose_eq(&ctx.resolve(rhs));
                ctx.assign(target, Value::from(equal))
            }),
        )
}
