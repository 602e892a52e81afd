use super::*;
use crate::{buffer_handler, DEFAULT_HEAP_LIMIT};
use pretty_assertions::assert_eq;

fn context() -> Context {
    Context::new(MethodRegistry::stock(), buffer_handler(), DEFAULT_HEAP_LIMIT)
}

fn var(name: &str) -> Operand {
    Operand::Var(name.to_string())
}

#[test]
fn literals_resolve_to_themselves() {
    let ctx = context();
    assert_eq!(ctx.resolve(&Operand::Number(2.5)), Value::Number(2.5));
    assert_eq!(ctx.resolve(&Operand::Str("hi".into())), Value::from("hi"));
}

#[test]
fn undefined_variable_resolves_to_empty() {
    let ctx = context();
    assert_eq!(ctx.resolve(&var("nope")), Value::Empty);
    assert_eq!(ctx.variable("nope"), None);
}

#[test]
fn write_variable_copies_current_value() {
    let mut ctx = context();
    ctx.set_variable("a", Value::Number(1.0));
    assert_eq!(ctx.write_variable(&var("b"), &var("a")), Ok(()));
    ctx.set_variable("a", Value::Number(2.0));
    assert_eq!(ctx.variable("b"), Some(&Value::Number(1.0)));
}

#[test]
fn assign_to_literal_is_rejected() {
    let mut ctx = context();
    assert_eq!(
        ctx.assign(&Operand::Str("x".into()), Value::Empty),
        Err(RuntimeError::InvalidTarget {
            target: "\"x\"".into()
        })
    );
}

#[test]
fn heap_write_extends_heap() {
    let mut ctx = context();
    assert_eq!(ctx.heap_write(3, Value::from("x")), Ok(()));
    assert_eq!(ctx.heap_size(), 4);
    assert_eq!(ctx.heap_read(0), Value::Empty);
    assert_eq!(ctx.heap_read(3), Value::from("x"));
    assert_eq!(ctx.heap_read(100), Value::Empty);
}

#[test]
fn heap_limit_applies_to_writes_and_growth() {
    let mut ctx = Context::new(MethodRegistry::new(), buffer_handler(), 2);
    assert_eq!(ctx.grow(2), Ok(()));
    assert_eq!(
        ctx.grow(1),
        Err(RuntimeError::HeapLimitExceeded {
            requested: 3,
            limit: 2
        })
    );
    assert_eq!(
        ctx.heap_write(2, Value::Empty),
        Err(RuntimeError::HeapLimitExceeded {
            requested: 3,
            limit: 2
        })
    );
    assert_eq!(ctx.heap_size(), 2);
}

#[test]
fn address_requires_non_negative_integer() {
    let mut ctx = context();
    ctx.set_variable("i", Value::Number(4.0));
    assert_eq!(ctx.address(&var("i")), Ok(4));
    assert_eq!(
        ctx.address(&Operand::Number(0.5)),
        Err(RuntimeError::InvalidAddress {
            address: "0.5".into()
        })
    );
    assert_eq!(
        ctx.address(&var("missing")),
        Err(RuntimeError::InvalidAddress {
            address: String::new()
        })
    );
}

#[test]
fn flush_hands_log_to_print_handler() {
    let mut ctx = context();
    ctx.append("a");
    ctx.append("b");
    assert_eq!(ctx.log(), "ab");
    ctx.flush();
    assert_eq!(ctx.log(), "");
    assert_eq!(ctx.print_handler().output(), "ab\n");
}

#[test]
fn jump_to_sets_counter_one_before_target() {
    let mut ctx = context();
    assert_eq!(ctx.jump_to(&Value::Number(5.0)), Ok(()));
    assert_eq!(ctx.counter(), 4);
    assert_eq!(ctx.jump_to(&Value::from("1")), Ok(()));
    assert_eq!(ctx.counter(), 0);
}

#[test]
fn jump_to_rejects_invalid_lines() {
    let mut ctx = context();
    for bad in [
        Value::Number(0.0),
        Value::Number(-2.0),
        Value::Number(1.5),
        Value::Empty,
    ] {
        assert!(matches!(
            ctx.jump_to(&bad),
            Err(RuntimeError::InvalidJumpTarget { .. })
        ));
    }
    assert_eq!(ctx.counter(), 1);
}

#[test]
fn dump_lists_variables_in_name_order() {
    let mut ctx = context();
    ctx.set_variable("z", Value::Number(1.0));
    ctx.set_variable("a", Value::Empty);
    assert_eq!(
        ctx.dump(),
        "counter: 1\nvariables:\n  a = Empty\n  z = Number(1.0)\nheap: []\nlogs: \"\""
    );
}
