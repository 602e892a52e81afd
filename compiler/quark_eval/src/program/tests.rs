#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn resolve(source: &str) -> Program {
    Program::resolve(source, &MethodRegistry::stock())
}

fn instruction(step: &Step) -> &Instruction {
    match step {
        Step::Instruction(instr) => instr,
        Step::Noop => panic!("expected an instruction, got a no-op"),
    }
}

#[test]
fn one_step_per_line() {
    let program = resolve("set x 1\n\n# comment\nprint x");
    assert_eq!(program.len(), 4);
    assert!(!program.has_errors());
    assert_eq!(program.steps()[1], Step::Noop);
    assert_eq!(program.steps()[2], Step::Noop);
    assert_eq!(program.instructions().count(), 2);
}

#[test]
fn operands_are_classified() {
    let program = resolve("set x \"hello world\"\nadd 1 2.5 y");
    let set = instruction(program.step(1).unwrap());
    assert_eq!(set.name(), "set");
    assert_eq!(
        set.args(),
        [Operand::Var("x".into()), Operand::Str("hello world".into())]
    );
    let add = instruction(program.step(2).unwrap());
    assert_eq!(
        add.args(),
        [
            Operand::Number(1.0),
            Operand::Number(2.5),
            Operand::Var("y".into())
        ]
    );
}

#[test]
fn step_is_one_based() {
    let program = resolve("flush");
    assert!(program.step(0).is_none());
    assert!(program.step(1).is_some());
    assert!(program.step(2).is_none());
}

#[test]
fn undefined_instruction_is_reported() {
    let program = resolve("foo 1 2");
    assert_eq!(
        program.errors(),
        [ParseError::UndefinedInstruction {
            name: "foo".into(),
            line: 1
        }]
    );
    assert_eq!(program.steps(), [Step::Noop]);
}

#[test]
fn line_with_only_punctuation_names_no_method() {
    let program = resolve("+++");
    assert_eq!(
        program.errors(),
        [ParseError::UndefinedInstruction {
            name: String::new(),
            line: 1
        }]
    );
}

#[test]
fn argument_count_is_checked() {
    let program = resolve("set x");
    assert_eq!(
        program.errors(),
        [ParseError::ArgumentCount {
            name: "set".into(),
            line: 1,
            found: 1,
            expected: 2
        }]
    );
}

#[test]
fn all_errors_are_collected_in_line_order() {
    let program = resolve("foo\nset x 1\nadd 1 2\nbar");
    let lines: Vec<usize> = program.errors().iter().map(ParseError::line).collect();
    assert_eq!(lines, [1, 3, 4]);
    assert_eq!(program.instructions().count(), 1);
}

#[test]
fn greedy_string_swallows_following_arguments() {
    // Both quoted arguments become one token, leaving `eq` short.
    let program = resolve("eq \"a\" \"b\" r");
    assert_eq!(
        program.errors(),
        [ParseError::ArgumentCount {
            name: "eq".into(),
            line: 1,
            found: 2,
            expected: 3
        }]
    );
}

#[test]
fn crlf_line_endings_resolve_like_lf() {
    assert_eq!(resolve("set x 1\r\nprint x\r\n"), resolve("set x 1\nprint x\n"));
}

#[test]
fn resolving_does_not_require_defined_variables() {
    let program = resolve("print later\nset later 1");
    assert!(!program.has_errors());
}

#[test]
fn unparsable_argument_suppresses_instruction() {
    let mut errors = Vec::new();
    assert_eq!(resolve_args(&["x", "x-1"], 7, &mut errors), None);
    assert_eq!(
        errors,
        [ParseError::UnparsableToken {
            token: "x-1".into(),
            line: 7
        }]
    );
}

#[test]
fn every_unparsable_argument_is_reported() {
    let mut errors = Vec::new();
    assert_eq!(resolve_args(&["a1", "2", "\"\""], 3, &mut errors), None);
    let tokens: Vec<&str> = errors
        .iter()
        .map(|e| match e {
            ParseError::UnparsableToken { token, .. } => token.as_str(),
            other => panic!("unexpected error {other:?}"),
        })
        .collect();
    assert_eq!(tokens, ["a1", "\"\""]);
}

#[test]
fn parsable_arguments_are_classified_in_order() {
    let mut errors = Vec::new();
    let args = resolve_args(&["x", "1.5", "\"s\""], 1, &mut errors).unwrap();
    assert!(errors.is_empty());
    assert_eq!(
        args.as_slice(),
        [
            Operand::Var("x".into()),
            Operand::Number(1.5),
            Operand::Str("s".into())
        ]
    );
}

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("# note".to_string()),
        Just("flush".to_string()),
        Just("foo 1".to_string()),
        "[a-z]{1,3}",
        ("[a-z]{1,4}", 0u32..100).prop_map(|(v, n)| format!("set {v} {n}")),
        ("[a-z]{1,4}", "[a-z]{1,4}").prop_map(|(a, b)| format!("add {a} {b} r")),
        (0u32..3, 1u32..10).prop_map(|(c, l)| format!("goto {c} {l}")),
    ]
}

proptest! {
    #[test]
    fn resolution_is_deterministic(lines in prop::collection::vec(source_line(), 0..12)) {
        let source = lines.join("\n");
        prop_assert_eq!(resolve(&source), resolve(&source));
    }

    #[test]
    fn line_count_matches_source(lines in prop::collection::vec(source_line(), 1..12)) {
        let source = lines.join("\n");
        prop_assert_eq!(resolve(&source).len(), lines.len());
    }

    #[test]
    fn errors_and_instructions_partition_code_lines(
        lines in prop::collection::vec(source_line(), 0..12)
    ) {
        let source = lines.join("\n");
        let program = resolve(&source);
        let code = lines.iter().filter(|l| !l.is_empty() && !l.starts_with('#')).count();
        prop_assert_eq!(program.errors().len() + program.instructions().count(), code);
    }

    #[test]
    fn wrong_argument_counts_are_rejected(extra in 1usize..4, fewer in prop::bool::ANY) {
        let registry = MethodRegistry::stock();
        for (name, method) in registry.sorted() {
            let arity = method.arity();
            let count = if fewer { arity.saturating_sub(1) } else { arity + extra };
            if count == arity {
                continue;
            }
            let args = vec!["x"; count].join(" ");
            let program = Program::resolve(&format!("{name} {args}"), &registry);
            let expected = ParseError::ArgumentCount {
                name: name.to_string(),
                line: 1,
                found: count,
                expected: arity,
            };
            prop_assert_eq!(program.errors(), [expected]);
        }
    }
}
