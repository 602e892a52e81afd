use super::*;
use crate::Documentation;
use pretty_assertions::assert_eq;

fn noop(summary: &str) -> MethodDefinition {
    MethodDefinition::new(Documentation::new(summary), |_, _| Ok(()))
}

#[test]
fn stock_registry_has_every_library_method() {
    let registry = MethodRegistry::stock();
    let names: Vec<&str> = registry.sorted().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "add", "alloc", "div", "dump", "eq", "flush", "goto", "gre", "greoe", "heapsize",
            "jump", "les", "lesoe", "mul", "print", "read", "set", "sub", "write",
        ]
    );
}

#[test]
fn later_groups_override_earlier_ones() {
    let first = MethodGroup::new("first").with("x", noop("first"));
    let second = MethodGroup::new("second").with("x", noop("second"));
    let registry = MethodRegistry::merge([first, second]);
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("x").map(|m| m.documentation.summary.as_str()),
        Some("second")
    );
}

#[test]
fn extend_adds_to_existing_registry() {
    let mut registry = MethodRegistry::stock();
    let before = registry.len();
    registry.extend(MethodGroup::new("extra").with("nop", noop("does nothing")));
    assert_eq!(registry.len(), before + 1);
    assert!(registry.contains("nop"));
}

#[test]
fn clones_are_independent() {
    let original = MethodRegistry::stock();
    let mut copy = original.clone();
    copy.insert("nop", noop("does nothing"));
    assert!(copy.contains("nop"));
    assert!(!original.contains("nop"));
}

#[test]
fn empty_registry() {
    let registry = MethodRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get("set").is_none());
}

#[test]
fn group_metadata() {
    let group = MethodGroup::new("misc").with("a", noop("a"));
    assert_eq!(group.name(), "misc");
    assert_eq!(group.len(), 1);
    assert!(!group.is_empty());
}
