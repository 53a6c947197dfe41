use super::*;
use crate::context::{ConnectedParseContext, DisconnectedParseContext};
use crate::model::{STATUS_INTEGRATION, STATUS_RELEASE};
use crate::resolver::StaticResolver;
use chrono::Utc;

fn coord(s: &str) -> ModuleCoordinate {
    s.parse().unwrap()
}

fn child(status: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(coord("org.example:lib:1.0"), status, Utc::now())
}

fn parent_directive() -> ExtendsDirective {
    ExtendsDirective::new(coord("org.example:parent:2.0"))
}

fn connected_with(parent: ModuleDescriptor) -> ConnectedParseContext<StaticResolver> {
    let mut resolver = StaticResolver::new();
    resolver.insert_descriptor(parent);
    ConnectedParseContext::new(resolver, coord("org.example:lib:1.0"), STATUS_INTEGRATION)
}

fn connected() -> ConnectedParseContext<StaticResolver> {
    connected_with(
        ModuleDescriptor::new(coord("org.example:parent:2.0"), STATUS_RELEASE, Utc::now())
            .with_dependency(coord("org.example:core:1.4"))
            .with_dependency(coord("org.example:util:0.9")),
    )
}

#[test]
fn test_extends_inherits_parent_dependencies_first() {
    let ctx = connected();
    let child = child(STATUS_INTEGRATION).with_dependency(coord("org.example:extra:3.0"));

    let merged = apply_extends(&ctx, child, &parent_directive()).unwrap();

    let deps: Vec<String> = merged.dependencies.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        deps,
        vec![
            "org.example:core:1.4",
            "org.example:util:0.9",
            "org.example:extra:3.0"
        ]
    );
}

#[test]
fn test_extends_skips_duplicate_dependencies() {
    let ctx = connected();
    let child = child(STATUS_INTEGRATION).with_dependency(coord("org.example:core:1.4"));

    let merged = apply_extends(&ctx, child, &parent_directive()).unwrap();

    assert_eq!(merged.dependencies.len(), 2);
    assert_eq!(merged.dependencies[0], coord("org.example:util:0.9"));
}

#[test]
fn test_extends_parent_repeating_a_dependency_inherits_it_once() {
    let ctx = connected_with(
        ModuleDescriptor::new(coord("org.example:parent:2.0"), STATUS_RELEASE, Utc::now())
            .with_dependency(coord("org.example:core:1.4"))
            .with_dependency(coord("org.example:util:0.9"))
            .with_dependency(coord("org.example:core:1.4")),
    );
    let child = child(STATUS_INTEGRATION).with_dependency(coord("org.example:extra:3.0"));

    let merged = apply_extends(&ctx, child, &parent_directive()).unwrap();

    assert_eq!(
        merged.dependencies,
        vec![
            coord("org.example:core:1.4"),
            coord("org.example:util:0.9"),
            coord("org.example:extra:3.0"),
        ]
    );
}

#[test]
fn test_extends_scope_limits_inheritance() {
    let ctx = connected();
    let directive = parent_directive().with_scope(InheritScope {
        dependencies: false,
        status: true,
    });

    let merged = apply_extends(&ctx, child(""), &directive).unwrap();
    assert!(merged.dependencies.is_empty());
    assert_eq!(merged.status, STATUS_RELEASE);
}

#[test]
fn test_extends_keeps_child_status() {
    let ctx = connected();

    let merged = apply_extends(&ctx, child(STATUS_INTEGRATION), &parent_directive()).unwrap();
    assert_eq!(merged.status, STATUS_INTEGRATION);
}

#[test]
fn test_extends_missing_parent_propagates() {
    let ctx = connected();
    let directive = ExtendsDirective::new(coord("org.example:missing:1.0"));

    let err = apply_extends(&ctx, child(STATUS_INTEGRATION), &directive).unwrap_err();
    assert!(matches!(err, ContextError::Parse { .. }));
}

#[test]
fn test_extends_disconnected_degrades() {
    let ctx = DisconnectedParseContext::new(STATUS_RELEASE);
    let child = child("").with_dependency(coord("org.example:extra:3.0"));

    let merged = apply_extends(&ctx, child, &parent_directive()).unwrap();

    assert_eq!(merged.dependencies, vec![coord("org.example:extra:3.0")]);
    assert_eq!(merged.status, STATUS_RELEASE);
}

#[test]
fn test_describe_self() {
    assert_eq!(
        describe_self(&connected()).unwrap(),
        Some(coord("org.example:lib:1.0"))
    );
    assert_eq!(
        describe_self(&DisconnectedParseContext::default()).unwrap(),
        None
    );
}

#[test]
fn test_inherit_scope_default() {
    assert_eq!(InheritScope::default(), InheritScope::ALL);
    assert!(ExtendsDirective::new(coord("a:b:c")).inherit.dependencies);
}
