//! Tests for the full compile pass: graph validation, command assembly, and
//! the compiler-stage error taxonomy.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_compiles_simple_chain() {
    let script = compile_project(simple_project()).expect("Failed to compile");

    assert_eq!(script.id, 1);
    assert_eq!(script.commands.len(), 1);

    let command = &script.commands[0];
    assert_eq!(command.on_event, "TimerEvent");
    assert_eq!(command.exe, vec!["RelayAction", "LedAction"]);
}

#[test]
fn test_root_is_excluded_from_its_own_chain() {
    let script = compile_project(simple_project()).expect("Failed to compile");
    let command = &script.commands[0];
    assert!(!command.exe.contains(&command.on_event));
}

#[test]
fn test_metadata_id_overrides_type_tag() {
    let mut project = simple_project();
    project.nodes[0] = node_with_id("TimerEvent", "evt-1", "morning-timer");
    project.nodes[1] = node_with_id("RelayAction", "act-1", "pump-relay");

    let script = compile_project(project).expect("Failed to compile");

    let command = &script.commands[0];
    assert_eq!(command.on_event, "morning-timer");
    assert_eq!(command.exe, vec!["pump-relay", "LedAction"]);
}

#[test]
fn test_graph_without_connections_compiles_to_zero_commands() {
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1"), node("RelayAction", "act-1")],
        connections: vec![],
    };

    let script = compile_project(project).expect("Failed to compile");
    assert!(script.commands.is_empty());
}

#[test]
fn test_control_only_graph_compiles_to_zero_commands() {
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1"), node("RelayAction", "act-1")],
        connections: vec![conn("evt-1", "::Ex Out", "act-1", "::Ex In")],
    };

    let script = compile_project(project).expect("Failed to compile");
    assert!(script.commands.is_empty());
}

#[test]
fn test_two_roots_produce_two_commands_in_root_order() {
    let script = compile_project(two_root_project()).expect("Failed to compile");

    assert_eq!(script.commands.len(), 2);
    assert_eq!(script.commands[0].on_event, "TimerEvent");
    assert_eq!(script.commands[0].exe, vec!["RelayAction"]);
    assert_eq!(script.commands[1].on_event, "ButtonEvent");
    assert_eq!(script.commands[1].exe, vec!["BuzzerAction"]);
}

#[test]
fn test_compilation_is_idempotent() {
    let first = compile_project(simple_project()).expect("Failed to compile");
    let second = compile_project(simple_project()).expect("Failed to compile");

    assert_eq!(
        first.to_json_string().unwrap(),
        second.to_json_string().unwrap()
    );
}

#[test]
fn test_shared_child_fails_with_multiple_parents() {
    let project = Project {
        nodes: vec![
            node("TimerEvent", "evt-1"),
            node("ButtonEvent", "evt-2"),
            node("RelayAction", "shared"),
        ],
        connections: vec![
            conn("evt-1", "Fired", "shared", "State"),
            conn("evt-2", "Pressed", "shared", "State"),
        ],
    };

    assert!(matches!(
        compile_project(project),
        Err(CompileError::MultipleParents { .. })
    ));
}

#[test]
fn test_cyclic_graph_fails_with_cyclic_graph() {
    let project = Project {
        nodes: vec![node("RelayAction", "act-1"), node("LedAction", "act-2")],
        connections: vec![
            conn("act-1", "Done", "act-2", "Color"),
            conn("act-2", "Done", "act-1", "State"),
        ],
    };

    assert!(matches!(
        compile_project(project),
        Err(CompileError::CyclicGraph { .. })
    ));
}

#[test]
fn test_project_id_is_stamped_into_script() {
    let graph = simple_project()
        .resolve(&registry())
        .expect("Failed to resolve");
    let script = Compiler::builder(graph)
        .project_id(42)
        .build()
        .compile()
        .expect("Failed to compile");

    assert_eq!(script.id, 42);
}

#[test]
fn test_dangling_connection_is_rejected_at_resolve() {
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1")],
        connections: vec![conn("evt-1", "Fired", "missing", "State")],
    };

    match project.resolve(&registry()) {
        Err(GraphError::UnknownNode { uuid }) => assert_eq!(uuid, "missing"),
        other => panic!("Expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn test_undeclared_pin_is_rejected_at_resolve() {
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1"), node("RelayAction", "act-1")],
        connections: vec![conn("evt-1", "NoSuchPin", "act-1", "State")],
    };

    match project.resolve(&registry()) {
        Err(GraphError::UnknownPin { uuid, pin }) => {
            assert_eq!(uuid, "evt-1");
            assert_eq!(pin, "NoSuchPin");
        }
        other => panic!("Expected UnknownPin, got {other:?}"),
    }
}

#[test]
fn test_unregistered_type_tag_is_rejected_at_resolve() {
    let project = Project {
        nodes: vec![node("TeleporterAction", "act-1")],
        connections: vec![],
    };

    match project.resolve(&registry()) {
        Err(GraphError::UnknownNodeType { uuid, type_tag }) => {
            assert_eq!(uuid, "act-1");
            assert_eq!(type_tag, "TeleporterAction");
        }
        other => panic!("Expected UnknownNodeType, got {other:?}"),
    }
}

#[test]
fn test_duplicate_uuid_is_rejected_at_resolve() {
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1"), node("ButtonEvent", "evt-1")],
        connections: vec![],
    };

    assert!(matches!(
        project.resolve(&registry()),
        Err(GraphError::DuplicateUuid { .. })
    ));
}

#[test]
fn test_custom_device_kind_is_resolvable() {
    let registry = KindRegistry::with_defaults().with_device("GreenhouseFan");
    let project = Project {
        nodes: vec![node("TimerEvent", "evt-1"), node("GreenhouseFan", "fan-1")],
        connections: vec![conn("evt-1", "Fired", "fan-1", "State")],
    };

    let graph = project.resolve(&registry).expect("Failed to resolve");
    let script = Compiler::builder(graph)
        .build()
        .compile()
        .expect("Failed to compile");

    assert_eq!(script.commands[0].exe, vec!["GreenhouseFan"]);
}
