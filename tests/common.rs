//! Common test utilities for building project graphs.
use keiro::prelude::*;
use serde_json::{Map, Value, json};

/// Creates a node with the given type tag and uuid and no metadata.
#[allow(dead_code)]
pub fn node(type_tag: &str, uuid: &str) -> Node {
    Node {
        type_tag: type_tag.to_string(),
        x: 0.0,
        y: 0.0,
        uuid: uuid.to_string(),
        value: Value::Null,
        metadata: Map::new(),
    }
}

/// Creates a node whose `metadata.id` overrides its type tag in compiled
/// commands.
#[allow(dead_code)]
pub fn node_with_id(type_tag: &str, uuid: &str, semantic_id: &str) -> Node {
    let mut n = node(type_tag, uuid);
    n.metadata.insert("id".to_string(), json!(semantic_id));
    n
}

/// Creates a connection from `start`'s output pin to `end`'s input pin.
#[allow(dead_code)]
pub fn conn(start: &str, start_pin: &str, end: &str, end_pin: &str) -> Connection {
    Connection {
        start_uuid: start.to_string(),
        end_uuid: end.to_string(),
        start_pin: start_pin.to_string(),
        end_pin: end_pin.to_string(),
    }
}

/// A simple three-node chain: a timer event feeding two chained actions.
///
/// Logic: `TimerEvent.Fired -> RelayAction.State`, `RelayAction.Done ->
/// LedAction.Color`. One root, `exe` of length two.
#[allow(dead_code)]
pub fn simple_project() -> Project {
    Project {
        nodes: vec![
            node("TimerEvent", "evt-1"),
            node("RelayAction", "act-1"),
            node("LedAction", "act-2"),
        ],
        connections: vec![
            conn("evt-1", "Fired", "act-1", "State"),
            conn("act-1", "Done", "act-2", "Color"),
        ],
    }
}

/// A project with two independent event chains.
#[allow(dead_code)]
pub fn two_root_project() -> Project {
    Project {
        nodes: vec![
            node("TimerEvent", "evt-1"),
            node("RelayAction", "act-1"),
            node("ButtonEvent", "evt-2"),
            node("BuzzerAction", "act-2"),
        ],
        connections: vec![
            conn("evt-1", "Fired", "act-1", "State"),
            conn("evt-2", "Pressed", "act-2", "Pattern"),
        ],
    }
}

/// The default kind catalog used across tests.
#[allow(dead_code)]
pub fn registry() -> KindRegistry {
    KindRegistry::with_defaults()
}

/// Resolves and compiles a project in one step, with the default catalog.
#[allow(dead_code)]
pub fn compile_project(project: Project) -> std::result::Result<Script, CompileError> {
    let graph = project
        .resolve(&registry())
        .map_err(CompileError::MalformedGraph)?;
    Compiler::builder(graph).build().compile()
}
