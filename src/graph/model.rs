use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{GraphError, ScriptError};
use crate::kinds::KindRegistry;

/// Map from a node's uuid to its semantic identifier, as emitted in compiled
/// commands: `metadata.id` when present, the type tag otherwise.
pub type SemanticIds = AHashMap<String, String>;

/// A single node as persisted by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub x: f64,
    pub y: f64,
    pub uuid: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, Value>,
}

impl Node {
    /// The identifier this node contributes to compiled commands.
    ///
    /// A string `metadata.id` overrides the type tag; a non-string `id` is
    /// ignored rather than stringified.
    pub fn semantic_id(&self) -> &str {
        self.metadata
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(&self.type_tag)
    }
}

/// A directed edge at serialization time: output pin of `start` feeds an
/// input pin of `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub start_uuid: String,
    pub end_uuid: String,
    pub start_pin: String,
    pub end_pin: String,
}

/// The raw project document, exactly as saved by the editor. Node and
/// connection order is preserved through load and save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl Project {
    /// Loads a project document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScriptError::DecodeFailure {
            path: path.display().to_string(),
            source,
        })
    }

    /// Writes the project as indented JSON, preserving node and connection
    /// order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .map_err(|source| ScriptError::EncodeFailure { source })?;
        fs::write(path, content).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })
    }

    /// Validates the document against a kind catalog and produces the graph
    /// the compiler consumes.
    ///
    /// Checks performed here: uuids are unique, every node's type tag
    /// resolves to a registered kind, and every connection endpoint names an
    /// existing node and a pin that node's kind declares. Nothing else; type
    /// legality beyond registration is the editor's concern.
    pub fn resolve(self, registry: &KindRegistry) -> Result<Graph, GraphError> {
        let mut kinds_by_uuid = AHashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let kind = registry.resolve(&node.type_tag).ok_or_else(|| {
                GraphError::UnknownNodeType {
                    uuid: node.uuid.clone(),
                    type_tag: node.type_tag.clone(),
                }
            })?;
            if kinds_by_uuid.insert(node.uuid.clone(), kind).is_some() {
                return Err(GraphError::DuplicateUuid {
                    uuid: node.uuid.clone(),
                });
            }
        }

        for conn in &self.connections {
            for (uuid, pin) in [
                (&conn.start_uuid, &conn.start_pin),
                (&conn.end_uuid, &conn.end_pin),
            ] {
                let kind = kinds_by_uuid
                    .get(uuid)
                    .ok_or_else(|| GraphError::UnknownNode { uuid: uuid.clone() })?;
                if kind.pin(pin).is_none() {
                    return Err(GraphError::UnknownPin {
                        uuid: uuid.clone(),
                        pin: pin.clone(),
                    });
                }
            }
        }

        Ok(Graph {
            nodes: self.nodes,
            connections: self.connections,
        })
    }
}

/// A validated project graph. Immutable for the duration of a compile pass.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl Graph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Builds the uuid -> semantic identifier map for command assembly.
    pub fn semantic_ids(&self) -> SemanticIds {
        self.nodes
            .iter()
            .map(|n| (n.uuid.clone(), n.semantic_id().to_string()))
            .collect()
    }

    /// Hands the underlying document back, e.g. for re-saving.
    pub fn into_project(self) -> Project {
        Project {
            nodes: self.nodes,
            connections: self.connections,
        }
    }
}
