use crate::error::{CompileError, GraphError};
use crate::graph::SemanticIds;
use crate::script::Command;

use super::forest::{Forest, Tree};
use super::links::{LinkResolution, ShortId};

/// Linearizes the forest into one command per root.
///
/// Each root contributes `{on_event, exe}`: `on_event` is the root's own
/// semantic identifier, and `exe` is the pre-order walk of its descendants.
/// The root is excluded from its own `exe` list; the chain holds only the
/// actions the event triggers. Commands preserve root order.
pub fn assemble_commands(
    ids: &SemanticIds,
    resolution: &LinkResolution,
    forest: &Forest,
) -> Result<Vec<Command>, CompileError> {
    let mut commands = Vec::with_capacity(forest.trees.len());

    for tree in &forest.trees {
        let on_event = semantic_of(tree.id, ids, resolution)?;
        let mut exe = Vec::new();
        for child in &tree.children {
            walk(child, ids, resolution, &mut exe)?;
        }
        commands.push(Command { on_event, exe });
    }

    Ok(commands)
}

fn walk(
    tree: &Tree,
    ids: &SemanticIds,
    resolution: &LinkResolution,
    exe: &mut Vec<String>,
) -> Result<(), CompileError> {
    exe.push(semantic_of(tree.id, ids, resolution)?);
    for child in &tree.children {
        walk(child, ids, resolution, exe)?;
    }
    Ok(())
}

/// Translates a short id back to the node's semantic identifier via the
/// pass's bijection and the caller-supplied uuid map.
fn semantic_of(
    id: ShortId,
    ids: &SemanticIds,
    resolution: &LinkResolution,
) -> Result<String, CompileError> {
    let uuid = resolution
        .ids
        .uuid_of(id)
        .ok_or_else(|| GraphError::UnknownNode {
            uuid: id.to_string(),
        })?;
    let semantic = ids.get(uuid).ok_or_else(|| GraphError::UnknownNode {
        uuid: uuid.to_string(),
    })?;
    Ok(semantic.clone())
}
