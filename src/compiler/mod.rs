//! The execution-forest compiler: connections -> links -> forest -> commands.
//!
//! The three stages are exposed as pure entry points ([`resolve_links`],
//! [`build_forest`], [`assemble_commands`]) for collaborators that need one
//! of them in isolation; [`Compiler`] composes them into a single synchronous
//! pass over an immutable graph snapshot.

mod assemble;
mod forest;
mod links;

pub use assemble::assemble_commands;
pub use forest::{Forest, Tree, build_forest};
pub use links::{Link, LinkResolution, SHORT_ID_LIMIT, ShortId, ShortIdMap, resolve_links};

use crate::error::CompileError;
use crate::graph::Graph;
use crate::script::Script;

/// Compiles a validated graph into a command script.
///
/// One compiler instance performs one pass and is consumed by it. Concurrent
/// passes over different graphs need no coordination; a pass never shares
/// mutable state.
pub struct Compiler {
    graph: Graph,
    project_id: i64,
}

pub struct CompilerBuilder {
    graph: Graph,
    project_id: i64,
}

impl CompilerBuilder {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            project_id: 1,
        }
    }

    /// Sets the project identifier stamped into the output script.
    pub fn project_id(mut self, id: i64) -> Self {
        self.project_id = id;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            project_id: self.project_id,
        }
    }
}

impl Compiler {
    pub fn builder(graph: Graph) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    /// Runs the full pass: resolve links, build the forest, assemble one
    /// command per event root.
    pub fn compile(self) -> Result<Script, CompileError> {
        tracing::info!(
            nodes = self.graph.nodes().len(),
            connections = self.graph.connections().len(),
            "starting compile pass"
        );

        let ids = self.graph.semantic_ids();

        let resolution = resolve_links(self.graph.connections())?;
        tracing::debug!(links = resolution.links.len(), "links resolved");

        let forest = build_forest(&resolution.links)?;
        tracing::debug!(roots = forest.trees.len(), "forest built");

        let commands = assemble_commands(&ids, &resolution, &forest)?;
        tracing::info!(commands = commands.len(), "compile pass finished");

        Ok(Script::new(self.project_id, commands))
    }
}
