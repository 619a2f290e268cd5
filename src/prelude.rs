//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so callers can reach the whole
//! load -> resolve -> compile -> serialize pipeline with a single import.

// Core compilation pipeline
pub use crate::compiler::{
    Compiler, Forest, Link, LinkResolution, ShortId, assemble_commands, build_forest,
    resolve_links,
};

// Graph model
pub use crate::graph::{Connection, Graph, Node, PinSpec, Project, is_execution_pin};

// Node kind catalog
pub use crate::kinds::{KindRegistry, KindRole, NodeKind};

// Output entities
pub use crate::script::{Command, Script};

// Error types
pub use crate::error::{CompileError, GraphError, ScriptError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
