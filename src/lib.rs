//! # Keiro - Execution-Forest Compiler for IoT Automation Graphs
//!
//! **Keiro** compiles the node graphs of a visual IoT automation editor into
//! flat, ordered command scripts an external IoT runtime can execute. The
//! editor persists a graph of typed nodes (events, actions, logic, device
//! operations) wired together by pins; keiro resolves those connections into
//! canonical dependency links, grows a forest of execution chains rooted at
//! trigger nodes, and emits one command per root.
//!
//! ## Core Workflow
//!
//! 1. **Load**: Parse the editor's project JSON into a [`graph::Project`].
//! 2. **Resolve**: Validate it against a [`kinds::KindRegistry`] to get a
//!    [`graph::Graph`]. Unknown type tags, dangling uuids, and undeclared pin
//!    names are rejected here, before the compiler runs.
//! 3. **Compile**: Run [`compiler::Compiler`] over the graph. The pass is
//!    synchronous and allocation-bounded by graph size; cyclic or ambiguous
//!    graphs abort with a terminal error rather than guessing.
//! 4. **Serialize**: Write the resulting [`script::Script`] as indented JSON
//!    (or a compact binary artifact) for the runtime.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> keiro::prelude::Result<()> {
//!     // 1. Load the project saved by the editor.
//!     let project = Project::from_file("projects/greenhouse.json")?;
//!
//!     // 2. Resolve it against the node kind catalog.
//!     let registry = KindRegistry::with_defaults().with_device("FanRelay");
//!     let graph = project.resolve(&registry)?;
//!
//!     // 3. Compile into an execution script.
//!     let script = Compiler::builder(graph).project_id(7).build().compile()?;
//!
//!     for command in &script.commands {
//!         println!("{command}");
//!     }
//!
//!     // 4. Hand the script to the runtime.
//!     script.save("projects/greenhouse.exec.json")?;
//!     Ok(())
//! }
//! ```
//!
//! The three compiler stages are also exposed as pure entry points
//! ([`compiler::resolve_links`], [`compiler::build_forest`],
//! [`compiler::assemble_commands`]) for collaborators that need only one of
//! them, e.g. an editor panel that previews the forest without assembling
//! commands.

pub mod compiler;
pub mod error;
pub mod graph;
pub mod kinds;
pub mod prelude;
pub mod script;
