//! The compiled command script: output entities and their serialized forms.

mod artifact;
mod command;

pub use command::{Command, Script};
