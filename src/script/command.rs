use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One compiled trigger: the event identifier and the ordered action chain
/// to run when it fires. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub on_event: String,
    pub exe: Vec<String>,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [{}]", self.on_event, self.exe.iter().join(", "))
    }
}

/// The compiled output document handed to the IoT runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub id: i64,
    pub commands: Vec<Command>,
}

impl Script {
    pub fn new(id: i64, commands: Vec<Command>) -> Self {
        Self { id, commands }
    }
}
