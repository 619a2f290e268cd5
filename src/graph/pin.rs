/// Reserved name prefix marking a control/flow pin.
///
/// This prefix is part of the wire contract between the editor and the
/// compiler: pins are classified by name alone, never by catalog lookup.
pub const EXECUTION_PREFIX: &str = "::";

/// Whether a pin name denotes a control/flow pin rather than a data pin.
pub fn is_execution_pin(name: &str) -> bool {
    name.starts_with(EXECUTION_PREFIX)
}

/// A pin declared by a node kind. Pins are owned by their kind's node and
/// named uniquely within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinSpec {
    pub name: String,
    pub is_output: bool,
}

impl PinSpec {
    pub fn input(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_output: false,
        }
    }

    pub fn output(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_output: true,
        }
    }

    pub fn is_execution(&self) -> bool {
        is_execution_pin(&self.name)
    }
}
