//! The closed catalog of node kinds the editor can place on the canvas.
//!
//! Each kind maps a type tag to a descriptor with its behavioral role and
//! declared pins. The loader resolves every node against this catalog;
//! unresolved tags are a load-time error, not a compiler concern.

use ahash::AHashMap;

use crate::graph::PinSpec;

/// Behavioral class of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRole {
    /// A trigger; candidate root of an execution chain.
    Event,
    /// A device operation executed when its chain fires.
    Action,
    /// Combinational glue between events and actions.
    Logic,
}

/// Descriptor for one node kind: its type tag, role, and declared pins.
#[derive(Debug, Clone)]
pub struct NodeKind {
    tag: String,
    role: KindRole,
    pins: Vec<PinSpec>,
}

impl NodeKind {
    pub fn new(tag: &str, role: KindRole, pins: Vec<PinSpec>) -> Self {
        Self {
            tag: tag.to_string(),
            role,
            pins,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn role(&self) -> KindRole {
        self.role
    }

    pub fn pins(&self) -> &[PinSpec] {
        &self.pins
    }

    /// Looks up a declared pin by its exact name.
    pub fn pin(&self, name: &str) -> Option<&PinSpec> {
        self.pins.iter().find(|p| p.name == name)
    }
}

/// Master macro declaring the built-in kinds and their registration.
macro_rules! define_node_kinds {
    ( $( ($tag:expr, $role:expr, [ $( $pin:expr ),* $(,)? ]) ),* $(,)? ) => {
        fn register_default_kinds(kinds: &mut AHashMap<String, NodeKind>) {
            $(
                kinds.insert(
                    $tag.to_string(),
                    NodeKind::new($tag, $role, vec![ $( $pin ),* ]),
                );
            )*
        }
    };
}

define_node_kinds! {
    // Events
    ("TimerEvent", KindRole::Event, [
        PinSpec::output("::Ex Out"),
        PinSpec::output("Fired"),
    ]),
    ("ButtonEvent", KindRole::Event, [
        PinSpec::output("::Ex Out"),
        PinSpec::output("Pressed"),
    ]),
    ("SensorEvent", KindRole::Event, [
        PinSpec::output("::Ex Out"),
        PinSpec::output("Reading"),
    ]),

    // Logic
    ("AndGate", KindRole::Logic, [
        PinSpec::input("A"),
        PinSpec::input("B"),
        PinSpec::output("Out"),
    ]),
    ("OrGate", KindRole::Logic, [
        PinSpec::input("A"),
        PinSpec::input("B"),
        PinSpec::output("Out"),
    ]),
    ("NotGate", KindRole::Logic, [
        PinSpec::input("In"),
        PinSpec::output("Out"),
    ]),
    ("Branch", KindRole::Logic, [
        PinSpec::input("::Ex In"),
        PinSpec::input("Condition"),
        PinSpec::output("::True"),
        PinSpec::output("::False"),
    ]),

    // Actions
    ("RelayAction", KindRole::Action, [
        PinSpec::input("::Ex In"),
        PinSpec::output("::Ex Out"),
        PinSpec::input("State"),
        PinSpec::output("Done"),
    ]),
    ("LedAction", KindRole::Action, [
        PinSpec::input("::Ex In"),
        PinSpec::output("::Ex Out"),
        PinSpec::input("Color"),
        PinSpec::output("Done"),
    ]),
    ("BuzzerAction", KindRole::Action, [
        PinSpec::input("::Ex In"),
        PinSpec::output("::Ex Out"),
        PinSpec::input("Pattern"),
        PinSpec::output("Done"),
    ]),
    ("NotifyAction", KindRole::Action, [
        PinSpec::input("::Ex In"),
        PinSpec::input("Message"),
    ]),
    ("DelayAction", KindRole::Action, [
        PinSpec::input("::Ex In"),
        PinSpec::output("::Ex Out"),
        PinSpec::input("Duration"),
        PinSpec::output("Done"),
    ]),
}

/// Registry mapping type tags to node kinds.
///
/// `with_defaults` installs the built-in catalog; device integrations extend
/// it per device name, and fully custom kinds can be registered directly.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: AHashMap<String, NodeKind>,
}

impl KindRegistry {
    /// An empty registry with no kinds at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in catalog.
    pub fn with_defaults() -> Self {
        let mut kinds = AHashMap::new();
        register_default_kinds(&mut kinds);
        Self { kinds }
    }

    /// Registers a custom kind, replacing any existing kind with the same
    /// tag.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kinds.insert(kind.tag().to_string(), kind);
        self
    }

    /// Registers an action kind for a named device. Device actions share a
    /// standard pin set; the device name becomes the type tag.
    pub fn with_device(self, device_name: &str) -> Self {
        let kind = NodeKind::new(
            device_name,
            KindRole::Action,
            vec![
                PinSpec::input("::Ex In"),
                PinSpec::output("::Ex Out"),
                PinSpec::input("State"),
                PinSpec::output("Done"),
            ],
        );
        self.with_kind(kind)
    }

    /// Resolves a type tag to its kind, if registered.
    pub fn resolve(&self, tag: &str) -> Option<&NodeKind> {
        self.kinds.get(tag)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
