use thiserror::Error;

/// Errors raised while loading a project graph or validating it against the
/// kind catalog.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("connection references node '{uuid}', which is not declared in the graph")]
    UnknownNode { uuid: String },

    #[error("node '{uuid}' declares no pin named '{pin}'")]
    UnknownPin { uuid: String, pin: String },

    #[error("node '{uuid}' has an unregistered type tag: '{type_tag}'")]
    UnknownNodeType { uuid: String, type_tag: String },

    #[error("uuid '{uuid}' is used by more than one node")]
    DuplicateUuid { uuid: String },
}

/// Errors that abort a compile pass. A failed pass produces no partial
/// output; callers get exactly one of these with the offending identifiers.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] GraphError),

    #[error(
        "node '{uuid}' does not fit the short id alphabet; at most {limit} nodes may participate in links"
    )]
    TooManyNodes { uuid: String, limit: usize },

    #[error(
        "node '{child}' is claimed by parents '{first_parent}' and '{second_parent}', but a node belongs to exactly one action chain"
    )]
    MultipleParents {
        child: String,
        first_parent: String,
        second_parent: String,
    },

    #[error("nodes [{}] form a dependency cycle with no event root", .nodes.join(", "))]
    CyclicGraph { nodes: Vec<String> },
}

/// Errors raised by script and project file I/O.
///
/// I/O and decode failures are kept apart from [`CompileError`] so a frontend
/// can offer "reselect file" and "fix graph" remediation separately.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to access '{path}': {source}")]
    IoFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    DecodeFailure {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode JSON document: {source}")]
    EncodeFailure {
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode binary artifact: {detail}")]
    ArtifactEncodeFailure { detail: String },

    #[error("could not decode binary artifact '{path}': {detail}")]
    ArtifactDecodeFailure { path: String, detail: String },
}
