//! Error types for the netgraph library.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a [`GraphError`], stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The node/edge collection violates referential integrity or value ranges.
    InvalidGraph,
    /// Missing or unknown source/target, or source == target where disallowed.
    InvalidEndpoints,
    /// The target cannot be reached from the source.
    NoPathExists,
    /// A negative-weight cycle makes shortest distances undefined.
    NegativeCycleDetected,
    /// The algorithm selector names nothing the engine knows.
    UnsupportedAlgorithm,
    /// Filesystem failure while loading a dataset or config.
    Io,
    /// Malformed dataset or config document, or an out-of-range setting.
    Parse,
}

impl ErrorKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidGraph => "invalid_graph",
            Self::InvalidEndpoints => "invalid_endpoints",
            Self::NoPathExists => "no_path_exists",
            Self::NegativeCycleDetected => "negative_cycle_detected",
            Self::UnsupportedAlgorithm => "unsupported_algorithm",
            Self::Io => "io",
            Self::Parse => "parse",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the netgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Two nodes share the same identifier.
    #[error("Invalid graph: duplicate node ID {0}")]
    DuplicateNode(u64),

    /// An edge references a node that is not in the graph.
    #[error("Invalid graph: edge #{edge} references missing node ID {node}")]
    MissingNode { edge: usize, node: u64 },

    /// An edge weight is NaN or infinite.
    #[error("Invalid graph: edge #{edge} has non-finite weight {weight}")]
    InvalidWeight { edge: usize, weight: f64 },

    /// An edge capacity is negative, NaN or infinite.
    #[error("Invalid graph: edge #{edge} has invalid capacity {capacity}")]
    InvalidCapacity { edge: usize, capacity: f64 },

    /// A required endpoint parameter was not supplied.
    #[error("Invalid endpoints: {algorithm} requires a {role} node")]
    MissingEndpoint {
        algorithm: &'static str,
        role: &'static str,
    },

    /// An endpoint parameter names a node that does not exist.
    #[error("Invalid endpoints: {role} node {id} not found")]
    UnknownNode { role: &'static str, id: u64 },

    /// Source and target coincide where the algorithm forbids it.
    #[error("Invalid endpoints: source and target must differ (both are {0})")]
    SameEndpoints(u64),

    /// No path connects the requested pair.
    #[error("No path exists from {source_id} to {target_id}")]
    NoPathExists { source_id: u64, target_id: u64 },

    /// A negative-weight cycle was found.
    #[error("Negative cycle detected through nodes {0:?}")]
    NegativeCycle(Vec<u64>),

    /// Unknown algorithm selector.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Max-flow saturation tolerance is negative or not finite.
    #[error("Invalid flow epsilon {0}: must be finite and non-negative")]
    InvalidEpsilon(f64),

    /// Dataset or config could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GraphError {
    /// The coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateNode(_)
            | Self::MissingNode { .. }
            | Self::InvalidWeight { .. }
            | Self::InvalidCapacity { .. } => ErrorKind::InvalidGraph,
            Self::MissingEndpoint { .. } | Self::UnknownNode { .. } | Self::SameEndpoints(_) => {
                ErrorKind::InvalidEndpoints
            }
            Self::NoPathExists { .. } => ErrorKind::NoPathExists,
            Self::NegativeCycle(_) => ErrorKind::NegativeCycleDetected,
            Self::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidEpsilon(_) | Self::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Serializable `{kind, message}` form of this error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Structured error outcome surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

/// Convenience result type for netgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
