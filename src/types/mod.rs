//! All data types for the netgraph library.

pub mod edge;
pub mod error;
pub mod node;
pub mod result;

pub use edge::{Edge, UndirectedEdge};
pub use error::{ErrorKind, ErrorReport, GraphError, GraphResult};
pub use node::Node;
pub use result::{FlowResult, PathResult, Reached, SingleSourceResult, TreeEdge, TreeResult};

/// Residual capacity at or below this is treated as saturated by max-flow.
pub const DEFAULT_FLOW_EPSILON: f64 = 1e-9;

/// Default number of rows/columns shown from a distance matrix.
pub const DEFAULT_MATRIX_WINDOW: usize = 10;

/// Default number of reachable nodes shown from a single-source result.
pub const DEFAULT_REACHABLE_SAMPLE: usize = 10;

/// Default cap on nodes sent to a display.
pub const DEFAULT_MAX_VISUAL_NODES: usize = 200;
