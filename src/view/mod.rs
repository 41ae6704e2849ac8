//! Presentation layer: windowing and response shaping over finished results.

pub mod report;
pub mod window;

pub use report::{render_error, render_result};
pub use window::{
    sample_graph, sample_reachable, window_matrix, GraphSample, MatrixCell, MatrixRow,
    ReachedSample,
};
