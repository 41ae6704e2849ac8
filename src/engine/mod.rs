//! Engine facade: algorithm selection, endpoint validation and dispatch.

pub mod algorithm;
pub mod facade;

pub use algorithm::{Algorithm, Requirement};
pub use facade::{AlgorithmResult, Engine};
