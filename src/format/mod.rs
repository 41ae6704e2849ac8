//! Dataset loading from JSON node/edge tables.

pub mod reader;

pub use reader::{Dataset, DatasetReader};
