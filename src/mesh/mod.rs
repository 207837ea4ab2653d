//! Mesh documents and the edges they describe

pub mod document;
pub mod edges;

pub use document::*;
pub use edges::*;
