//! Schema document emission

pub mod document;
pub mod emit;

pub use document::{Document, SCHEMA_VERSION};
pub use emit::{emit_document, EmitInfo};
