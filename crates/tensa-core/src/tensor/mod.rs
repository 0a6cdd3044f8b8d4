//! Dense tensor implementation and operations
//!
//! The type definition and constructors live in [`types`]; element access,
//! trait implementations, and pretty-printing are organized in sibling
//! modules.

// Core type definition
pub mod types;

// Operation modules
mod display;
mod indexing;
mod traits;

// Re-export the main type
pub use types::Tensor;
