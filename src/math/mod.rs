// src/math/mod.rs
pub mod predicates;
pub mod transform;

// Re-exports für einfache Verwendung
pub use predicates::*;
pub use transform::MeshTransform;
