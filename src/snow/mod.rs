// src/snow/mod.rs
pub mod collider;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod particle;
pub mod plugin;
pub mod systems;
pub mod vertex;

// Re-exports für einfache Verwendung
pub use collider::{BoxCollider2D, CircleCollider2D, ColliderSet, ColliderSource, PolygonCollider2D};
pub use components::{DeformableSnow2D, SnowState};
pub use config::SnowConfig;
pub use engine::SnowDeformer;
pub use error::{SnowError, SnowResult};
pub use particle::{CollectedParticles, NoopSink, ParticleSink, SnowParticleEvent};
pub use plugin::DeformableSnowPlugin;
pub use vertex::{DeformableVertex, VertexRegistry};
