// src/lib.rs
//
// 2D-Schneeverformung: ein Mesh mit markierten Vertices wird von Box-,
// Kreis- und Polygon-Collidern eingedrückt und regeneriert optional
// über die Zeit. Der Kern ist engine-unabhängig, die Bindung läuft als
// Bevy-Plugin.

pub mod math;
pub mod snow;

// Öffentliche API
pub mod prelude {
    pub use crate::math::{
        MeshTransform,
        predicates::{point_in_circle, point_in_column, point_in_path},
    };
    pub use crate::snow::{
        BoxCollider2D, CircleCollider2D, CollectedParticles, ColliderSet, ColliderSource,
        DeformableSnow2D, DeformableSnowPlugin, DeformableVertex, NoopSink, ParticleSink,
        PolygonCollider2D, SnowConfig, SnowDeformer, SnowError, SnowParticleEvent, SnowResult,
        SnowState, VertexRegistry,
    };
}
