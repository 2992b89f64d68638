// src/snow/config.rs

use serde::{Deserialize, Serialize};

/// Schwellwert des Farbkanals ab dem ein Vertex als verformbar gilt
/// (Vertex-Painting-Konvention: voll gesättigter Kanal).
pub const DEFORMABLE_TAG_THRESHOLD: f32 = 0.99;

/// Skalierung der Regenerationsgeschwindigkeit pro Sekunde.
pub const REGENERATION_SCALE: f32 = 0.1;

/// Untere/obere Grenze des zufälligen Regenerationsfaktors pro Vertex.
pub const REGEN_MULTIPLIER_MIN: f32 = 0.7;
pub const REGEN_MULTIPLIER_MAX: f32 = 1.3;

/// Absinkrate in Welteinheiten pro Sekunde solange ein Polygon- oder
/// Kreis-Collider den Vertex überlappt.
pub const COLLIDER_SINK_RATE: f32 = 5.0;

/// Vertikaler Versatz der Partikel-Spawn-Position unter den Vertex.
pub const PARTICLE_DROP_OFFSET: f32 = 0.3;

/// Konfiguration der Schneesimulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnowConfig {
    /// Geschwindigkeit der Regeneration: 0 = eingefroren,
    /// > 0 = Schnee wächst zurück, < 0 = Schnee schmilzt.
    pub regeneration_speed: f32,
    /// Alle Collider der Szene berücksichtigen statt der explizit
    /// zugewiesenen Liste. Teurer, deshalb standardmäßig aus.
    pub interact_with_all_colliders_in_scene: bool,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            regeneration_speed: 0.0,
            interact_with_all_colliders_in_scene: false,
        }
    }
}
