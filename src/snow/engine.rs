// src/snow/engine.rs

use bevy::math::Vec3;
use rand::Rng;

use crate::math::MeshTransform;
use crate::snow::collider::ColliderSet;
use crate::snow::config::{
    COLLIDER_SINK_RATE, PARTICLE_DROP_OFFSET, REGENERATION_SCALE, SnowConfig,
};
use crate::snow::error::SnowResult;
use crate::snow::particle::ParticleSink;
use crate::snow::vertex::VertexRegistry;

/// Die Verformungs-Engine: besitzt die Vertex-Registry und schreibt pro
/// Tick in einen fremden Positions-Buffer zurück.
///
/// Reihenfolge pro Tick und Vertex: Regeneration/Schmelzen, Box-Abflachung,
/// Polygon-Absinken, Kreis-Absinken, Mesh-Rückschreiben, Ereigniserkennung.
/// Nicht markierte Vertices werden nie angefasst.
#[derive(Debug, Clone)]
pub struct SnowDeformer {
    config: SnowConfig,
    registry: VertexRegistry,
}

impl SnowDeformer {
    pub fn new(config: SnowConfig, registry: VertexRegistry) -> Self {
        Self { config, registry }
    }

    /// Baut Registry und Engine direkt aus den Mesh-Kanälen auf.
    pub fn from_mesh(
        config: SnowConfig,
        positions: &[Vec3],
        tags: &[f32],
        transform: &MeshTransform,
        rng: &mut impl Rng,
    ) -> SnowResult<Self> {
        let registry = VertexRegistry::build(positions, tags, transform, rng)?;
        Ok(Self::new(config, registry))
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SnowConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    /// Ein Simulationstick.
    ///
    /// `positions` ist der lokale Vertex-Buffer des Meshes, `dt` die seit
    /// dem letzten Tick vergangene Zeit. Collider-Säulen und -Pfade werden
    /// pro Tick neu aufgelöst, damit bewegte Collider korrekt bleiben.
    pub fn update(
        &mut self,
        colliders: &ColliderSet,
        positions: &mut [Vec3],
        transform: &MeshTransform,
        dt: f32,
        sink: &mut dyn ParticleSink,
    ) {
        let lowest = self.registry.lowest_vertex_y();

        // Schritt 1: Regeneration bzw. Schmelzen
        if self.config.regeneration_speed != 0.0 {
            let speed = self.config.regeneration_speed;
            for vertex in self.registry.vertices_mut() {
                vertex.current_y +=
                    speed * dt * REGENERATION_SCALE * vertex.regen_rate_multiplier;
                vertex.current_y = vertex.current_y.clamp(lowest, vertex.original_y);
            }
        }

        // Schritt 2-4: Kollisionen, Rückschreiben, Ereignisse
        for vertex in self.registry.vertices_mut() {
            let local = positions[vertex.mesh_index];
            let world = transform.point_to_world(local);

            // Boxen flachen sofort auf ihre Unterkante ab
            for world_box in colliders.boxes() {
                let column = world_box.column();
                if column.floor_y < vertex.current_y && column.contains_x(world.x) {
                    vertex.current_y = column.floor_y.max(lowest);
                }
            }

            // Polygon- und Kreistests laufen auf der Box-korrigierten Höhe
            let probe = Vec3::new(world.x, vertex.current_y, world.z);

            for polygon in colliders.polygons() {
                if polygon.contains(probe.truncate()) {
                    vertex.current_y = (vertex.current_y - COLLIDER_SINK_RATE * dt).max(lowest);
                }
            }

            for circle in colliders.circles() {
                if circle.contains(probe.truncate()) {
                    vertex.current_y = (vertex.current_y - COLLIDER_SINK_RATE * dt).max(lowest);
                }
            }

            // Rückschreiben: nur die Welthöhe ersetzen, zurück in den
            // lokalen Raum und an den Quellindex
            let displaced = Vec3::new(world.x, vertex.current_y, world.z);
            positions[vertex.mesh_index] = transform.point_to_local(displaced);

            // Ereignis nur beim Absinken oberhalb des Bodens
            if vertex.previous_y > vertex.current_y && vertex.current_y > lowest {
                sink.spawn(Vec3::new(
                    world.x,
                    vertex.current_y - PARTICLE_DROP_OFFSET,
                    world.z,
                ));
            }
            vertex.previous_y = vertex.current_y;
        }
    }
}
