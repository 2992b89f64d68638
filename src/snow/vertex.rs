// src/snow/vertex.rs

use bevy::math::Vec3;
use rand::Rng;

use crate::math::MeshTransform;
use crate::snow::config::{
    DEFORMABLE_TAG_THRESHOLD, REGEN_MULTIPLIER_MAX, REGEN_MULTIPLIER_MIN,
};
use crate::snow::error::{SnowError, SnowResult};

/// Ein als verformbar markierter Mesh-Vertex mit seiner vertikalen Historie.
#[derive(Debug, Clone)]
pub struct DeformableVertex {
    /// Farbkanalwert mit dem der Vertex markiert wurde, nur für die
    /// Sortierung beim Aufbau verwendet.
    pub tag_value: f32,
    /// Index in den Vertex-Buffer des Quellmeshes.
    pub mesh_index: usize,
    /// Aktuelle Welthöhe, stets in `[lowest_vertex_y, original_y]`.
    pub current_y: f32,
    /// Welthöhe beim Aufbau, danach unveränderlich.
    pub original_y: f32,
    /// Welthöhe des vorherigen Ticks, für die Ereigniserkennung.
    pub previous_y: f32,
    /// Zufälliger Faktor der Regenerationsgeschwindigkeit dieses Vertex.
    pub regen_rate_multiplier: f32,
}

/// Registry aller verformbaren Vertices, einmal beim Start aufgebaut.
#[derive(Debug, Clone)]
pub struct VertexRegistry {
    vertices: Vec<DeformableVertex>,
    lowest_vertex_y: f32,
}

impl VertexRegistry {
    /// Baut die Registry aus den Mesh-Kanälen auf.
    ///
    /// `positions` sind lokale Vertex-Positionen, `tags` der parallele
    /// Markierungskanal in `[0,1]`. Vertices mit Tag oberhalb des
    /// Schwellwerts werden aufgenommen, stabil nach Tag sortiert. Die
    /// tiefste Welthöhe über ALLE Vertices wird als Boden festgehalten.
    pub fn build(
        positions: &[Vec3],
        tags: &[f32],
        transform: &MeshTransform,
        rng: &mut impl Rng,
    ) -> SnowResult<Self> {
        if positions.is_empty() {
            return Err(SnowError::EmptyMesh);
        }
        if positions.len() != tags.len() {
            return Err(SnowError::ChannelLengthMismatch {
                positions: positions.len(),
                tags: tags.len(),
            });
        }

        let mut lowest_vertex_y = f32::INFINITY;
        for position in positions {
            let world_y = transform.point_to_world(*position).y;
            lowest_vertex_y = lowest_vertex_y.min(world_y);
        }

        let mut vertices = Vec::new();
        for (i, (position, &tag_value)) in positions.iter().zip(tags).enumerate() {
            if tag_value <= DEFORMABLE_TAG_THRESHOLD {
                continue;
            }

            let original_y = transform.point_to_world(*position).y;
            vertices.push(DeformableVertex {
                tag_value,
                mesh_index: i,
                current_y: original_y,
                original_y,
                previous_y: original_y,
                regen_rate_multiplier: rng
                    .random_range(REGEN_MULTIPLIER_MIN..=REGEN_MULTIPLIER_MAX),
            });
        }

        // Aufsteigend nach Tag, für gleichmäßige sequentielle Verformung
        vertices.sort_by(|a, b| a.tag_value.total_cmp(&b.tag_value));

        Ok(Self {
            vertices,
            lowest_vertex_y,
        })
    }

    /// Tiefste Welthöhe des Meshes, die Untergrenze aller Verformung.
    pub fn lowest_vertex_y(&self) -> f32 {
        self.lowest_vertex_y
    }

    pub fn vertices(&self) -> &[DeformableVertex] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [DeformableVertex] {
        &mut self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_threshold_selection() {
        let positions = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, -1.0, 0.0),
        ];
        let tags = [1.0, 0.5, 0.995];
        let registry =
            VertexRegistry::build(&positions, &tags, &MeshTransform::identity(), &mut rng())
                .unwrap();

        assert_eq!(registry.len(), 2);
        let indices: Vec<usize> = registry.vertices().iter().map(|v| v.mesh_index).collect();
        assert!(indices.contains(&0));
        assert!(indices.contains(&2));
    }

    #[test]
    fn test_lowest_vertex_spans_all_vertices() {
        // der tiefste Vertex ist selbst nicht verformbar
        let positions = [Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, -2.5, 0.0)];
        let tags = [1.0, 0.0];
        let registry =
            VertexRegistry::build(&positions, &tags, &MeshTransform::identity(), &mut rng())
                .unwrap();

        assert_eq!(registry.len(), 1);
        assert!((registry.lowest_vertex_y() + 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_initial_history_matches_original() {
        let positions = [Vec3::new(0.0, 4.0, 0.0)];
        let tags = [1.0];
        let registry =
            VertexRegistry::build(&positions, &tags, &MeshTransform::identity(), &mut rng())
                .unwrap();

        let v = &registry.vertices()[0];
        assert_eq!(v.current_y, v.original_y);
        assert_eq!(v.previous_y, v.original_y);
        assert!((v.original_y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_regen_multiplier_bounds() {
        let positions: Vec<Vec3> = (0..64).map(|i| Vec3::new(i as f32, 1.0, 0.0)).collect();
        let tags = vec![1.0; 64];
        let registry =
            VertexRegistry::build(&positions, &tags, &MeshTransform::identity(), &mut rng())
                .unwrap();

        for v in registry.vertices() {
            assert!(v.regen_rate_multiplier >= REGEN_MULTIPLIER_MIN);
            assert!(v.regen_rate_multiplier <= REGEN_MULTIPLIER_MAX);
        }
    }

    #[test]
    fn test_sorted_by_tag() {
        let positions = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        let tags = [0.999, 0.991, 0.995];
        let registry =
            VertexRegistry::build(&positions, &tags, &MeshTransform::identity(), &mut rng())
                .unwrap();

        let order: Vec<usize> = registry.vertices().iter().map(|v| v.mesh_index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_empty_mesh_is_fatal() {
        let result = VertexRegistry::build(&[], &[], &MeshTransform::identity(), &mut rng());
        assert!(matches!(result, Err(SnowError::EmptyMesh)));
    }

    #[test]
    fn test_channel_mismatch_is_fatal() {
        let positions = [Vec3::ZERO];
        let result =
            VertexRegistry::build(&positions, &[], &MeshTransform::identity(), &mut rng());
        assert!(matches!(
            result,
            Err(SnowError::ChannelLengthMismatch { positions: 1, tags: 0 })
        ));
    }

    #[test]
    fn test_world_transform_applied() {
        use bevy::prelude::Transform;
        let transform = MeshTransform::from_transform(&Transform::from_xyz(0.0, 10.0, 0.0));
        let positions = [Vec3::new(0.0, 1.0, 0.0)];
        let tags = [1.0];
        let registry = VertexRegistry::build(&positions, &tags, &transform, &mut rng()).unwrap();

        assert!((registry.vertices()[0].original_y - 11.0).abs() < 1e-5);
        assert!((registry.lowest_vertex_y() - 11.0).abs() < 1e-5);
    }
}
