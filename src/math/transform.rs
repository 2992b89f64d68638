// src/math/transform.rs

use bevy::math::Mat4;
use bevy::prelude::{Transform, Vec3};

/// Lokal↔Welt Transformationspaar eines Meshes.
///
/// Die TRS-Matrix und ihre Inverse werden einmal pro Tick aufgelöst,
/// nicht pro Vertex.
#[derive(Debug, Clone, Copy)]
pub struct MeshTransform {
    matrix: Mat4,
    inverse: Mat4,
}

impl MeshTransform {
    pub fn from_transform(transform: &Transform) -> Self {
        let matrix = transform.compute_matrix();
        Self {
            matrix,
            inverse: matrix.inverse(),
        }
    }

    /// Identitätstransformation (Mesh liegt bereits im Weltraum).
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }

    /// Transformiert einen lokalen Punkt in Weltkoordinaten.
    pub fn point_to_world(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    /// Transformiert einen Weltpunkt zurück in lokale Koordinaten.
    pub fn point_to_local(&self, point: Vec3) -> Vec3 {
        self.inverse.transform_point3(point)
    }
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self::identity()
    }
}
