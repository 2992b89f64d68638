// src/snow/systems.rs

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy::sprite::Mesh2dHandle;

use crate::math::MeshTransform;
use crate::snow::collider::{BoxCollider2D, CircleCollider2D, ColliderSet, PolygonCollider2D};
use crate::snow::components::{DeformableSnow2D, SnowInitFailed, SnowState};
use crate::snow::config::SnowConfig;
use crate::snow::engine::SnowDeformer;
use crate::snow::error::{SnowError, SnowResult};
use crate::snow::particle::{ParticleSink, SnowParticleEvent};

/// Baut für jede neue Schnee-Entity den Verformungszustand auf, sobald
/// das Mesh-Asset verfügbar ist. Initialisierungsfehler sind für die
/// betroffene Entity fatal und werden nur geloggt.
pub fn init_snow_meshes(
    mut commands: Commands,
    meshes: Res<Assets<Mesh>>,
    query: Query<
        (Entity, &Mesh2dHandle, &GlobalTransform, &DeformableSnow2D),
        (Without<SnowState>, Without<SnowInitFailed>),
    >,
) {
    for (entity, handle, global, snow) in &query {
        let Some(mesh) = meshes.get(&handle.0) else {
            // Asset noch nicht geladen, nächsten Frame erneut versuchen
            continue;
        };

        let transform = MeshTransform::from_transform(&global.compute_transform());
        match build_deformer(mesh, &transform, &snow.config) {
            Ok(deformer) => {
                info!(
                    "snow mesh initialized: {} deformable vertices, floor at {}",
                    deformer.registry().len(),
                    deformer.registry().lowest_vertex_y()
                );
                commands.entity(entity).insert(SnowState { deformer });
            }
            Err(err) => {
                error!("snow mesh initialization failed: {err}");
                commands.entity(entity).insert(SnowInitFailed);
            }
        }
    }
}

fn build_deformer(
    mesh: &Mesh,
    transform: &MeshTransform,
    config: &SnowConfig,
) -> SnowResult<SnowDeformer> {
    let positions = extract_positions(mesh)?;
    let tags = extract_tags(mesh)?;
    let mut rng = rand::rng();
    SnowDeformer::from_mesh(config.clone(), &positions, &tags, transform, &mut rng)
}

fn extract_positions(mesh: &Mesh) -> SnowResult<Vec<Vec3>> {
    match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(values)) => {
            Ok(values.iter().map(|p| Vec3::from_array(*p)).collect())
        }
        Some(_) => Err(SnowError::UnsupportedAttributeFormat {
            name: "position".into(),
            expected: "Float32x3".into(),
        }),
        None => Err(SnowError::MissingAttribute {
            name: "position".into(),
        }),
    }
}

/// Der Markierungskanal ist der Rotanteil der Vertexfarben.
fn extract_tags(mesh: &Mesh) -> SnowResult<Vec<f32>> {
    match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
        Some(VertexAttributeValues::Float32x4(values)) => {
            Ok(values.iter().map(|color| color[0]).collect())
        }
        Some(_) => Err(SnowError::UnsupportedAttributeFormat {
            name: "color".into(),
            expected: "Float32x4".into(),
        }),
        None => Err(SnowError::MissingAttribute {
            name: "color".into(),
        }),
    }
}

/// Leitet Partikel-Spawns des Kerns als Bevy-Events weiter. Ohne
/// registrierten Leser verfallen die Events, das entspricht einer
/// nicht zugewiesenen Partikelsenke.
struct EventSink<'a, 'w> {
    writer: &'a mut EventWriter<'w, SnowParticleEvent>,
}

impl ParticleSink for EventSink<'_, '_> {
    fn spawn(&mut self, position: Vec3) {
        self.writer.send(SnowParticleEvent { position });
    }
}

/// Treibt die Verformung jeder initialisierten Schneedecke einen Tick
/// weiter und schreibt den Positions-Buffer ins Mesh-Asset zurück.
pub fn deform_snow_system(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut snow_query: Query<(
        &DeformableSnow2D,
        &mut SnowState,
        &Mesh2dHandle,
        &GlobalTransform,
    )>,
    box_query: Query<(&BoxCollider2D, &GlobalTransform)>,
    circle_query: Query<(&CircleCollider2D, &GlobalTransform)>,
    polygon_query: Query<(&PolygonCollider2D, &GlobalTransform)>,
    mut particles: EventWriter<SnowParticleEvent>,
) {
    let dt = time.delta_seconds();

    for (snow, mut state, handle, global) in &mut snow_query {
        let colliders = collect_colliders(snow, &box_query, &circle_query, &polygon_query);

        let Some(mesh) = meshes.get_mut(&handle.0) else {
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(raw)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            continue;
        };
        let mut positions: Vec<Vec3> = raw.iter().map(|p| Vec3::from_array(*p)).collect();

        let transform = MeshTransform::from_transform(&global.compute_transform());
        let mut sink = EventSink {
            writer: &mut particles,
        };
        state
            .deformer
            .update(&colliders, &mut positions, &transform, dt, &mut sink);

        let raw: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, raw);
    }
}

/// Sammelt die aktive Collider-Registry für einen Tick ein, wahlweise
/// aus der zugewiesenen Liste oder szenenweit. Transformationen kommen
/// jedes Mal frisch aus der Szene, bewegte Collider bleiben so korrekt.
fn collect_colliders(
    snow: &DeformableSnow2D,
    boxes: &Query<(&BoxCollider2D, &GlobalTransform)>,
    circles: &Query<(&CircleCollider2D, &GlobalTransform)>,
    polygons: &Query<(&PolygonCollider2D, &GlobalTransform)>,
) -> ColliderSet {
    let mut set = ColliderSet::new();

    if snow.config.interact_with_all_colliders_in_scene {
        for (shape, global) in boxes.iter() {
            set.add_box(global.compute_transform(), *shape);
        }
        for (shape, global) in polygons.iter() {
            set.add_polygon(global.compute_transform(), shape.clone());
        }
        for (shape, global) in circles.iter() {
            set.add_circle(global.compute_transform(), *shape);
        }
    } else {
        for &entity in &snow.colliders {
            if let Ok((shape, global)) = boxes.get(entity) {
                set.add_box(global.compute_transform(), *shape);
            }
            if let Ok((shape, global)) = circles.get(entity) {
                set.add_circle(global.compute_transform(), *shape);
            }
            if let Ok((shape, global)) = polygons.get(entity) {
                set.add_polygon(global.compute_transform(), shape.clone());
            }
        }
    }

    set
}
