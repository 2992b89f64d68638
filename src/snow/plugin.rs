//! Provides the Bevy `Plugin` wiring for the snow deformation systems.
//!
//! The plugin registers the particle event and chains the two systems:
//! initialization (builds the vertex registry once the mesh asset is
//! available) strictly before the per-frame deformation tick.

use bevy::prelude::*;

use crate::snow::particle::SnowParticleEvent;
use crate::snow::systems::{deform_snow_system, init_snow_meshes};

/// A Bevy `Plugin` driving all [`DeformableSnow2D`](crate::snow::components::DeformableSnow2D)
/// entities.
///
/// - Registers [`SnowParticleEvent`]; without a reader the events are
///   silently dropped (the "no particle effect assigned" case).
/// - Runs initialization and deformation chained in `Update`, one tick
///   per rendered frame, strictly sequential.
pub struct DeformableSnowPlugin;

impl Plugin for DeformableSnowPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SnowParticleEvent>()
            .add_systems(Update, (init_snow_meshes, deform_snow_system).chain());
    }
}
