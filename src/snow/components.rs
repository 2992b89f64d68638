// src/snow/components.rs

use bevy::prelude::{Component, Entity};

use crate::snow::config::SnowConfig;
use crate::snow::engine::SnowDeformer;

/// Markiert eine Mesh-Entity als verformbare Schneedecke.
///
/// `colliders` ist die explizit zugewiesene Liste von Szenenobjekten die
/// mit dem Schnee interagieren; mit
/// `config.interact_with_all_colliders_in_scene` wird sie ignoriert und
/// stattdessen die ganze Szene abgefragt.
#[derive(Component, Debug, Clone, Default)]
pub struct DeformableSnow2D {
    pub config: SnowConfig,
    pub colliders: Vec<Entity>,
}

/// Laufzeitzustand einer initialisierten Schneedecke.
#[derive(Component, Debug)]
pub struct SnowState {
    pub deformer: SnowDeformer,
}

/// Marker für Entities deren Initialisierung fehlgeschlagen ist,
/// verhindert einen erneuten Versuch pro Frame.
#[derive(Component, Debug, Default)]
pub struct SnowInitFailed;
