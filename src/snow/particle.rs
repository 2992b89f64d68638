// src/snow/particle.rs

use bevy::prelude::{Event, Vec3};

/// Senke für Partikel-Spawns beim Absinken des Schnees.
///
/// Die Instanziierung des Effekts bleibt außerhalb des Kerns; die Senke
/// bekommt nur eine Weltposition gereicht.
pub trait ParticleSink {
    fn spawn(&mut self, position: Vec3);
}

/// Keine Senke zugewiesen: Spawns werden stillschweigend verworfen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ParticleSink for NoopSink {
    fn spawn(&mut self, _position: Vec3) {}
}

/// Sammelt Spawn-Positionen ein, für Tests und Diagnose.
#[derive(Debug, Default, Clone)]
pub struct CollectedParticles(pub Vec<Vec3>);

impl ParticleSink for CollectedParticles {
    fn spawn(&mut self, position: Vec3) {
        self.0.push(position);
    }
}

/// Bevy-Event das die Bindung pro Partikel-Spawn verschickt.
#[derive(Event, Debug, Clone, Copy)]
pub struct SnowParticleEvent {
    pub position: Vec3,
}
