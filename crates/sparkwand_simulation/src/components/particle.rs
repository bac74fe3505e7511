//! Particle: визуальный дескриптор для хоста
//!
//! ECS хранит только то, что нужно рендеру хоста: тип частицы, scale, lifetime,
//! текущую скорость. Позиция = Transform. Despawn entity = particle.remove().

use bevy::prelude::*;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Particle {
    /// Particle type id на стороне хоста ("electric_spark")
    pub kind: String,
    /// Визуальный scale (уже умноженный на visual_scale из конфига)
    pub scale: f32,
    /// Lifetime в тиках, который хост выставляет частице
    pub lifetime: u32,
    pub velocity: Vec3,
}

impl Particle {
    pub fn new(kind: impl Into<String>, scale: f32, lifetime: u32) -> Self {
        Self {
            kind: kind.into(),
            scale,
            lifetime,
            velocity: Vec3::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }
}
