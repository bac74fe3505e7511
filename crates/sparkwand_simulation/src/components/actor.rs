//! Акторы в мире: Player marker, Hurtbox

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

/// Player-controlled actor. Spark пролетает сквозь игроков.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Bounding box актора, по которому spark проверяет попадание
///
/// Инвариант: half_extents >= 0 по всем осям
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hurtbox {
    pub half_extents: Vec3,
}

impl Default for Hurtbox {
    /// Моб ~0.6×1.8×0.6 блока
    fn default() -> Self {
        Self::new(Vec3::new(0.3, 0.9, 0.3))
    }
}

impl Hurtbox {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.abs(),
        }
    }

    pub fn cube(half_width: f32) -> Self {
        Self::new(Vec3::splat(half_width))
    }

    pub fn bounds(&self, center: Vec3) -> Aabb3d {
        Aabb3d::new(center, self.half_extents)
    }
}
